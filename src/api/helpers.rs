use poem::Request;

use crate::errors::ValidationError;

/// Check the raw query string against the set of declared parameter names
///
/// poem-openapi silently ignores undeclared query parameters, so an endpoint
/// with a closed parameter shape has to inspect the query string itself and
/// reject unknown keys before building a response. Every offending key is
/// reported in a single error.
pub fn ensure_known_query_keys(req: &Request, allowed: &[&str]) -> Result<(), ValidationError> {
    let query = req.uri().query().unwrap_or("");

    let mut unexpected: Vec<String> = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let key = pair.split('=').next().unwrap_or(pair);
        if !allowed.contains(&key) && !unexpected.iter().any(|seen| seen == key) {
            unexpected.push(key.to_string());
        }
    }

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::unexpected_parameters(&unexpected))
    }
}
