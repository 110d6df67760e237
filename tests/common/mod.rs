use poem::test::TestClient;
use poem::Route;

use paramlab_backend::api;

/// Test client over the fully composed application routes
pub fn test_client() -> TestClient<Route> {
    TestClient::new(api::build_routes("http://localhost:3000/api"))
}
