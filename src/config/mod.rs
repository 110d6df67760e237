mod logging;
mod server;

pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use server::{ConfigError, ServerConfig};
