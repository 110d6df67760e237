use clap::Parser;
use poem::{listener::TcpListener, Server};

use paramlab_backend::api;
use paramlab_backend::cli::{Cli, Commands};
use paramlab_backend::config::{init_logging, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Openapi => {
            // The document is generated from the endpoint declarations alone;
            // no server needs to be running.
            println!("{}", api::api_service("http://localhost:3000/api").spec());
            Ok(())
        }
    }
}

async fn serve() -> Result<(), std::io::Error> {
    init_logging().expect("Failed to initialize logging");

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let server_url = format!("http://{}:{}/api", config.host, config.port);
    let app = api::build_routes(&server_url);

    tracing::info!("Starting server on http://{}", config.bind_address());
    tracing::info!(
        "Swagger UI available at http://{}:{}/swagger",
        config.host,
        config.port
    );

    Server::new(TcpListener::bind(config.bind_address()))
        .run(app)
        .await
}
