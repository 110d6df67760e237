// API layer - HTTP endpoints
pub mod health;
pub mod helpers;
pub mod items;
pub mod users;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use users::UsersApi;

use poem::Route;
use poem_openapi::OpenApiService;


/// Build the OpenAPI service aggregating every endpoint group
pub fn api_service(server_url: &str) -> OpenApiService<(HealthApi, ItemsApi, UsersApi), ()> {
    OpenApiService::new(
        (HealthApi, ItemsApi, UsersApi),
        "Paramlab API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url)
}

/// Compose the application routes: API under /api, Swagger UI under /swagger
pub fn build_routes(server_url: &str) -> Route {
    let service = api_service(server_url);
    let ui = service.swagger_ui();

    Route::new().nest("/api", service).nest("/swagger", ui)
}
