// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{drivers, health};

/// Builds the application router with its middleware and shared pool
pub fn router(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new().route("/health", get(health::health_check));

    // `/Drivers` mirrors the controller-named route older clients call
    driver_routes(driver_routes(app, "/drivers"), "/Drivers")
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}

fn driver_routes(router: Router<SqlitePool>, base: &str) -> Router<SqlitePool> {
    router
        .route(
            base,
            get(drivers::list_drivers)
                .post(drivers::create_driver)
                .put(drivers::update_driver),
        )
        .route(
            &format!("{}/:id", base),
            get(drivers::get_driver).delete(drivers::delete_driver),
        )
}
