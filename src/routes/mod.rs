pub mod repair_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(vehicle_routes::create_vehicle_router())
        .merge(repair_routes::create_repair_router())
}
