use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::models::vehicle::{CreateVehicleRequest, ShopState};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/dodaj_automobil", post(create_vehicle))
        .route("/obrisi_sve", post(purge_all))
}

/// Current shop state: every vehicle and every repair in progress.
async fn index(State(state): State<AppState>) -> Result<Json<ShopState>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let shop_state = controller.list_state().await?;
    Ok(Json(shop_state))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Form(request): Form<CreateVehicleRequest>,
) -> Result<Redirect, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.create(request).await?;
    Ok(Redirect::to("/"))
}

async fn purge_all(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.purge_all().await?;
    Ok(Redirect::to("/"))
}
