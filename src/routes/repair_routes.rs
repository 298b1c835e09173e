use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};

use crate::controllers::repair_controller::RepairController;
use crate::models::repair::{ActiveRepair, CreateRepairRequest, RepairRecord, UpdateRepairRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/dodaj_popravak", post(create_repair))
        // the completion link in the rendered view is a plain anchor, so GET
        // must work alongside POST
        .route("/zavrsi_popravak/:id", get(complete_repair).post(complete_repair))
        .route("/izbrisi_popravak/:id", post(delete_repair))
        .route("/uredi_popravak/:id", get(get_repair).post(update_repair))
        .route("/povijest_popravaka", get(repair_history))
}

async fn create_repair(
    State(state): State<AppState>,
    Form(request): Form<CreateRepairRequest>,
) -> Result<Redirect, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.create(request).await?;
    Ok(Redirect::to("/"))
}

async fn complete_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.complete(id).await?;
    Ok(Redirect::to("/"))
}

async fn delete_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Redirect::to("/"))
}

/// Retrieval half of the edit flow: the repair as it currently stands,
/// for the edit form to prefill.
async fn get_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActiveRepair>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let repair = controller.get(id).await?;
    Ok(Json(repair))
}

async fn update_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(request): Form<UpdateRepairRequest>,
) -> Result<Redirect, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(Redirect::to("/"))
}

async fn repair_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepairRecord>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let records = controller.history().await?;
    Ok(Json(records))
}
