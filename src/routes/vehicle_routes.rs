use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use crate::dto::{OperationOutcome, VehicleRecord};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle).put(update_vehicle))
        .route("/:plate", delete(delete_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRecord>,
) -> Result<OperationOutcome<VehicleRecord>, AppError> {
    state.vehicle_service.create(request).await
}

async fn update_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRecord>,
) -> OperationOutcome<VehicleRecord> {
    state.vehicle_service.update(request).await
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<OperationOutcome<bool>, AppError> {
    state.vehicle_service.delete_by_plate(&plate).await
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<OperationOutcome<Vec<VehicleRecord>>, AppError> {
    state.vehicle_service.list_all().await
}
