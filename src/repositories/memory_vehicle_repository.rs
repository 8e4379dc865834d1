//! Repositorio en memoria
//!
//! Se usa cuando no hay `DATABASE_URL` configurada y en los tests.
//! Conserva el orden de inserción y respeta la unicidad de la placa.

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::VehicleRepository;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, mut vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let id = *vehicle.id.get_or_insert_with(Uuid::new_v4);

        if vehicles
            .iter()
            .any(|v| v.plate == vehicle.plate && v.id != Some(id))
        {
            return Err(AppError::Internal(format!(
                "duplicate plate {}",
                vehicle.plate
            )));
        }

        match vehicles.iter_mut().find(|v| v.id == Some(id)) {
            Some(existing) => *existing = vehicle.clone(),
            None => vehicles.push(vehicle.clone()),
        }

        debug!("💾 Vehicle {} guardado en memoria con id {}", vehicle.plate, id);
        Ok(vehicle)
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.plate == plate).cloned())
    }

    async fn delete(&self, vehicle: &Vehicle) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.retain(|v| v.id != vehicle.id);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.vehicles.read().await.clone())
    }
}
