//! Repositorios
//!
//! Acceso a almacenamiento de vehículos. El servicio sólo conoce el trait
//! `VehicleRepository`; hay una implementación PostgreSQL y otra en memoria.

pub mod memory_vehicle_repository;
pub mod vehicle_repository;

pub use memory_vehicle_repository::InMemoryVehicleRepository;
pub use vehicle_repository::PgVehicleRepository;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

/// Operaciones de persistencia de vehículos
#[async_trait::async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserta si `id` es `None`, si no reemplaza la fila con ese `id`.
    /// Devuelve la entidad persistida con su identificador.
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle>;

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>>;

    async fn delete(&self, vehicle: &Vehicle) -> AppResult<()>;

    /// Todos los vehículos en el orden natural del almacenamiento
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;
}
