//! Modelo de Vehicle
//!
//! Entidad persistida. Mapea a la tabla `vehicles` con primary key `id`;
//! la placa es la clave de negocio para actualizar y eliminar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleRecord;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    /// Asignado por el almacenamiento en el primer `save`
    pub id: Option<Uuid>,
    pub plate: String,
    pub model: String,
    pub brand: String,
    pub available: bool,
    pub manufacture_date: NaiveDate,
}

impl Vehicle {
    /// Construye la entidad a partir del registro, con el identificador dado
    pub fn from_record(record: &VehicleRecord, id: Option<Uuid>) -> Self {
        Self {
            id,
            plate: record.plate.clone(),
            model: record.model.clone(),
            brand: record.brand.clone(),
            available: record.available,
            manufacture_date: record.manufacture_date,
        }
    }
}

impl From<Vehicle> for VehicleRecord {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            plate: vehicle.plate,
            model: vehicle.model,
            brand: vehicle.brand,
            available: vehicle.available,
            manufacture_date: vehicle.manufacture_date,
        }
    }
}
