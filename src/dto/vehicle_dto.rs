use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Representación de transporte del vehículo, sin identificador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub plate: String,
    pub model: String,
    pub brand: String,
    pub available: bool,
    pub manufacture_date: NaiveDate,
}
