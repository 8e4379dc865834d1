//! Utilidades de validación
//!
//! Validación del formato de placas. Se aceptan el formato antiguo
//! (`ABC-1234` o `ABC1234`) y el formato Mercosul (`ABC1D23`).

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{AppError, AppResult};

lazy_static! {
    static ref PLATE_REGEX: Regex =
        Regex::new(r"^(?:[A-Z]{3}-?[0-9]{4}|[A-Z]{3}[0-9][A-Z][0-9]{2})$")
            .expect("plate pattern is valid");
}

/// Contrato de validación de placas
pub trait PlateValidator: Send + Sync {
    /// Falla con `AppError::InvalidPlate` si la placa no tiene un formato aceptado
    fn validate(&self, plate: &str) -> AppResult<()>;
}

/// Validador basado en expresión regular
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexPlateValidator;

impl RegexPlateValidator {
    pub fn new() -> Self {
        Self
    }
}

impl PlateValidator for RegexPlateValidator {
    fn validate(&self, plate: &str) -> AppResult<()> {
        if PLATE_REGEX.is_match(plate) {
            Ok(())
        } else {
            Err(AppError::InvalidPlate(plate.to_string()))
        }
    }
}
