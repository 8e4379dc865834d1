//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la validación de placas.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use validation::{PlateValidator, RegexPlateValidator};
