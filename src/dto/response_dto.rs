//! Envelope de respuesta
//!
//! `OperationResult` es el envoltorio uniforme `(message, detail)` de todas
//! las operaciones. `OperationOutcome` añade la categoría del resultado y se
//! traduce a un código HTTP sólo en el borde.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Sucesso";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<T>,
}

impl<T> OperationResult<T> {
    pub fn success(detail: T) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            detail: Some(detail),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            detail: None,
        }
    }
}

/// Categoría del resultado de una operación del servicio
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome<T> {
    /// 200 con payload
    Ok(OperationResult<T>),
    /// 204 sin cuerpo
    NoContent,
    /// 422 con mensaje y sin payload
    Unprocessable(OperationResult<T>),
    /// 500 sin cuerpo
    ServerError,
}

impl<T> OperationOutcome<T> {
    pub fn ok(detail: T) -> Self {
        Self::Ok(OperationResult::success(detail))
    }

    pub fn unprocessable(message: String) -> Self {
        Self::Unprocessable(OperationResult::error(message))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::NoContent => StatusCode::NO_CONTENT,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Payload del resultado, si lo hay
    pub fn detail(&self) -> Option<&T> {
        match self {
            Self::Ok(result) | Self::Unprocessable(result) => result.detail.as_ref(),
            Self::NoContent | Self::ServerError => None,
        }
    }
}

impl<T: Serialize> IntoResponse for OperationOutcome<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Ok(result) | Self::Unprocessable(result) => (status, Json(result)).into_response(),
            Self::NoContent | Self::ServerError => status.into_response(),
        }
    }
}
