//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::VehicleRepository;
use crate::services::VehicleService;
use crate::utils::validation::RegexPlateValidator;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicle_service: Arc<VehicleService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repository: Arc<dyn VehicleRepository>) -> Self {
        let vehicle_service = VehicleService::new(repository, Arc::new(RegexPlateValidator::new()));

        Self {
            config,
            vehicle_service: Arc::new(vehicle_service),
        }
    }
}
