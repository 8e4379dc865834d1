//! Services module
//!
//! Este módulo contiene la lógica de negocio del registro de vehículos.

pub mod vehicle_service;

pub use vehicle_service::VehicleService;
