//! Servicio de vehículos
//!
//! Orquesta alta, actualización, baja y listado. Cada operación valida la
//! placa cuando corresponde, delega en el repositorio y devuelve un
//! `OperationOutcome`.
//!
//! `create` propaga los errores inesperados después de registrarlos,
//! mientras que `update` los convierte en `ServerError`.

use std::sync::Arc;

use tracing::{debug, error, trace, warn};

use crate::dto::{OperationOutcome, VehicleRecord};
use crate::models::vehicle::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::PlateValidator;

pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
    plate_validator: Arc<dyn PlateValidator>,
}

impl VehicleService {
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        plate_validator: Arc<dyn PlateValidator>,
    ) -> Self {
        Self {
            repository,
            plate_validator,
        }
    }

    pub async fn create(&self, record: VehicleRecord) -> AppResult<OperationOutcome<VehicleRecord>> {
        trace!("Datos del vehículo {:?}", record);

        match self.insert(&record).await {
            Ok(()) => {
                debug!("✅ Vehicle {} registrado correctamente", record.plate);
                Ok(OperationOutcome::ok(record))
            }
            Err(e @ (AppError::InvalidPlate(_) | AppError::VehicleNotFound(_))) => {
                warn!("⚠️ Registro rechazado: {}", e);
                Ok(OperationOutcome::unprocessable(e.to_string()))
            }
            Err(e) => {
                error!("❌ Error registrando el vehículo {}: {}", record.plate, e);
                Err(e)
            }
        }
    }

    pub async fn delete_by_plate(&self, plate: &str) -> AppResult<OperationOutcome<bool>> {
        match self.find_by_plate(plate).await? {
            Some(vehicle) => {
                self.repository.delete(&vehicle).await?;
                debug!("🗑️ Vehicle {} eliminado", plate);
                Ok(OperationOutcome::ok(true))
            }
            None => Ok(OperationOutcome::NoContent),
        }
    }

    pub async fn update(&self, record: VehicleRecord) -> OperationOutcome<VehicleRecord> {
        match self.replace(&record).await {
            Ok(updated) => OperationOutcome::ok(updated),
            Err(AppError::VehicleNotFound(plate)) => {
                debug!("Vehicle {} no existe, nada que actualizar", plate);
                OperationOutcome::NoContent
            }
            Err(e @ AppError::InvalidPlate(_)) => OperationOutcome::unprocessable(e.to_string()),
            Err(e) => {
                error!("❌ Error actualizando vehicle {}: {}", record.plate, e);
                OperationOutcome::ServerError
            }
        }
    }

    pub async fn list_all(&self) -> AppResult<OperationOutcome<Vec<VehicleRecord>>> {
        match self.repository.find_all().await {
            Ok(vehicles) => Ok(OperationOutcome::ok(
                vehicles.into_iter().map(VehicleRecord::from).collect(),
            )),
            // Los repositorios devuelven una lista vacía, no NotFound
            Err(AppError::VehicleNotFound(_)) => Ok(OperationOutcome::NoContent),
            Err(e) => Err(e),
        }
    }

    async fn insert(&self, record: &VehicleRecord) -> AppResult<()> {
        self.plate_validator.validate(&record.plate)?;
        self.repository
            .save(Vehicle::from_record(record, None))
            .await?;
        Ok(())
    }

    async fn replace(&self, record: &VehicleRecord) -> AppResult<VehicleRecord> {
        self.plate_validator.validate(&record.plate)?;

        let existing = self
            .find_by_plate(&record.plate)
            .await?
            .ok_or_else(|| AppError::VehicleNotFound(record.plate.clone()))?;

        let saved = self
            .repository
            .save(Vehicle::from_record(record, existing.id))
            .await?;

        Ok(saved.into())
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        self.repository.find_by_plate(plate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::OperationResult;
    use crate::repositories::InMemoryVehicleRepository;
    use crate::utils::validation::RegexPlateValidator;
    use chrono::NaiveDate;

    /// Repositorio que falla en todas las operaciones
    struct FailingRepository {
        error: fn() -> AppError,
    }

    #[async_trait::async_trait]
    impl VehicleRepository for FailingRepository {
        async fn save(&self, _vehicle: Vehicle) -> AppResult<Vehicle> {
            Err((self.error)())
        }

        async fn find_by_plate(&self, _plate: &str) -> AppResult<Option<Vehicle>> {
            Err((self.error)())
        }

        async fn delete(&self, _vehicle: &Vehicle) -> AppResult<()> {
            Err((self.error)())
        }

        async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
            Err((self.error)())
        }
    }

    fn database_down() -> AppError {
        AppError::Database(sqlx::Error::PoolTimedOut)
    }

    fn record(plate: &str) -> VehicleRecord {
        VehicleRecord {
            plate: plate.to_string(),
            model: "Corolla".to_string(),
            brand: "Toyota".to_string(),
            available: true,
            manufacture_date: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
        }
    }

    fn service_with(repository: Arc<dyn VehicleRepository>) -> VehicleService {
        VehicleService::new(repository, Arc::new(RegexPlateValidator::new()))
    }

    fn in_memory() -> (Arc<InMemoryVehicleRepository>, VehicleService) {
        let repo = Arc::new(InMemoryVehicleRepository::new());
        let service = service_with(repo.clone());
        (repo, service)
    }

    #[tokio::test]
    async fn test_create_returns_submitted_record() {
        let (repo, service) = in_memory();

        let outcome = service.create(record("ABC1D23")).await.unwrap();

        assert_eq!(outcome, OperationOutcome::ok(record("ABC1D23")));
        let stored = repo.find_by_plate("ABC1D23").await.unwrap().unwrap();
        assert!(stored.id.is_some());
    }

    #[tokio::test]
    async fn test_create_invalid_plate_is_unprocessable() {
        let (repo, service) = in_memory();

        let outcome = service.create(record("1234")).await.unwrap();

        match outcome {
            OperationOutcome::Unprocessable(OperationResult { message, detail }) => {
                assert!(!message.is_empty());
                assert!(detail.is_none());
            }
            other => panic!("expected Unprocessable, got {:?}", other),
        }
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_propagates_unexpected_errors() {
        let service = service_with(Arc::new(FailingRepository { error: database_down }));

        let result = service.create(record("ABC1D23")).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_create_maps_not_found_to_unprocessable() {
        let service = service_with(Arc::new(FailingRepository {
            error: || AppError::VehicleNotFound("ABC1D23".to_string()),
        }));

        let outcome = service.create(record("ABC1D23")).await.unwrap();

        assert_eq!(outcome.status_code(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_absent_plate_is_no_content() {
        let (_, service) = in_memory();

        let outcome = service.delete_by_plate("ZZZ9999").await.unwrap();

        assert_eq!(outcome, OperationOutcome::NoContent);
    }

    #[tokio::test]
    async fn test_delete_present_plate_removes_vehicle() {
        let (repo, service) = in_memory();
        service.create(record("ABC-1234")).await.unwrap();

        let outcome = service.delete_by_plate("ABC-1234").await.unwrap();

        assert_eq!(outcome, OperationOutcome::ok(true));
        assert!(repo.find_by_plate("ABC-1234").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_absent_plate_is_no_content() {
        let (_, service) = in_memory();

        let outcome = service.update(record("ABC1D23")).await;

        assert_eq!(outcome, OperationOutcome::NoContent);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_and_keeps_id() {
        let (repo, service) = in_memory();
        service.create(record("ABC1D23")).await.unwrap();
        let original_id = repo.find_by_plate("ABC1D23").await.unwrap().unwrap().id;

        let changed = VehicleRecord {
            plate: "ABC1D23".to_string(),
            model: "Civic".to_string(),
            brand: "Honda".to_string(),
            available: false,
            manufacture_date: NaiveDate::from_ymd_opt(2018, 11, 2).unwrap(),
        };
        let outcome = service.update(changed.clone()).await;

        assert_eq!(outcome, OperationOutcome::ok(changed.clone()));
        let stored = repo.find_by_plate("ABC1D23").await.unwrap().unwrap();
        assert_eq!(stored.id, original_id);
        assert_eq!(VehicleRecord::from(stored), changed);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_invalid_plate_is_unprocessable() {
        let (_, service) = in_memory();

        let outcome = service.update(record("abc1234")).await;

        assert!(matches!(outcome, OperationOutcome::Unprocessable(ref r) if r.detail.is_none()));
    }

    #[tokio::test]
    async fn test_update_swallows_unexpected_errors() {
        let service = service_with(Arc::new(FailingRepository { error: database_down }));

        let outcome = service.update(record("ABC1D23")).await;

        assert_eq!(outcome, OperationOutcome::ServerError);
    }

    #[tokio::test]
    async fn test_list_empty_storage_is_ok_with_empty_list() {
        let (_, service) = in_memory();

        let outcome = service.list_all().await.unwrap();

        assert_eq!(outcome, OperationOutcome::ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_list_includes_created_record() {
        let (_, service) = in_memory();
        service.create(record("ABC1D23")).await.unwrap();
        service.create(record("XYZ-9876")).await.unwrap();

        let outcome = service.list_all().await.unwrap();

        let listed = outcome.detail().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&record("ABC1D23")));
        assert!(listed.contains(&record("XYZ-9876")));
    }

    #[tokio::test]
    async fn test_list_not_found_from_repository_is_no_content() {
        let service = service_with(Arc::new(FailingRepository {
            error: || AppError::VehicleNotFound(String::new()),
        }));

        let outcome = service.list_all().await.unwrap();

        assert_eq!(outcome, OperationOutcome::NoContent);
    }

    #[tokio::test]
    async fn test_list_propagates_database_errors() {
        let service = service_with(Arc::new(FailingRepository { error: database_down }));

        assert!(matches!(service.list_all().await, Err(AppError::Database(_))));
    }
}
