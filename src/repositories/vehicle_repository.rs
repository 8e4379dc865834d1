use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::VehicleRepository;

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let id = vehicle.id.unwrap_or_else(Uuid::new_v4);

        // Upsert por id: el update reutiliza el id existente
        let saved = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, plate, model, brand, available, manufacture_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET plate = EXCLUDED.plate,
                model = EXCLUDED.model,
                brand = EXCLUDED.brand,
                available = EXCLUDED.available,
                manufacture_date = EXCLUDED.manufacture_date
            RETURNING id, plate, model, brand, available, manufacture_date
            "#
        )
        .bind(id)
        .bind(&vehicle.plate)
        .bind(&vehicle.model)
        .bind(&vehicle.brand)
        .bind(vehicle.available)
        .bind(vehicle.manufacture_date)
        .fetch_one(&self.pool)
        .await?;

        debug!("💾 Vehicle {} guardado con id {}", saved.plate, id);
        Ok(saved)
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, brand, available, manufacture_date FROM vehicles WHERE plate = $1"
        )
        .bind(plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn delete(&self, vehicle: &Vehicle) -> AppResult<()> {
        let id = vehicle
            .id
            .ok_or_else(|| AppError::Internal(format!("Vehicle {} has no id", vehicle.plate)))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, brand, available, manufacture_date FROM vehicles"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
