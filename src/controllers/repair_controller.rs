use crate::models::repair::{ActiveRepair, CreateRepairRequest, RepairRecord, UpdateRepairRequest};
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use validator::Validate;

pub struct RepairController {
    repairs: RepairRepository,
    vehicles: VehicleRepository,
}

impl RepairController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repairs: RepairRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Open a repair for the vehicle matching the given registration plate.
    ///
    /// First match wins when plates are duplicated. An unknown plate is a 404
    /// and leaves the store untouched.
    pub async fn create(&self, request: CreateRepairRequest) -> Result<ActiveRepair, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .find_by_registration(&request.registracija)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Automobil s registracijom {} nije pronađen.",
                    request.registracija
                ))
            })?;

        let repair = self
            .repairs
            .create(vehicle.id, request.opis, request.datum)
            .await?;

        tracing::info!("Repair {} opened for vehicle {}", repair.id, vehicle.id);

        Ok(repair)
    }

    pub async fn get(&self, id: i64) -> Result<ActiveRepair, AppError> {
        self.repairs
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Repair", id))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateRepairRequest,
    ) -> Result<ActiveRepair, AppError> {
        request.validate()?;
        self.repairs.update(id, request.opis, request.datum).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repairs.delete(id).await?;
        tracing::info!("Repair {} deleted", id);
        Ok(())
    }

    pub async fn complete(&self, id: i64) -> Result<(), AppError> {
        self.repairs.complete(id).await?;
        tracing::info!("Repair {} completed and archived", id);
        Ok(())
    }

    pub async fn history(&self) -> Result<Vec<RepairRecord>, AppError> {
        self.repairs.list_history().await
    }
}
