use crate::models::vehicle::{CreateVehicleRequest, ShopState, Vehicle};
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use sqlx::SqlitePool;
use validator::Validate;

pub struct VehicleController {
    vehicles: VehicleRepository,
    repairs: RepairRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;

        // Numeric fields come in as form text; a bad value is the client's
        // problem, not a reason to drop the request handler.
        let kilometri = request
            .kilometri
            .trim()
            .parse::<i64>()
            .map_err(|_| validation_error("kilometri", "must be an integer"))?;
        let godina_proizvodnje = request
            .godina_proizvodnje
            .trim()
            .parse::<i64>()
            .map_err(|_| validation_error("godina_proizvodnje", "must be an integer"))?;

        let vehicle = self
            .vehicles
            .create(
                request.marka,
                request.model,
                request.registracija,
                kilometri,
                request.vlasnik,
                godina_proizvodnje,
            )
            .await?;

        tracing::info!("Vehicle {} registered ({})", vehicle.id, vehicle.registracija);

        Ok(vehicle)
    }

    /// Everything the index view renders, in insertion order.
    pub async fn list_state(&self) -> Result<ShopState, AppError> {
        let automobili = self.vehicles.list().await?;
        let popravci_u_tijeku = self.repairs.list_active().await?;

        Ok(ShopState {
            automobili,
            popravci_u_tijeku,
        })
    }

    pub async fn purge_all(&self) -> Result<(), AppError> {
        self.vehicles.purge_all().await?;
        tracing::info!("All records purged");
        Ok(())
    }
}
