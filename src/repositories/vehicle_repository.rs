use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        marka: String,
        model: String,
        registracija: String,
        kilometri: i64,
        vlasnik: String,
        godina_proizvodnje: i64,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO automobili (marka, model, registracija, kilometri, vlasnik, godina_proizvodnje)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(marka)
        .bind(model)
        .bind(registracija)
        .bind(kilometri)
        .bind(vlasnik)
        .bind(godina_proizvodnje)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Look up a vehicle by registration plate.
    ///
    /// Plates carry no UNIQUE constraint; when duplicates exist this returns
    /// the first match, i.e. the vehicle with the lowest id.
    pub async fn find_by_registration(
        &self,
        registracija: &str,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM automobili WHERE registracija = ? ORDER BY id LIMIT 1",
        )
        .bind(registracija)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM automobili ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Delete every repair, every history record and every vehicle.
    ///
    /// One transaction, children before parent so the foreign keys on the
    /// repair tables never dangle mid-way.
    pub async fn purge_all(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM popravci_u_tijeku")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM povijest_popravaka")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM automobili")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
