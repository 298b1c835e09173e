use crate::models::repair::{ActiveRepair, RepairRecord};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;

pub struct RepairRepository {
    pool: SqlitePool,
}

impl RepairRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        automobil_id: i64,
        opis: String,
        datum: String,
    ) -> Result<ActiveRepair, AppError> {
        let repair = sqlx::query_as::<_, ActiveRepair>(
            r#"
            INSERT INTO popravci_u_tijeku (automobil_id, opis, datum)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(automobil_id)
        .bind(opis)
        .bind(datum)
        .fetch_one(&self.pool)
        .await?;

        Ok(repair)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ActiveRepair>, AppError> {
        let repair =
            sqlx::query_as::<_, ActiveRepair>("SELECT * FROM popravci_u_tijeku WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(repair)
    }

    pub async fn list_active(&self) -> Result<Vec<ActiveRepair>, AppError> {
        let repairs =
            sqlx::query_as::<_, ActiveRepair>("SELECT * FROM popravci_u_tijeku ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(repairs)
    }

    pub async fn list_history(&self) -> Result<Vec<RepairRecord>, AppError> {
        let records =
            sqlx::query_as::<_, RepairRecord>("SELECT * FROM povijest_popravaka ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    pub async fn update(
        &self,
        id: i64,
        opis: String,
        datum: String,
    ) -> Result<ActiveRepair, AppError> {
        let repair = sqlx::query_as::<_, ActiveRepair>(
            r#"
            UPDATE popravci_u_tijeku
            SET opis = ?, datum = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(opis)
        .bind(datum)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Repair", id))?;

        Ok(repair)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM popravci_u_tijeku WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Repair", id));
        }

        Ok(())
    }

    /// Move a repair into history.
    ///
    /// The history insert and the active-row delete commit as one unit; if
    /// either fails the transaction rolls back and the repair stays active.
    pub async fn complete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let repair =
            sqlx::query_as::<_, ActiveRepair>("SELECT * FROM popravci_u_tijeku WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found_error("Repair", id))?;

        sqlx::query(
            "INSERT INTO povijest_popravaka (automobil_id, opis, datum) VALUES (?, ?, ?)",
        )
        .bind(repair.automobil_id)
        .bind(&repair.opis)
        .bind(&repair.datum)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM popravci_u_tijeku WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
