//! Repair models
//!
//! A repair lives in exactly one of two tables: `popravci_u_tijeku` while it
//! is in progress, `povijest_popravaka` once completed. Completing a repair
//! moves it from one to the other; deleting it drops it without a trace.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A repair currently in progress for a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct ActiveRepair {
    pub id: i64,
    pub automobil_id: i64,
    pub opis: String,
    pub datum: String,
}

/// An immutable record of a completed repair.
///
/// `datum` stays free-form text end to end; it is never parsed as a calendar
/// date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct RepairRecord {
    pub id: i64,
    pub automobil_id: i64,
    pub opis: String,
    pub datum: String,
}

/// Form payload for opening a repair. The vehicle is resolved by its
/// registration plate, not by id.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRepairRequest {
    #[validate(length(min = 1))]
    pub registracija: String,

    #[validate(length(min = 1))]
    pub opis: String,

    #[validate(length(min = 1))]
    pub datum: String,
}

/// Form payload for editing a repair in progress. Only the description and
/// date can change; the owning vehicle cannot.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRepairRequest {
    #[validate(length(min = 1))]
    pub opis: String,

    #[validate(length(min = 1))]
    pub datum: String,
}
