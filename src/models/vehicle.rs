//! Vehicle model
//!
//! The Vehicle entity and its request variants for CRUD operations.
//! Field names mirror the `automobili` table, which is the vocabulary the
//! presentation layer renders.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::repair::ActiveRepair;

/// A tracked automobile. Rows are never edited in place; vehicles only
/// disappear through the purge-all operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i64,
    pub marka: String,
    pub model: String,
    pub registracija: String,
    pub kilometri: i64,
    pub vlasnik: String,
    pub godina_proizvodnje: i64,
}

/// Form payload for registering a new vehicle.
///
/// The numeric fields arrive as text and are coerced in the controller so a
/// malformed value becomes a validation error instead of a rejected request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub marka: String,

    #[validate(length(min = 1))]
    pub model: String,

    #[validate(length(min = 1))]
    pub registracija: String,

    #[validate(length(min = 1))]
    pub kilometri: String,

    #[validate(length(min = 1))]
    pub vlasnik: String,

    #[validate(length(min = 1))]
    pub godina_proizvodnje: String,
}

/// Everything the index view needs: all vehicles plus all repairs in progress.
#[derive(Debug, Serialize)]
pub struct ShopState {
    pub automobili: Vec<Vehicle>,
    pub popravci_u_tijeku: Vec<ActiveRepair>,
}
