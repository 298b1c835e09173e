pub mod repair_repository;
pub mod vehicle_repository;
