// charity-race-service/src/services/mod.rs
pub mod notification_service;
pub mod team_store;
