// charity-race-service/src/models/mod.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use actix_web::{HttpResponse, ResponseError};

// Charity catalog module
pub mod charities;
pub use charities::*;

// Team models
//
// Stored and wire JSON keeps the camelCase field names the frontend and the
// persisted snapshot use (goalAmount, totalRaised, joinedAt, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub charity_id: String,
    pub charity_name: String,
    pub goal_amount: f64,
    pub organizer: Organizer,
    pub total_raised: f64,
    pub created_at: DateTime<Utc>,
    pub members: Vec<Member>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub amount_raised: f64,
}

// Input payload for a new team. Validation happens in the route layer before
// the store is called.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub name: String,
    pub description: Option<String>,
    pub charity_id: String,
    pub charity_name: String,
    pub goal_amount: f64,
    pub organizer: Organizer,
}

// Input payload for a new team member
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    pub full_name: String,
    pub email: String,
}

// Request to create a team, optionally with its initial members (the create
// form submits team and members together)
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[serde(flatten)]
    pub team: TeamData,
    #[serde(default)]
    pub members: Vec<MemberData>,
}

// Donation completion signal from the host page of the embedded widget
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub member_id: Option<String>,
    pub amount: f64,
}

// Custom error types
#[derive(Debug)]
pub enum ServiceError {
    InternalServerError,
    BadRequest(String),
    NotFound,
}

// Implement Display for ServiceError
impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::InternalServerError => write!(f, "Internal Server Error"),
            ServiceError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
            ServiceError::NotFound => write!(f, "Not Found"),
        }
    }
}

// Implement std::error::Error for ServiceError
impl std::error::Error for ServiceError {}

// Implement ResponseError for ServiceError
impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::InternalServerError =>
                HttpResponse::InternalServerError().json("Internal Server Error"),
            ServiceError::BadRequest(ref message) =>
                HttpResponse::BadRequest().json(message),
            ServiceError::NotFound =>
                HttpResponse::NotFound().json("Not Found"),
        }
    }
}
