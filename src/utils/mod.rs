// charity-race-service/src/utils/mod.rs
use crate::models::{
    find_charity_by_id, CreateTeamRequest, DonationRequest, MemberData, ServiceError, TeamData,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::env;

// Environment configuration with sensible defaults
pub mod config {
    use super::*;

    // Address the server binds to
    pub fn bind_address() -> String {
        env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:9090".to_string())
    }

    // Directory holding the persisted team collection
    pub fn storage_dir() -> String {
        env::var("STORAGE_DIR").unwrap_or_else(|_| "./storage".to_string())
    }

    // Base URL used when building team and donation links for notifications
    pub fn public_base_url() -> String {
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:9090".to_string())
    }
}

// Request validation, performed before any store operation. The store itself
// never validates.
pub mod validation {
    use super::*;

    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email.trim())
    }

    pub fn validate_team_data(team: &TeamData) -> Result<(), ServiceError> {
        if team.name.trim().is_empty() {
            return Err(ServiceError::BadRequest("Team name is required".to_string()));
        }

        if !(team.goal_amount > 0.0) || !team.goal_amount.is_finite() {
            return Err(ServiceError::BadRequest(
                "Please set a valid fundraising goal".to_string(),
            ));
        }

        if find_charity_by_id(&team.charity_id).is_none() {
            return Err(ServiceError::BadRequest(
                "A supported charity is required".to_string(),
            ));
        }

        if team.organizer.name.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Organizer name is required".to_string(),
            ));
        }

        if !is_valid_email(&team.organizer.email) {
            return Err(ServiceError::BadRequest(
                "Valid organizer email is required".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_member_data(member: &MemberData) -> Result<(), ServiceError> {
        if member.full_name.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Member name is required".to_string(),
            ));
        }

        if !is_valid_email(&member.email) {
            return Err(ServiceError::BadRequest(
                "Member email is required and must be valid".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_create_team_request(request: &CreateTeamRequest) -> Result<(), ServiceError> {
        validate_team_data(&request.team)?;

        for (index, member) in request.members.iter().enumerate() {
            validate_member_data(member).map_err(|_| {
                ServiceError::BadRequest(format!(
                    "Member {} needs a name and a valid email",
                    index + 1
                ))
            })?;
        }

        Ok(())
    }

    pub fn validate_donation(request: &DonationRequest) -> Result<(), ServiceError> {
        if !(request.amount > 0.0) || !request.amount.is_finite() {
            return Err(ServiceError::BadRequest(
                "Please choose a valid donation amount".to_string(),
            ));
        }

        Ok(())
    }
}

// Link builders shared by the notification flows
pub mod links {
    use super::config;

    pub fn team_url(team_id: &str) -> String {
        format!("{}/team/{}", config::public_base_url(), team_id)
    }

    pub fn donate_url(team_id: &str, member_id: &str) -> String {
        format!(
            "{}/donate/{}/{}",
            config::public_base_url(),
            team_id,
            member_id
        )
    }
}
