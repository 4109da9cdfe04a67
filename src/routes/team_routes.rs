// charity-race-service/src/routes/team_routes.rs
use crate::models::{CreateTeamRequest, MemberData, ServiceError};
use crate::services::notification_service::Notifier;
use crate::services::team_store::TeamStore;
use crate::utils::{links, validation};
use actix_web::{get, post, web, HttpResponse};
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

// Create a new team, optionally with its initial members. Each member gets a
// welcome email and the organizer gets a confirmation.
#[post("/teams")]
async fn create_team(
    store: web::Data<TeamStore>,
    notifier: web::Data<Arc<dyn Notifier>>,
    request: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();

    info!("📝 Creating new team: {}", request.team.name);

    validation::validate_create_team_request(&request)?;

    let team = store.create_team(request.team)?;
    let team_url = links::team_url(&team.id);

    for member_data in request.members {
        let member = store.add_team_member(&team.id, member_data)?;

        let outcome = notifier
            .notify(
                &member.email,
                &format!("You've been added to {} charity team!", team.name),
                &format!(
                    "{} has added you to their charity team supporting {}. \
                     You can view the team's progress and make donations at the link below.",
                    team.organizer.name, team.charity_name
                ),
                &team_url,
            )
            .await;

        if !outcome.success {
            warn!("Welcome email to {} was not delivered", member.email);
        }
    }

    let outcome = notifier
        .notify(
            &team.organizer.email,
            &format!("Your team {} has been created!", team.name),
            "Your charity team has been created successfully. \
             You can view your team's progress at the link below.",
            &team_url,
        )
        .await;

    if !outcome.success {
        warn!("Confirmation email to {} was not delivered", team.organizer.email);
    }

    info!("✅ Team created successfully: {}", team.id);

    // Re-read so the response includes the members added above
    let created = store.get_team_by_id(&team.id).ok_or(ServiceError::NotFound)?;
    Ok(HttpResponse::Ok().json(created))
}

// Get all teams
#[get("/teams")]
async fn get_teams(store: web::Data<TeamStore>) -> Result<HttpResponse, ServiceError> {
    let teams = store.teams();

    info!("📋 Fetching all teams: {} found", teams.len());

    Ok(HttpResponse::Ok().json(&*teams))
}

// Get a specific team by ID
#[get("/teams/{team_id}")]
async fn get_team(
    store: web::Data<TeamStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();

    info!("🔍 Fetching team: {}", team_id);

    match store.get_team_by_id(&team_id) {
        Some(team) => Ok(HttpResponse::Ok().json(team)),
        None => {
            warn!("❌ Team not found: {}", team_id);
            Err(ServiceError::NotFound)
        }
    }
}

// Fundraising progress for a team, with the completion percentage capped
// at 100
#[get("/teams/{team_id}/progress")]
async fn get_team_progress(
    store: web::Data<TeamStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();

    let team = store
        .get_team_by_id(&team_id)
        .ok_or(ServiceError::NotFound)?;

    let percent_complete = if team.goal_amount > 0.0 {
        (team.total_raised / team.goal_amount * 100.0).min(100.0)
    } else {
        0.0
    };

    Ok(HttpResponse::Ok().json(json!({
        "teamId": team.id,
        "totalRaised": team.total_raised,
        "goalAmount": team.goal_amount,
        "percentComplete": percent_complete
    })))
}

// Add a member to a team
#[post("/teams/{team_id}/members")]
async fn add_team_member(
    store: web::Data<TeamStore>,
    notifier: web::Data<Arc<dyn Notifier>>,
    path: web::Path<String>,
    data: web::Json<MemberData>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();
    let data = data.into_inner();

    info!("👥 Adding member {} to team: {}", data.full_name, team_id);

    validation::validate_member_data(&data)?;

    let team = store
        .get_team_by_id(&team_id)
        .ok_or(ServiceError::NotFound)?;

    let member = store.add_team_member(&team_id, data)?;

    let outcome = notifier
        .notify(
            &member.email,
            &format!("You've been added to {} charity team!", team.name),
            &format!(
                "{} has added you to their charity team supporting {}. \
                 You can view the team's progress and make donations at the link below.",
                team.organizer.name, team.charity_name
            ),
            &links::team_url(&team_id),
        )
        .await;

    if !outcome.success {
        warn!("Welcome email to {} was not delivered", member.email);
    }

    info!("✅ Member {} added to team: {}", member.id, team_id);

    Ok(HttpResponse::Ok().json(member))
}

// Get a team's members, in join order, each with their personal donate link
#[get("/teams/{team_id}/members")]
async fn get_team_members(
    store: web::Data<TeamStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();

    let team = store
        .get_team_by_id(&team_id)
        .ok_or(ServiceError::NotFound)?;

    info!("📋 Found {} members for team: {}", team.members.len(), team_id);

    let members = team
        .members
        .iter()
        .map(|member| {
            let mut value =
                serde_json::to_value(member).map_err(|_| ServiceError::InternalServerError)?;
            value["donateUrl"] = json!(links::donate_url(&team_id, &member.id));
            Ok(value)
        })
        .collect::<Result<Vec<_>, ServiceError>>()?;

    Ok(HttpResponse::Ok().json(members))
}

// Service health, including whether the store has finished its initial load
#[get("/health")]
async fn health(store: web::Data<TeamStore>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "ready": store.is_ready()
    }))
}

// Register all team routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_team)
        .service(get_teams)
        .service(get_team)
        .service(get_team_progress)
        .service(add_team_member)
        .service(get_team_members)
        .service(health);
}
