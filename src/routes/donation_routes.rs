// charity-race-service/src/routes/donation_routes.rs
use crate::models::{DonationRequest, ServiceError};
use crate::services::notification_service::Notifier;
use crate::services::team_store::TeamStore;
use crate::utils::{links, validation};
use actix_web::{get, post, web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

// Suggested amounts shown by the embedded widget
const SUGGESTED_AMOUNTS: [u32; 5] = [10, 25, 50, 100, 250];
const DEFAULT_AMOUNT: f64 = 25.0;

#[derive(Deserialize)]
struct WidgetQuery {
    amount: Option<f64>,
}

// Completion signal from the donation widget's host page: record the amount
// against the team (and member, when given) and send the thank-you mails.
#[post("/teams/{team_id}/donations")]
async fn record_donation(
    store: web::Data<TeamStore>,
    notifier: web::Data<Arc<dyn Notifier>>,
    path: web::Path<String>,
    request: web::Json<DonationRequest>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();
    let request = request.into_inner();

    info!("💸 Donation of {} for team: {}", request.amount, team_id);

    validation::validate_donation(&request)?;

    let team = store
        .get_team_by_id(&team_id)
        .ok_or(ServiceError::NotFound)?;

    // Resolve the member up front so an unknown id is surfaced to the caller
    let member = match request.member_id.as_deref().filter(|id| !id.is_empty()) {
        Some(member_id) => {
            let member = team
                .members
                .iter()
                .find(|m| m.id == member_id)
                .cloned()
                .ok_or_else(|| {
                    warn!("❌ Member {} not found in team: {}", member_id, team_id);
                    ServiceError::NotFound
                })?;
            Some(member)
        }
        None => None,
    };

    let updated = store
        .record_donation(&team_id, member.as_ref().map(|m| m.id.as_str()), request.amount)?
        .ok_or(ServiceError::NotFound)?;

    if let Some(member) = &member {
        let team_url = links::team_url(&team_id);

        let outcome = notifier
            .notify(
                &member.email,
                &format!("Thank you for your donation to {}!", updated.name),
                &format!(
                    "Thank you for your donation of ${} to support {} through the {} team. \
                     Your contribution helps make a difference!",
                    request.amount, updated.charity_name, updated.name
                ),
                &team_url,
            )
            .await;

        if !outcome.success {
            warn!("Thank-you email to {} was not delivered", member.email);
        }

        let outcome = notifier
            .notify(
                &updated.organizer.email,
                &format!("New donation from {}!", member.full_name),
                &format!(
                    "{} has donated ${} to your team fundraiser for {}. \
                     Your team has now raised ${} toward your goal of ${}.",
                    member.full_name,
                    request.amount,
                    updated.charity_name,
                    updated.total_raised,
                    updated.goal_amount
                ),
                &team_url,
            )
            .await;

        if !outcome.success {
            warn!(
                "Donation alert to {} was not delivered",
                updated.organizer.email
            );
        }
    }

    info!("✅ Donation recorded for team: {}", team_id);

    Ok(HttpResponse::Ok().json(json!({
        "teamId": updated.id,
        "memberId": member.map(|m| m.id),
        "amount": request.amount,
        "totalRaised": updated.total_raised,
        "donationComplete": true
    })))
}

// Embed configuration for the every.org donate button and widget on a team's
// donation page
#[get("/teams/{team_id}/widget")]
async fn get_widget_config(
    store: web::Data<TeamStore>,
    path: web::Path<String>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();

    let team = store
        .get_team_by_id(&team_id)
        .ok_or(ServiceError::NotFound)?;

    let amount = query
        .amount
        .filter(|a| a.is_finite() && *a > 0.0)
        .unwrap_or(DEFAULT_AMOUNT);

    Ok(HttpResponse::Ok().json(json!({
        "nonprofitSlug": team.charity_id,
        "label": format!("Donate ${}", amount),
        "defaultDonationAmount": amount,
        "addAmounts": SUGGESTED_AMOUNTS,
        "showInitialAmount": true,
        "primaryColor": "#00a37f",
        "bgColor": "#00a37f",
        "textColor": "white",
        "defaultFrequency": "once",
        "showGiftCardOption": false,
        "donateUrl": format!("https://www.every.org/{}#/donate", team.charity_id)
    })))
}

// Register all donation routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(record_donation).service(get_widget_config);
}
