// charity-race-service/src/routes/charity_routes.rs
use crate::models::CHARITY_OPTIONS;
use actix_web::{get, web, HttpResponse, Responder};
use log::info;

// The charities a team can fundraise for
#[get("/charities")]
async fn get_charities() -> impl Responder {
    info!("📋 Fetching charity catalog");

    HttpResponse::Ok().json(&*CHARITY_OPTIONS)
}

// Register all charity routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_charities);
}
