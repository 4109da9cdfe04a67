// charity-race-service/src/main.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use charity_race_service::routes::{charity_routes, donation_routes, team_routes};
use charity_race_service::services::notification_service::{LogNotifier, Notifier};
use charity_race_service::services::team_store::TeamStore;
use charity_race_service::utils::config;
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let address = config::bind_address();
    let storage_dir = config::storage_dir();
    std::fs::create_dir_all(&storage_dir)?;

    // The store is constructed and loaded once, then handed to the workers
    let store = web::Data::new(TeamStore::new(&storage_dir));
    store
        .load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let notifier: web::Data<Arc<dyn Notifier>> = web::Data::new(Arc::new(LogNotifier));

    info!("🚀 Server started at {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(notifier.clone())
            .configure(team_routes::init_routes)
            .configure(donation_routes::init_routes)
            .configure(charity_routes::init_routes)
    })
    .bind(address)?
    .run()
    .await
}
