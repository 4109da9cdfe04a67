#[cfg(test)]
mod tests {
    use crate::models::{MemberData, Organizer, TeamData};
    use crate::routes::{donation_routes, team_routes};
    use crate::services::notification_service::{LogNotifier, Notifier};
    use crate::services::team_store::TeamStore;
    use actix_web::{test, web, App};
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use uuid::Uuid;

    fn test_storage_dir() -> String {
        format!("./storage/test_{}", Uuid::new_v4())
    }

    fn cleanup(dir: &str) {
        if Path::new(dir).exists() {
            fs::remove_dir_all(dir).unwrap();
        }
    }

    fn test_store(dir: &str) -> web::Data<TeamStore> {
        let store = TeamStore::new(dir);
        store.load().unwrap();
        web::Data::new(store)
    }

    fn test_notifier() -> web::Data<Arc<dyn Notifier>> {
        web::Data::new(Arc::new(LogNotifier) as Arc<dyn Notifier>)
    }

    // Seed a team with one member, returning both ids
    fn seed_team(store: &TeamStore) -> (String, String) {
        let team = store
            .create_team(TeamData {
                name: "Runners".to_string(),
                description: None,
                charity_id: "unicef".to_string(),
                charity_name: "UNICEF".to_string(),
                goal_amount: 1000.0,
                organizer: Organizer {
                    name: "Ann".to_string(),
                    email: "a@x.com".to_string(),
                },
            })
            .unwrap();

        let member = store
            .add_team_member(
                &team.id,
                MemberData {
                    full_name: "Bob".to_string(),
                    email: "b@x.com".to_string(),
                },
            )
            .unwrap();

        (team.id, member.id)
    }

    #[actix_rt::test]
    async fn test_donation_flow_updates_totals() {
        let dir = test_storage_dir();
        let store = test_store(&dir);

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .app_data(test_notifier())
                .configure(team_routes::init_routes)
                .configure(donation_routes::init_routes),
        )
        .await;

        let (team_id, member_id) = seed_team(&store);

        // Donation attributed to a member moves both totals
        let request = test::TestRequest::post()
            .uri(&format!("/teams/{}/donations", team_id))
            .set_json(json!({ "memberId": member_id, "amount": 50 }))
            .to_request();

        let receipt: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(receipt["donationComplete"], json!(true));
        assert_eq!(receipt["totalRaised"], json!(50.0));

        // Donation without a member only moves the team total
        let request = test::TestRequest::post()
            .uri(&format!("/teams/{}/donations", team_id))
            .set_json(json!({ "amount": 20 }))
            .to_request();

        let receipt: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(receipt["totalRaised"], json!(70.0));

        let request = test::TestRequest::get()
            .uri(&format!("/teams/{}", team_id))
            .to_request();

        let team: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(team["totalRaised"], json!(70.0));
        assert_eq!(team["members"][0]["amountRaised"], json!(50.0));

        cleanup(&dir);
    }

    #[actix_rt::test]
    async fn test_donation_unknown_team_returns_404() {
        let dir = test_storage_dir();
        let store = test_store(&dir);

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .app_data(test_notifier())
                .configure(team_routes::init_routes)
                .configure(donation_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/teams/team_nonexistent/donations")
            .set_json(json!({ "amount": 100 }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);
        assert!(store.teams().is_empty(), "Collection must be unchanged");

        cleanup(&dir);
    }

    #[actix_rt::test]
    async fn test_donation_unknown_member_returns_404() {
        let dir = test_storage_dir();
        let store = test_store(&dir);

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .app_data(test_notifier())
                .configure(team_routes::init_routes)
                .configure(donation_routes::init_routes),
        )
        .await;

        let (team_id, _member_id) = seed_team(&store);

        let request = test::TestRequest::post()
            .uri(&format!("/teams/{}/donations", team_id))
            .set_json(json!({ "memberId": "member_nonexistent", "amount": 50 }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);

        let team = store.get_team_by_id(&team_id).unwrap();
        assert_eq!(team.total_raised, 0.0, "Failed donations must not move totals");

        cleanup(&dir);
    }

    #[actix_rt::test]
    async fn test_donation_invalid_amount_returns_400() {
        let dir = test_storage_dir();
        let store = test_store(&dir);

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .app_data(test_notifier())
                .configure(team_routes::init_routes)
                .configure(donation_routes::init_routes),
        )
        .await;

        let (team_id, _member_id) = seed_team(&store);

        for amount in [json!(0), json!(-5)] {
            let request = test::TestRequest::post()
                .uri(&format!("/teams/{}/donations", team_id))
                .set_json(json!({ "amount": amount }))
                .to_request();

            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400);
        }

        cleanup(&dir);
    }

    #[actix_rt::test]
    async fn test_widget_config() {
        let dir = test_storage_dir();
        let store = test_store(&dir);

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .app_data(test_notifier())
                .configure(team_routes::init_routes)
                .configure(donation_routes::init_routes),
        )
        .await;

        let (team_id, _member_id) = seed_team(&store);

        let request = test::TestRequest::get()
            .uri(&format!("/teams/{}/widget?amount=50", team_id))
            .to_request();

        let config: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(config["nonprofitSlug"], "unicef");
        assert_eq!(config["label"], "Donate $50");
        assert_eq!(config["addAmounts"].as_array().unwrap().len(), 5);
        assert_eq!(config["donateUrl"], "https://www.every.org/unicef#/donate");

        // Default amount applies when the query is absent
        let request = test::TestRequest::get()
            .uri(&format!("/teams/{}/widget", team_id))
            .to_request();

        let config: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(config["defaultDonationAmount"], json!(25.0));

        cleanup(&dir);
    }
}
