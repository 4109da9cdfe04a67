// charity-race-service/src/models/charities.rs
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

// A charity the donation widget can collect for, identified by its
// every.org nonprofit slug
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Charity {
    pub id: String,
    pub name: String,
}

impl Charity {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

lazy_static! {
    // Charities offered in the team creation form
    pub static ref CHARITY_OPTIONS: Vec<Charity> = vec![
        Charity::new("americanredcross", "American Red Cross"),
        Charity::new("stjude", "St. Jude Children's Research Hospital"),
        Charity::new("doctorswithoutborders", "Doctors Without Borders"),
        Charity::new("feedingamerica", "Feeding America"),
        Charity::new("worldwildlife", "World Wildlife Fund"),
        Charity::new("habitat", "Habitat for Humanity"),
        Charity::new("unicef", "UNICEF"),
        Charity::new("aclu", "American Civil Liberties Union"),
        Charity::new("savethechildren", "Save the Children"),
    ];
}

// Look up a charity's display name by slug
pub fn find_charity_by_id(charity_id: &str) -> Option<&'static Charity> {
    CHARITY_OPTIONS.iter().find(|c| c.id == charity_id)
}
