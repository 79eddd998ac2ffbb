use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PlanetDto {
    pub planet_id: i32,
    pub planet_name: String,
    pub system_id: i32,
    #[serde(rename = "type")]
    pub planet_type: Option<String>,
    pub moon_count: i32,
    pub asteroid_belt_count: i32,
}
