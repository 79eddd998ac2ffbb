use serde::{Deserialize, Serialize};

/// A solar system with its map position and star classification.
///
/// `region_id` is resolved through the owning constellation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SystemDto {
    pub system_id: i32,
    pub system_name: String,
    pub security_status: f64,
    pub security_class: Option<String>,
    pub x_pos: f64,
    pub y_pos: f64,
    pub z_pos: f64,
    pub constellation_id: i32,
    pub region_id: i32,
    pub spectral_class: Option<String>,
}
