use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ConstellationDto {
    pub constellation_id: i32,
    pub constellation_name: String,
    pub region_id: i32,
}
