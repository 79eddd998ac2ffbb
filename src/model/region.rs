use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegionDto {
    pub region_id: i32,
    pub region_name: String,
}
