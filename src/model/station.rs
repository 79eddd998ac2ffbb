use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StationDto {
    pub station_id: i32,
    pub station_name: String,
    pub system_id: i32,
}
