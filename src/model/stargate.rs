use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StargateDto {
    pub stargate_id: i32,
    pub stargate_name: String,
    pub system_id: i32,
    pub destination_stargate_id: i32,
    pub destination_system_id: i32,
}
