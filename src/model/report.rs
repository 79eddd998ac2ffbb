use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SpectralClassCountDto {
    pub spectral_class: String,
    pub system_count: i64,
}
