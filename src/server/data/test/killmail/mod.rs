use super::*;

mod get_period_counts;
mod get_recent_by_system;
mod get_region_heatmap;
mod get_top;
