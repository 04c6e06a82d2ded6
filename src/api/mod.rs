mod chart_config;
mod chart_engine;
mod json_contract;

pub use chart_config::ChartConfig;
pub use chart_engine::ChartEngine;
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
