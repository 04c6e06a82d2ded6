use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

impl ChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidInput(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or the versioned envelope.
    ///
    /// An object carrying `schema_version` is read as the envelope; anything
    /// else as a bare config, so parse errors name the shape actually sent.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidInput(format!("failed to parse chart config json payload: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            let config: ChartConfig = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidInput(format!("invalid chart config: {e}"))
            })?;
            config.validate()?;
            return Ok(config);
        }

        let payload: ChartConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidInput(format!("invalid chart config contract v1: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidInput(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()?;
        Ok(payload.config)
    }
}
