use serde::{Deserialize, Serialize};

/// Raw JSON value passed through without interpretation.
///
/// Used for call objects, state overrides, `eth_feeHistory` percentiles and
/// `net_version`, where the splitter only needs to forward and compare the value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub serde_json::Value);

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
