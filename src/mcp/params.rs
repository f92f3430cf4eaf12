//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `get_person` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPersonParams {
    /// Colleague ID (RCID) of the person.
    pub rcid: String,
}

/// Parameters for the `list_holds` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListHoldsParams {
    /// Colleague ID (RCID) of the person.
    pub rcid: String,
}

/// Parameters for the `list_hold_types` MCP tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListHoldTypesParams {}

/// Parameters for the `end_hold` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EndHoldParams {
    /// Colleague ID (RCID) of the person.
    pub rcid: String,
    /// GUID of the hold type to end. Give this or `type_code`.
    #[serde(default)]
    pub type_guid: Option<String>,
    /// Code of the hold type to end (e.g., "ACC"). Give this or `type_guid`.
    #[serde(default)]
    pub type_code: Option<String>,
    /// Comment to record on the hold.
    #[serde(default)]
    pub comment: Option<String>,
}
