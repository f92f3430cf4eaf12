//! MCP Server handler for Ethos person holds.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    mcp::{EndHoldParams, GetPersonParams, ListHoldTypesParams, ListHoldsParams},
    EthosClient, EthosError,
};

/// Ethos MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to read and
/// end Colleague person holds.
///
/// # Tools
///
/// - `get_person` - Fetch a person record by Colleague ID
/// - `list_holds` - List a person's holds
/// - `list_hold_types` - List the hold type catalog
/// - `end_hold` - End a person's hold by hold type GUID or code
#[derive(Clone)]
pub struct EthosServer {
    client: Arc<EthosClient>,
}

impl EthosServer {
    /// Create a new EthosServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or the proxy
    /// refuses to issue a token.
    pub async fn from_env() -> crate::Result<Self> {
        let client = EthosClient::from_env().await?;
        Ok(Self::new(client))
    }

    /// Create a new EthosServer with an existing client.
    pub fn new(client: EthosClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert EthosError to McpError.
    fn to_mcp_error(err: EthosError) -> McpError {
        match &err {
            EthosError::NotFound { .. } => McpError::resource_not_found(err.to_string(), None),
            EthosError::Validation(msg) | EthosError::ConfigMissing(msg) => {
                McpError::invalid_params(msg.clone(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn json_result<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `get_person` tool.
    pub async fn handle_get_person(
        &self,
        params: GetPersonParams,
    ) -> Result<CallToolResult, McpError> {
        let person = self
            .client
            .get_person_by_external_id(&params.rcid)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&person)
    }

    /// Handle the `list_holds` tool.
    pub async fn handle_list_holds(
        &self,
        params: ListHoldsParams,
    ) -> Result<CallToolResult, McpError> {
        let holds = self
            .client
            .get_holds_by_external_id(&params.rcid)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&holds)
    }

    /// Handle the `list_hold_types` tool.
    pub async fn handle_list_hold_types(
        &self,
        _params: ListHoldTypesParams,
    ) -> Result<CallToolResult, McpError> {
        let types = self
            .client
            .list_hold_types()
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&types)
    }

    /// Handle the `end_hold` tool.
    ///
    /// # Errors
    ///
    /// Returns an MCP error if:
    /// - Neither or both of `type_guid` and `type_code` are given
    /// - The person, hold type, or hold cannot be found
    /// - The underlying API call fails
    pub async fn handle_end_hold(&self, params: EndHoldParams) -> Result<CallToolResult, McpError> {
        let comment = params.comment.unwrap_or_default();

        let hold = match (params.type_guid, params.type_code) {
            (Some(type_guid), None) => {
                self.client
                    .end_hold_by_external_id_and_type_guid(&params.rcid, &type_guid, &comment)
                    .await
            }
            (None, Some(code)) => {
                self.client
                    .end_hold_by_external_id_and_type_code(&params.rcid, &code, &comment)
                    .await
            }
            _ => {
                return Err(McpError::invalid_params(
                    "Exactly one of type_guid or type_code is required",
                    None,
                ));
            }
        }
        .map_err(Self::to_mcp_error)?;

        Self::json_result(&hold)
    }
}

impl ServerHandler for EthosServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "ethos-client".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Ethos MCP Server - Look up Colleague persons and their holds, and end holds."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "get_person",
                "Fetch a Colleague person record by Colleague ID (RCID).",
                Self::schema::<GetPersonParams>(),
            ),
            Tool::new(
                "list_holds",
                "List every hold (PERC) on a person, identified by Colleague ID.",
                Self::schema::<ListHoldsParams>(),
            ),
            Tool::new(
                "list_hold_types",
                "List the hold type catalog (code, GUID, title).",
                Self::schema::<ListHoldTypesParams>(),
            ),
            Tool::new(
                "end_hold",
                "End a person's hold as of now. \
                 Identify the hold type by type_guid or by type_code (e.g. ACC). \
                 An optional comment is recorded on the hold.",
                Self::schema::<EndHoldParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "get_person" => {
                let params: GetPersonParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_get_person(params).await
            }
            "list_holds" => {
                let params: ListHoldsParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_list_holds(params).await
            }
            "list_hold_types" => {
                let params: ListHoldTypesParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_list_hold_types(params).await
            }
            "end_hold" => {
                let params: EndHoldParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_end_hold(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
