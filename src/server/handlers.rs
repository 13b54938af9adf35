//! MCP tool handlers for the buyer intake server.
//!
//! Each tool maps onto one [`IntakeService`] operation using the rmcp SDK's
//! tool_router pattern.

use crate::draft::BuyerDraft;
use crate::error::IntakeError;
use crate::models::{BuyerFieldsPatch, ContactCandidate};
use crate::services::IntakeService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that drives a single buyer draft.
#[derive(Clone)]
pub struct BuyerIntakeServer {
    intake_service: Arc<dyn IntakeService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for BuyerIntakeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "buyer-intake-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Buyer intake server - fill in a buyer draft (legal name, ABN, address, contact channel, account number), add contacts with exactly one primary contact, then submit to create the buyer.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateBuyerFieldsParams {
    #[serde(default)]
    legal_name: Option<String>,
    #[serde(default)]
    abn: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    contact_channel: Option<String>,
    #[serde(default)]
    account_number: Option<String>,
}

// Missing fields arrive blank so add_contact reports which one is required.
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    is_primary: Option<bool>,
}

impl From<AddContactParams> for ContactCandidate {
    fn from(params: AddContactParams) -> Self {
        ContactCandidate {
            name: params.name,
            email: params.email,
            phone_number: params.phone_number,
            is_primary: params.is_primary.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactNameParams {
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListBuyersParams {
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    offset: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BuyerIdParams {
    buyer_id: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Validation and draft errors are the caller's to fix.
fn intake_error(e: IntakeError) -> McpError {
    if e.is_user_correctable() {
        McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        }
    } else {
        tracing::error!("Intake operation failed: {:?}", e);
        to_mcp_error(e)
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn draft_view(draft: &BuyerDraft) -> serde_json::Value {
    let missing = draft.to_request().err().map(|e| e.to_string());
    serde_json::json!({
        "fields": draft.fields,
        "contacts": draft.contacts,
        "primary_contact": draft.contacts.primary().map(|c| c.name.clone()),
        "ready_to_submit": missing.is_none(),
        "blocking_issue": missing,
    })
}

#[tool_router]
impl BuyerIntakeServer {
    /// Create a new buyer intake server.
    pub fn new(intake_service: Arc<dyn IntakeService>) -> Self {
        Self {
            intake_service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Show the current buyer draft: scalar fields, contacts (newest first), the primary contact and whether the draft can be submitted"
    )]
    async fn get_buyer_draft(&self) -> Result<CallToolResult, McpError> {
        let draft = self.intake_service.draft().await;
        json_result(&draft_view(&draft))
    }

    #[tool(
        description = "Set one or more buyer fields (legal_name, abn, address, contact_channel, account_number). Omitted fields are left unchanged."
    )]
    async fn update_buyer_fields(
        &self,
        params: Parameters<UpdateBuyerFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let patch = BuyerFieldsPatch {
            legal_name: params.legal_name,
            abn: params.abn,
            address: params.address,
            contact_channel: params.contact_channel,
            account_number: params.account_number,
        };

        let draft = self.intake_service.update_fields(patch).await;
        json_result(&draft_view(&draft))
    }

    #[tool(
        description = "Add a contact person to the buyer draft. Name, email and phone are required; names and emails (case-insensitive) must be unique. The first contact is always primary; setting is_primary moves the primary flag to this contact."
    )]
    async fn add_buyer_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: add_buyer_contact called");

        let contacts = self
            .intake_service
            .add_contact(ContactCandidate::from(params.0))
            .await
            .map_err(intake_error)?;

        json_result(&contacts)
    }

    #[tool(
        description = "Remove a contact from the buyer draft by exact name. If it was the primary contact, the newest remaining contact becomes primary."
    )]
    async fn remove_buyer_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let contacts = self.intake_service.remove_contact(&params.0.name).await;
        json_result(&contacts)
    }

    #[tool(description = "Make the named contact the buyer's only primary contact")]
    async fn set_primary_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let contacts = self.intake_service.set_primary(&params.0.name).await;
        json_result(&contacts)
    }

    #[tool(
        description = "Submit the buyer draft to create the buyer. Requires all buyer fields and at least one contact. The draft is cleared on success and kept on failure."
    )]
    async fn submit_buyer(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_buyer called");

        let outcome = self
            .intake_service
            .submit()
            .await
            .map_err(intake_error)?;

        json_result(&outcome)
    }

    #[tool(description = "Discard the buyer draft and its contacts")]
    async fn reset_buyer_draft(&self) -> Result<CallToolResult, McpError> {
        self.intake_service.reset_draft().await;
        let draft = self.intake_service.draft().await;
        json_result(&draft_view(&draft))
    }

    #[tool(description = "List existing buyers, newest first")]
    async fn list_buyers(
        &self,
        params: Parameters<ListBuyersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let buyers = self
            .intake_service
            .list_buyers(params.limit, params.offset.unwrap_or(0))
            .await
            .map_err(intake_error)?;

        json_result(&serde_json::json!({
            "result_count": buyers.len(),
            "buyers": buyers,
        }))
    }

    #[tool(description = "Retrieve a buyer record by ID")]
    async fn get_buyer(
        &self,
        params: Parameters<BuyerIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let buyer = self
            .intake_service
            .get_buyer(&params.0.buyer_id)
            .await
            .map_err(intake_error)?;

        json_result(&buyer)
    }

    #[tool(description = "Show request and intake counters for this server session")]
    async fn get_intake_metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.intake_service.metrics())
    }
}
