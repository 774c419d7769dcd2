//! Email account tools.

use super::campaigns::{CampaignIdArgs, campaign_id_param, campaign_path};
use crate::core::remote::RemoteRequest;
use crate::tool::entities::{ToolDefinition, ToolParameter};
use crate::tool::traits::{CampaignTool, require_non_empty};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PageArgs {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

pub(crate) fn page_params(definition: ToolDefinition) -> ToolDefinition {
    definition
        .with_parameter(
            ToolParameter::new("offset", "Number of records to skip", false).with_type("integer"),
        )
        .with_parameter(
            ToolParameter::new("limit", "Maximum number of records to return", false)
                .with_type("integer"),
        )
}

pub struct ListEmailAccounts;

impl CampaignTool for ListEmailAccounts {
    const NAME: &'static str = "list_email_accounts";
    type Args = PageArgs;

    fn definition() -> ToolDefinition {
        page_params(ToolDefinition::new(
            Self::NAME,
            "List the email accounts connected to the workspace.",
        ))
    }

    fn request(args: PageArgs) -> RemoteRequest {
        RemoteRequest::get("/email-accounts")
            .with_optional_query("offset", args.offset)
            .with_optional_query("limit", args.limit)
    }
}

pub struct ListCampaignEmailAccounts;

impl CampaignTool for ListCampaignEmailAccounts {
    const NAME: &'static str = "list_campaign_email_accounts";
    type Args = CampaignIdArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "List the email accounts used by a campaign.")
            .with_parameter(campaign_id_param())
    }

    fn request(args: CampaignIdArgs) -> RemoteRequest {
        RemoteRequest::get(format!("{}/email-accounts", campaign_path(args.campaign_id)))
    }
}

pub struct AddCampaignEmailAccounts;

#[derive(Debug, Deserialize)]
pub struct AddCampaignEmailAccountsArgs {
    pub campaign_id: i64,
    pub email_account_ids: Vec<i64>,
}

impl CampaignTool for AddCampaignEmailAccounts {
    const NAME: &'static str = "add_campaign_email_accounts";
    type Args = AddCampaignEmailAccountsArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Attach email accounts to a campaign.")
            .with_parameter(campaign_id_param())
            .with_parameter(
                ToolParameter::new("email_account_ids", "IDs of the email accounts", true)
                    .with_items(serde_json::json!({"type": "integer"}))
                    .with_item_bounds(Some(1), None),
            )
    }

    fn check(args: &AddCampaignEmailAccountsArgs) -> Result<(), String> {
        require_non_empty("email_account_ids", &args.email_account_ids)
    }

    fn request(args: AddCampaignEmailAccountsArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/email-accounts", campaign_path(args.campaign_id)))
            .with_field("email_account_ids", args.email_account_ids)
    }
}
