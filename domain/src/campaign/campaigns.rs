//! Campaign lifecycle tools: create, list, fetch, schedule, settings, status, delete.

use crate::core::remote::RemoteRequest;
use crate::tool::entities::{ToolDefinition, ToolParameter};
use crate::tool::traits::{CampaignTool, require_non_empty, require_one_of};
use serde::Deserialize;

/// Status values accepted by `update_campaign_status`
pub const CAMPAIGN_STATUSES: [&str; 3] = ["START", "PAUSED", "STOPPED"];

pub(crate) fn campaign_id_param() -> ToolParameter {
    ToolParameter::new("campaign_id", "ID of the campaign", true).with_type("integer")
}

pub(crate) fn campaign_path(campaign_id: i64) -> String {
    format!("/campaigns/{}", campaign_id)
}

#[derive(Debug, Deserialize)]
pub struct CampaignIdArgs {
    pub campaign_id: i64,
}

// ==================== create_campaign ====================

pub struct CreateCampaign;

#[derive(Debug, Deserialize)]
pub struct CreateCampaignArgs {
    pub name: String,
    pub client_id: Option<i64>,
}

impl CampaignTool for CreateCampaign {
    const NAME: &'static str = "create_campaign";
    type Args = CreateCampaignArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Create a new campaign.")
            .with_parameter(ToolParameter::new("name", "Name of the campaign", true))
            .with_parameter(
                ToolParameter::new("client_id", "Client to attach the campaign to", false)
                    .with_type("integer"),
            )
    }

    fn request(args: CreateCampaignArgs) -> RemoteRequest {
        RemoteRequest::post("/campaigns/create")
            .with_field("name", args.name)
            .with_optional_field("client_id", args.client_id)
    }
}

// ==================== list_campaigns ====================

pub struct ListCampaigns;

#[derive(Debug, Deserialize)]
pub struct ListCampaignsArgs {
    pub client_id: Option<i64>,
    pub include_tags: Option<bool>,
}

impl CampaignTool for ListCampaigns {
    const NAME: &'static str = "list_campaigns";
    type Args = ListCampaignsArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "List all campaigns, optionally filtered by client.")
            .with_parameter(
                ToolParameter::new("client_id", "Only return campaigns of this client", false)
                    .with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new("include_tags", "Include campaign tags", false)
                    .with_type("boolean"),
            )
    }

    fn request(args: ListCampaignsArgs) -> RemoteRequest {
        RemoteRequest::get("/campaigns")
            .with_optional_query("client_id", args.client_id)
            .with_optional_query("include_tags", args.include_tags)
    }
}

// ==================== get_campaign ====================

pub struct GetCampaign;

impl CampaignTool for GetCampaign {
    const NAME: &'static str = "get_campaign";
    type Args = CampaignIdArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Get a campaign by its ID.")
            .with_parameter(campaign_id_param())
    }

    fn request(args: CampaignIdArgs) -> RemoteRequest {
        RemoteRequest::get(campaign_path(args.campaign_id))
    }
}

// ==================== update_campaign_schedule ====================

pub struct UpdateCampaignSchedule;

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignScheduleArgs {
    pub campaign_id: i64,
    pub timezone: String,
    pub days_of_the_week: Vec<u8>,
    pub start_hour: String,
    pub end_hour: String,
    pub min_time_btw_emails: i64,
    pub max_new_leads_per_day: i64,
    pub schedule_start_time: Option<String>,
}

impl CampaignTool for UpdateCampaignSchedule {
    const NAME: &'static str = "update_campaign_schedule";
    type Args = UpdateCampaignScheduleArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Update the sending schedule of a campaign.")
            .with_parameter(campaign_id_param())
            .with_parameter(ToolParameter::new(
                "timezone",
                "IANA timezone, e.g. America/Los_Angeles",
                true,
            ))
            .with_parameter(
                ToolParameter::new(
                    "days_of_the_week",
                    "Sending days, 0 = Sunday through 6 = Saturday",
                    true,
                )
                .with_items(serde_json::json!({"type": "integer", "minimum": 0, "maximum": 6}))
                .with_item_bounds(Some(1), Some(7)),
            )
            .with_parameter(ToolParameter::new("start_hour", "Start time, HH:MM", true))
            .with_parameter(ToolParameter::new("end_hour", "End time, HH:MM", true))
            .with_parameter(
                ToolParameter::new("min_time_btw_emails", "Minutes between emails", true)
                    .with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new("max_new_leads_per_day", "Daily cap on new leads", true)
                    .with_type("integer"),
            )
            .with_parameter(ToolParameter::new(
                "schedule_start_time",
                "ISO 8601 start date-time",
                false,
            ))
    }

    fn check(args: &UpdateCampaignScheduleArgs) -> Result<(), String> {
        require_non_empty("days_of_the_week", &args.days_of_the_week)?;
        if let Some(day) = args.days_of_the_week.iter().find(|d| **d > 6) {
            return Err(format!("'days_of_the_week' entries must be 0-6 (got {})", day));
        }
        Ok(())
    }

    fn request(args: UpdateCampaignScheduleArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/schedule", campaign_path(args.campaign_id)))
            .with_field("timezone", args.timezone)
            .with_field("days_of_the_week", args.days_of_the_week)
            .with_field("start_hour", args.start_hour)
            .with_field("end_hour", args.end_hour)
            .with_field("min_time_btw_emails", args.min_time_btw_emails)
            .with_field("max_new_leads_per_day", args.max_new_leads_per_day)
            .with_optional_field("schedule_start_time", args.schedule_start_time)
    }
}

// ==================== update_campaign_settings ====================

pub struct UpdateCampaignSettings;

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignSettingsArgs {
    pub campaign_id: i64,
    pub track_settings: Option<Vec<String>>,
    pub stop_lead_settings: Option<String>,
    pub unsubscribe_text: Option<String>,
    pub send_as_plain_text: Option<bool>,
    pub follow_up_percentage: Option<i64>,
    pub client_id: Option<i64>,
    pub enable_ai_esp_matching: Option<bool>,
}

impl CampaignTool for UpdateCampaignSettings {
    const NAME: &'static str = "update_campaign_settings";
    type Args = UpdateCampaignSettingsArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Update general settings of a campaign.")
            .with_parameter(campaign_id_param())
            .with_parameter(
                ToolParameter::new(
                    "track_settings",
                    "Tracking to disable, e.g. DONT_TRACK_EMAIL_OPEN",
                    false,
                )
                .with_items(serde_json::json!({"type": "string"})),
            )
            .with_parameter(ToolParameter::new(
                "stop_lead_settings",
                "When to stop a lead, e.g. REPLY_TO_AN_EMAIL",
                false,
            ))
            .with_parameter(ToolParameter::new(
                "unsubscribe_text",
                "Unsubscribe link text",
                false,
            ))
            .with_parameter(
                ToolParameter::new("send_as_plain_text", "Send emails as plain text", false)
                    .with_type("boolean"),
            )
            .with_parameter(
                ToolParameter::new("follow_up_percentage", "Follow-up percentage", false)
                    .with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new("client_id", "Client ID", false).with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new("enable_ai_esp_matching", "Enable AI ESP matching", false)
                    .with_type("boolean"),
            )
    }

    fn request(args: UpdateCampaignSettingsArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/settings", campaign_path(args.campaign_id)))
            .with_empty_body()
            .with_optional_field("track_settings", args.track_settings)
            .with_optional_field("stop_lead_settings", args.stop_lead_settings)
            .with_optional_field("unsubscribe_text", args.unsubscribe_text)
            .with_optional_field("send_as_plain_text", args.send_as_plain_text)
            .with_optional_field("follow_up_percentage", args.follow_up_percentage)
            .with_optional_field("client_id", args.client_id)
            .with_optional_field("enable_ai_esp_matching", args.enable_ai_esp_matching)
    }
}

// ==================== update_campaign_status ====================

pub struct UpdateCampaignStatus;

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignStatusArgs {
    pub campaign_id: i64,
    pub status: String,
}

impl CampaignTool for UpdateCampaignStatus {
    const NAME: &'static str = "update_campaign_status";
    type Args = UpdateCampaignStatusArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Start, pause or stop a campaign.")
            .with_parameter(campaign_id_param())
            .with_parameter(
                ToolParameter::new("status", "New campaign status", true)
                    .with_allowed_values(CAMPAIGN_STATUSES),
            )
    }

    fn check(args: &UpdateCampaignStatusArgs) -> Result<(), String> {
        require_one_of("status", &args.status, &CAMPAIGN_STATUSES)
    }

    fn request(args: UpdateCampaignStatusArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/status", campaign_path(args.campaign_id)))
            .with_field("status", args.status)
    }
}

// ==================== delete_campaign ====================

pub struct DeleteCampaign;

impl CampaignTool for DeleteCampaign {
    const NAME: &'static str = "delete_campaign";
    type Args = CampaignIdArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Delete a campaign permanently.")
            .with_parameter(campaign_id_param())
    }

    fn request(args: CampaignIdArgs) -> RemoteRequest {
        RemoteRequest::delete(campaign_path(args.campaign_id))
    }
}
