//! Campaign analytics tools.

use super::campaigns::{CampaignIdArgs, campaign_id_param, campaign_path};
use crate::core::remote::RemoteRequest;
use crate::tool::entities::{ToolDefinition, ToolParameter};
use crate::tool::traits::CampaignTool;
use serde::Deserialize;

pub struct GetCampaignAnalytics;

impl CampaignTool for GetCampaignAnalytics {
    const NAME: &'static str = "get_campaign_analytics";
    type Args = CampaignIdArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get top-level analytics (sent, opened, replied, bounced) for a campaign.",
        )
        .with_parameter(campaign_id_param())
    }

    fn request(args: CampaignIdArgs) -> RemoteRequest {
        RemoteRequest::get(format!("{}/analytics", campaign_path(args.campaign_id)))
    }
}

pub struct GetCampaignAnalyticsByDate;

#[derive(Debug, Deserialize)]
pub struct AnalyticsByDateArgs {
    pub campaign_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl CampaignTool for GetCampaignAnalyticsByDate {
    const NAME: &'static str = "get_campaign_analytics_by_date";
    type Args = AnalyticsByDateArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Get campaign analytics for a date range.")
            .with_parameter(campaign_id_param())
            .with_parameter(ToolParameter::new("start_date", "Start date, YYYY-MM-DD", true))
            .with_parameter(ToolParameter::new("end_date", "End date, YYYY-MM-DD", true))
    }

    fn request(args: AnalyticsByDateArgs) -> RemoteRequest {
        RemoteRequest::get(format!(
            "{}/analytics-by-date",
            campaign_path(args.campaign_id)
        ))
        .with_query("start_date", args.start_date)
        .with_query("end_date", args.end_date)
    }
}
