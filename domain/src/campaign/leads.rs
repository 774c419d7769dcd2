//! Lead tools: bulk add, listing, lookup by email and per-lead lifecycle.

use super::campaigns::{campaign_id_param, campaign_path};
use super::email_accounts::page_params;
use crate::core::remote::RemoteRequest;
use crate::tool::entities::{ToolDefinition, ToolParameter};
use crate::tool::traits::{CampaignTool, require_len_between};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound on leads accepted by one `add_leads_to_campaign` call
pub const MAX_LEADS_PER_CALL: usize = 100;

/// A lead as accepted by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<String, serde_json::Value>>,
}

/// Duplicate / block-list handling for a lead upload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadUploadSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_global_block_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_unsubscribe_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_duplicate_leads_in_other_campaign: Option<bool>,
}

fn lead_item_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "email": {"type": "string"},
            "first_name": {"type": "string"},
            "last_name": {"type": "string"},
            "company_name": {"type": "string"},
            "phone_number": {"type": "string"},
            "website": {"type": "string"},
            "location": {"type": "string"},
            "linkedin_profile": {"type": "string"},
            "custom_fields": {"type": "object"}
        },
        "required": ["email"]
    })
}

#[derive(Debug, Deserialize)]
pub struct CampaignLeadArgs {
    pub campaign_id: i64,
    pub lead_id: i64,
}

fn campaign_lead_path(args: &CampaignLeadArgs) -> String {
    format!("{}/leads/{}", campaign_path(args.campaign_id), args.lead_id)
}

fn campaign_lead_definition(name: &str, description: &str) -> ToolDefinition {
    ToolDefinition::new(name, description)
        .with_parameter(campaign_id_param())
        .with_parameter(ToolParameter::new("lead_id", "ID of the lead", true).with_type("integer"))
}

// ==================== add_leads_to_campaign ====================

pub struct AddLeadsToCampaign;

#[derive(Debug, Deserialize)]
pub struct AddLeadsToCampaignArgs {
    pub campaign_id: i64,
    pub lead_list: Vec<Lead>,
    pub settings: Option<LeadUploadSettings>,
}

impl CampaignTool for AddLeadsToCampaign {
    const NAME: &'static str = "add_leads_to_campaign";
    type Args = AddLeadsToCampaignArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Add up to 100 leads to a campaign in one call.",
        )
        .with_parameter(campaign_id_param())
        .with_parameter(
            ToolParameter::new("lead_list", "Leads to add (1 to 100)", true)
                .with_items(lead_item_schema())
                .with_item_bounds(Some(1), Some(MAX_LEADS_PER_CALL)),
        )
        .with_parameter(
            ToolParameter::new("settings", "Duplicate and block-list handling", false)
                .with_type("object"),
        )
    }

    fn check(args: &AddLeadsToCampaignArgs) -> Result<(), String> {
        require_len_between("lead_list", &args.lead_list, 1, MAX_LEADS_PER_CALL)
    }

    fn request(args: AddLeadsToCampaignArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/leads", campaign_path(args.campaign_id)))
            .with_field("lead_list", serde_json::json!(args.lead_list))
            .with_optional_field("settings", args.settings.map(|s| serde_json::json!(s)))
    }
}

// ==================== list_campaign_leads ====================

pub struct ListCampaignLeads;

#[derive(Debug, Deserialize)]
pub struct ListCampaignLeadsArgs {
    pub campaign_id: i64,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl CampaignTool for ListCampaignLeads {
    const NAME: &'static str = "list_campaign_leads";
    type Args = ListCampaignLeadsArgs;

    fn definition() -> ToolDefinition {
        page_params(
            ToolDefinition::new(Self::NAME, "List the leads of a campaign.")
                .with_parameter(campaign_id_param()),
        )
    }

    fn request(args: ListCampaignLeadsArgs) -> RemoteRequest {
        RemoteRequest::get(format!("{}/leads", campaign_path(args.campaign_id)))
            .with_optional_query("offset", args.offset)
            .with_optional_query("limit", args.limit)
    }
}

// ==================== get_lead_by_email ====================

pub struct GetLeadByEmail;

#[derive(Debug, Deserialize)]
pub struct GetLeadByEmailArgs {
    pub email: String,
}

impl CampaignTool for GetLeadByEmail {
    const NAME: &'static str = "get_lead_by_email";
    type Args = GetLeadByEmailArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Look up a lead across all campaigns by email address.")
            .with_parameter(ToolParameter::new("email", "Email address of the lead", true))
    }

    fn request(args: GetLeadByEmailArgs) -> RemoteRequest {
        RemoteRequest::get("/leads/").with_query("email", args.email)
    }
}

// ==================== per-lead lifecycle ====================

pub struct PauseCampaignLead;

impl CampaignTool for PauseCampaignLead {
    const NAME: &'static str = "pause_campaign_lead";
    type Args = CampaignLeadArgs;

    fn definition() -> ToolDefinition {
        campaign_lead_definition(Self::NAME, "Pause sending to a lead in a campaign.")
    }

    fn request(args: CampaignLeadArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/pause", campaign_lead_path(&args))).with_empty_body()
    }
}

pub struct ResumeCampaignLead;

#[derive(Debug, Deserialize)]
pub struct ResumeCampaignLeadArgs {
    pub campaign_id: i64,
    pub lead_id: i64,
    pub resume_lead_with_delay_days: Option<i64>,
}

impl CampaignTool for ResumeCampaignLead {
    const NAME: &'static str = "resume_campaign_lead";
    type Args = ResumeCampaignLeadArgs;

    fn definition() -> ToolDefinition {
        campaign_lead_definition(Self::NAME, "Resume sending to a paused lead.").with_parameter(
            ToolParameter::new(
                "resume_lead_with_delay_days",
                "Days to wait before resuming",
                false,
            )
            .with_type("integer"),
        )
    }

    fn request(args: ResumeCampaignLeadArgs) -> RemoteRequest {
        let path = campaign_lead_path(&CampaignLeadArgs {
            campaign_id: args.campaign_id,
            lead_id: args.lead_id,
        });
        RemoteRequest::post(format!("{}/resume", path))
            .with_empty_body()
            .with_optional_field(
                "resume_lead_with_delay_days",
                args.resume_lead_with_delay_days,
            )
    }
}

pub struct DeleteCampaignLead;

impl CampaignTool for DeleteCampaignLead {
    const NAME: &'static str = "delete_campaign_lead";
    type Args = CampaignLeadArgs;

    fn definition() -> ToolDefinition {
        campaign_lead_definition(Self::NAME, "Remove a lead from a campaign.")
    }

    fn request(args: CampaignLeadArgs) -> RemoteRequest {
        RemoteRequest::delete(campaign_lead_path(&args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remote::HttpMethod;
    use crate::tool::traits::prepare;
    use serde_json::{Value, json};

    fn leads(count: usize) -> Value {
        Value::Array(
            (0..count)
                .map(|i| json!({"email": format!("lead{}@example.com", i)}))
                .collect(),
        )
    }

    fn add_leads(count: usize) -> Value {
        json!({"campaign_id": 1, "lead_list": leads(count)})
    }

    #[test]
    fn test_bulk_add_boundaries() {
        assert!(prepare::<AddLeadsToCampaign>(Some(&add_leads(0))).is_err());
        assert!(prepare::<AddLeadsToCampaign>(Some(&add_leads(1))).is_ok());
        assert!(prepare::<AddLeadsToCampaign>(Some(&add_leads(MAX_LEADS_PER_CALL))).is_ok());
        assert!(prepare::<AddLeadsToCampaign>(Some(&add_leads(MAX_LEADS_PER_CALL + 1))).is_err());
    }

    #[test]
    fn test_bulk_add_requires_email() {
        let args = json!({"campaign_id": 1, "lead_list": [{"first_name": "Ada"}]});
        let err = prepare::<AddLeadsToCampaign>(Some(&args)).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_bulk_add_body() {
        let args = json!({
            "campaign_id": 3,
            "lead_list": [{
                "email": "ada@example.com",
                "first_name": "Ada",
                "custom_fields": {"plan": "pro"}
            }],
            "settings": {"ignore_global_block_list": true}
        });
        let request = prepare::<AddLeadsToCampaign>(Some(&args)).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/campaigns/3/leads");

        let body = request.body.unwrap();
        assert_eq!(body["lead_list"][0]["email"], "ada@example.com");
        assert_eq!(body["lead_list"][0]["custom_fields"]["plan"], "pro");
        assert!(body["lead_list"][0].get("last_name").is_none());
        assert_eq!(body["settings"], json!({"ignore_global_block_list": true}));
    }

    #[test]
    fn test_get_lead_by_email() {
        let request =
            prepare::<GetLeadByEmail>(Some(&json!({"email": "ada@example.com"}))).unwrap();
        assert_eq!(request.path, "/leads/");
        assert_eq!(
            request.query,
            vec![("email".to_string(), "ada@example.com".to_string())]
        );
    }

    #[test]
    fn test_lead_lifecycle_paths() {
        let args = json!({"campaign_id": 1, "lead_id": 2});

        let pause = prepare::<PauseCampaignLead>(Some(&args)).unwrap();
        assert_eq!(pause.path, "/campaigns/1/leads/2/pause");

        let delete = prepare::<DeleteCampaignLead>(Some(&args)).unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.path, "/campaigns/1/leads/2");

        let resume = prepare::<ResumeCampaignLead>(Some(&json!({
            "campaign_id": 1,
            "lead_id": 2,
            "resume_lead_with_delay_days": 4
        })))
        .unwrap();
        assert_eq!(resume.path, "/campaigns/1/leads/2/resume");
        assert_eq!(resume.body, Some(json!({"resume_lead_with_delay_days": 4})));
    }

    #[test]
    fn test_lead_lifecycle_requires_lead_id() {
        assert!(prepare::<PauseCampaignLead>(Some(&json!({"campaign_id": 1}))).is_err());
    }
}
