//! Email sequence tools.

use super::campaigns::{CampaignIdArgs, campaign_id_param, campaign_path};
use crate::core::remote::RemoteRequest;
use crate::tool::entities::{ToolDefinition, ToolParameter};
use crate::tool::traits::{CampaignTool, require_non_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceDelay {
    pub delay_in_days: i64,
}

/// One step of an email sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub seq_number: i64,
    pub seq_delay_details: SequenceDelay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
}

pub struct GetCampaignSequence;

impl CampaignTool for GetCampaignSequence {
    const NAME: &'static str = "get_campaign_sequence";
    type Args = CampaignIdArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, "Get the email sequence of a campaign.")
            .with_parameter(campaign_id_param())
    }

    fn request(args: CampaignIdArgs) -> RemoteRequest {
        RemoteRequest::get(format!("{}/sequences", campaign_path(args.campaign_id)))
    }
}

pub struct SaveCampaignSequence;

#[derive(Debug, Deserialize)]
pub struct SaveCampaignSequenceArgs {
    pub campaign_id: i64,
    pub sequences: Vec<SequenceStep>,
}

impl CampaignTool for SaveCampaignSequence {
    const NAME: &'static str = "save_campaign_sequence";
    type Args = SaveCampaignSequenceArgs;

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Create or replace the email sequence of a campaign.",
        )
        .with_parameter(campaign_id_param())
        .with_parameter(
            ToolParameter::new("sequences", "Sequence steps in sending order", true)
                .with_items(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer", "description": "Existing step ID, when updating"},
                        "seq_number": {"type": "integer"},
                        "seq_delay_details": {
                            "type": "object",
                            "properties": {"delay_in_days": {"type": "integer"}},
                            "required": ["delay_in_days"]
                        },
                        "subject": {"type": "string"},
                        "email_body": {"type": "string"}
                    },
                    "required": ["seq_number", "seq_delay_details"]
                }))
                .with_item_bounds(Some(1), None),
        )
    }

    fn check(args: &SaveCampaignSequenceArgs) -> Result<(), String> {
        require_non_empty("sequences", &args.sequences)
    }

    fn request(args: SaveCampaignSequenceArgs) -> RemoteRequest {
        RemoteRequest::post(format!("{}/sequences", campaign_path(args.campaign_id)))
            .with_field("sequences", serde_json::json!(args.sequences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::traits::prepare;
    use serde_json::json;

    #[test]
    fn test_save_sequence() {
        let request = prepare::<SaveCampaignSequence>(Some(&json!({
            "campaign_id": 2,
            "sequences": [
                {"seq_number": 1, "seq_delay_details": {"delay_in_days": 0}, "subject": "Hi"},
                {"seq_number": 2, "seq_delay_details": {"delay_in_days": 3}}
            ]
        })))
        .unwrap();

        assert_eq!(request.path, "/campaigns/2/sequences");
        let sequences = &request.body.as_ref().unwrap()["sequences"];
        assert_eq!(sequences.as_array().unwrap().len(), 2);
        assert_eq!(sequences[0]["subject"], "Hi");
        assert!(sequences[1].get("subject").is_none());
    }

    #[test]
    fn test_save_sequence_rejects_empty_and_malformed() {
        assert!(
            prepare::<SaveCampaignSequence>(Some(&json!({"campaign_id": 2, "sequences": []})))
                .is_err()
        );
        assert!(
            prepare::<SaveCampaignSequence>(Some(&json!({
                "campaign_id": 2,
                "sequences": [{"seq_number": 1}]
            })))
            .is_err()
        );
    }

    #[test]
    fn test_get_sequence() {
        let request = prepare::<GetCampaignSequence>(Some(&json!({"campaign_id": 8}))).unwrap();
        assert_eq!(request.path, "/campaigns/8/sequences");
    }
}
