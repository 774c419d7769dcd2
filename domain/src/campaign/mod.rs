//! Campaign subdomain: the Smartlead operations exposed as tools.
//!
//! Tools are grouped by the resource they act on. [`default_catalog`]
//! registers every tool in the order `tools/list` reports them.

pub mod analytics;
pub mod campaigns;
pub mod email_accounts;
pub mod leads;
pub mod sequences;

use crate::tool::ToolCatalog;

pub use analytics::{GetCampaignAnalytics, GetCampaignAnalyticsByDate};
pub use campaigns::{
    CAMPAIGN_STATUSES, CreateCampaign, DeleteCampaign, GetCampaign, ListCampaigns,
    UpdateCampaignSchedule, UpdateCampaignSettings, UpdateCampaignStatus,
};
pub use email_accounts::{AddCampaignEmailAccounts, ListCampaignEmailAccounts, ListEmailAccounts};
pub use leads::{
    AddLeadsToCampaign, DeleteCampaignLead, GetLeadByEmail, Lead, ListCampaignLeads,
    MAX_LEADS_PER_CALL, PauseCampaignLead, ResumeCampaignLead,
};
pub use sequences::{GetCampaignSequence, SaveCampaignSequence, SequenceStep};

/// Catalog with every campaign tool registered
pub fn default_catalog() -> ToolCatalog {
    ToolCatalog::new()
        .register::<CreateCampaign>()
        .register::<ListCampaigns>()
        .register::<GetCampaign>()
        .register::<UpdateCampaignSchedule>()
        .register::<UpdateCampaignSettings>()
        .register::<UpdateCampaignStatus>()
        .register::<DeleteCampaign>()
        .register::<GetCampaignSequence>()
        .register::<SaveCampaignSequence>()
        .register::<ListEmailAccounts>()
        .register::<ListCampaignEmailAccounts>()
        .register::<AddCampaignEmailAccounts>()
        .register::<AddLeadsToCampaign>()
        .register::<ListCampaignLeads>()
        .register::<GetLeadByEmail>()
        .register::<PauseCampaignLead>()
        .register::<ResumeCampaignLead>()
        .register::<DeleteCampaignLead>()
        .register::<GetCampaignAnalytics>()
        .register::<GetCampaignAnalyticsByDate>()
}
