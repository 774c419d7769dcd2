//! Tool catalog: the name → {definition, validator, request builder} table.

use crate::core::error::ArgumentError;
use crate::core::remote::RemoteRequest;
use crate::tool::entities::ToolDefinition;
use crate::tool::traits::{CampaignTool, prepare};
use serde_json::Value;
use std::collections::HashMap;

type PrepareFn = fn(Option<&Value>) -> Result<RemoteRequest, ArgumentError>;

/// One registered tool with its type erased.
#[derive(Clone)]
pub struct ToolEntry {
    definition: ToolDefinition,
    prepare: PrepareFn,
}

impl ToolEntry {
    pub fn of<T: CampaignTool>() -> Self {
        Self {
            definition: T::definition(),
            prepare: prepare::<T>,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Validate the argument bag and build this tool's remote request
    pub fn prepare(&self, arguments: Option<&Value>) -> Result<RemoteRequest, ArgumentError> {
        (self.prepare)(arguments)
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.definition.name)
            .finish_non_exhaustive()
    }
}

/// Ordered registry of the tools the gateway exposes.
///
/// Registration order is the listing order. Registering a name twice replaces
/// the earlier entry in place.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: CampaignTool>(self) -> Self {
        self.register_entry(ToolEntry::of::<T>())
    }

    pub fn register_entry(mut self, entry: ToolEntry) -> Self {
        match self.index.get(entry.name()) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All tool definitions in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.entries.iter().map(ToolEntry::definition)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ToolEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;
    use serde::Deserialize;

    struct Ping;
    struct Pong;

    #[derive(Deserialize)]
    struct NoArgs {}

    impl CampaignTool for Ping {
        const NAME: &'static str = "ping";
        type Args = NoArgs;

        fn definition() -> ToolDefinition {
            ToolDefinition::new(Self::NAME, "Ping")
        }

        fn request(_args: NoArgs) -> RemoteRequest {
            RemoteRequest::get("/ping")
        }
    }

    impl CampaignTool for Pong {
        const NAME: &'static str = "pong";
        type Args = NoArgs;

        fn definition() -> ToolDefinition {
            ToolDefinition::new(Self::NAME, "Pong")
                .with_parameter(ToolParameter::new("loud", "Shout", false).with_type("boolean"))
        }

        fn request(_args: NoArgs) -> RemoteRequest {
            RemoteRequest::post("/pong").with_empty_body()
        }
    }

    #[test]
    fn test_registration_order_is_listing_order() {
        let catalog = ToolCatalog::new().register::<Pong>().register::<Ping>();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["pong", "ping"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let catalog = ToolCatalog::new().register::<Ping>();
        assert!(catalog.contains("ping"));
        assert!(catalog.get("pong").is_none());

        let request = catalog
            .get("ping")
            .unwrap()
            .prepare(Some(&serde_json::json!({})))
            .unwrap();
        assert_eq!(request.path, "/ping");
    }

    #[test]
    fn test_duplicate_registration_replaces_in_place() {
        let catalog = ToolCatalog::new()
            .register::<Ping>()
            .register::<Pong>()
            .register::<Ping>();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["ping", "pong"]);
    }

    #[test]
    fn test_absent_arguments_rejected_even_without_fields() {
        let catalog = ToolCatalog::new().register::<Ping>();
        let err = catalog.get("ping").unwrap().prepare(None).unwrap_err();
        assert_eq!(err, ArgumentError::missing("ping"));
    }
}
