//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for the
//! protocol" (infrastructure). The domain layer defines [`ToolDefinition`] and
//! [`ToolCatalog`]; this port handles the JSON Schema conversion that
//! `tools/list` requires.

use smartlead_domain::tool::{ToolCatalog, ToolDefinition};

/// Port for converting tool definitions to their listed form.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to `{name, description, inputSchema}`.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every tool in the catalog, in catalog order.
    fn all_tools_schema(&self, catalog: &ToolCatalog) -> Vec<serde_json::Value> {
        catalog
            .definitions()
            .map(|tool| self.tool_to_schema(tool))
            .collect()
    }
}
