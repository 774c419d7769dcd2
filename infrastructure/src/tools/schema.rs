//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that renders tool definitions
//! in the shape MCP `tools/list` expects.

use serde_json::{Map, Value, json};
use smartlead_application::ports::tool_schema::ToolSchemaPort;
use smartlead_domain::tool::ToolDefinition;

/// Default implementation producing `{name, description, inputSchema}`.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - `"array"` → `"array"` (with `items`, `minItems`, `maxItems` when declared)
/// - `"object"` → `"object"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "string" => "string",
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                "array" => "array",
                "object" => "object",
                _ => "string",
            };

            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(schema_type));
            prop.insert("description".to_string(), json!(param.description));
            if let Some(values) = &param.allowed_values {
                prop.insert("enum".to_string(), json!(values));
            }
            if let Some(items) = &param.items {
                prop.insert("items".to_string(), items.clone());
            }
            if let Some(min) = param.min_items {
                prop.insert("minItems".to_string(), json!(min));
            }
            if let Some(max) = param.max_items {
                prop.insert("maxItems".to_string(), json!(max));
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}
