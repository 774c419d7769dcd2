//! Tool domain traits
//!
//! A tool is described once by implementing [`CampaignTool`]: its definition,
//! the typed shape its arguments must deserialize into, any extra shape checks
//! (list cardinality, enumerations), and the single [`RemoteRequest`] it maps to.
//! The catalog erases the type so every tool goes through the same dispatch path.

use crate::core::error::ArgumentError;
use crate::core::remote::RemoteRequest;
use crate::tool::entities::ToolDefinition;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A gateway tool backed by exactly one remote operation.
pub trait CampaignTool {
    /// Unique tool name
    const NAME: &'static str;

    /// Typed projection of the argument bag
    type Args: DeserializeOwned;

    /// Declarative schema shown to callers
    fn definition() -> ToolDefinition;

    /// Shape checks serde cannot express. Returns a human-readable reason on failure.
    fn check(_args: &Self::Args) -> Result<(), String> {
        Ok(())
    }

    /// Build the remote call for validated arguments
    fn request(args: Self::Args) -> RemoteRequest;
}

/// Validate an untyped argument bag for `T` and build its remote request.
///
/// Absent and `null` bags are rejected for every tool, even when all fields are optional.
pub fn prepare<T: CampaignTool>(arguments: Option<&Value>) -> Result<RemoteRequest, ArgumentError> {
    let arguments = match arguments {
        None | Some(Value::Null) => return Err(ArgumentError::missing(T::NAME)),
        Some(value) => value,
    };

    let args = <T::Args as Deserialize>::deserialize(arguments)
        .map_err(|e| ArgumentError::invalid(T::NAME, e.to_string()))?;
    T::check(&args).map_err(|reason| ArgumentError::invalid(T::NAME, reason))?;

    Ok(T::request(args))
}

/// Reject an empty list
pub fn require_non_empty<T>(field: &str, items: &[T]) -> Result<(), String> {
    if items.is_empty() {
        return Err(format!("'{}' must contain at least one entry", field));
    }
    Ok(())
}

/// Reject a list whose length falls outside `min..=max`
pub fn require_len_between<T>(field: &str, items: &[T], min: usize, max: usize) -> Result<(), String> {
    if items.len() < min || items.len() > max {
        return Err(format!(
            "'{}' must contain between {} and {} entries (got {})",
            field,
            min,
            max,
            items.len()
        ));
    }
    Ok(())
}

/// Reject a value that is not one of `allowed`
pub fn require_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(format!(
        "'{}' must be one of {} (got '{}')",
        field,
        allowed.join(", "),
        value
    ))
}
