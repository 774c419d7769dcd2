//! Tool listing adapters.

pub mod schema;

pub use schema::JsonSchemaToolConverter;
