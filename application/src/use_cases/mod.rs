//! Use cases (application services)

pub mod invoke_tool;
pub mod normalize;
pub mod retry;
