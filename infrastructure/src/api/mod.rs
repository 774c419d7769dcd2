//! Remote campaign API adapter.

mod client;

pub use client::SmartleadClient;
