//! HTTP adapters for the board's REST API.

mod client;

pub use client::ScholarshipApiClient;
