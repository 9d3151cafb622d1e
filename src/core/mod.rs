// src/core/mod.rs
//! Backend access: the service trait and its HTTP implementation

pub mod api;
pub mod service_client;

pub use api::AnalyticsApi;
pub use service_client::ServiceClient;
