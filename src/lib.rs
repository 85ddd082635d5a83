//! Caching DreamHost DNS client for infrastructure-as-code providers.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;
pub mod resource;

pub use crate::core::cached_client::CachedClient;
pub use crate::core::record::{DNSRecord, DNSRecordInput, DNSRecordType};
pub use crate::error::Error;
pub use crate::resource::{DNSRecordResource, ResourceState};
