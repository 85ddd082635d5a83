pub mod cache;
pub mod cached_client;
pub mod provider;
pub mod record;
