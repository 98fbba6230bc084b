//! Credential loading.

pub mod env;

pub use env::ProviderCredentials;
