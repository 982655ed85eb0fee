/*
 * Self-host API Client - Rust client for the NODA Self-host resource API
 */

// Internal modules
mod apis;
mod auth;
mod client;
mod error;
pub mod models;

// Re-export public types and interfaces
pub use apis::*;
pub use auth::{BASE_URL_VAR, PASSWORD_VAR, USERNAME_VAR};
pub use client::SelfHostClient;
pub use error::{SelfHostError, SelfHostResult};
pub use models::*;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        SelfHostClient, SelfHostError, SelfHostResult,
        // Common model types
        Alert, AlertFilter, DataFilter, DataPoint, Dataset, Group, Policy, Program, Thing,
        Timeseries, TimeseriesData, User,
    };
}
