pub mod alerts;
pub mod datasets;
pub mod groups;
pub mod policies;
pub mod programs;
pub mod things;
pub mod timeseries;
pub mod users;

// Re-export all APIs
pub use alerts::AlertsApi;
pub use datasets::DatasetsApi;
pub use groups::GroupsApi;
pub use policies::PoliciesApi;
pub use programs::ProgramsApi;
pub use things::ThingsApi;
pub use timeseries::TimeseriesApi;
pub use users::UsersApi;
