//! Screen view-models: one module per screen, each owning its local
//! `{data, loading, error, filters}` state and orchestrating the remote data
//! client. Client failures are converted to user-facing messages at this
//! boundary; stale data is kept on a failed refresh.

pub mod analysis;
pub mod dashboard;
pub mod notifications;
pub mod portfolio;
pub mod profile;
pub mod recommendations;
