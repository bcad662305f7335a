//! Syncdash client: HTTP resource fetching and snapshot aggregation.
mod aggregate;
mod api;
mod error;

pub use aggregate::poll;
pub use api::{
    ClientSettings, CollectionResponse, HttpStatusApi, LogsResponse, QueueResponse, StatusApi,
    StatusResponse,
};
pub use error::{FailureKind, FetchError};
