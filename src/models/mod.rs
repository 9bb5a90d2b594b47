// Model exports
pub mod requests;
pub mod responses;

pub use requests::MatchQuery;
pub use responses::{HealthResponse, InternalErrorResponse, UpstreamErrorResponse};
