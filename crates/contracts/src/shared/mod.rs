pub mod envelope;
pub mod paging;

pub use envelope::{ApiEnvelope, ApiSuccess, Collection, EntityCollection, EnvelopeType, Pagination};
pub use paging::PageQuery;
