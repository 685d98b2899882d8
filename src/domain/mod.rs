//! Patent lookup domain types.

pub mod classification;
pub mod id;
pub mod patent;
pub mod report;

pub use classification::{ClassificationResult, Labels, REQUIRED_FIELDS};
pub use id::PatentId;
pub use patent::{Assignee, Inventor, PatentMetadata, SearchResponse};
pub use report::{ClassificationView, PatentReport};
