//! Structure discovery pipeline: candidate filtering, flood fill,
//! classification, grouping, and the discovery service

pub mod candidate;
pub mod flood;
pub mod classify;
pub mod group;
pub mod discovery;

pub use candidate::CandidateFilter;
pub use classify::{Classifier, ComponentInfo, ComponentType};
pub use group::{group_components, ComponentGroup};
pub use discovery::{BlockCensus, MultiblockDiscovery, MultiblockInfo};
