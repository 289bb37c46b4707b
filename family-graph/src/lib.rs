//! Family Graph - Team Family-Group Resolution
//!
//! Turns a team roster into family groups:
//! - Placeholder accounts are re-attributed to their owning real account
//! - Resolved members are partitioned into connected components of the
//!   family-relationship graph
//! - The number of groups is bucketed into a display cohort
//!
//! ## Modules
//!
//! - [`resolver`]: placeholder-to-owner resolution
//! - [`grouping`]: connected-component grouping
//! - [`cohort`]: group count to cohort label
//! - [`service`]: per-team queries over injected repositories
//! - [`report`]: result types
//! - [`warnings`]: data-quality conditions recovered during resolution

pub mod cohort;
pub mod errors;
pub mod grouping;
pub mod report;
pub mod resolver;
pub mod service;
pub mod warnings;

pub use cohort::Cohort;
pub use errors::FamilyError;
pub use grouping::group_members;
pub use report::{CohortDistribution, FamilyCount, FamilyReport};
pub use resolver::{OwnerResolver, RelationshipIndex, Resolution};
pub use service::FamilyService;
pub use warnings::DataQualityWarning;
