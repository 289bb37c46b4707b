//! # Family Shared
//! This crate defines the data model shared by the family-group workspace:
//! member and team identifiers, placeholder classification, relationship
//! rows, team memberships and the derived family groups.
pub mod types;
