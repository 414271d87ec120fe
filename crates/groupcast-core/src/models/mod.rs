//! Data models for the composer
//!
//! Files staged for attachment, recipient groups, and the two halves of one
//! submission: the outgoing draft and the decoded server response.

mod file;
mod group;
mod submission;

pub use file::*;
pub use group::*;
pub use submission::*;
