//! Availability rule implementations.
//!
//! Each rule checks one condition a regular course must meet before it can
//! be recommended. Failed retakes never go through these rules.

pub mod semester_offered;
pub mod prerequisites;
pub mod corequisites;

// Re-export for convenience
pub use corequisites::CorequisiteRule;
pub use prerequisites::PrerequisiteRule;
pub use semester_offered::SemesterOfferedRule;
