//! Course recommendation engine.
//!
//! This crate provides:
//! - StudentState for validated request input
//! - Resolver for picking courses under a credit limit
//! - AvailabilityRule trait and implementations for regular-course eligibility
//! - ExplanationGenerator for per-course and summary rationale
//! - CourseAdvisor tying them together behind one entry point
//!
//! ## Architecture
//! A request is processed in two stages:
//! 1. The resolver admits failed courses first, then eligible new courses,
//!    while the credit total stays within the cgpa-based limit
//! 2. The explanation generator describes the final list
//!
//! The catalog is read through [`CourseLookup`] and never written.
//!
//! ## Example Usage
//! ```ignore
//! use advisor::{CourseAdvisor, StudentState};
//! use catalog::{CourseCatalog, Semester};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(CourseCatalog::load_from_file(path)?);
//! let advisor = CourseAdvisor::new(catalog);
//!
//! let student = StudentState::new(Semester::Fall, 2.7, ["CSE111"], ["MTH101"])?;
//! let recommendation = advisor.recommend(&student);
//!
//! for code in &recommendation.courses {
//!     println!("{}", code);
//! }
//! ```

pub mod error;
pub mod traits;
pub mod student;
pub mod credit_policy;
pub mod rules;
pub mod availability;
pub mod resolver;
pub mod explanation;
pub mod advisor;

// Re-export main types
pub use advisor::{CourseAdvisor, Recommendation, recommend};
pub use availability::AvailabilityCheck;
pub use credit_policy::{CreditBand, CreditPolicy};
pub use error::{AdvisorError, Result};
pub use explanation::{CourseExplanation, ExplanationBundle, ExplanationGenerator, NO_FAILED_COURSES};
pub use resolver::{Resolution, ResolutionStats, Resolver};
pub use student::StudentState;
pub use traits::{AdmissionContext, AvailabilityRule, CourseLookup};
