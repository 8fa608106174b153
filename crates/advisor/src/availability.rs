//! The AvailabilityCheck chains availability rules.
//!
//! A regular course is available when every rule in the chain admits it.
//! The default chain is semester offering, then prerequisites, then
//! co-requisites.

use crate::rules::{CorequisiteRule, PrerequisiteRule, SemesterOfferedRule};
use crate::traits::{AdmissionContext, AvailabilityRule};
use tracing;

/// Ordered set of availability rules.
///
/// ## Usage
/// ```ignore
/// let check = AvailabilityCheck::new()
///     .add_rule(SemesterOfferedRule)
///     .add_rule(PrerequisiteRule);
///
/// if check.is_available("CSE112", &context) { /* admit */ }
/// ```
pub struct AvailabilityCheck {
    rules: Vec<Box<dyn AvailabilityRule>>,
}

impl AvailabilityCheck {
    /// Create an empty check that admits everything
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Semester offering, prerequisites, co-requisites
    pub fn standard() -> Self {
        Self::new()
            .add_rule(SemesterOfferedRule)
            .add_rule(PrerequisiteRule)
            .add_rule(CorequisiteRule)
    }

    /// Add a rule to the end of the chain (builder pattern)
    pub fn add_rule(mut self, rule: impl AvailabilityRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Name of the first rule that rejects `code`, or `None` if all admit it
    pub fn first_rejection(&self, code: &str, context: &AdmissionContext<'_>) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| !rule.admits(code, context))
            .map(|rule| rule.name())
    }

    pub fn is_available(&self, code: &str, context: &AdmissionContext<'_>) -> bool {
        match self.first_rejection(code, context) {
            Some(rule) => {
                tracing::trace!("{} rejected by {}", code, rule);
                false
            }
            None => true,
        }
    }
}

impl Default for AvailabilityCheck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentState;
    use catalog::{Course, CourseCatalog, Semester, SemesterOffered};
    use std::collections::HashSet;

    fn create_test_catalog() -> CourseCatalog {
        CourseCatalog::from_courses(vec![
            Course::new("CSE111", 3, SemesterOffered::Fall),
            Course::new("CSE112", 3, SemesterOffered::Spring).with_prerequisites(["CSE111"]),
            Course::new("CSE221", 3, SemesterOffered::Fall).with_prerequisites(["CSE112"]),
            Course::new("CSE221L", 1, SemesterOffered::Fall).with_corequisites(["CSE221"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_check_admits_everything() {
        let catalog = create_test_catalog();
        let student = StudentState::new(Semester::Fall, 3.0, [""; 0], [""; 0]).unwrap();
        let current = HashSet::new();
        let context = AdmissionContext {
            catalog: &catalog,
            student: &student,
            current: &current,
        };

        let check = AvailabilityCheck::new();
        assert!(check.is_available("CSE112", &context));
        assert!(check.is_available("UNKNOWN", &context));
    }

    #[test]
    fn test_standard_check_reports_first_rejection() {
        let catalog = create_test_catalog();
        let student = StudentState::new(Semester::Fall, 3.0, ["CSE111"], [""; 0]).unwrap();
        let current = HashSet::new();
        let context = AdmissionContext {
            catalog: &catalog,
            student: &student,
            current: &current,
        };

        let check = AvailabilityCheck::standard();
        assert_eq!(check.first_rejection("CSE111", &context), None);
        assert_eq!(check.first_rejection("CSE112", &context), Some("SemesterOfferedRule"));
        assert_eq!(check.first_rejection("CSE221", &context), Some("PrerequisiteRule"));
        assert_eq!(check.first_rejection("CSE221L", &context), Some("CorequisiteRule"));
    }
}
