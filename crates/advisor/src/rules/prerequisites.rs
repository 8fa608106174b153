//! Rule: every prerequisite has already been passed.

use crate::traits::{AdmissionContext, AvailabilityRule};

/// Admits courses whose prerequisites are all in the student's passed set.
///
/// Courses taken in the same run do not count; a prerequisite must be
/// completed in an earlier semester.
pub struct PrerequisiteRule;

impl AvailabilityRule for PrerequisiteRule {
    fn name(&self) -> &str {
        "PrerequisiteRule"
    }

    fn admits(&self, code: &str, context: &AdmissionContext<'_>) -> bool {
        context
            .catalog
            .prerequisites(code)
            .iter()
            .all(|prereq| context.student.has_passed(prereq))
    }
}
