//! Rule: every co-requisite is passed or taken alongside.

use crate::traits::{AdmissionContext, AvailabilityRule};

/// Admits courses whose co-requisites are each either passed or already
/// admitted earlier in the same run.
///
/// Retakes admitted in the first pass count, so a lab whose lecture is
/// being retaken can still be recommended.
pub struct CorequisiteRule;

impl AvailabilityRule for CorequisiteRule {
    fn name(&self) -> &str {
        "CorequisiteRule"
    }

    fn admits(&self, code: &str, context: &AdmissionContext<'_>) -> bool {
        context
            .catalog
            .corequisites(code)
            .iter()
            .all(|coreq| context.student.has_passed(coreq) || context.current.contains(coreq))
    }
}
