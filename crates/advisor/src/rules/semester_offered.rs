//! Rule: the course runs in the requested semester.

use crate::traits::{AdmissionContext, AvailabilityRule};

/// Admits courses offered in the student's semester or in both semesters.
///
/// Codes missing from the catalog are never offered.
pub struct SemesterOfferedRule;

impl AvailabilityRule for SemesterOfferedRule {
    fn name(&self) -> &str {
        "SemesterOfferedRule"
    }

    fn admits(&self, code: &str, context: &AdmissionContext<'_>) -> bool {
        context.catalog.is_offered(code, context.student.semester())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentState;
    use catalog::{Course, CourseCatalog, Semester, SemesterOffered};
    use std::collections::HashSet;

    #[test]
    fn test_semester_offered_rule() {
        let catalog = CourseCatalog::from_courses(vec![
            Course::new("CSE111", 3, SemesterOffered::Fall),
            Course::new("CSE112", 3, SemesterOffered::Spring),
            Course::new("MTH101", 3, SemesterOffered::Both),
        ])
        .unwrap();
        let student = StudentState::new(Semester::Fall, 3.0, [""; 0], [""; 0]).unwrap();
        let current = HashSet::new();
        let context = AdmissionContext {
            catalog: &catalog,
            student: &student,
            current: &current,
        };

        let rule = SemesterOfferedRule;
        assert!(rule.admits("CSE111", &context));
        assert!(!rule.admits("CSE112", &context));
        assert!(rule.admits("MTH101", &context));
        assert!(!rule.admits("GHOST01", &context));
    }
}
