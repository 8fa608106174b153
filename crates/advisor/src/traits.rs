//! Core traits for the advisor.
//!
//! The engine never touches catalog storage directly. It reads courses
//! through [`CourseLookup`], and decides regular-course eligibility through
//! a chain of [`AvailabilityRule`]s.

use catalog::{CourseCatalog, CourseCode, DEFAULT_CREDIT_HOURS, Semester, SemesterOffered};
use std::collections::HashSet;

use crate::student::StudentState;

/// Read-only access to the course catalog.
///
/// Every method is total: an unknown code reads as a course worth
/// [`DEFAULT_CREDIT_HOURS`] with no requisites that is never offered.
///
/// ## Design Note
/// `Send + Sync` lets one catalog snapshot back several advisors at once.
pub trait CourseLookup: Send + Sync {
    fn credit_hours(&self, code: &str) -> u32;

    fn prerequisites(&self, code: &str) -> &[CourseCode];

    fn corequisites(&self, code: &str) -> &[CourseCode];

    /// `None` if the course is not in the catalog
    fn semester_offered(&self, code: &str) -> Option<SemesterOffered>;

    fn is_offered(&self, code: &str, semester: Semester) -> bool {
        self.semester_offered(code)
            .is_some_and(|offered| offered.includes(semester))
    }

    /// Codes of every course offered in `semester`, in catalog order
    fn codes_offered_in(&self, semester: Semester) -> Vec<CourseCode>;
}

impl CourseLookup for CourseCatalog {
    fn credit_hours(&self, code: &str) -> u32 {
        self.get_course(code)
            .map(|course| course.credit_hours)
            .unwrap_or(DEFAULT_CREDIT_HOURS)
    }

    fn prerequisites(&self, code: &str) -> &[CourseCode] {
        self.get_course(code)
            .map(|course| course.prerequisites.as_slice())
            .unwrap_or(&[])
    }

    fn corequisites(&self, code: &str) -> &[CourseCode] {
        self.get_course(code)
            .map(|course| course.corequisites.as_slice())
            .unwrap_or(&[])
    }

    fn semester_offered(&self, code: &str) -> Option<SemesterOffered> {
        self.get_course(code).map(|course| course.semester_offered)
    }

    fn codes_offered_in(&self, semester: Semester) -> Vec<CourseCode> {
        self.courses_offered_in(semester)
            .map(|course| course.code.clone())
            .collect()
    }
}

/// What an availability rule can see while the resolver packs courses
pub struct AdmissionContext<'a> {
    pub catalog: &'a dyn CourseLookup,
    pub student: &'a StudentState,
    /// Courses admitted earlier in the same run, retakes included
    pub current: &'a HashSet<CourseCode>,
}

/// One eligibility condition for a regular (non-retake) course.
///
/// Rules are checked in order by [`crate::availability::AvailabilityCheck`];
/// a course is admitted only if every rule admits it.
pub trait AvailabilityRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    fn admits(&self, code: &str, context: &AdmissionContext<'_>) -> bool;
}
