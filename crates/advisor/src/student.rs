//! The student's academic record for one recommendation request.

use crate::error::{AdvisorError, Result};
use catalog::{CourseCode, Semester};
use std::collections::HashSet;
use tracing::warn;

/// Highest cumulative grade average on the 4-point scale
pub const MAX_CGPA: f64 = 4.0;

/// Student input to a single recommendation run.
///
/// Built once per request and never mutated afterwards. Course codes are
/// trimmed and blank codes dropped. Failed courses keep
/// the order they were first given in, because that is the retake priority.
///
/// A course listed as both passed and failed is a caller error. It is
/// logged, not corrected: the course is treated as a failed retake.
#[derive(Debug, Clone)]
pub struct StudentState {
    semester: Semester,
    cgpa: f64,
    passed_courses: HashSet<CourseCode>,
    failed_courses: Vec<CourseCode>,
    failed_lookup: HashSet<CourseCode>,
}

impl StudentState {
    /// Validate and build a student state.
    ///
    /// # Errors
    /// `InvalidInput` if `cgpa` is not a number in `[0, 4]`.
    pub fn new<P, F, S, T>(semester: Semester, cgpa: f64, passed: P, failed: F) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<CourseCode>,
        T: Into<CourseCode>,
    {
        if !(0.0..=MAX_CGPA).contains(&cgpa) {
            return Err(AdvisorError::invalid(
                "cgpa",
                format!("{} is outside the range 0.00 to {:.2}", cgpa, MAX_CGPA),
            ));
        }

        let passed_courses: HashSet<CourseCode> = normalize_codes(passed).collect();

        let mut failed_lookup = HashSet::new();
        let mut failed_courses = Vec::new();
        for code in normalize_codes(failed) {
            if failed_lookup.insert(code.clone()) {
                failed_courses.push(code);
            }
        }

        let overlap: Vec<&CourseCode> = failed_courses
            .iter()
            .filter(|code| passed_courses.contains(*code))
            .collect();
        if !overlap.is_empty() {
            warn!("Courses listed as both passed and failed: {:?}", overlap);
        }

        Ok(Self {
            semester,
            cgpa,
            passed_courses,
            failed_courses,
            failed_lookup,
        })
    }

    /// Like [`StudentState::new`], parsing the semester name as well.
    ///
    /// # Errors
    /// `InvalidInput` for a semester other than FALL or SPRING, or an
    /// out-of-range cgpa.
    pub fn parse<P, F, S, T>(semester: &str, cgpa: f64, passed: P, failed: F) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<CourseCode>,
        T: Into<CourseCode>,
    {
        let semester: Semester = semester
            .parse()
            .map_err(|_| AdvisorError::invalid("semester", format!("{:?} is not FALL or SPRING", semester)))?;
        Self::new(semester, cgpa, passed, failed)
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    pub fn passed_courses(&self) -> &HashSet<CourseCode> {
        &self.passed_courses
    }

    /// Failed courses, deduplicated, in the order first given
    pub fn failed_courses(&self) -> &[CourseCode] {
        &self.failed_courses
    }

    pub fn has_passed(&self, code: &str) -> bool {
        self.passed_courses.contains(code)
    }

    pub fn has_failed(&self, code: &str) -> bool {
        self.failed_lookup.contains(code)
    }
}

/// Trimmed codes with blanks dropped
fn normalize_codes<I, S>(codes: I) -> impl Iterator<Item = CourseCode>
where
    I: IntoIterator<Item = S>,
    S: Into<CourseCode>,
{
    codes.into_iter().filter_map(|code| {
        let code: CourseCode = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == code.len() {
            Some(code)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_failed_courses_deduplicated_in_order() {
        let student =
            StudentState::new(Semester::Fall, 2.5, NONE, ["CSE112", "CSE111", "CSE112"]).unwrap();

        assert_eq!(student.failed_courses(), ["CSE112", "CSE111"]);
        assert!(student.has_failed("CSE111"));
        assert!(!student.has_failed("CSE113"));
    }

    #[test]
    fn test_cgpa_bounds() {
        assert!(StudentState::new(Semester::Fall, 0.0, NONE, NONE).is_ok());
        assert!(StudentState::new(Semester::Fall, 4.0, NONE, NONE).is_ok());

        for cgpa in [-0.01, 4.01, f64::NAN, f64::INFINITY] {
            let err = StudentState::new(Semester::Fall, cgpa, NONE, NONE).unwrap_err();
            assert!(matches!(err, AdvisorError::InvalidInput { ref field, .. } if field == "cgpa"));
        }
    }

    #[test]
    fn test_parse_semester() {
        let student = StudentState::parse("spring", 3.1, ["CSE111"], NONE).unwrap();
        assert_eq!(student.semester(), Semester::Spring);
        assert!(student.has_passed("CSE111"));

        let err = StudentState::parse("SUMMER", 3.1, NONE, NONE).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { ref field, .. } if field == "semester"));
    }

    #[test]
    fn test_overlap_is_kept_as_given() {
        let student = StudentState::new(Semester::Fall, 2.0, ["CSE111"], ["CSE111"]).unwrap();
        assert!(student.has_passed("CSE111"));
        assert!(student.has_failed("CSE111"));
    }

    #[test]
    fn test_codes_trimmed_and_blanks_dropped() {
        let student =
            StudentState::new(Semester::Fall, 2.0, [" CSE111 ", ""], ["", " MTH101", "MTH101", "  "])
                .unwrap();

        assert!(student.has_passed("CSE111"));
        assert_eq!(student.passed_courses().len(), 1);
        assert_eq!(student.failed_courses(), ["MTH101"]);
        assert!(!student.has_failed(""));
    }
}
