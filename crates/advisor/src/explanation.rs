//! Explanation Generator
//!
//! Turns a finished resolution into human-readable rationale: one record per
//! recommended course plus two summaries (credit limit, failed courses).
//! Generation is a pure function of its inputs and never changes the
//! resolver's output.

use crate::credit_policy::{CreditBand, CreditPolicy};
use crate::student::StudentState;
use crate::traits::CourseLookup;
use catalog::{CourseCode, Semester, SemesterOffered};
use serde::Serialize;
use std::collections::HashSet;

/// Sentence used when the student has no failed courses
pub const NO_FAILED_COURSES: &str = "You have no failed courses to retake.";

/// Why one course was recommended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseExplanation {
    pub code: CourseCode,
    /// Retake warning, empty unless the course was failed before
    pub failed_priority: String,
    pub prerequisites: String,
    pub corequisites: String,
    pub semester: String,
}

/// Explanations for a whole recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationBundle {
    pub credit_limit: String,
    pub failed_courses_summary: String,
    /// Failed courses first, then the rest, each group by ascending code
    pub courses: Vec<CourseExplanation>,
}

impl ExplanationBundle {
    /// Explanation for one recommended course
    pub fn get(&self, code: &str) -> Option<&CourseExplanation> {
        self.courses.iter().find(|explanation| explanation.code == code)
    }
}

/// Builds [`ExplanationBundle`]s using the same banding as the resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationGenerator {
    policy: CreditPolicy,
}

impl ExplanationGenerator {
    pub fn new(policy: CreditPolicy) -> Self {
        Self { policy }
    }

    /// Explain `recommended` for `student`.
    ///
    /// `current` is the set of courses admitted during the run; it decides
    /// which co-requisites count as taken alongside.
    pub fn generate(
        &self,
        catalog: &dyn CourseLookup,
        recommended: &[CourseCode],
        student: &StudentState,
        current: &HashSet<CourseCode>,
    ) -> ExplanationBundle {
        let mut ordered: Vec<&CourseCode> = recommended.iter().collect();
        ordered.sort_by(|a, b| {
            (!student.has_failed(a), a.as_str()).cmp(&(!student.has_failed(b), b.as_str()))
        });

        let courses = ordered
            .into_iter()
            .map(|code| CourseExplanation {
                code: code.clone(),
                failed_priority: if student.has_failed(code) {
                    failed_priority_text(code)
                } else {
                    String::new()
                },
                prerequisites: prerequisites_text(
                    code,
                    catalog.prerequisites(code),
                    |prereq| student.has_passed(prereq),
                ),
                corequisites: corequisites_text(
                    code,
                    catalog.corequisites(code),
                    |coreq| student.has_passed(coreq) || current.contains(coreq),
                ),
                semester: semester_text(code, student.semester(), catalog.semester_offered(code)),
            })
            .collect();

        ExplanationBundle {
            credit_limit: self.credit_limit_text(student.cgpa()),
            failed_courses_summary: failed_courses_summary(student.failed_courses()),
            courses,
        }
    }

    pub fn credit_limit_text(&self, cgpa: f64) -> String {
        let band = self.policy.band(cgpa);
        let limit = self.policy.limit_for_band(band);
        match band {
            CreditBand::Probation => format!(
                "Based on your CGPA of {:.2}, you are limited to taking a maximum of {} credit hours per semester according to university policy.",
                cgpa, limit
            ),
            CreditBand::Standard => format!(
                "With your CGPA of {:.2}, you can take up to {} credit hours per semester according to university policy.",
                cgpa, limit
            ),
            CreditBand::Honors => format!(
                "With your excellent CGPA of {:.2}, you are eligible to take up to {} credit hours per semester according to university policy.",
                cgpa, limit
            ),
        }
    }
}

fn failed_courses_summary(failed: &[CourseCode]) -> String {
    if failed.is_empty() {
        return NO_FAILED_COURSES.to_string();
    }
    let mut sorted: Vec<&str> = failed.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    format!(
        "⚠️ ATTENTION: You have {} failed course(s) that need to be retaken: {}. These courses have been given priority in your recommendations.",
        sorted.len(),
        sorted.join(", ")
    )
}

fn failed_priority_text(code: &str) -> String {
    format!(
        "⚠️ IMPORTANT: {} is a HIGH PRIORITY recommendation because you previously failed this course. It is strongly recommended to retake this course as soon as possible to improve your academic standing and ensure timely graduation.",
        code
    )
}

/// "Met"/"Missing" lines for a requisite list, each on its own line
fn requisite_text(
    code: &str,
    requisites: &[CourseCode],
    label: &str,
    is_met: impl Fn(&str) -> bool,
) -> String {
    if requisites.is_empty() {
        return format!("This course has no {}.", label);
    }

    let (met, missing): (Vec<&str>, Vec<&str>) = requisites
        .iter()
        .map(String::as_str)
        .partition(|requisite| is_met(*requisite));

    let mut lines = vec![format!("{} for {}:", capitalize(label), code)];
    if !met.is_empty() {
        lines.push(format!("✓ Met {}: {}", label, met.join(", ")));
    }
    if !missing.is_empty() {
        lines.push(format!("✗ Missing {}: {}", label, missing.join(", ")));
    }
    lines.join("\n")
}

fn prerequisites_text(code: &str, prerequisites: &[CourseCode], is_met: impl Fn(&str) -> bool) -> String {
    requisite_text(code, prerequisites, "prerequisites", is_met)
}

fn corequisites_text(code: &str, corequisites: &[CourseCode], is_met: impl Fn(&str) -> bool) -> String {
    requisite_text(code, corequisites, "co-requisites", is_met)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn semester_text(code: &str, semester: Semester, offered: Option<SemesterOffered>) -> String {
    match offered {
        Some(SemesterOffered::Both) => {
            format!("{} is offered in both FALL and SPRING semesters.", code)
        }
        Some(offered) if offered.includes(semester) => {
            format!("{} is offered in the {} semester.", code, semester)
        }
        Some(offered) => format!(
            "{} is only offered in the {} semester, not in {}.",
            code, offered, semester
        ),
        None => format!("{} is not listed in the course catalog.", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Course, CourseCatalog};

    const NONE: [&str; 0] = [];

    fn create_test_catalog() -> CourseCatalog {
        CourseCatalog::from_courses(vec![
            Course::new("CSE111", 3, SemesterOffered::Fall),
            Course::new("CSE112", 3, SemesterOffered::Spring).with_prerequisites(["CSE111"]),
            Course::new("CSE211", 4, SemesterOffered::Fall)
                .with_prerequisites(["CSE111", "MTH101"]),
            Course::new("CSE211L", 1, SemesterOffered::Fall)
                .with_corequisites(["CSE211", "LAB000"]),
            Course::new("MTH101", 3, SemesterOffered::Both),
        ])
        .unwrap()
    }

    fn codes(codes: &[&str]) -> Vec<CourseCode> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_credit_limit_tones() {
        let generator = ExplanationGenerator::default();

        let low = generator.credit_limit_text(1.5);
        assert!(low.starts_with("Based on your CGPA of 1.50"));
        assert!(low.contains("maximum of 12 credit hours"));

        let mid = generator.credit_limit_text(2.456);
        assert!(mid.starts_with("With your CGPA of 2.46"));
        assert!(mid.contains("up to 20 credit hours"));

        let high = generator.credit_limit_text(3.5);
        assert!(high.contains("excellent CGPA of 3.50"));
        assert!(high.contains("up to 22 credit hours"));
    }

    #[test]
    fn test_failed_summary() {
        assert_eq!(failed_courses_summary(&[]), NO_FAILED_COURSES);

        let summary = failed_courses_summary(&codes(&["MTH101", "CSE112"]));
        assert!(summary.contains("2 failed course(s)"));
        assert!(summary.contains("CSE112, MTH101"));
        assert!(summary.contains("given priority"));
    }

    #[test]
    fn test_requisite_lines() {
        let text = prerequisites_text("CSE211", &codes(&["CSE111", "MTH101"]), |c| c == "CSE111");
        assert_eq!(
            text,
            "Prerequisites for CSE211:\n✓ Met prerequisites: CSE111\n✗ Missing prerequisites: MTH101"
        );

        let text = corequisites_text("CSE211L", &codes(&["CSE211"]), |_| true);
        assert_eq!(text, "Co-requisites for CSE211L:\n✓ Met co-requisites: CSE211");

        assert_eq!(
            prerequisites_text("CSE111", &[], |_| true),
            "This course has no prerequisites."
        );
        assert_eq!(
            corequisites_text("CSE111", &[], |_| true),
            "This course has no co-requisites."
        );
    }

    #[test]
    fn test_semester_sentences() {
        assert_eq!(
            semester_text("MTH101", Semester::Fall, Some(SemesterOffered::Both)),
            "MTH101 is offered in both FALL and SPRING semesters."
        );
        assert_eq!(
            semester_text("CSE111", Semester::Fall, Some(SemesterOffered::Fall)),
            "CSE111 is offered in the FALL semester."
        );
        assert_eq!(
            semester_text("CSE112", Semester::Fall, Some(SemesterOffered::Spring)),
            "CSE112 is only offered in the SPRING semester, not in FALL."
        );
        assert!(semester_text("OLD100", Semester::Fall, None).contains("not listed"));
    }

    #[test]
    fn test_bundle_ordering_and_fields() {
        let catalog = create_test_catalog();
        let student =
            StudentState::new(Semester::Fall, 2.5, ["CSE111"], ["MTH101", "CSE112"]).unwrap();
        let recommended = codes(&["MTH101", "CSE112", "CSE211L", "CSE211"]);
        let current: HashSet<CourseCode> = recommended.iter().cloned().collect();

        let bundle =
            ExplanationGenerator::default().generate(&catalog, &recommended, &student, &current);

        let order: Vec<&str> = bundle.courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(order, vec!["CSE112", "MTH101", "CSE211", "CSE211L"]);

        let retake = bundle.get("CSE112").unwrap();
        assert!(retake.failed_priority.contains("HIGH PRIORITY"));
        assert!(retake.semester.contains("only offered in the SPRING semester"));

        let regular = bundle.get("CSE211").unwrap();
        assert!(regular.failed_priority.is_empty());
        // MTH101 is being retaken, not passed
        assert!(regular.prerequisites.contains("✗ Missing prerequisites: MTH101"));

        let lab = bundle.get("CSE211L").unwrap();
        assert!(lab.corequisites.contains("✓ Met co-requisites: CSE211"));
        assert!(lab.corequisites.contains("✗ Missing co-requisites: LAB000"));

        assert!(bundle.failed_courses_summary.contains("CSE112, MTH101"));
        assert!(bundle.credit_limit.contains("20 credit hours"));
    }

    #[test]
    fn test_empty_recommendation() {
        let catalog = create_test_catalog();
        let student = StudentState::new(Semester::Spring, 3.2, NONE, NONE).unwrap();

        let bundle =
            ExplanationGenerator::default().generate(&catalog, &[], &student, &HashSet::new());

        assert!(bundle.courses.is_empty());
        assert_eq!(bundle.failed_courses_summary, NO_FAILED_COURSES);
    }
}
