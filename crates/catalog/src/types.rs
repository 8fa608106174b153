//! Core domain types for the course catalog.
//!
//! The catalog is a read-only table keyed by course code. Courses keep the
//! order in which they were loaded, because the recommendation engine walks
//! the catalog in that order.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases and Constants
// =============================================================================

/// Unique identifier for a course (e.g. "CSE014")
pub type CourseCode = String;

/// Credit hours assumed for a course whose credit-hour value is missing,
/// malformed, or not positive.
pub const DEFAULT_CREDIT_HOURS: u32 = 3;

/// Largest credit-hour value accepted for a single course. Anything above
/// it is treated as malformed.
pub const MAX_CREDIT_HOURS: u32 = 30;

fn default_credit_hours() -> u32 {
    DEFAULT_CREDIT_HOURS
}

/// Whole credit hours from a numeric value, or `None` when it is not a
/// finite number in `1..=MAX_CREDIT_HOURS` (fractions are truncated)
pub(crate) fn credit_hours_from_f64(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    let value = value.trunc();
    if value < 1.0 || value > f64::from(MAX_CREDIT_HOURS) {
        return None;
    }
    Some(value as u32)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCreditHours {
    Number(f64),
    Text(String),
}

/// JSON `credit_hours` accepts a number, a numeric string, or null.
/// Anything unusable becomes [`DEFAULT_CREDIT_HOURS`].
fn deserialize_credit_hours<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCreditHours>::deserialize(deserializer)?;
    let parsed = match &raw {
        Some(RawCreditHours::Number(value)) => credit_hours_from_f64(*value),
        Some(RawCreditHours::Text(text)) => text.trim().parse().ok().and_then(credit_hours_from_f64),
        None => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!(
            "invalid credit hours {:?}, defaulting to {}",
            raw,
            DEFAULT_CREDIT_HOURS
        );
        DEFAULT_CREDIT_HOURS
    }))
}

// =============================================================================
// Semesters
// =============================================================================

/// A semester a student can enroll in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Fall => "FALL",
            Semester::Spring => "SPRING",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FALL" => Ok(Semester::Fall),
            "SPRING" => Ok(Semester::Spring),
            _ => Err(CatalogError::InvalidValue {
                field: "semester".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// When a course is offered, as declared by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SemesterOffered {
    Fall,
    Spring,
    Both,
}

impl SemesterOffered {
    /// True if a course with this offering can be taken in `semester`
    pub fn includes(&self, semester: Semester) -> bool {
        match self {
            SemesterOffered::Both => true,
            SemesterOffered::Fall => semester == Semester::Fall,
            SemesterOffered::Spring => semester == Semester::Spring,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SemesterOffered::Fall => "FALL",
            SemesterOffered::Spring => "SPRING",
            SemesterOffered::Both => "BOTH",
        }
    }
}

impl fmt::Display for SemesterOffered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemesterOffered {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FALL" => Ok(SemesterOffered::Fall),
            "SPRING" => Ok(SemesterOffered::Spring),
            "BOTH" => Ok(SemesterOffered::Both),
            _ => Err(CatalogError::InvalidValue {
                field: "semester offered".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Course
// =============================================================================

/// One row of the course catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default = "default_credit_hours",
        deserialize_with = "deserialize_credit_hours"
    )]
    pub credit_hours: u32,
    pub semester_offered: SemesterOffered,
    /// Courses that must be passed before this one, in catalog order
    #[serde(default)]
    pub prerequisites: Vec<CourseCode>,
    /// Courses that must be passed or taken in the same semester
    #[serde(default)]
    pub corequisites: Vec<CourseCode>,
}

impl Course {
    /// Create a course with no name, description, or requisites
    pub fn new(
        code: impl Into<CourseCode>,
        credit_hours: u32,
        semester_offered: SemesterOffered,
    ) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            description: String::new(),
            credit_hours,
            semester_offered,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prerequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        self.prerequisites = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_corequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        self.corequisites = codes.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// CourseCatalog - the read-only course table
// =============================================================================

/// All courses, in catalog order, with a code index for O(1) lookups.
///
/// Once built, a catalog is only ever read. Callers share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    pub(crate) courses: Vec<Course>,
    pub(crate) code_index: HashMap<CourseCode, usize>,
}

impl CourseCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            code_index: HashMap::new(),
        }
    }

    /// Build a catalog from courses, keeping their order
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Result<Self> {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert_course(course)?;
        }
        Ok(catalog)
    }

    /// Get a course by code
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.code_index.get(code).map(|&idx| &self.courses[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.code_index.contains_key(code)
    }

    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses that can be taken in `semester`, in catalog order
    pub fn courses_offered_in(&self, semester: Semester) -> impl Iterator<Item = &Course> {
        self.courses
            .iter()
            .filter(move |course| course.semester_offered.includes(semester))
    }

    /// Total credit hours of the courses offered in `semester`
    pub fn offered_credit_hours(&self, semester: Semester) -> u64 {
        self.courses_offered_in(semester)
            .map(|course| u64::from(course.credit_hours))
            .sum()
    }

    /// Append a course to the catalog.
    ///
    /// Codes must be unique. A credit-hour value of zero or above
    /// [`MAX_CREDIT_HOURS`] is replaced with [`DEFAULT_CREDIT_HOURS`].
    pub fn insert_course(&mut self, mut course: Course) -> Result<()> {
        if self.code_index.contains_key(&course.code) {
            return Err(CatalogError::DuplicateCode { code: course.code });
        }
        if course.credit_hours == 0 || course.credit_hours > MAX_CREDIT_HOURS {
            tracing::warn!(
                "Course {} has invalid credit hours {}, defaulting to {}",
                course.code,
                course.credit_hours,
                DEFAULT_CREDIT_HOURS
            );
            course.credit_hours = DEFAULT_CREDIT_HOURS;
        }
        self.code_index.insert(course.code.clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of courses offered (fall only, spring only, both)
    pub fn offering_counts(&self) -> (usize, usize, usize) {
        self.courses
            .iter()
            .fold((0, 0, 0), |(fall, spring, both), course| {
                match course.semester_offered {
                    SemesterOffered::Fall => (fall + 1, spring, both),
                    SemesterOffered::Spring => (fall, spring + 1, both),
                    SemesterOffered::Both => (fall, spring, both + 1),
                }
            })
    }
}
