//! # Catalog Crate
//!
//! This crate loads and indexes the university course catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, Semester, SemesterOffered, CourseCatalog)
//! - **parser**: Parse `Courses.csv` and JSON catalogs into Rust structs
//! - **index**: Load a catalog from disk and check requisite references
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CourseCatalog, Semester};
//! use std::path::Path;
//!
//! let catalog = CourseCatalog::load_from_file(Path::new("data/Courses.csv"))?;
//!
//! let course = catalog.get_course("CSE111").unwrap();
//! println!("{} is worth {} credit hours", course.code, course.credit_hours);
//!
//! for course in catalog.courses_offered_in(Semester::Fall) {
//!     println!("{}", course.code);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{DanglingReference, RequisiteKind};
pub use types::{
    Course, CourseCatalog, CourseCode, DEFAULT_CREDIT_HOURS, MAX_CREDIT_HOURS, Semester,
    SemesterOffered,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> CourseCatalog {
        CourseCatalog::from_courses(vec![
            Course::new("CSE111", 3, SemesterOffered::Fall).with_name("Programming I"),
            Course::new("CSE112", 3, SemesterOffered::Spring).with_prerequisites(["CSE111"]),
            Course::new("MTH101", 4, SemesterOffered::Both),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = CourseCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.offering_counts(), (0, 0, 0));
    }

    #[test]
    fn test_get_course() {
        let catalog = sample_catalog();

        let course = catalog.get_course("CSE111").unwrap();
        assert_eq!(course.name, "Programming I");
        assert_eq!(course.credit_hours, 3);
        assert!(catalog.get_course("CSE999").is_none());
    }

    #[test]
    fn test_courses_offered_in_keeps_catalog_order() {
        let catalog = sample_catalog();

        let fall: Vec<&str> = catalog
            .courses_offered_in(Semester::Fall)
            .map(|c| c.code.as_str())
            .collect();
        let spring: Vec<&str> = catalog
            .courses_offered_in(Semester::Spring)
            .map(|c| c.code.as_str())
            .collect();

        assert_eq!(fall, vec!["CSE111", "MTH101"]);
        assert_eq!(spring, vec!["CSE112", "MTH101"]);
    }

    #[test]
    fn test_offered_credit_hours() {
        let catalog = sample_catalog();
        assert_eq!(catalog.offered_credit_hours(Semester::Fall), 7);
        assert_eq!(catalog.offered_credit_hours(Semester::Spring), 7);
    }

    #[test]
    fn test_zero_credit_hours_defaulted() {
        let mut catalog = CourseCatalog::new();
        catalog
            .insert_course(Course::new("SEM100", 0, SemesterOffered::Both))
            .unwrap();
        assert_eq!(
            catalog.get_course("SEM100").unwrap().credit_hours,
            DEFAULT_CREDIT_HOURS
        );
    }

    #[test]
    fn test_semester_parsing() {
        assert_eq!("FALL".parse::<Semester>().unwrap(), Semester::Fall);
        assert_eq!(" spring ".parse::<Semester>().unwrap(), Semester::Spring);
        assert!("BOTH".parse::<Semester>().is_err());
        assert!("SUMMER".parse::<Semester>().is_err());
        assert_eq!("Both".parse::<SemesterOffered>().unwrap(), SemesterOffered::Both);
    }

    #[test]
    fn test_offering_includes() {
        assert!(SemesterOffered::Both.includes(Semester::Fall));
        assert!(SemesterOffered::Both.includes(Semester::Spring));
        assert!(SemesterOffered::Fall.includes(Semester::Fall));
        assert!(!SemesterOffered::Fall.includes(Semester::Spring));
    }
}
