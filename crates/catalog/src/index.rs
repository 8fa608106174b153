//! Catalog loading and integrity checks.
//!
//! Loading picks a parser from the file extension, builds the index in
//! catalog order, and reports requisites that point at unknown courses.
//! Those are warnings only: the recommendation engine treats an unknown
//! code as never passed and never offered.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Kind of requisite a dangling reference was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequisiteKind {
    Prerequisite,
    Corequisite,
}

/// A requisite that names a course missing from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub course: CourseCode,
    pub missing: CourseCode,
    pub kind: RequisiteKind,
}

impl CourseCatalog {
    /// Load a catalog from a `.csv` or `.json` file
    ///
    /// Steps:
    /// 1. Parse the file (JSON if the extension is `json`, CSV otherwise)
    /// 2. Insert courses in file order, rejecting duplicate codes
    /// 3. Log dangling requisite references
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading course catalog from {:?}", path);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let courses = if is_json {
            parser::parse_courses_json(path)?
        } else {
            parser::parse_courses_csv(path)?
        };

        let catalog = Self::from_courses(courses)?;

        for dangling in catalog.dangling_references() {
            warn!(
                "{:?} {} of {} is not in the catalog",
                dangling.kind, dangling.missing, dangling.course
            );
        }

        let (fall, spring, both) = catalog.offering_counts();
        info!(
            "Loaded {} courses ({} fall, {} spring, {} both)",
            catalog.len(),
            fall,
            spring,
            both
        );
        Ok(catalog)
    }

    /// Requisites that name courses not present in the catalog, in catalog
    /// order
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for course in &self.courses {
            let requisites = course
                .prerequisites
                .iter()
                .map(|code| (code, RequisiteKind::Prerequisite))
                .chain(
                    course
                        .corequisites
                        .iter()
                        .map(|code| (code, RequisiteKind::Corequisite)),
                );
            for (code, kind) in requisites {
                if !self.contains(code) {
                    dangling.push(DanglingReference {
                        course: course.code.clone(),
                        missing: code.clone(),
                        kind,
                    });
                }
            }
        }
        dangling
    }
}
