//! # Course Advisor
//!
//! Runs one recommendation request end to end:
//! 1. Validate the student input
//! 2. Resolve the course list (retakes, then regular courses)
//! 3. Generate explanations for the final list
//! 4. Return the list, explanations, and credit totals together
//!
//! The advisor holds only read-only state, so one instance can serve any
//! number of requests; each request gets its own run state.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument};

use catalog::CourseCode;

use crate::credit_policy::CreditPolicy;
use crate::error::Result;
use crate::explanation::{ExplanationBundle, ExplanationGenerator};
use crate::resolver::{ResolutionStats, Resolver};
use crate::student::StudentState;
use crate::traits::CourseLookup;

/// Final recommendation returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Recommended codes in admission order (retakes first)
    pub courses: Vec<CourseCode>,
    pub explanations: ExplanationBundle,
    pub total_credit_hours: u32,
    pub credit_limit: u32,
    pub stats: ResolutionStats,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// (ordered codes, explanations, total credit hours)
    pub fn into_parts(self) -> (Vec<CourseCode>, ExplanationBundle, u32) {
        (self.courses, self.explanations, self.total_credit_hours)
    }
}

/// Recommendation entry point bound to one catalog snapshot
pub struct CourseAdvisor<C> {
    catalog: Arc<C>,
    resolver: Arc<Resolver>,
    explainer: ExplanationGenerator,
}

impl<C> Clone for CourseAdvisor<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            resolver: Arc::clone(&self.resolver),
            explainer: self.explainer,
        }
    }
}

impl<C: CourseLookup> CourseAdvisor<C> {
    /// Create an advisor with the default credit policy
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_credit_policy(catalog, CreditPolicy::default())
    }

    /// Create an advisor whose resolver and explanations share `policy`
    pub fn with_credit_policy(catalog: Arc<C>, policy: CreditPolicy) -> Self {
        Self {
            catalog,
            resolver: Arc::new(Resolver::new(policy)),
            explainer: ExplanationGenerator::new(policy),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Recommend courses for an already validated student
    #[instrument(skip_all, fields(semester = %student.semester(), cgpa = student.cgpa()))]
    pub fn recommend(&self, student: &StudentState) -> Recommendation {
        let start_time = Instant::now();
        let catalog: &dyn CourseLookup = &*self.catalog;

        let resolution = self.resolver.resolve(catalog, student);
        let explanations =
            self.explainer
                .generate(catalog, &resolution.courses, student, &resolution.current);

        info!(
            "Recommended {} courses ({} of {} credit hours) in {:.2?}",
            resolution.courses.len(),
            resolution.total_credit_hours,
            resolution.credit_limit,
            start_time.elapsed()
        );

        Recommendation {
            courses: resolution.courses,
            explanations,
            total_credit_hours: resolution.total_credit_hours,
            credit_limit: resolution.credit_limit,
            stats: resolution.stats,
        }
    }

    /// Validate raw request fields, then recommend
    ///
    /// # Errors
    /// `InvalidInput` for an unknown semester or a cgpa outside `[0, 4]`.
    pub fn recommend_for<P, F, S, T>(
        &self,
        semester: &str,
        cgpa: f64,
        passed_courses: P,
        failed_courses: F,
    ) -> Result<Recommendation>
    where
        P: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<CourseCode>,
        T: Into<CourseCode>,
    {
        let student = StudentState::parse(semester, cgpa, passed_courses, failed_courses)?;
        Ok(self.recommend(&student))
    }
}

/// One-shot recommendation against a borrowed catalog with the default
/// credit policy
///
/// Returns (ordered codes, explanations, total credit hours).
pub fn recommend<P, F, S, T>(
    catalog: &dyn CourseLookup,
    semester: &str,
    cgpa: f64,
    passed_courses: P,
    failed_courses: F,
) -> Result<(Vec<CourseCode>, ExplanationBundle, u32)>
where
    P: IntoIterator<Item = S>,
    F: IntoIterator<Item = T>,
    S: Into<CourseCode>,
    T: Into<CourseCode>,
{
    let student = StudentState::parse(semester, cgpa, passed_courses, failed_courses)?;
    let resolution = Resolver::default().resolve(catalog, &student);
    let explanations = ExplanationGenerator::default().generate(
        catalog,
        &resolution.courses,
        &student,
        &resolution.current,
    );
    Ok((resolution.courses, explanations, resolution.total_credit_hours))
}
