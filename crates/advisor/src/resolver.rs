//! Eligibility & Priority Resolver
//!
//! Picks the courses to recommend with two first-fit greedy passes over a
//! shared credit budget.
//!
//! ## Algorithm
//! 1. Credit limit from cgpa (see [`CreditPolicy`])
//! 2. Pass 1: failed courses in the order given. Each one that still fits
//!    under the limit is admitted. Retakes skip the availability rules.
//! 3. Pass 2 (only if credit remains): catalog courses offered this
//!    semester that are neither passed nor failed, in catalog order. Each
//!    one that fits and passes the [`AvailabilityCheck`] is admitted.
//!
//! Courses that do not fit are skipped, never retried, and nothing is
//! backtracked. A smaller course later in the order can still fill the gap.

use crate::availability::AvailabilityCheck;
use crate::credit_policy::CreditPolicy;
use crate::student::StudentState;
use crate::traits::{AdmissionContext, CourseLookup};
use catalog::CourseCode;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Outcome of one resolver run
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Recommended codes: admitted retakes first, then regular courses
    pub courses: Vec<CourseCode>,
    pub total_credit_hours: u32,
    pub credit_limit: u32,
    /// Every admitted code, used for co-requisite explanations
    pub current: HashSet<CourseCode>,
    pub stats: ResolutionStats,
}

/// Counters describing what each pass did with its candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub failed_candidates: usize,
    pub available_candidates: usize,
    pub failed_admitted: usize,
    pub regular_admitted: usize,
    /// Candidates from either pass skipped because they would exceed the limit
    pub dropped_for_credit: usize,
    /// Regular candidates that fit but failed the availability check
    pub unavailable: usize,
}

/// Mutable state of one resolution. Created per call, never shared.
struct RecommendationRun {
    credit_limit: u32,
    running_credit_total: u32,
    selected_courses: Vec<CourseCode>,
    current: HashSet<CourseCode>,
    stats: ResolutionStats,
}

impl RecommendationRun {
    fn new(credit_limit: u32) -> Self {
        Self {
            credit_limit,
            running_credit_total: 0,
            selected_courses: Vec::new(),
            current: HashSet::new(),
            stats: ResolutionStats::default(),
        }
    }

    fn fits(&self, credit_hours: u32) -> bool {
        self.running_credit_total.saturating_add(credit_hours) <= self.credit_limit
    }

    fn has_room(&self) -> bool {
        self.running_credit_total < self.credit_limit
    }

    fn admit(&mut self, code: CourseCode, credit_hours: u32) {
        self.running_credit_total += credit_hours;
        self.current.insert(code.clone());
        self.selected_courses.push(code);
    }

    fn finish(self) -> Resolution {
        Resolution {
            courses: self.selected_courses,
            total_credit_hours: self.running_credit_total,
            credit_limit: self.credit_limit,
            current: self.current,
            stats: self.stats,
        }
    }
}

/// Two-pass course selector
pub struct Resolver {
    policy: CreditPolicy,
    availability: AvailabilityCheck,
}

impl Resolver {
    /// Create a resolver with the given credit policy and the standard
    /// availability rules
    pub fn new(policy: CreditPolicy) -> Self {
        Self {
            policy,
            availability: AvailabilityCheck::standard(),
        }
    }

    /// Replace the availability rules applied to regular courses
    pub fn with_availability(mut self, availability: AvailabilityCheck) -> Self {
        self.availability = availability;
        self
    }

    pub fn policy(&self) -> &CreditPolicy {
        &self.policy
    }

    /// Select courses for `student`
    #[instrument(skip_all, fields(semester = %student.semester(), cgpa = student.cgpa()))]
    pub fn resolve(&self, catalog: &dyn CourseLookup, student: &StudentState) -> Resolution {
        let mut run = RecommendationRun::new(self.policy.credit_limit(student.cgpa()));

        let failed_candidates = student.failed_courses();
        let available_candidates = Self::available_candidates(catalog, student);
        run.stats.failed_candidates = failed_candidates.len();
        run.stats.available_candidates = available_candidates.len();
        debug!(
            "Credit limit {} with {} failed and {} available candidates",
            run.credit_limit,
            failed_candidates.len(),
            available_candidates.len()
        );

        // Pass 1: retakes
        for code in failed_candidates {
            let credit_hours = catalog.credit_hours(code);
            if run.fits(credit_hours) {
                run.admit(code.clone(), credit_hours);
                run.stats.failed_admitted += 1;
            } else {
                run.stats.dropped_for_credit += 1;
            }
        }
        debug!(
            "Pass 1 admitted {} retakes ({} credit hours)",
            run.stats.failed_admitted, run.running_credit_total
        );

        // Pass 2: regular courses
        if run.has_room() {
            for code in available_candidates {
                let credit_hours = catalog.credit_hours(&code);
                if !run.fits(credit_hours) {
                    run.stats.dropped_for_credit += 1;
                    continue;
                }
                let context = AdmissionContext {
                    catalog,
                    student,
                    current: &run.current,
                };
                if self.availability.is_available(&code, &context) {
                    run.admit(code, credit_hours);
                    run.stats.regular_admitted += 1;
                } else {
                    run.stats.unavailable += 1;
                }
            }
            debug!(
                "Pass 2 admitted {} regular courses",
                run.stats.regular_admitted
            );
        }

        run.finish()
    }

    /// Catalog courses offered this semester that the student has neither
    /// passed nor failed, deduplicated, in catalog order
    fn available_candidates(catalog: &dyn CourseLookup, student: &StudentState) -> Vec<CourseCode> {
        let mut seen = HashSet::new();
        catalog
            .codes_offered_in(student.semester())
            .into_iter()
            .filter(|code| !student.has_passed(code) && !student.has_failed(code))
            .filter(|code| seen.insert(code.clone()))
            .collect()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(CreditPolicy::default())
    }
}
