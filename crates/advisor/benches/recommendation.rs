//! Benchmarks for course recommendation
//!
//! Run with: cargo bench --package advisor
//!
//! Uses a generated catalog of chained courses so the numbers do not depend
//! on a data file, plus the bundled sample catalog when it is present.

use advisor::{CourseAdvisor, Resolver, StudentState};
use catalog::{Course, CourseCatalog, Semester, SemesterOffered};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use std::sync::Arc;

/// 40 departments x 10 levels, each level requiring the one below it
fn generated_catalog() -> Arc<CourseCatalog> {
    let mut courses = Vec::new();
    for dept in 0..40 {
        for level in 0..10 {
            let code = format!("D{:02}{}01", dept, level + 1);
            let offered = match level % 3 {
                0 => SemesterOffered::Fall,
                1 => SemesterOffered::Spring,
                _ => SemesterOffered::Both,
            };
            let mut course = Course::new(code, 1 + (level % 4), offered);
            if level > 0 {
                course = course.with_prerequisites([format!("D{:02}{}01", dept, level)]);
            }
            if level % 5 == 4 {
                course = course.with_corequisites([format!("D{:02}{}01", (dept + 1) % 40, level + 1)]);
            }
            courses.push(course);
        }
    }
    Arc::new(CourseCatalog::from_courses(courses).expect("generated catalog has unique codes"))
}

fn generated_student() -> StudentState {
    let passed: Vec<String> = (0..40)
        .flat_map(|dept| (1..=4).map(move |level| format!("D{:02}{}01", dept, level)))
        .collect();
    let failed: Vec<String> = (0..5).map(|dept| format!("D{:02}501", dept)).collect();
    StudentState::new(Semester::Fall, 2.6, passed, failed).expect("valid student")
}

fn bench_resolve(c: &mut Criterion) {
    let catalog = generated_catalog();
    let student = generated_student();
    let resolver = Resolver::default();

    c.bench_function("resolve_generated_catalog", |b| {
        b.iter(|| {
            let resolution = resolver.resolve(black_box(&*catalog), black_box(&student));
            black_box(resolution)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let advisor = CourseAdvisor::new(generated_catalog());
    let student = generated_student();

    c.bench_function("recommend_with_explanations", |b| {
        b.iter(|| {
            let recommendation = advisor.recommend(black_box(&student));
            black_box(recommendation)
        })
    });
}

fn bench_sample_catalog(c: &mut Criterion) {
    let path = Path::new("../../data/Courses.csv");
    if !path.exists() {
        return;
    }
    let advisor = CourseAdvisor::new(Arc::new(
        CourseCatalog::load_from_file(path).expect("Failed to load sample catalog"),
    ));

    c.bench_function("recommend_sample_catalog", |b| {
        b.iter(|| {
            let recommendation = advisor
                .recommend_for(black_box("FALL"), black_box(2.7), ["CSE110"], ["MAT110"])
                .unwrap();
            black_box(recommendation)
        })
    });
}

criterion_group!(benches, bench_resolve, bench_recommend, bench_sample_catalog);
criterion_main!(benches);
