use advisor::{CourseAdvisor, Recommendation, StudentState};
use anyhow::{anyhow, Context, Result};
use catalog::{Course, CourseCatalog, Semester, DEFAULT_CREDIT_HOURS};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Course Advisor - semester course recommendations
#[derive(Parser)]
#[command(name = "course-advisor")]
#[command(about = "Recommends courses for next semester from a student's academic record", long_about = None)]
struct Cli {
    /// Path to the course catalog (.csv or .json)
    #[arg(short, long, env = "ADVISOR_CATALOG", default_value = "data/Courses.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses for a student
    Recommend {
        /// Semester to plan for (FALL or SPRING)
        #[arg(long)]
        semester: Semester,

        /// Cumulative GPA on a 4.00 scale
        #[arg(long)]
        cgpa: f64,

        /// Comma-separated codes of passed courses
        #[arg(long, value_delimiter = ',')]
        passed: Vec<String>,

        /// Comma-separated codes of failed courses
        #[arg(long, value_delimiter = ',')]
        failed: Vec<String>,

        /// Show the explanation for each recommended course
        #[arg(long)]
        explain: bool,

        /// Print the full recommendation as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Show one course's catalog record
    Course {
        /// Course code to display
        #[arg(long)]
        code: String,
    },

    /// List courses offered in a semester
    Offered {
        /// FALL or SPRING
        #[arg(long)]
        semester: Semester,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        CourseCatalog::load_from_file(&cli.catalog)
            .with_context(|| format!("Failed to load course catalog {}", cli.catalog.display()))?,
    );
    debug!("Catalog ready in {:?}", start.elapsed());

    match cli.command {
        Commands::Recommend {
            semester,
            cgpa,
            passed,
            failed,
            explain,
            json,
        } => handle_recommend(catalog, semester, cgpa, passed, failed, explain, json)?,
        Commands::Course { code } => handle_course(&catalog, &code)?,
        Commands::Offered { semester } => handle_offered(&catalog, semester),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<CourseCatalog>,
    semester: Semester,
    cgpa: f64,
    passed: Vec<String>,
    failed: Vec<String>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let student = StudentState::new(semester, cgpa, trimmed(passed), trimmed(failed))
        .context("Invalid student record")?;

    let advisor = CourseAdvisor::new(catalog);
    let recommendation = advisor.recommend(&student);

    if json {
        let output = serde_json::to_string_pretty(&recommendation)
            .context("Failed to serialize recommendation")?;
        println!("{}", output);
        return Ok(());
    }

    print_recommendation(advisor.catalog(), &student, &recommendation);
    if explain {
        print_explanations(advisor.catalog(), &recommendation);
    }
    Ok(())
}

/// Handle the 'course' command
fn handle_course(catalog: &CourseCatalog, code: &str) -> Result<()> {
    let code = code.trim();
    let course = catalog
        .get_course(code)
        .ok_or_else(|| anyhow!("Course {} not found in catalog", code))?;

    println!("{}", format!("{} - {}", course.code, course.name).bold().blue());
    if !course.description.is_empty() {
        println!("{}", course.description);
    }
    println!("{}Credit hours: {}", "• ".green(), course.credit_hours);
    println!("{}Offered: {}", "• ".green(), course.semester_offered);
    println!("{}Prerequisites: {}", "• ".cyan(), code_list(&course.prerequisites));
    println!("{}Co-requisites: {}", "• ".cyan(), code_list(&course.corequisites));
    Ok(())
}

/// Handle the 'offered' command
fn handle_offered(catalog: &CourseCatalog, semester: Semester) {
    let courses: Vec<&Course> = catalog.courses_offered_in(semester).collect();
    let hours = catalog.offered_credit_hours(semester);

    println!(
        "{}",
        format!("Courses offered in {} ({} courses, {} credit hours):", semester, courses.len(), hours)
            .bold()
            .blue()
    );
    for course in courses {
        println!(
            "  {:<8} {:<48} {} CH  [{}]",
            course.code, course.name, course.credit_hours, course.semester_offered
        );
    }
}

fn print_recommendation(catalog: &CourseCatalog, student: &StudentState, recommendation: &Recommendation) {
    println!("{}", format!("Recommended courses for {}:", student.semester()).bold().blue());

    if recommendation.is_empty() {
        println!("  No courses can be recommended with the given record.");
    }
    for (rank, code) in recommendation.courses.iter().enumerate() {
        let (name, credit_hours) = course_summary(catalog, code);
        let marker = if student.has_failed(code) {
            " retake".red().to_string()
        } else {
            String::new()
        };
        println!(
            "{}. {} {} ({} CH){}",
            (rank + 1).to_string().green(),
            code.bold(),
            name,
            credit_hours,
            marker
        );
    }

    println!(
        "{}Total: {} of {} credit hours",
        "• ".cyan(),
        recommendation.total_credit_hours,
        recommendation.credit_limit
    );
}

fn print_explanations(catalog: &CourseCatalog, recommendation: &Recommendation) {
    let explanations = &recommendation.explanations;

    println!();
    println!("{}", "Explanation:".bold().blue());
    println!("{}", explanations.credit_limit);
    println!("{}", explanations.failed_courses_summary);

    for course in &explanations.courses {
        println!();
        let (name, credit_hours) = course_summary(catalog, &course.code);
        println!("{} {} ({} CH)", course.code.bold(), name, credit_hours);
        if let Some(description) = catalog
            .get_course(&course.code)
            .map(|c| c.description.as_str())
            .filter(|d| !d.is_empty())
        {
            println!("{}", description.dimmed());
        }
        if !course.failed_priority.is_empty() {
            println!("{}", course.failed_priority.yellow());
        }
        println!("{}", course.prerequisites);
        println!("{}", course.corequisites);
        println!("{}", course.semester);
    }
}

/// Display name and credit hours, with the engine's defaults for codes
/// missing from the catalog
fn course_summary<'a>(catalog: &'a CourseCatalog, code: &str) -> (&'a str, u32) {
    match catalog.get_course(code) {
        Some(course) => (course.name.as_str(), course.credit_hours),
        None => ("(not in catalog)", DEFAULT_CREDIT_HOURS),
    }
}

fn trimmed(codes: Vec<String>) -> Vec<String> {
    codes
        .into_iter()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

fn code_list(codes: &[String]) -> String {
    if codes.is_empty() {
        "none".to_string()
    } else {
        codes.join(", ")
    }
}
