//! Parsers for catalog files.
//!
//! - CSV: the `Courses.csv` table with a header row
//!   (`Code,Course Name,Description,prerequisite,Co-requisites,CH,Semester Offered`)
//! - JSON: an array of [`Course`] objects
//!
//! Header names are matched case-insensitively and columns may come in any
//! order. Quoted fields follow the usual CSV rules (`""` is a literal quote);
//! quoted fields may not span lines.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Positions of the known columns within a header row
#[derive(Debug)]
struct ColumnMap {
    width: usize,
    code: usize,
    semester_offered: usize,
    name: Option<usize>,
    description: Option<usize>,
    prerequisites: Option<usize>,
    corequisites: Option<usize>,
    credit_hours: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String], file: &str) -> Result<Self> {
        let normalized: Vec<String> = header
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase())
            .collect();
        let find = |aliases: &[&str]| {
            normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
        };
        let required = |aliases: &[&str], column: &str| {
            find(aliases).ok_or_else(|| CatalogError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            })
        };

        Ok(Self {
            width: header.len(),
            code: required(&["code", "course code"], "Code")?,
            semester_offered: required(&["semester offered", "semester"], "Semester Offered")?,
            name: find(&["course name", "name"]),
            description: find(&["description"]),
            prerequisites: find(&["prerequisite", "prerequisites"]),
            corequisites: find(&["co-requisites", "co-requisite", "corequisites"]),
            credit_hours: find(&["ch", "credit hours", "credits"]),
        })
    }
}

/// Split one CSV record into fields.
///
/// Returns the reason as a plain string on malformed quoting so the caller
/// can attach file and line.
pub(crate) fn split_csv_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.trim().is_empty() => {
                    field.clear();
                    in_quotes = true;
                }
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err("Unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

/// Parse a credit-hour cell, falling back to [`DEFAULT_CREDIT_HOURS`].
///
/// "3" and "3.0" both give 3. Empty, non-numeric, non-positive and
/// out-of-range values give the default.
pub(crate) fn parse_credit_hours(s: &str) -> Option<u32> {
    let value: f64 = s.trim().parse().ok()?;
    credit_hours_from_f64(value)
}

/// Parse a comma-separated list of course codes, skipping blanks
pub(crate) fn parse_code_list(s: &str) -> Vec<CourseCode> {
    s.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse catalog CSV content. `file` is only used in error messages.
pub fn parse_courses_csv_str(content: &str, file: &str) -> Result<Vec<Course>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header_line) = lines.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: 1,
        reason: "Missing header row".to_string(),
    })?;
    let header = split_csv_line(header_line).map_err(|reason| CatalogError::ParseError {
        file: file.to_string(),
        line: header_no,
        reason,
    })?;
    let columns = ColumnMap::from_header(&header, file)?;

    let mut courses = Vec::new();
    for (line_no, line) in lines {
        let fields = split_csv_line(line).map_err(|reason| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason,
        })?;
        if fields.len() > columns.width {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!(
                    "Expected {} fields but found {}",
                    columns.width,
                    fields.len()
                ),
            });
        }

        // Short rows are padded with empty cells
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map(|s| s.trim())
                .unwrap_or("")
        };

        let code = cell(Some(columns.code));
        if code.is_empty() {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing course code".to_string(),
            });
        }

        let semester_offered = cell(Some(columns.semester_offered))
            .parse::<SemesterOffered>()
            .map_err(|e| CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;

        let raw_hours = cell(columns.credit_hours);
        let credit_hours = parse_credit_hours(raw_hours).unwrap_or_else(|| {
            tracing::warn!(
                "{}:{}: invalid credit hours {:?} for {}, defaulting to {}",
                file,
                line_no,
                raw_hours,
                code,
                DEFAULT_CREDIT_HOURS
            );
            DEFAULT_CREDIT_HOURS
        });

        courses.push(Course {
            code: code.to_string(),
            name: cell(columns.name).to_string(),
            description: cell(columns.description).to_string(),
            credit_hours,
            semester_offered,
            prerequisites: parse_code_list(cell(columns.prerequisites)),
            corequisites: parse_code_list(cell(columns.corequisites)),
        });
    }

    Ok(courses)
}

/// Parse a catalog CSV file
pub fn parse_courses_csv(path: &Path) -> Result<Vec<Course>> {
    let content = read_to_string(path)?;
    parse_courses_csv_str(&content, &file_label(path))
}

/// Parse a JSON catalog file (an array of courses)
pub fn parse_courses_json(path: &Path) -> Result<Vec<Course>> {
    let content = read_to_string(path)?;
    let courses: Vec<Course> = serde_json::from_str(&content)?;
    Ok(courses)
}
