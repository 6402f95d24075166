//! Static reference tables, loaded once at startup and shared read-only.
//!
//! Both files share the envelope `{"careers": [{"title": ..., ...}]}`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::careers::models::SalaryRange;

#[derive(Debug, Deserialize)]
struct TableDocument<T> {
    careers: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub title: String,
    pub salary_range: SalaryRange,
    pub roles_offered: Vec<String>,
    pub required_skills: Vec<String>,
}

/// The description table and the salary table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    careers: Vec<CareerEntry>,
    salaries: Vec<SalaryEntry>,
}

impl ReferenceTables {
    pub fn new(careers: Vec<CareerEntry>, salaries: Vec<SalaryEntry>) -> Self {
        Self { careers, salaries }
    }

    pub fn load(career_path: &Path, salary_path: &Path) -> Result<Self> {
        let careers = read_table(career_path)?;
        let salaries = read_table(salary_path)?;
        Ok(Self::new(careers, salaries))
    }

    pub fn from_json(career_json: &str, salary_json: &str) -> Result<Self> {
        let careers = parse_table(career_json).context("invalid career table")?;
        let salaries = parse_table(salary_json).context("invalid salary table")?;
        Ok(Self::new(careers, salaries))
    }

    /// First description entry whose title equals `name`, ignoring case.
    pub fn find_description(&self, name: &str) -> Option<&CareerEntry> {
        let needle = name.to_lowercase();
        self.careers
            .iter()
            .find(|entry| entry.title.to_lowercase() == needle)
    }

    /// First salary entry whose title equals `name`, ignoring case.
    pub fn find_salary(&self, name: &str) -> Option<&SalaryEntry> {
        let needle = name.to_lowercase();
        self.salaries
            .iter()
            .find(|entry| entry.title.to_lowercase() == needle)
    }

    pub fn career_count(&self) -> usize {
        self.careers.len()
    }

    pub fn salary_count(&self) -> usize {
        self.salaries.len()
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference table '{}'", path.display()))?;
    parse_table(&raw).with_context(|| format!("Invalid reference table '{}'", path.display()))
}

fn parse_table<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    let document: TableDocument<T> = serde_json::from_str(raw)?;
    Ok(document.careers)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CAREERS: &str = r#"{"careers": [
        {"title": "Frontend Developer", "description": "Builds user interfaces."},
        {"title": "frontend developer", "description": "Shadowed duplicate."}
    ]}"#;

    const SALARIES: &str = r#"{"careers": [
        {
            "title": "FRONTEND DEVELOPER",
            "salary_range": {"entry_level": "$60k", "mid_level": "$90k", "senior_level": "$130k"},
            "roles_offered": ["UI Engineer"],
            "required_skills": ["TypeScript"]
        }
    ]}"#;

    #[test]
    fn test_lookup_is_case_insensitive_and_first_match_wins() {
        let tables = ReferenceTables::from_json(CAREERS, SALARIES).unwrap();
        let entry = tables.find_description("FrOnTeNd DeVeLoPeR").unwrap();
        assert_eq!(entry.description, "Builds user interfaces.");
        let salary = tables.find_salary("frontend developer").unwrap();
        assert_eq!(salary.salary_range.mid_level, "$90k");
    }

    #[test]
    fn test_lookup_does_not_trim_or_fuzz() {
        let tables = ReferenceTables::from_json(CAREERS, SALARIES).unwrap();
        assert!(tables.find_description(" Frontend Developer").is_none());
        assert!(tables.find_description("Frontend Dev").is_none());
        assert!(tables.find_salary("Frontend Developers").is_none());
    }

    #[test]
    fn test_from_json_rejects_wrong_envelope() {
        let err = ReferenceTables::from_json(r#"[{"title": "x"}]"#, SALARIES).unwrap_err();
        assert!(err.to_string().contains("career table"));
    }

    #[test]
    fn test_load_reads_files() {
        let mut careers = tempfile::NamedTempFile::new().unwrap();
        careers.write_all(CAREERS.as_bytes()).unwrap();
        let mut salaries = tempfile::NamedTempFile::new().unwrap();
        salaries.write_all(SALARIES.as_bytes()).unwrap();

        let tables = ReferenceTables::load(careers.path(), salaries.path()).unwrap();
        assert_eq!(tables.career_count(), 2);
        assert_eq!(tables.salary_count(), 1);
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = ReferenceTables::load(
            Path::new("/nonexistent/careers.json"),
            Path::new("/nonexistent/salaries.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/careers.json"));
    }

    #[test]
    fn test_bundled_tables_parse() {
        let tables = ReferenceTables::from_json(
            include_str!("../../data/careers.json"),
            include_str!("../../data/salaries.json"),
        )
        .unwrap();
        assert!(tables.find_description("Frontend Developer").is_some());
        assert!(tables.find_salary("Frontend Developer").is_some());
    }
}
