use chrono::{DateTime, NaiveDate};
use color_eyre::eyre::{bail, Result, WrapErr};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    Active,
    Archived,
}

impl CourseStatus {
    /// Wire name, also the key used when sorting by status.
    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Active => "active",
            CourseStatus::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CourseStatus::Draft => "Entwurf",
            CourseStatus::Active => "Aktiv",
            CourseStatus::Archived => "Archiviert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseCategory {
    Programming,
    DataScience,
    Ai,
    Cloud,
    Business,
    Design,
}

impl CourseCategory {
    pub fn label(self) -> &'static str {
        match self {
            CourseCategory::Programming => "Programmierung",
            CourseCategory::DataScience => "Data Science",
            CourseCategory::Ai => "KI",
            CourseCategory::Cloud => "Cloud",
            CourseCategory::Business => "Business",
            CourseCategory::Design => "Design",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub status: CourseStatus,
    pub category: CourseCategory,
    /// Kept as supplied; see [`parse_day`].
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub module_count: u32,
    pub student_count: u32,
    pub last_modified: String,

    // Only read by the recommendations page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_lesson: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_recommendation_score: Option<u8>,
}

impl Course {
    pub fn start_day(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    pub fn end_day(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }

    /// `"01.03.2024 – 30.04.2024"`, falling back to the raw text for dates that don't parse.
    pub fn period(&self) -> String {
        format!(
            "{} – {}",
            format_day(&self.start_date),
            format_day(&self.end_date)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
    Success,
}

/// Dashboard notification ("Benachrichtigung").
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    pub date: String,
}

/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Anything else is unparsable.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn format_day(raw: &str) -> String {
    match parse_day(raw) {
        Some(day) => day.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn parse_courses(json: &str) -> Result<Vec<Course>> {
    let courses: Vec<Course> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for course in &courses {
        if !seen.insert(course.id.as_str()) {
            bail!("duplicate course id {:?}", course.id);
        }
    }
    Ok(courses)
}

pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let courses = parse_courses(&json)
        .wrap_err_with(|| format!("invalid course data in {}", path.display()))?;
    tracing::info!("loaded {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_COURSE_JSON: &str = r#"[
        {
            "id": "1",
            "title": "Einführung in Künstliche Intelligenz",
            "status": "active",
            "category": "ai",
            "startDate": "2024-03-01",
            "endDate": "2024-04-30",
            "description": "Grundlagen der KI und maschinelles Lernen",
            "moduleCount": 8,
            "studentCount": 45,
            "lastModified": "2024-03-15"
        }
    ]"#;

    #[test]
    fn parse_single_course() {
        let courses = parse_courses(SINGLE_COURSE_JSON).unwrap();
        assert_eq!(courses.len(), 1);
        let c = &courses[0];
        assert_eq!(c.id, "1");
        assert_eq!(c.status, CourseStatus::Active);
        assert_eq!(c.category, CourseCategory::Ai);
        assert_eq!(c.module_count, 8);
        assert_eq!(c.student_count, 45);
        assert_eq!(c.instructor, None);
        assert_eq!(c.ai_recommendation_score, None);
    }

    #[test]
    fn parse_optional_recommendation_fields() {
        let json = r#"[{
            "id": "2",
            "title": "Machine Learning Advanced",
            "status": "draft",
            "category": "data-science",
            "startDate": "2024-04-01",
            "endDate": "2024-05-30",
            "description": "",
            "moduleCount": 10,
            "studentCount": 0,
            "lastModified": "2024-03-16",
            "instructor": "Prof. Dr. Thomas Weber",
            "aiRecommendationScore": 95,
            "progress": 0
        }]"#;
        let c = &parse_courses(json).unwrap()[0];
        assert_eq!(c.category, CourseCategory::DataScience);
        assert_eq!(c.instructor.as_deref(), Some("Prof. Dr. Thomas Weber"));
        assert_eq!(c.ai_recommendation_score, Some(95));
        assert_eq!(c.progress, Some(0));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = SINGLE_COURSE_JSON.replace("\"active\"", "\"paused\"");
        assert!(parse_courses(&json).is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let json = SINGLE_COURSE_JSON.replace("\"studentCount\": 45", "\"studentCount\": -1");
        assert!(parse_courses(&json).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let one = SINGLE_COURSE_JSON.trim().trim_start_matches('[').trim_end_matches(']');
        let json = format!("[{one},{one}]");
        let err = parse_courses(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate course id"));
    }

    #[test]
    fn empty_array_parses() {
        assert!(parse_courses("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_day_plain_date() {
        assert_eq!(parse_day("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn parse_day_rfc3339() {
        assert_eq!(
            parse_day("2024-03-01T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn parse_day_garbage() {
        assert_eq!(parse_day("soon"), None);
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("2024-13-01"), None);
    }

    #[test]
    fn format_day_german_style() {
        assert_eq!(format_day("2024-03-01"), "01.03.2024");
        assert_eq!(format_day("irgendwann"), "irgendwann");
    }

    #[test]
    fn period_joins_both_dates() {
        let c = &parse_courses(SINGLE_COURSE_JSON).unwrap()[0];
        assert_eq!(c.period(), "01.03.2024 – 30.04.2024");
    }

    #[test]
    fn notice_kind_uses_type_key() {
        let json = r#"{"id":"1","title":"t","description":"d","type":"warning","date":"2024-03-14"}"#;
        let n: Notice = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NoticeKind::Warning);
    }

    #[test]
    fn status_sort_keys_are_wire_names() {
        assert!(CourseStatus::Active.as_str() < CourseStatus::Archived.as_str());
        assert!(CourseStatus::Archived.as_str() < CourseStatus::Draft.as_str());
    }
}
