//! Filter-and-sort engine for the course table.
//!
//! [`ListQuery`] holds the search text, status filter and sort settings;
//! [`ListQuery::apply`] derives the displayed order from the full collection
//! without touching it. The result depends on nothing but the query and the
//! collection.

use crate::course::{Course, CourseStatus};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CourseStatus),
}

impl StatusFilter {
    pub fn matches(self, status: CourseStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }

    /// all → active → draft → archived → all
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(CourseStatus::Active),
            StatusFilter::Only(CourseStatus::Active) => StatusFilter::Only(CourseStatus::Draft),
            StatusFilter::Only(CourseStatus::Draft) => StatusFilter::Only(CourseStatus::Archived),
            StatusFilter::Only(CourseStatus::Archived) => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Alle Status",
            StatusFilter::Only(s) => s.label(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "draft" => Ok(StatusFilter::Only(CourseStatus::Draft)),
            "active" => Ok(StatusFilter::Only(CourseStatus::Active)),
            "archived" => Ok(StatusFilter::Only(CourseStatus::Archived)),
            other => Err(format!(
                "unknown status {other:?} (expected all, draft, active or archived)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Status,
    #[default]
    StartDate,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Title, SortField::Status, SortField::StartDate];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Titel",
            SortField::Status => "Status",
            SortField::StartDate => "Zeitraum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl ListQuery {
    pub fn matches(&self, course: &Course) -> bool {
        self.status.matches(course.status) && title_contains(&course.title, &self.search)
    }

    /// Column header click: same field flips direction, another field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self.sort_field {
            SortField::Title => self.direction.apply(compare_titles(&a.title, &b.title)),
            SortField::Status => self
                .direction
                .apply(a.status.as_str().cmp(b.status.as_str())),
            // Unparsable dates stay at the end whichever way the column is sorted
            SortField::StartDate => match (a.start_day(), b.start_day()) {
                (Some(x), Some(y)) => self.direction.apply(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    /// Indices into `courses` in display order. Stable: equal keys keep input order.
    pub fn apply(&self, courses: &[Course]) -> Vec<usize> {
        let mut indices: Vec<usize> = courses
            .iter()
            .enumerate()
            .filter(|(_, c)| self.matches(c))
            .map(|(i, _)| i)
            .collect();
        indices.sort_by(|&a, &b| self.compare(&courses[a], &courses[b]));
        indices
    }

    pub fn apply_refs<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        self.apply(courses).into_iter().map(|i| &courses[i]).collect()
    }
}

fn title_contains(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive first, exact text as tiebreak.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseCategory;
    use pretty_assertions::assert_eq;

    fn make_course(id: &str, title: &str, status: CourseStatus, start: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            status,
            category: CourseCategory::Ai,
            start_date: start.to_string(),
            end_date: start.to_string(),
            description: String::new(),
            module_count: 1,
            student_count: 0,
            last_modified: start.to_string(),
            progress: None,
            next_lesson: None,
            instructor: None,
            ai_recommendation_score: None,
        }
    }

    fn ai_pair() -> Vec<Course> {
        vec![
            make_course("1", "AI Basics", CourseStatus::Active, "2024-03-01"),
            make_course("2", "AI Advanced", CourseStatus::Draft, "2024-01-01"),
        ]
    }

    fn titles(courses: &[Course], q: &ListQuery) -> Vec<String> {
        q.apply_refs(courses).iter().map(|c| c.title.clone()).collect()
    }

    fn ids(courses: &[Course], q: &ListQuery) -> Vec<String> {
        q.apply_refs(courses).iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn defaults_match_dashboard() {
        let q = ListQuery::default();
        assert_eq!(q.search, "");
        assert_eq!(q.status, StatusFilter::All);
        assert_eq!(q.sort_field, SortField::StartDate);
        assert_eq!(q.direction, SortDirection::Descending);
    }

    #[test]
    fn search_ai_sorted_by_title_ascending() {
        let q = ListQuery {
            search: "ai".to_string(),
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        assert_eq!(titles(&ai_pair(), &q), vec!["AI Advanced", "AI Basics"]);
    }

    #[test]
    fn active_filter_keeps_only_active() {
        let q = ListQuery {
            status: StatusFilter::Only(CourseStatus::Active),
            ..Default::default()
        };
        assert_eq!(ids(&ai_pair(), &q), vec!["1"]);
    }

    #[test]
    fn default_query_orders_by_start_date_descending() {
        assert_eq!(ids(&ai_pair(), &ListQuery::default()), vec!["1", "2"]);
    }

    #[test]
    fn empty_collection_yields_empty() {
        assert!(ListQuery::default().apply(&[]).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let courses = vec![
            make_course("1", "Einführung in Künstliche Intelligenz", CourseStatus::Active, "2024-03-01"),
            make_course("2", "Data Science Basics", CourseStatus::Draft, "2024-04-15"),
        ];
        let q = ListQuery {
            search: "KÜNSTLICHE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&courses, &q), vec!["1"]);

        let q = ListQuery {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(ids(&courses, &q).is_empty());
    }

    #[test]
    fn all_and_empty_search_keeps_every_id() {
        let courses = vec![
            make_course("a", "X", CourseStatus::Draft, "2024-01-01"),
            make_course("b", "Y", CourseStatus::Active, "bad"),
            make_course("c", "Z", CourseStatus::Archived, "2023-01-01"),
            make_course("d", "X", CourseStatus::Draft, "2024-01-01"),
        ];
        for field in SortField::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let q = ListQuery {
                    sort_field: field,
                    direction,
                    ..Default::default()
                };
                let mut got = ids(&courses, &q);
                got.sort();
                assert_eq!(got, vec!["a", "b", "c", "d"]);
            }
        }
    }

    #[test]
    fn output_respects_filter_and_search() {
        let courses = vec![
            make_course("1", "Rust Basics", CourseStatus::Active, "2024-01-01"),
            make_course("2", "Rust Advanced", CourseStatus::Draft, "2024-02-01"),
            make_course("3", "Go Basics", CourseStatus::Active, "2024-03-01"),
            make_course("4", "trusty tools", CourseStatus::Active, "2024-04-01"),
        ];
        let q = ListQuery {
            search: "rust".to_string(),
            status: StatusFilter::Only(CourseStatus::Active),
            ..Default::default()
        };
        for c in q.apply_refs(&courses) {
            assert!(c.title.to_lowercase().contains("rust"));
            assert_eq!(c.status, CourseStatus::Active);
        }
        assert_eq!(ids(&courses, &q), vec!["4", "1"]);
    }

    #[test]
    fn title_directions_are_exact_reverses_without_ties() {
        let courses = vec![
            make_course("1", "Cloud Computing", CourseStatus::Archived, "2023-11-01"),
            make_course("2", "Data Science Basics", CourseStatus::Draft, "2024-04-15"),
            make_course("3", "Web Development Advanced", CourseStatus::Active, "2024-03-10"),
            make_course("4", "Einführung in Künstliche Intelligenz", CourseStatus::Active, "2024-03-01"),
        ];
        let asc = ListQuery {
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        let desc = ListQuery {
            direction: SortDirection::Descending,
            ..asc.clone()
        };
        let mut reversed = ids(&courses, &desc);
        reversed.reverse();
        assert_eq!(ids(&courses, &asc), reversed);
        assert_eq!(ids(&courses, &asc), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn title_sort_ignores_case_first() {
        let courses = vec![
            make_course("1", "beta", CourseStatus::Active, "2024-01-01"),
            make_course("2", "Alpha", CourseStatus::Active, "2024-01-01"),
        ];
        let q = ListQuery {
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        assert_eq!(ids(&courses, &q), vec!["2", "1"]);
    }

    #[test]
    fn status_ties_keep_insertion_order_both_directions() {
        let courses = vec![
            make_course("1", "A", CourseStatus::Draft, "2024-01-01"),
            make_course("2", "B", CourseStatus::Active, "2024-01-01"),
            make_course("3", "C", CourseStatus::Draft, "2024-01-01"),
            make_course("4", "D", CourseStatus::Active, "2024-01-01"),
        ];
        let asc = ListQuery {
            sort_field: SortField::Status,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        assert_eq!(ids(&courses, &asc), vec!["2", "4", "1", "3"]);

        let desc = ListQuery {
            direction: SortDirection::Descending,
            ..asc
        };
        assert_eq!(ids(&courses, &desc), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn unparsable_dates_sort_last_in_both_directions() {
        let courses = vec![
            make_course("bad1", "A", CourseStatus::Active, "demnächst"),
            make_course("early", "B", CourseStatus::Active, "2023-01-01"),
            make_course("bad2", "C", CourseStatus::Active, ""),
            make_course("late", "D", CourseStatus::Active, "2024-06-01"),
        ];
        let asc = ListQuery {
            sort_field: SortField::StartDate,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        assert_eq!(ids(&courses, &asc), vec!["early", "late", "bad1", "bad2"]);

        let desc = ListQuery::default();
        assert_eq!(ids(&courses, &desc), vec!["late", "early", "bad1", "bad2"]);
    }

    #[test]
    fn apply_does_not_touch_input() {
        let courses = ai_pair();
        let before = courses.clone();
        let _ = ListQuery::default().apply(&courses);
        assert_eq!(courses, before);
    }

    #[test]
    fn toggle_same_field_twice_restores_direction() {
        let mut q = ListQuery::default();
        let original = q.direction;
        q.toggle_sort(SortField::StartDate);
        assert_eq!(q.direction, original.flipped());
        q.toggle_sort(SortField::StartDate);
        assert_eq!(q.direction, original);
    }

    #[test]
    fn toggle_other_field_resets_to_ascending() {
        for start in [SortDirection::Ascending, SortDirection::Descending] {
            for field in [SortField::Title, SortField::Status] {
                let mut q = ListQuery {
                    direction: start,
                    ..Default::default()
                };
                q.toggle_sort(field);
                assert_eq!(q.sort_field, field);
                assert_eq!(q.direction, SortDirection::Ascending);
            }
        }
    }

    #[test]
    fn status_filter_cycles_back_to_all() {
        let mut f = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            f = f.next();
            seen.push(f);
        }
        assert_eq!(
            seen,
            vec![
                StatusFilter::Only(CourseStatus::Active),
                StatusFilter::Only(CourseStatus::Draft),
                StatusFilter::Only(CourseStatus::Archived),
                StatusFilter::All,
            ]
        );
    }

    #[test]
    fn status_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Archived".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(CourseStatus::Archived))
        );
        assert!("paused".parse::<StatusFilter>().is_err());
    }
}
