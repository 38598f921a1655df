use crate::course::{Course, CourseStatus, Notice};

/// Quick statistics cards above the course table.
///
/// Always computed from the full collection, never from the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub active_courses: usize,
    pub planned_courses: usize,
    pub open_updates: usize,
    pub participants: u64,
}

impl DashboardStats {
    pub fn compute(courses: &[Course], notices: &[Notice]) -> Self {
        let count = |status| courses.iter().filter(|c| c.status == status).count();
        Self {
            active_courses: count(CourseStatus::Active),
            planned_courses: count(CourseStatus::Draft),
            open_updates: notices.len(),
            participants: courses.iter().map(|c| u64::from(c.student_count)).sum(),
        }
    }
}
