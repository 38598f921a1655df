//! Built-in demo data for the dashboard.

use crate::course::{Course, CourseCategory, CourseStatus, Notice, NoticeKind};

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    status: CourseStatus,
    category: CourseCategory,
    start_date: &str,
    end_date: &str,
    description: &str,
    module_count: u32,
    student_count: u32,
    last_modified: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        status,
        category,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        description: description.to_string(),
        module_count,
        student_count,
        last_modified: last_modified.to_string(),
        progress: None,
        next_lesson: None,
        instructor: None,
        ai_recommendation_score: None,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Einführung in Künstliche Intelligenz",
            CourseStatus::Active,
            CourseCategory::Ai,
            "2024-03-01",
            "2024-04-30",
            "Grundlagen der KI und maschinelles Lernen",
            8,
            45,
            "2024-03-15",
        ),
        course(
            "2",
            "Data Science Basics",
            CourseStatus::Draft,
            CourseCategory::DataScience,
            "2024-04-15",
            "2024-06-15",
            "Einführung in die Datenanalyse",
            6,
            0,
            "2024-03-14",
        ),
        course(
            "3",
            "Web Development Advanced",
            CourseStatus::Active,
            CourseCategory::Programming,
            "2024-03-10",
            "2024-05-10",
            "Fortgeschrittene Webtechnologien",
            12,
            32,
            "2024-03-13",
        ),
        course(
            "4",
            "Cloud Computing",
            CourseStatus::Archived,
            CourseCategory::Cloud,
            "2023-11-01",
            "2024-01-31",
            "Cloud-Infrastruktur und Services",
            10,
            28,
            "2024-02-01",
        ),
    ]
}

fn recommended(mut c: Course, instructor: &str, score: u8) -> Course {
    c.instructor = Some(instructor.to_string());
    c.ai_recommendation_score = Some(score);
    c.progress = Some(0);
    c
}

pub fn recommendations() -> Vec<Course> {
    vec![
        recommended(
            course(
                "1",
                "Einführung in Künstliche Intelligenz",
                CourseStatus::Active,
                CourseCategory::Ai,
                "2024-03-01",
                "2024-04-30",
                "Grundlagen der KI und maschinelles Lernen",
                8,
                45,
                "2024-03-15",
            ),
            "Dr. Maria Schmidt",
            98,
        ),
        recommended(
            course(
                "2",
                "Machine Learning Advanced",
                CourseStatus::Draft,
                CourseCategory::Ai,
                "2024-04-01",
                "2024-05-30",
                "Fortgeschrittene Konzepte des maschinellen Lernens",
                10,
                0,
                "2024-03-16",
            ),
            "Prof. Dr. Thomas Weber",
            95,
        ),
        recommended(
            course(
                "3",
                "Deep Learning Fundamentals",
                CourseStatus::Active,
                CourseCategory::Ai,
                "2024-03-15",
                "2024-05-15",
                "Grundlagen des Deep Learning und neuronaler Netze",
                12,
                32,
                "2024-03-14",
            ),
            "Dr. Sarah Meyer",
            93,
        ),
        recommended(
            course(
                "4",
                "Natural Language Processing",
                CourseStatus::Draft,
                CourseCategory::Ai,
                "2024-05-01",
                "2024-06-30",
                "Verarbeitung natürlicher Sprache mit KI",
                8,
                0,
                "2024-03-13",
            ),
            "Dr. Michael Klein",
            91,
        ),
    ]
}

fn notice(id: &str, title: &str, description: &str, kind: NoticeKind, date: &str) -> Notice {
    Notice {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        date: date.to_string(),
    }
}

pub fn notices() -> Vec<Notice> {
    vec![
        notice(
            "1",
            "Neue Kursanmeldungen",
            "5 neue Teilnehmer für \"Einführung in KI\"",
            NoticeKind::Success,
            "2024-03-15",
        ),
        notice(
            "2",
            "Kursupdate erforderlich",
            "Modul 3 in \"Web Development\" benötigt Aktualisierung",
            NoticeKind::Warning,
            "2024-03-14",
        ),
        notice(
            "3",
            "KI-Empfehlung",
            "Neue Kursempfehlungen basierend auf Ihrem Profil verfügbar",
            NoticeKind::Info,
            "2024-03-13",
        ),
        notice(
            "4",
            "Kurszertifikat verfügbar",
            "Ihr Zertifikat für \"Cloud Computing Basics\" ist jetzt verfügbar",
            NoticeKind::Success,
            "2024-03-12",
        ),
        notice(
            "5",
            "Wartungsarbeiten geplant",
            "Am 20.03.2024 von 02:00-04:00 Uhr finden Wartungsarbeiten statt",
            NoticeKind::Warning,
            "2024-03-11",
        ),
        notice(
            "6",
            "Neue Funktion verfügbar",
            "KI-basierte Lernpfadempfehlungen sind jetzt verfügbar",
            NoticeKind::Info,
            "2024-03-10",
        ),
    ]
}
