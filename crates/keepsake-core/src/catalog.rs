//! Static lesson catalog.
//!
//! A compile-time lookup table of display metadata. The catalog is
//! reference data only: favorites hold ids, and rendering resolves them
//! here. An id with no catalog entry is simply not rendered.

use keepsake_types::lesson::LessonRecord;

static LESSONS: [LessonRecord; 9] = [
    LessonRecord {
        id: "lesson1",
        title: "Authentication Basics",
        description: "Learn the fundamentals of user authentication and password security in modern platforms.",
        icon: "\u{1F510}",
    },
    LessonRecord {
        id: "lesson2",
        title: "Authorization & Access Control",
        description: "Understand role-based access control and permission systems for secure platforms.",
        icon: "\u{1F6E1}\u{FE0F}",
    },
    LessonRecord {
        id: "lesson3",
        title: "Data Encryption",
        description: "Master encryption techniques to protect sensitive data at rest and in transit.",
        icon: "\u{1F512}",
    },
    LessonRecord {
        id: "lesson4",
        title: "Network Security",
        description: "Explore network protocols, firewalls, and secure communication channels.",
        icon: "\u{1F310}",
    },
    LessonRecord {
        id: "lesson5",
        title: "API Security",
        description: "Secure your APIs with proper authentication, rate limiting, and validation.",
        icon: "\u{26A1}",
    },
    LessonRecord {
        id: "lesson6",
        title: "Security Monitoring",
        description: "Implement logging, monitoring, and alerting systems for threat detection.",
        icon: "\u{1F50D}",
    },
    LessonRecord {
        id: "lesson7",
        title: "Incident Response",
        description: "Develop effective incident response procedures and recovery strategies.",
        icon: "\u{1F6A8}",
    },
    LessonRecord {
        id: "lesson8",
        title: "Security Testing",
        description: "Learn penetration testing, vulnerability assessments, and security auditing.",
        icon: "\u{1F9EA}",
    },
    LessonRecord {
        id: "lesson9",
        title: "Compliance & Standards",
        description: "Navigate security frameworks, regulations, and industry best practices.",
        icon: "\u{1F4CB}",
    },
];

/// Look up a lesson by id.
pub fn get(id: &str) -> Option<&'static LessonRecord> {
    LESSONS.iter().find(|l| l.id == id)
}

/// All lessons, in catalog order.
pub fn all() -> &'static [LessonRecord] {
    &LESSONS
}
