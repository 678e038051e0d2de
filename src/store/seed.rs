//! Fixed default dataset used when no persisted state exists.
//!
//! The seed guarantees a working portal on first run: one administrator, one
//! regular employee, and three starter content modules.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::section::{Category, InductionSection, MediaAttachment, MediaType};
use crate::domain::user::{Role, User};

/// Seed accounts: one ADMIN and one USER
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: Uuid::new_v4(),
            name: "System Admin".to_string(),
            email: "admin@bestpacific.com".to_string(),
            password: "admin".to_string(),
            role: Role::Admin,
            department: "Executive".to_string(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid seed date"),
            progress: 100,
        },
        User {
            id: Uuid::new_v4(),
            name: "New Employee".to_string(),
            email: "user@bestpacific.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
            department: "Production".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid seed date"),
            progress: 15,
        },
    ]
}

/// Seed curriculum: three starter induction modules
pub fn initial_sections() -> Vec<InductionSection> {
    vec![
        InductionSection {
            id: Uuid::new_v4(),
            title: "Welcome to Best Pacific".to_string(),
            content: "Best Pacific Textiles Lanka is a leader in high-end apparel \
                      materials. We are committed to innovation and excellence in the \
                      textile industry."
                .to_string(),
            category: Category::Company,
            last_updated: Utc::now(),
            order: 1,
            attachments: vec![MediaAttachment {
                id: Uuid::new_v4(),
                media_type: MediaType::Video,
                name: "Corporate Intro".to_string(),
                url: "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4"
                    .to_string(),
            }],
        },
        InductionSection {
            id: Uuid::new_v4(),
            title: "Our Vision & Values".to_string(),
            content: "Our vision is to be the global benchmark in textile manufacturing. \
                      Our values: Integrity, Innovation, Customer Focus, and \
                      Sustainability."
                .to_string(),
            category: Category::Company,
            last_updated: Utc::now(),
            order: 2,
            attachments: vec![MediaAttachment {
                id: Uuid::new_v4(),
                media_type: MediaType::Presentation,
                name: "Vision 2025 PPT".to_string(),
                url: "#".to_string(),
            }],
        },
        InductionSection {
            id: Uuid::new_v4(),
            title: "Health and Safety Protocols".to_string(),
            content: "Safety is our top priority. All employees must wear PPE in \
                      designated zones."
                .to_string(),
            category: Category::Safety,
            last_updated: Utc::now(),
            order: 3,
            attachments: vec![MediaAttachment {
                id: Uuid::new_v4(),
                media_type: MediaType::Document,
                name: "Safety Manual PDF".to_string(),
                url: "#".to_string(),
            }],
        },
    ]
}
