use serde::{Deserialize, Serialize};

/// Content category of an induction section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Company,
    #[serde(rename = "HR")]
    Hr,
    Safety,
    Operations,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Company => write!(f, "Company"),
            Category::Hr => write!(f, "HR"),
            Category::Safety => write!(f, "Safety"),
            Category::Operations => write!(f, "Operations"),
        }
    }
}

/// Kind of multimedia resource attached to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Document,
    Presentation,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Document => write!(f, "document"),
            MediaType::Presentation => write!(f, "presentation"),
        }
    }
}
