use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Incoming body of `POST /generate-roadmap`.
///
/// Fields are optional here so that a missing field surfaces as a 400 with a
/// readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub domain: Option<String>,
    pub current_year: Option<String>,
    pub experience_level: Option<String>,
}

/// A request whose three fields are all present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapInput {
    pub domain: String,
    pub current_year: String,
    pub experience_level: String,
}

impl RoadmapRequest {
    pub fn validate(self) -> Result<RoadmapInput, AppError> {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }

        let domain = present(self.domain);
        let current_year = present(self.current_year);
        let experience_level = present(self.experience_level);

        match (domain, current_year, experience_level) {
            (Some(domain), Some(current_year), Some(experience_level)) => Ok(RoadmapInput {
                domain,
                current_year,
                experience_level,
            }),
            (domain, current_year, experience_level) => {
                let missing: Vec<&str> = [
                    ("domain", domain.is_none()),
                    ("currentYear", current_year.is_none()),
                    ("experienceLevel", experience_level.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(AppError::Validation(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Generated career roadmap. Absent fields decode as empty so every result
/// handed to the caller carries the full shape. Semester keys keep the model's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapResult {
    pub semester_plan: IndexMap<String, SemesterPlan>,
    pub certifications: Vec<Certification>,
    pub internships: Vec<Internship>,
    pub learning_resources: Vec<ResourceCategory>,
    pub career_advice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemesterPlan {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub organization: String,
    pub description: String,
    pub timeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timeline: String,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCategory {
    pub category: String,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningResource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
