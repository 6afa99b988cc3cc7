use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Domains a mentor can be listed under.
pub const KNOWN_DOMAINS: [&str; 5] = ["Frontend", "Backend", "Data Science", "DevOps", "AI&ML"];

/// Domain filter value meaning "do not filter".
pub const ALL_DOMAINS: &str = "All Domains";

/// A senior student or alumnus in the directory.
///
/// Only the fields the directory filters on are typed; everything else in the
/// seed record (role, story, links, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub name: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A profile together with its slug identifier.
#[derive(Debug, Clone, Serialize)]
pub struct MentorRecord {
    pub id: String,
    #[serde(flatten)]
    pub profile: MentorProfile,
}

/// Query string of `GET /mentors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorQuery {
    pub domain: Option<String>,
    pub search: Option<String>,
    /// 1-based; zero and negative pages read as the first page.
    pub page: Option<i64>,
}

/// One page of directory results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorPage {
    pub mentors: Vec<MentorRecord>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}
