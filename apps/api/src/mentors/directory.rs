//! In-memory mentor directory built from a JSON seed file.
//!
//! Records are keyed by `slugify(name)`; a later record with the same slug
//! replaces the earlier one. Listing order is slug order.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::mentors::models::{
    MentorPage, MentorProfile, MentorQuery, MentorRecord, ALL_DOMAINS, KNOWN_DOMAINS,
};
use crate::mentors::slug::slugify;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct MentorDirectory {
    mentors: BTreeMap<String, MentorProfile>,
}

impl MentorDirectory {
    pub fn from_profiles(profiles: impl IntoIterator<Item = MentorProfile>) -> Self {
        let mut mentors = BTreeMap::new();
        for mut profile in profiles {
            let id = slugify(&profile.name);
            if id.is_empty() {
                warn!("Skipping mentor with unusable name {:?}", profile.name);
                continue;
            }
            if !KNOWN_DOMAINS.contains(&profile.domain.as_str()) {
                warn!("Mentor {id} has unrecognised domain {:?}", profile.domain);
            }
            // The slug is the identifier; a seed-supplied id would shadow it.
            profile.extra.remove("id");
            if mentors.insert(id.clone(), profile).is_some() {
                warn!("Duplicate mentor slug {id}; keeping the later record");
            }
        }
        Self { mentors }
    }

    /// Reads a JSON array of profiles. A malformed file is a startup error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mentors file {}", path.display()))?;
        let profiles: Vec<MentorProfile> = serde_json::from_str(&raw)
            .with_context(|| format!("Mentors file {} is not a valid profile list", path.display()))?;
        let directory = Self::from_profiles(profiles);
        info!("Loaded {} mentors from {}", directory.len(), path.display());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn get(&self, id: &str) -> Option<MentorRecord> {
        self.mentors.get(id).map(|profile| MentorRecord {
            id: id.to_string(),
            profile: profile.clone(),
        })
    }

    pub fn query(&self, query: &MentorQuery) -> MentorPage {
        let matching: Vec<(&String, &MentorProfile)> = self
            .mentors
            .iter()
            .filter(|(_, p)| matches_domain(p, query.domain.as_deref()))
            .filter(|(_, p)| matches_search(p, query.search.as_deref()))
            .collect();

        let total = matching.len();
        let page = usize::try_from(query.page.unwrap_or(1).max(1)).unwrap_or(usize::MAX);
        let mentors = matching
            .into_iter()
            .skip((page - 1).saturating_mul(PAGE_SIZE))
            .take(PAGE_SIZE)
            .map(|(id, profile)| MentorRecord {
                id: id.clone(),
                profile: profile.clone(),
            })
            .collect();

        MentorPage {
            mentors,
            total,
            page,
            page_count: total.div_ceil(PAGE_SIZE),
        }
    }
}

fn matches_domain(profile: &MentorProfile, domain: Option<&str>) -> bool {
    match domain {
        None | Some(ALL_DOMAINS) | Some("") => true,
        Some(domain) => profile.domain == domain,
    }
}

/// Case-insensitive substring match on name, company or any skill.
fn matches_search(profile: &MentorProfile, search: Option<&str>) -> bool {
    let needle = match search.map(str::trim) {
        None | Some("") => return true,
        Some(s) => s.to_lowercase(),
    };

    profile.name.to_lowercase().contains(&needle)
        || profile
            .company
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(&needle))
        || profile
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Map;

    use super::*;

    fn mentor(name: &str, domain: &str, company: Option<&str>, skills: &[&str]) -> MentorProfile {
        MentorProfile {
            name: name.to_string(),
            domain: domain.to_string(),
            company: company.map(str::to_string),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn sample() -> MentorDirectory {
        MentorDirectory::from_profiles(vec![
            mentor("Zara Khan", "Frontend", Some("Figma"), &["React", "CSS"]),
            mentor("Arjun Mehta", "Backend", Some("Razorpay"), &["Go", "PostgreSQL"]),
            mentor("Meera Nair", "Data Science", None, &["Python", "SQL"]),
            mentor("Kabir Singh", "Backend", Some("Zomato"), &["Rust"]),
        ])
    }

    fn ids(page: &MentorPage) -> Vec<&str> {
        page.mentors.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_listing_is_in_slug_order() {
        let page = sample().query(&MentorQuery::default());
        assert_eq!(
            ids(&page),
            vec!["arjun-mehta", "kabir-singh", "meera-nair", "zara-khan"]
        );
        assert_eq!(page.total, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_domain_filter_and_all_domains() {
        let dir = sample();
        let backend = dir.query(&MentorQuery {
            domain: Some("Backend".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&backend), vec!["arjun-mehta", "kabir-singh"]);

        let all = dir.query(&MentorQuery {
            domain: Some(ALL_DOMAINS.to_string()),
            ..Default::default()
        });
        assert_eq!(all.total, 4);
    }

    #[test]
    fn test_search_matches_name_company_and_skills() {
        let dir = sample();
        let by = |q: &str| {
            ids(&dir.query(&MentorQuery {
                search: Some(q.to_string()),
                ..Default::default()
            }))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
        };
        assert_eq!(by("  meera "), vec!["meera-nair"]);
        assert_eq!(by("RAZOR"), vec!["arjun-mehta"]);
        assert_eq!(by("sql"), vec!["arjun-mehta", "meera-nair"]);
        assert_eq!(by("   ").len(), 4);
    }

    #[test]
    fn test_search_combines_with_domain() {
        let page = sample().query(&MentorQuery {
            domain: Some("Backend".to_string()),
            search: Some("rust".to_string()),
            page: None,
        });
        assert_eq!(ids(&page), vec!["kabir-singh"]);
    }

    #[test]
    fn test_pagination() {
        let profiles = (0..23).map(|i| mentor(&format!("Mentor {i:02}"), "DevOps", None, &[]));
        let dir = MentorDirectory::from_profiles(profiles);

        let third = dir.query(&MentorQuery {
            page: Some(3),
            ..Default::default()
        });
        assert_eq!(third.page_count, 3);
        assert_eq!(ids(&third), vec!["mentor-20", "mentor-21", "mentor-22"]);

        let zero = dir.query(&MentorQuery {
            page: Some(0),
            ..Default::default()
        });
        assert_eq!(zero.page, 1);
        assert_eq!(zero.mentors.len(), PAGE_SIZE);

        let negative = dir.query(&MentorQuery {
            page: Some(-4),
            ..Default::default()
        });
        assert_eq!(negative.page, 1);
        assert_eq!(ids(&negative), ids(&zero));

        let past_end = dir.query(&MentorQuery {
            page: Some(9),
            ..Default::default()
        });
        assert!(past_end.mentors.is_empty());
        assert_eq!(past_end.total, 23);
    }

    #[test]
    fn test_duplicate_slug_keeps_later_record() {
        let dir = MentorDirectory::from_profiles(vec![
            mentor("Arjun Mehta", "Backend", Some("Old Co"), &[]),
            mentor("arjun  mehta", "Backend", Some("New Co"), &[]),
            mentor("???", "Backend", None, &[]),
        ]);
        assert_eq!(dir.len(), 1);
        let record = dir.get("arjun-mehta").unwrap();
        assert_eq!(record.profile.company.as_deref(), Some("New Co"));
    }

    #[test]
    fn test_load_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Meera Nair", "domain": "Data Science", "skills": ["Python"], "id": "x", "story": "s"}}]"#
        )
        .unwrap();

        let dir = MentorDirectory::load(file.path()).unwrap();
        let record = dir.get("meera-nair").unwrap();
        assert_eq!(record.profile.extra.get("story").unwrap(), "s");
        assert!(record.profile.extra.get("id").is_none());
    }

    #[test]
    fn test_load_rejects_malformed_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "not a list"}}"#).unwrap();
        assert!(MentorDirectory::load(file.path()).is_err());
        assert!(MentorDirectory::load(Path::new("/nonexistent/mentors.json")).is_err());
    }
}
