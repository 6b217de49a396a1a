//! Portfolio content: profile, projects, and skills.
//!
//! Content is plain data deserialized from TOML. The shell only reads it;
//! panels carry copies of the pieces they show.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

const BUILTIN: &str = include_str!("../content/portfolio.toml");

/// Everything the portfolio commands can show.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub twitter: Option<String>,
    pub email: String,
}

impl Social {
    /// (label, target) pairs in display order.
    pub fn links(&self) -> Vec<(String, String)> {
        let mut links = vec![
            ("GitHub".to_string(), self.github.clone()),
            ("LinkedIn".to_string(), self.linkedin.clone()),
        ];
        if let Some(ref twitter) = self.twitter {
            links.push(("Twitter".to_string(), twitter.clone()));
        }
        links.push(("Email".to_string(), format!("mailto:{}", self.email)));
        links
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sector: String,
    /// Kept as text: the year filter compares strings exactly.
    pub year: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl Project {
    /// Inclusive OR of the filter predicates: sector or type substring
    /// (case-insensitive), exact year, or the literal `featured`.
    pub fn matches(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.sector.to_lowercase().contains(&needle)
            || self.kind.to_lowercase().contains(&needle)
            || self.year == filter
            || (needle == "featured" && self.featured)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Proficiency, 0-100.
    pub level: u8,
}

impl Skill {
    /// Number of blocks in a proficiency bar.
    pub const BAR_WIDTH: usize = 20;

    /// Filled blocks for this skill's bar (one block per 5%).
    pub fn filled_blocks(&self) -> usize {
        let level = f32::from(self.level.min(100));
        (level / 5.0).round() as usize
    }
}

impl Portfolio {
    /// The portfolio compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN)
    }

    /// Parse and validate a portfolio document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Read a portfolio document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Content(format!("cannot read {}: {e}", path.display()))
        })?;
        let portfolio = Self::from_toml(&text)?;
        log::info!(
            "Loaded portfolio from {} ({} projects)",
            path.display(),
            portfolio.projects.len()
        );
        Ok(portfolio)
    }

    /// Find a project by id, or by name ignoring case.
    pub fn find_project(&self, query: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == query || p.name.to_lowercase() == query.to_lowercase())
            .or_else(|| {
                self.projects
                    .iter()
                    .find(|p| p.id.eq_ignore_ascii_case(query))
            })
    }

    /// Projects matching `filter`, in document order.
    pub fn filter_projects(&self, filter: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.matches(filter)).collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(FolioError::Content(format!(
                    "project '{}' has an empty id",
                    project.name
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(FolioError::Content(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }
        for skill in self.skills.iter().flat_map(|c| &c.skills) {
            if skill.level > 100 {
                return Err(FolioError::Content(format!(
                    "skill '{}' level {} is above 100",
                    skill.name, skill.level
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[profile]
name = "Test Person"
title = "Tester"

[profile.social]
github = "https://github.com/t"
linkedin = "https://linkedin.com/in/t"
email = "t@example.com"

[[projects]]
id = "alpha"
name = "Alpha"
type = "Web App"
sector = "Fintech"
year = "2025"
featured = true
description = "A"

[[projects]]
id = "beta"
name = "Beta Shop"
type = "Storefront"
sector = "E-commerce"
year = "2024"
description = "B"
"#;

    #[test]
    fn builtin_parses() {
        let p = Portfolio::builtin().unwrap();
        assert!(!p.profile.name.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.skills.is_empty());
    }

    #[test]
    fn minimal_defaults() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert!(p.skills.is_empty());
        assert!(p.profile.bio.is_empty());
        assert!(p.profile.social.twitter.is_none());
        assert!(p.projects[1].tech.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let doc = format!(
            "{MINIMAL}\n[[projects]]\nid = \"alpha\"\nname = \"X\"\ntype = \"t\"\nsector = \"s\"\nyear = \"1\"\ndescription = \"d\"\n"
        );
        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(matches!(err, FolioError::Content(_)));
    }

    #[test]
    fn filter_by_sector_ignores_case() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        let ids: Vec<&str> = p.filter_projects("FINTECH").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha"]);
    }

    #[test]
    fn filter_by_type_substring() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        let ids: Vec<&str> = p.filter_projects("store").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["beta"]);
    }

    #[test]
    fn filter_by_exact_year() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert_eq!(p.filter_projects("2024").len(), 1);
        assert!(p.filter_projects("202").is_empty());
    }

    #[test]
    fn filter_featured() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        let ids: Vec<&str> = p.filter_projects("featured").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha"]);
    }

    #[test]
    fn filter_is_inclusive_or() {
        // "e" hits the sector of both projects.
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert_eq!(p.filter_projects("e").len(), 2);
    }

    #[test]
    fn find_by_id_or_name() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        assert_eq!(p.find_project("beta").unwrap().id, "beta");
        assert_eq!(p.find_project("beta shop").unwrap().id, "beta");
        assert_eq!(p.find_project("ALPHA").unwrap().id, "alpha");
        assert!(p.find_project("gamma").is_none());
    }

    #[test]
    fn skill_blocks_round() {
        let skill = |level| Skill {
            name: "x".into(),
            icon: String::new(),
            level,
        };
        assert_eq!(skill(0).filled_blocks(), 0);
        assert_eq!(skill(92).filled_blocks(), 18);
        assert_eq!(skill(93).filled_blocks(), 19);
        assert_eq!(skill(100).filled_blocks(), Skill::BAR_WIDTH);
    }

    #[test]
    fn social_links_include_mailto() {
        let p = Portfolio::from_toml(MINIMAL).unwrap();
        let links = p.profile.social.links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].1, "mailto:t@example.com");
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let path = Path::new("/nonexistent/folio/portfolio.toml");
        let err = Portfolio::load(path).unwrap_err();
        assert!(matches!(err, FolioError::Content(_)));
        assert!(err.to_string().contains("/nonexistent/folio/portfolio.toml"));
    }
}
