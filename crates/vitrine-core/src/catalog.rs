//! Portfolio catalog.
//!
//! The catalog maps a project id to a title, a category tag, and an
//! ordered list of gallery image paths. It is loaded once at startup from
//! a JSON resource (the embedded default, or a file given on the command
//! line) and is immutable for the session; only the gallery modal and the
//! portfolio grid read it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Default catalog shipped with the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

/// Category tag carried by each project, used by the filter pills.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// Brand identity work
    Branding,
    /// Social media campaigns and posts
    Social,
    /// Motion graphics pieces
    Motion,
}

impl ProjectCategory {
    /// Label shown on the filter pill.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Branding => "Branding",
            ProjectCategory::Social => "Social Media",
            ProjectCategory::Motion => "Motion",
        }
    }
}

/// One portfolio project.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: ProjectCategory,
    /// Gallery images in display order. Never empty after validation.
    pub images: Vec<String>,
}

impl Project {
    /// Thumbnail shown in the portfolio grid (the first gallery image).
    pub fn cover(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

/// Immutable project catalog, in display order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed projects, checking invariants:
    /// unique ids and a non-empty image list per project.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, VitrineError> {
        let mut index = HashMap::with_capacity(projects.len());
        for (pos, project) in projects.iter().enumerate() {
            if project.images.is_empty() {
                return Err(VitrineError::CatalogInvalid(format!(
                    "project '{}' has no images",
                    project.id
                )));
            }
            if index.insert(project.id.clone(), pos).is_some() {
                return Err(VitrineError::CatalogInvalid(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
        }
        Ok(Self { projects, index })
    }

    /// Parse a catalog from its JSON resource form (an ordered array of
    /// projects).
    pub fn from_json(json: &str) -> Result<Self, VitrineError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Load a catalog from a file on disk.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), projects = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, VitrineError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Look up a project by id. A miss is a defined no-op for callers, not
    /// an error.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|&pos| &self.projects[pos])
    }

    /// All projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Categories that actually occur in the catalog, in display order of
    /// first appearance. Drives which filter pills are offered.
    pub fn categories(&self) -> Vec<ProjectCategory> {
        let mut seen = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: ProjectCategory, images: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("{id} title"),
            category,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn embedded_catalog_parses_and_validates() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");
        assert!(catalog.len() >= 15);
        for p in catalog.projects() {
            assert!(!p.images.is_empty(), "{} has no images", p.id);
            assert!(!p.cover().is_empty());
        }
    }

    #[test]
    fn embedded_catalog_keeps_known_ids() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");
        for id in ["divo", "vira", "sky", "himo", "bison", "socialmix"] {
            assert!(catalog.get(id).is_some(), "missing project '{id}'");
        }
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn lookup_preserves_image_order() {
        let a = project("a", ProjectCategory::Branding, &["1.png", "2.png", "3.png"]);
        let catalog = Catalog::from_projects(vec![a]).unwrap();
        let got = catalog.get("a").unwrap();
        assert_eq!(got.images, vec!["1.png", "2.png", "3.png"]);
        assert_eq!(got.cover(), "1.png");
    }

    #[test]
    fn empty_image_list_is_rejected() {
        let bad = project("a", ProjectCategory::Social, &[]);
        assert!(matches!(
            Catalog::from_projects(vec![bad]),
            Err(VitrineError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = project("a", ProjectCategory::Branding, &["1.png"]);
        let b = project("a", ProjectCategory::Social, &["2.png"]);
        assert!(matches!(
            Catalog::from_projects(vec![a, b]),
            Err(VitrineError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(VitrineError::CatalogParse(_))
        ));
    }

    #[test]
    fn categories_in_order_of_first_appearance() {
        let catalog = Catalog::from_projects(vec![
            project("a", ProjectCategory::Branding, &["1.png"]),
            project("b", ProjectCategory::Social, &["2.png"]),
            project("c", ProjectCategory::Branding, &["3.png"]),
        ])
        .unwrap();
        assert_eq!(
            catalog.categories(),
            vec![ProjectCategory::Branding, ProjectCategory::Social]
        );
    }
}
