//! Project store

use std::sync::Arc;

use chrono::Utc;
use common::storage::KeyValueStore;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ids::record_id;
use crate::keys;
use crate::models::{NewProject, Priority, Project, ProjectStatus, UpdateProject};
use crate::stores::collection;
use crate::validation::validate_name;

/// Project store
#[derive(Clone)]
pub struct ProjectStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProjectStore {
    /// Create a new project store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get all projects
    pub fn get_all(&self) -> StoreResult<Vec<Project>> {
        collection::read(&self.kv, keys::PROJECTS)
    }

    /// Find a project by id
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Project>> {
        Ok(self.get_all()?.into_iter().find(|p| p.id == id))
    }

    /// Get all projects belonging to an account
    pub fn for_user(&self, user_id: &str) -> StoreResult<Vec<Project>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect())
    }

    /// Create a project, deriving its slug
    pub fn create(&self, new_project: NewProject) -> StoreResult<Project> {
        info!("Creating project: {}", new_project.name);

        validate_name(&new_project.name).map_err(StoreError::Validation)?;
        if new_project.user_id.is_empty() {
            return Err(StoreError::Validation("Owner is required".to_string()));
        }

        let now = Utc::now();
        let project = Project {
            id: record_id(),
            slug: derive_slug(&new_project.name, now.timestamp_millis()),
            user_id: new_project.user_id,
            name: new_project.name,
            project_type: new_project.project_type,
            status: ProjectStatus::Draft,
            priority: new_project.priority.unwrap_or(Priority::Normal),
            budget: new_project.budget,
            timeline: new_project.timeline,
            description: new_project.description,
            created_at: now,
            updated_at: now,
        };

        let mut projects = self.get_all()?;
        projects.push(project.clone());
        collection::write(&self.kv, keys::PROJECTS, &projects)?;

        Ok(project)
    }

    /// Update a project; the slug is never regenerated
    pub fn update(&self, id: &str, update: UpdateProject) -> StoreResult<Project> {
        info!("Updating project: {}", id);

        let mut projects = self.get_all()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound);
        };

        if let Some(name) = update.name {
            validate_name(&name).map_err(StoreError::Validation)?;
            project.name = name;
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(priority) = update.priority {
            project.priority = priority;
        }
        if let Some(budget) = update.budget {
            project.budget = budget;
        }
        if let Some(timeline) = update.timeline {
            project.timeline = timeline;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        project.updated_at = Utc::now();

        let updated = project.clone();
        collection::write(&self.kv, keys::PROJECTS, &projects)?;

        Ok(updated)
    }

    /// Delete a project
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        info!("Deleting project: {}", id);

        let mut projects = self.get_all()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Err(StoreError::NotFound);
        }

        collection::write(&self.kv, keys::PROJECTS, &projects)
    }
}

/// Derive a URL slug from a project name
///
/// The timestamp suffix keeps slugs unique even for identical names.
fn derive_slug(name: &str, millis: i64) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        format!("project-{}", millis)
    } else {
        format!("{}-{}", slug, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug("My New Shop!", 1700000000000), "my-new-shop-1700000000000");
        assert_eq!(derive_slug("  spaced   out  ", 7), "spaced-out-7");
        assert_eq!(derive_slug("!!!", 7), "project-7");
    }

    #[test]
    fn test_same_name_yields_distinct_slugs() {
        assert_ne!(derive_slug("Shop", 1), derive_slug("Shop", 2));
    }
}
