//! Project model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ticket::Priority;

/// Kind of work a project covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Ecommerce,
    BusinessWebsite,
    LandingPage,
    Portfolio,
    Blog,
    WebApp,
    MobileApp,
    Redesign,
    Seo,
    Maintenance,
    Hosting,
    Branding,
    Integration,
    Consulting,
    Other,
}

impl ProjectType {
    /// Human-readable label used for templated subjects
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Ecommerce => "eCommerce store",
            ProjectType::BusinessWebsite => "Business website",
            ProjectType::LandingPage => "Landing page",
            ProjectType::Portfolio => "Portfolio site",
            ProjectType::Blog => "Blog",
            ProjectType::WebApp => "Web application",
            ProjectType::MobileApp => "Mobile application",
            ProjectType::Redesign => "Site redesign",
            ProjectType::Seo => "SEO package",
            ProjectType::Maintenance => "Maintenance plan",
            ProjectType::Hosting => "Hosting",
            ProjectType::Branding => "Branding",
            ProjectType::Integration => "Third-party integration",
            ProjectType::Consulting => "Consulting",
            ProjectType::Other => "Other",
        }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Pending,
    Approved,
    InProgress,
    Review,
    Completed,
    Cancelled,
    OnHold,
}

/// Client project
///
/// `slug` is derived once at creation; its timestamp suffix keeps slugs
/// unique even for identical names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub slug: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub priority: Priority,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub user_id: String,
    pub name: String,
    pub project_type: ProjectType,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub description: String,
}

/// Project update payload; `None` fields are left unchanged
///
/// The slug is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub description: Option<String>,
}
