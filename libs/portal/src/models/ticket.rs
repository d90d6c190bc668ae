//! Ticket model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::project::ProjectType;

/// Kind of request a ticket was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    NewProject,
    TechnicalIssue,
}

/// Reported issue type for technical tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Bug,
    Feature,
    Security,
    Downtime,
    Payment,
    Question,
    Other,
}

impl IssueType {
    /// Human-readable label used for templated subjects
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Bug => "Bug report",
            IssueType::Feature => "Feature request",
            IssueType::Security => "Security concern",
            IssueType::Downtime => "Site downtime",
            IssueType::Payment => "Payment issue",
            IssueType::Question => "General question",
            IssueType::Other => "Other issue",
        }
    }
}

/// Derived ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Project,
    Bug,
    Feature,
    Support,
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

/// Ticket status
///
/// Transitions are deliberately unconstrained: any status may be set to any
/// other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
}

/// Support or project ticket
///
/// `ticket_number` is assigned once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub ticket_number: String,
    /// Owning account; `None` for guest submissions
    pub user_id: Option<String>,
    pub request_type: RequestType,
    pub project_type: Option<ProjectType>,
    pub issue_type: Option<IssueType>,
    pub category: TicketCategory,
    pub priority: Priority,
    pub status: TicketStatus,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    // Contact details for unauthenticated submitters
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Ticket creation payload
///
/// Category, priority, subject, and the ticket number are derived at
/// creation; an explicit `priority` wins over the derived one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketInput {
    pub user_id: Option<String>,
    pub request_type: RequestType,
    pub project_type: Option<ProjectType>,
    pub issue_type: Option<IssueType>,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

/// Ticket update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTicket {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub user_id: Option<String>,
}
