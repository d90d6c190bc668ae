//! Ticket store and derivation rules

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::storage::KeyValueStore;
use rand::{Rng, thread_rng};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ids::record_id;
use crate::keys;
use crate::models::{
    CreateTicketInput, IssueType, Priority, RequestType, Ticket, TicketCategory, TicketStatus,
    UpdateTicket,
};
use crate::stores::collection;
use crate::validation::validate_email;

/// Ticket store
#[derive(Clone)]
pub struct TicketStore {
    kv: Arc<dyn KeyValueStore>,
}

impl TicketStore {
    /// Create a new ticket store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Get all tickets
    pub fn get_all(&self) -> StoreResult<Vec<Ticket>> {
        collection::read(&self.kv, keys::TICKETS)
    }

    /// Find a ticket by id
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Ticket>> {
        Ok(self.get_all()?.into_iter().find(|t| t.id == id))
    }

    /// Get all tickets belonging to an account
    pub fn for_user(&self, user_id: &str) -> StoreResult<Vec<Ticket>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.user_id.as_deref() == Some(user_id))
            .collect())
    }

    /// Create a ticket, deriving category, priority, subject, and the
    /// ticket number
    pub fn create(&self, input: CreateTicketInput) -> StoreResult<Ticket> {
        info!("Creating ticket ({:?})", input.request_type);

        // Guest submissions need a reachable contact address
        if input.user_id.is_none() {
            validate_email(&input.contact_email).map_err(StoreError::Validation)?;
        }

        let now = Utc::now();
        let ticket = Ticket {
            id: record_id(),
            ticket_number: ticket_number(now),
            user_id: input.user_id,
            request_type: input.request_type,
            project_type: input.project_type,
            issue_type: input.issue_type,
            category: derive_category(input.request_type, input.issue_type),
            priority: derive_priority(input.priority, input.issue_type),
            status: TicketStatus::New,
            subject: derive_subject(input.request_type, input.project_type, input.issue_type),
            description: input.description,
            contact_name: input.contact_name,
            contact_email: input.contact_email,
            contact_phone: input.contact_phone,
            created_at: now,
            updated_at: now,
            first_response_at: None,
            resolved_at: None,
            closed_at: None,
        };

        let mut tickets = self.get_all()?;
        tickets.push(ticket.clone());
        collection::write(&self.kv, keys::TICKETS, &tickets)?;

        info!("Created ticket {}", ticket.ticket_number);

        Ok(ticket)
    }

    /// Update a ticket
    ///
    /// Status changes stamp the lifecycle timestamps: first_response_at when
    /// a ticket first leaves `new`, resolved_at/closed_at on first entry
    /// into those statuses. The ticket number never changes.
    pub fn update(&self, id: &str, update: UpdateTicket) -> StoreResult<Ticket> {
        info!("Updating ticket: {}", id);

        let mut tickets = self.get_all()?;
        let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
            return Err(StoreError::NotFound);
        };

        let now = Utc::now();
        if let Some(status) = update.status {
            apply_status(ticket, status, now);
        }
        if let Some(priority) = update.priority {
            ticket.priority = priority;
        }
        if let Some(description) = update.description {
            ticket.description = description;
        }
        if let Some(user_id) = update.user_id {
            ticket.user_id = Some(user_id);
        }
        ticket.updated_at = now;

        let updated = ticket.clone();
        collection::write(&self.kv, keys::TICKETS, &tickets)?;

        Ok(updated)
    }

    /// Set a ticket's status
    pub fn set_status(&self, id: &str, status: TicketStatus) -> StoreResult<Ticket> {
        self.update(
            id,
            UpdateTicket {
                status: Some(status),
                ..UpdateTicket::default()
            },
        )
    }

    /// Delete a ticket
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        info!("Deleting ticket: {}", id);

        let mut tickets = self.get_all()?;
        let before = tickets.len();
        tickets.retain(|t| t.id != id);

        if tickets.len() == before {
            return Err(StoreError::NotFound);
        }

        collection::write(&self.kv, keys::TICKETS, &tickets)
    }
}

fn apply_status(ticket: &mut Ticket, status: TicketStatus, now: DateTime<Utc>) {
    if ticket.status == TicketStatus::New
        && status != TicketStatus::New
        && ticket.first_response_at.is_none()
    {
        ticket.first_response_at = Some(now);
    }
    if status == TicketStatus::Resolved && ticket.resolved_at.is_none() {
        ticket.resolved_at = Some(now);
    }
    if status == TicketStatus::Closed && ticket.closed_at.is_none() {
        ticket.closed_at = Some(now);
    }
    ticket.status = status;
}

/// Generate a human-readable ticket number: `TKT-<YYYYMMDD>-<3 digits>`
///
/// The random suffix is not globally unique; a collision is possible and
/// goes undetected.
fn ticket_number(now: DateTime<Utc>) -> String {
    format!(
        "TKT-{}-{:03}",
        now.format("%Y%m%d"),
        thread_rng().gen_range(0..1000)
    )
}

fn derive_category(request_type: RequestType, issue_type: Option<IssueType>) -> TicketCategory {
    match request_type {
        RequestType::NewProject => TicketCategory::Project,
        RequestType::TechnicalIssue => match issue_type {
            Some(IssueType::Bug) => TicketCategory::Bug,
            Some(IssueType::Feature) => TicketCategory::Feature,
            _ => TicketCategory::Support,
        },
    }
}

fn derive_priority(explicit: Option<Priority>, issue_type: Option<IssueType>) -> Priority {
    if let Some(priority) = explicit {
        return priority;
    }

    match issue_type {
        Some(IssueType::Security) | Some(IssueType::Downtime) => Priority::Critical,
        Some(IssueType::Payment) | Some(IssueType::Bug) => Priority::High,
        _ => Priority::Normal,
    }
}

fn derive_subject(
    request_type: RequestType,
    project_type: Option<crate::models::ProjectType>,
    issue_type: Option<IssueType>,
) -> String {
    match request_type {
        RequestType::NewProject => match project_type {
            Some(pt) => format!("New project inquiry: {}", pt.label()),
            None => "New project inquiry".to_string(),
        },
        RequestType::TechnicalIssue => match issue_type {
            Some(it) => it.label().to_string(),
            None => "Technical issue".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_derivation() {
        assert_eq!(
            derive_category(RequestType::NewProject, None),
            TicketCategory::Project
        );
        assert_eq!(
            derive_category(RequestType::TechnicalIssue, Some(IssueType::Bug)),
            TicketCategory::Bug
        );
        assert_eq!(
            derive_category(RequestType::TechnicalIssue, Some(IssueType::Feature)),
            TicketCategory::Feature
        );
        assert_eq!(
            derive_category(RequestType::TechnicalIssue, Some(IssueType::Question)),
            TicketCategory::Support
        );
        assert_eq!(
            derive_category(RequestType::TechnicalIssue, None),
            TicketCategory::Support
        );
    }

    #[test]
    fn test_priority_derivation() {
        // Explicit priority wins
        assert_eq!(
            derive_priority(Some(Priority::Low), Some(IssueType::Security)),
            Priority::Low
        );
        assert_eq!(
            derive_priority(None, Some(IssueType::Security)),
            Priority::Critical
        );
        assert_eq!(
            derive_priority(None, Some(IssueType::Downtime)),
            Priority::Critical
        );
        assert_eq!(derive_priority(None, Some(IssueType::Payment)), Priority::High);
        assert_eq!(derive_priority(None, Some(IssueType::Bug)), Priority::High);
        assert_eq!(derive_priority(None, None), Priority::Normal);
    }

    #[test]
    fn test_subject_templates() {
        assert_eq!(
            derive_subject(
                RequestType::NewProject,
                Some(crate::models::ProjectType::Ecommerce),
                None
            ),
            "New project inquiry: eCommerce store"
        );
        assert_eq!(
            derive_subject(RequestType::TechnicalIssue, None, Some(IssueType::Bug)),
            "Bug report"
        );
    }

    #[test]
    fn test_ticket_number_format() {
        let now = Utc::now();
        let number = ticket_number(now);
        let expected_prefix = format!("TKT-{}-", now.format("%Y%m%d"));

        assert!(number.starts_with(&expected_prefix));
        assert_eq!(number.len(), expected_prefix.len() + 3);
        assert!(
            number[expected_prefix.len()..]
                .chars()
                .all(|c| c.is_ascii_digit())
        );
    }
}
