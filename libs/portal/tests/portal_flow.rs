//! Integration tests for the portal data layer
//!
//! These exercise the stores and the auth service end to end over the
//! in-memory backend, the same way the UI drives them.

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use common::storage::{KeyValueStore, MemoryStore};
use portal::PortalState;
use portal::models::{
    Address, CreateTicketInput, NewHardware, NewLocation, NewProject, NewUser, Priority,
    ProjectType, RequestType, Role, TicketStatus, UpdateHardware, UpdateTicket,
};

fn portal() -> PortalState {
    PortalState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
    )
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "secret1".to_string(),
        name: "A".to_string(),
        company: String::new(),
        phone: String::new(),
        address: Address::default(),
    }
}

#[test]
fn test_ticket_number_matches_today() -> Result<()> {
    let portal = portal();

    let ticket = portal.tickets.create(CreateTicketInput {
        user_id: None,
        request_type: RequestType::NewProject,
        project_type: Some(ProjectType::Ecommerce),
        issue_type: None,
        priority: None,
        description: "Online store for a bakery".to_string(),
        contact_name: "Guest".to_string(),
        contact_email: "guest@example.com".to_string(),
        contact_phone: String::new(),
    })?;

    let expected_prefix = format!("TKT-{}-", Utc::now().format("%Y%m%d"));
    assert!(
        ticket.ticket_number.starts_with(&expected_prefix),
        "unexpected ticket number {}",
        ticket.ticket_number
    );
    let suffix = &ticket.ticket_number[expected_prefix.len()..];
    assert_eq!(suffix.len(), 3);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));

    Ok(())
}

#[test]
fn test_duplicate_registration_leaves_store_unchanged() -> Result<()> {
    let portal = portal();

    portal.auth.register(new_user("a@b.com"))?;
    let before = portal.users.get_all()?.len();

    assert!(portal.auth.register(new_user("a@b.com")).is_err());
    assert_eq!(portal.users.get_all()?.len(), before);

    Ok(())
}

#[test]
fn test_update_round_trip_bumps_updated_at() -> Result<()> {
    let portal = portal();

    let ticket = portal.tickets.create(CreateTicketInput {
        user_id: Some("owner".to_string()),
        request_type: RequestType::TechnicalIssue,
        project_type: None,
        issue_type: None,
        priority: None,
        description: String::new(),
        contact_name: String::new(),
        contact_email: String::new(),
        contact_phone: String::new(),
    })?;
    let before = ticket.updated_at;

    sleep(Duration::from_millis(5));
    portal.tickets.update(
        &ticket.id,
        UpdateTicket {
            description: Some("It broke".to_string()),
            ..UpdateTicket::default()
        },
    )?;

    let reloaded = portal
        .tickets
        .get_by_id(&ticket.id)?
        .expect("ticket disappeared");
    assert_eq!(reloaded.description, "It broke");
    assert!(reloaded.updated_at > before);
    assert_eq!(reloaded.ticket_number, ticket.ticket_number);

    Ok(())
}

#[test]
fn test_get_all_is_idempotent() -> Result<()> {
    let portal = portal();

    portal.auth.register(new_user("a@b.com"))?;
    portal.auth.register(new_user("c@d.com"))?;

    assert_eq!(portal.users.get_all()?, portal.users.get_all()?);

    Ok(())
}

#[test]
fn test_referenced_location_cannot_be_deleted() -> Result<()> {
    let portal = portal();

    let office = portal.locations.create(NewLocation {
        name: "Head office".to_string(),
        address: String::new(),
        notes: String::new(),
    })?;
    let warehouse = portal.locations.create(NewLocation {
        name: "Warehouse".to_string(),
        address: String::new(),
        notes: String::new(),
    })?;
    portal.hardware.create(NewHardware {
        name: "Rack server".to_string(),
        category: "server".to_string(),
        serial_number: "SN-001".to_string(),
        status: None,
        location_id: Some(office.id.clone()),
        notes: String::new(),
    })?;

    assert!(portal.locations.delete(&office.id).is_err());

    let before = portal.locations.get_all()?.len();
    portal.locations.delete(&warehouse.id)?;
    assert_eq!(portal.locations.get_all()?.len(), before - 1);

    Ok(())
}

#[test]
fn test_renamed_location_stays_referenced() -> Result<()> {
    let portal = portal();

    let office = portal.locations.create(NewLocation {
        name: "Head office".to_string(),
        address: String::new(),
        notes: String::new(),
    })?;
    portal.hardware.create(NewHardware {
        name: "Switch".to_string(),
        category: String::new(),
        serial_number: String::new(),
        status: None,
        location_id: Some(office.id.clone()),
        notes: String::new(),
    })?;

    portal.locations.update(
        &office.id,
        portal::models::UpdateLocation {
            name: Some("HQ".to_string()),
            ..Default::default()
        },
    )?;

    // The id-based guard still holds after the rename
    assert!(portal.locations.delete(&office.id).is_err());

    Ok(())
}

#[test]
fn test_register_then_login_sets_user_session() -> Result<()> {
    let portal = portal();

    portal.auth.register(new_user("a@b.com"))?;
    let session = portal.auth.login("a@b.com", "secret1")?;

    assert_eq!(session.role, Role::User);
    assert_eq!(
        portal.auth.current_user().map(|u| u.email),
        Some("a@b.com".to_string())
    );

    // The session is mirrored to storage and restorable
    assert_eq!(portal.auth.restore()?, Some(session));

    Ok(())
}

#[test]
fn test_seeded_admin_login_succeeds_regardless_of_store_contents() -> Result<()> {
    let portal = portal();

    portal.auth.seed_admin("admin@admin.com", "admin")?;
    portal.auth.register(new_user("a@b.com"))?;

    let session = portal.auth.login("admin@admin.com", "admin")?;
    assert_eq!(session.role, Role::Admin);

    // Wrong password still fails; there is no bypass
    assert!(portal.auth.login("admin@admin.com", "nope").is_err());

    Ok(())
}

#[test]
fn test_guest_ticket_requires_contact_email() {
    let portal = portal();

    let result = portal.tickets.create(CreateTicketInput {
        user_id: None,
        request_type: RequestType::TechnicalIssue,
        project_type: None,
        issue_type: None,
        priority: None,
        description: String::new(),
        contact_name: "Guest".to_string(),
        contact_email: String::new(),
        contact_phone: String::new(),
    });

    assert!(result.is_err());
}

#[test]
fn test_ticket_lifecycle_timestamps() -> Result<()> {
    let portal = portal();

    let ticket = portal.tickets.create(CreateTicketInput {
        user_id: Some("owner".to_string()),
        request_type: RequestType::TechnicalIssue,
        project_type: None,
        issue_type: Some(portal::models::IssueType::Bug),
        priority: None,
        description: "Checkout 500s".to_string(),
        contact_name: String::new(),
        contact_email: String::new(),
        contact_phone: String::new(),
    })?;
    assert_eq!(ticket.priority, Priority::High);
    assert_eq!(ticket.status, TicketStatus::New);
    assert!(ticket.first_response_at.is_none());

    let opened = portal.tickets.set_status(&ticket.id, TicketStatus::InProgress)?;
    assert!(opened.first_response_at.is_some());
    assert!(opened.resolved_at.is_none());

    let resolved = portal.tickets.set_status(&ticket.id, TicketStatus::Resolved)?;
    assert!(resolved.resolved_at.is_some());

    // Any status may follow any other
    let reopened = portal.tickets.set_status(&ticket.id, TicketStatus::Open)?;
    assert_eq!(reopened.status, TicketStatus::Open);
    assert!(reopened.resolved_at.is_some());

    Ok(())
}

#[test]
fn test_project_slug_is_stable_across_updates() -> Result<()> {
    let portal = portal();

    let project = portal.projects.create(NewProject {
        user_id: "owner".to_string(),
        name: "Bakery store".to_string(),
        project_type: ProjectType::Ecommerce,
        priority: None,
        budget: "5-10k".to_string(),
        timeline: "2 months".to_string(),
        description: String::new(),
    })?;
    assert!(project.slug.starts_with("bakery-store-"));

    let updated = portal.projects.update(
        &project.id,
        portal::models::UpdateProject {
            name: Some("Bakery shop".to_string()),
            ..Default::default()
        },
    )?;
    assert_eq!(updated.slug, project.slug);

    Ok(())
}

#[test]
fn test_selected_hardware_follows_deletes() -> Result<()> {
    let portal = portal();

    let rack = portal.hardware.create(NewHardware {
        name: "Rack server".to_string(),
        category: String::new(),
        serial_number: String::new(),
        status: None,
        location_id: None,
        notes: String::new(),
    })?;

    portal.hardware.toggle_selected(&rack.id)?;
    assert_eq!(portal.hardware.selected_ids()?, vec![rack.id.clone()]);

    portal.hardware.delete(&rack.id)?;
    assert!(portal.hardware.selected_ids()?.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_collection_degrades_to_empty() -> Result<()> {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    kv.set("pcr_users", "{not valid json")?;

    let portal = PortalState::new(kv, Arc::new(MemoryStore::new()));
    assert!(portal.users.get_all()?.is_empty());

    Ok(())
}

#[test]
fn test_hardware_update_rejects_unknown_location() -> Result<()> {
    let portal = portal();

    let rack = portal.hardware.create(NewHardware {
        name: "Rack server".to_string(),
        category: String::new(),
        serial_number: String::new(),
        status: None,
        location_id: None,
        notes: String::new(),
    })?;

    let result = portal.hardware.update(
        &rack.id,
        UpdateHardware {
            location_id: Some("missing".to_string()),
            ..Default::default()
        },
    );

    assert!(result.is_err());

    Ok(())
}
