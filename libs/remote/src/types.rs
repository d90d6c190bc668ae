//! Wire types for the server-backed API
//!
//! These mirror the server's own JSON shapes (integer row ids, string
//! timestamps) and are intentionally separate from the portal models: the
//! two persistence paths do not share a contract.

use serde::{Deserialize, Serialize};

/// Ticket row as the server stores it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTicket {
    pub id: i64,
    pub ticket_number: Option<String>,
    pub user_id: Option<i64>,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    pub priority: String,
    pub category: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Ticket creation request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRemoteTicket {
    pub subject: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// Ticket update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRemoteTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// User row as the server stores it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Option<String>,
    pub created_at: Option<String>,
}

/// Notification settings held by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub sms_enabled: bool,
    pub sms_recipient: Option<String>,
    pub notify_email: Option<String>,
}

/// Page view report posted to the analytics endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Per-page view count in the analytics summary
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCount {
    pub path: String,
    pub views: i64,
}

/// Server-side analytics summary
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_views: i64,
    #[serde(default)]
    pub unique_visitors: i64,
    #[serde(default)]
    pub top_pages: Vec<PageCount>,
}

// Response envelopes: every endpoint answers `{ success: bool, ... }`, with
// `message` carrying the failure reason when success is false.

#[derive(Debug, Deserialize)]
pub struct TicketsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tickets: Vec<RemoteTicket>,
}

#[derive(Debug, Deserialize)]
pub struct TicketResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub ticket: Option<RemoteTicket>,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<RemoteUser>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<RemoteUser>,
}

#[derive(Debug, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub settings: Option<Settings>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub analytics: Option<AnalyticsSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ExcludedIpsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ips: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MyIpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_envelope_decodes() {
        let raw = r#"{
            "success": true,
            "ticket": {
                "id": 7,
                "ticketNumber": "TKT-20260807-042",
                "userId": null,
                "subject": "Bug report",
                "description": "Checkout fails",
                "status": "new",
                "priority": "high",
                "category": "bug",
                "contactName": "Guest",
                "contactEmail": "guest@example.com",
                "contactPhone": null,
                "createdAt": "2026-08-07 10:00:00",
                "updatedAt": "2026-08-07 10:00:00"
            }
        }"#;

        let body: TicketResponse = serde_json::from_str(raw).expect("Failed to decode envelope");
        assert!(body.success);

        let ticket = body.ticket.expect("envelope has no ticket");
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.ticket_number.as_deref(), Some("TKT-20260807-042"));
        assert_eq!(ticket.user_id, None);
    }

    #[test]
    fn test_failure_envelope_decodes_without_payload() {
        let raw = r#"{"success": false, "message": "Ticket not found"}"#;

        let body: TicketResponse = serde_json::from_str(raw).expect("Failed to decode envelope");
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("Ticket not found"));
        assert!(body.ticket.is_none());
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let update = UpdateRemoteTicket {
            status: Some("resolved".to_string()),
            ..UpdateRemoteTicket::default()
        };

        let raw = serde_json::to_string(&update).expect("Failed to encode request");
        assert_eq!(raw, r#"{"status":"resolved"}"#);
    }
}
