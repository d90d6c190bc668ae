//! Asynchronous client for the server-backed portal API

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{ClientError, ClientResult};
use crate::types::{
    AnalyticsResponse, AnalyticsSummary, CreateRemoteTicket, ExcludedIpsResponse, MessageResponse,
    MyIpResponse, PageView, RemoteTicket, RemoteUser, Settings, SettingsResponse, TicketResponse,
    TicketsResponse, UpdateRemoteTicket, UserResponse, UsersResponse,
};

/// Client for the server-backed portal API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:3001")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- Tickets ---

    /// Get all tickets
    pub async fn list_tickets(&self) -> ClientResult<Vec<RemoteTicket>> {
        info!("Fetching tickets");

        let body: TicketsResponse = decode(self.http.get(self.url("/api/tickets")).send().await?).await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.tickets)
    }

    /// Create a ticket
    pub async fn create_ticket(&self, ticket: &CreateRemoteTicket) -> ClientResult<RemoteTicket> {
        info!("Creating remote ticket: {}", ticket.subject);

        let body: TicketResponse = decode(
            self.http
                .post(self.url("/api/tickets"))
                .json(ticket)
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.ticket.ok_or_else(malformed)
    }

    /// Get all tickets belonging to a user
    pub async fn tickets_for_user(&self, user_id: i64) -> ClientResult<Vec<RemoteTicket>> {
        info!("Fetching tickets for user {}", user_id);

        let body: TicketsResponse = decode(
            self.http
                .get(self.url(&format!("/api/tickets/user/{}", user_id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.tickets)
    }

    /// Get a ticket by id
    pub async fn get_ticket(&self, id: i64) -> ClientResult<RemoteTicket> {
        let body: TicketResponse = decode(
            self.http
                .get(self.url(&format!("/api/tickets/{}", id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.ticket.ok_or_else(malformed)
    }

    /// Update a ticket
    pub async fn update_ticket(
        &self,
        id: i64,
        update: &UpdateRemoteTicket,
    ) -> ClientResult<RemoteTicket> {
        info!("Updating remote ticket {}", id);

        let body: TicketResponse = decode(
            self.http
                .put(self.url(&format!("/api/tickets/{}", id)))
                .json(update)
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.ticket.ok_or_else(malformed)
    }

    /// Delete a ticket
    pub async fn delete_ticket(&self, id: i64) -> ClientResult<()> {
        info!("Deleting remote ticket {}", id);

        let body: MessageResponse = decode(
            self.http
                .delete(self.url(&format!("/api/tickets/{}", id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(())
    }

    // --- Users ---

    /// Get all users
    pub async fn list_users(&self) -> ClientResult<Vec<RemoteUser>> {
        let body: UsersResponse = decode(self.http.get(self.url("/api/users")).send().await?).await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.users)
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i64) -> ClientResult<RemoteUser> {
        let body: UserResponse = decode(
            self.http
                .get(self.url(&format!("/api/users/{}", id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.user.ok_or_else(malformed)
    }

    // --- Admin ---

    /// Impersonate a user (admin screens)
    pub async fn impersonate(&self, user_id: i64) -> ClientResult<RemoteUser> {
        info!("Impersonating user {}", user_id);

        let body: UserResponse = decode(
            self.http
                .post(self.url(&format!("/api/admin/impersonate/{}", user_id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.user.ok_or_else(malformed)
    }

    /// Reset a user's password, returning the server's confirmation message
    pub async fn reset_password(&self, user_id: i64) -> ClientResult<String> {
        info!("Resetting password for user {}", user_id);

        let body: MessageResponse = decode(
            self.http
                .post(self.url(&format!("/api/admin/users/{}/reset-password", user_id)))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.message.unwrap_or_else(|| "Password reset".to_string()))
    }

    // --- Settings ---

    /// Get the notification settings
    pub async fn settings(&self) -> ClientResult<Settings> {
        let body: SettingsResponse =
            decode(self.http.get(self.url("/api/settings")).send().await?).await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.settings.ok_or_else(malformed)
    }

    /// Replace the notification settings
    pub async fn update_settings(&self, settings: &Settings) -> ClientResult<Settings> {
        info!("Updating remote settings");

        let body: SettingsResponse = decode(
            self.http
                .put(self.url("/api/settings"))
                .json(settings)
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.settings.ok_or_else(malformed)
    }

    /// Send a test SMS, returning the server's confirmation message
    pub async fn test_sms(&self) -> ClientResult<String> {
        let body: MessageResponse = decode(
            self.http
                .post(self.url("/api/settings/test-sms"))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.message.unwrap_or_else(|| "Test SMS sent".to_string()))
    }

    // --- Analytics ---

    /// Report a page view
    pub async fn record_pageview(&self, view: &PageView) -> ClientResult<()> {
        let body: MessageResponse = decode(
            self.http
                .post(self.url("/api/analytics/pageview"))
                .json(view)
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(())
    }

    /// Get the analytics summary
    pub async fn analytics(&self) -> ClientResult<AnalyticsSummary> {
        let body: AnalyticsResponse =
            decode(self.http.get(self.url("/api/analytics")).send().await?).await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.analytics.ok_or_else(malformed)
    }

    /// Get the IPs excluded from analytics
    pub async fn excluded_ips(&self) -> ClientResult<Vec<String>> {
        let body: ExcludedIpsResponse = decode(
            self.http
                .get(self.url("/api/analytics/excluded-ips"))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.ips)
    }

    /// Replace the IPs excluded from analytics
    pub async fn set_excluded_ips(&self, ips: &[String]) -> ClientResult<Vec<String>> {
        info!("Updating excluded IPs");

        let body: ExcludedIpsResponse = decode(
            self.http
                .put(self.url("/api/analytics/excluded-ips"))
                .json(&ips)
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        Ok(body.ips)
    }

    /// Get the caller's IP as the server sees it
    pub async fn my_ip(&self) -> ClientResult<String> {
        let body: MyIpResponse = decode(
            self.http
                .get(self.url("/api/analytics/my-ip"))
                .send()
                .await?,
        )
        .await?;
        if !body.success {
            return Err(api_error(body.message));
        }
        body.ip.ok_or_else(malformed)
    }
}

/// Decode a response body after rejecting non-success statuses
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }

    Ok(response.json().await?)
}

fn api_error(message: Option<String>) -> ClientError {
    ClientError::Api(message.unwrap_or_else(|| "Request failed".to_string()))
}

fn malformed() -> ClientError {
    ClientError::Api("Malformed server response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(
            client.url("/api/tickets"),
            "http://localhost:3001/api/tickets"
        );
    }

    #[test]
    fn test_path_parameters_are_interpolated() {
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(
            client.url(&format!("/api/tickets/user/{}", 42)),
            "https://api.example.com/api/tickets/user/42"
        );
        assert_eq!(
            client.url(&format!("/api/admin/users/{}/reset-password", 7)),
            "https://api.example.com/api/admin/users/7/reset-password"
        );
    }
}
