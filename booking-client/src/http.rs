//! HTTP client for the reservation API

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::{
    MessageResponse, Reservation, ReservationCreate, ReservationCreated, ReservationDelete, Slot,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// Reservation API operations used by the booking view
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Reservations of one table on one day
    async fn list_reservations(
        &self,
        table_id: i64,
        reservation_date: NaiveDate,
    ) -> ClientResult<Vec<Reservation>>;

    async fn create_reservation(
        &self,
        body: &ReservationCreate,
    ) -> ClientResult<ReservationCreated>;

    async fn delete_reservation(&self, reservation_id: i64) -> ClientResult<MessageResponse>;

    /// Slot catalog as seeded on the server
    async fn list_slots(&self) -> ClientResult<Vec<Slot>>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the server's own message; fall back to the raw body
            let message = serde_json::from_str::<ApiResponse>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "Reservation API request failed");
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::InvalidRequest(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::CONFLICT => ClientError::Conflict(message),
                _ => ClientError::Server {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ReservationApi for HttpClient {
    async fn list_reservations(
        &self,
        table_id: i64,
        reservation_date: NaiveDate,
    ) -> ClientResult<Vec<Reservation>> {
        let response = self
            .client
            .get(self.url("/api/reservations"))
            .query(&[
                ("table_id", table_id.to_string()),
                ("reservation_date", reservation_date.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn create_reservation(
        &self,
        body: &ReservationCreate,
    ) -> ClientResult<ReservationCreated> {
        let response = self
            .client
            .post(self.url("/api/reservations"))
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete_reservation(&self, reservation_id: i64) -> ClientResult<MessageResponse> {
        let response = self
            .client
            .delete(self.url("/api/reservations"))
            .json(&ReservationDelete {
                reservation_id: Some(reservation_id),
            })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn list_slots(&self) -> ClientResult<Vec<Slot>> {
        let response = self.client.get(self.url("/api/slots")).send().await?;
        Self::handle_response(response).await
    }
}
