use gloo::net::http::{Request, Response};
use shared::{
    ApiError, DashboardConfig, ReservationCollection, ReservationSource, StatusTransport,
    StatusUpdate, MERGE_PATCH_CONTENT_TYPE,
};

use crate::services::logging::Logger;

/// API client for the booking backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: DashboardConfig,
}

impl ApiClient {
    pub fn with_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Get the full reservation collection; filtering happens client side
    pub async fn get_reservations(&self) -> Result<ReservationCollection, ApiError> {
        let response = Request::get(&self.config.reservations_url)
            .send()
            .await
            .map_err(ApiError::network)?;

        let response = Self::check_status(response).await?;
        let body = response.text().await.map_err(ApiError::network)?;
        let collection = ReservationCollection::from_json(&body).map_err(ApiError::decode)?;

        if collection.skipped > 0 {
            Logger::warn_with_component(
                "api",
                &format!(
                    "Skipped {} reservation(s) with unreadable dates",
                    collection.skipped
                ),
            );
        }
        Ok(collection)
    }

    /// PATCH the status of one lodging. The JSON answer only confirms success.
    pub async fn update_lodging_status(&self, update: &StatusUpdate) -> Result<(), ApiError> {
        let url = update.url(&self.config.lodgings_url);

        let response = Request::patch(&url)
            .header("Content-Type", MERGE_PATCH_CONTENT_TYPE)
            .send()
            .await
            .map_err(ApiError::network)?;

        let response = Self::check_status(response).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(ApiError::decode)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http { status, body })
    }
}

impl ReservationSource for ApiClient {
    async fn fetch_collection(&self) -> Result<ReservationCollection, ApiError> {
        self.get_reservations().await
    }
}

impl StatusTransport for ApiClient {
    async fn patch_status(&self, update: &StatusUpdate) -> Result<(), ApiError> {
        self.update_lodging_status(update).await
    }
}
