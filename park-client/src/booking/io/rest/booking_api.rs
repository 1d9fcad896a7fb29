//! HTTP client for the park booking API.
//!
//! Implements both collaborator traits: schedules come from `GET /horarios/`,
//! bookings go to `POST /inscripciones/`. Every failure of a booking call is
//! classified into a [`BookingError`] category here, so nothing above this
//! layer ever sees a status code or a transport error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use shared::{ApiErrorBody, ApiSchedule, InscriptionRecord};
use std::time::Duration;

use super::mappers::{BookingMapper, ScheduleMapper};
use crate::booking::domain::commands::booking::{BookingReceipt, BookingRequest};
use crate::booking::domain::errors::BookingError;
use crate::booking::domain::models::schedule::ScheduleSlot;
use crate::booking::storage::{BookingGateway, ScheduleSource};

const SCHEDULES_PATH: &str = "/horarios/";
const INSCRIPTIONS_PATH: &str = "/inscripciones/";

/// Marker the API uses in capacity rejections ("No hay cupo disponible")
const CAPACITY_MARKER: &str = "cupo";

#[derive(Clone)]
pub struct RestBookingApi {
    client: Client,
    base_url: String,
}

impl RestBookingApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ScheduleSource for RestBookingApi {
    async fn fetch_schedules(&self) -> Result<Vec<ScheduleSlot>> {
        let url = self.url(SCHEDULES_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .context("Schedule request was rejected")?;

        let schedules: Vec<ApiSchedule> = response
            .json()
            .await
            .context("Failed to parse schedule list")?;

        Ok(ScheduleMapper::to_domain_list(schedules))
    }
}

#[async_trait]
impl BookingGateway for RestBookingApi {
    async fn create_booking(&self, request: &BookingRequest) -> std::result::Result<BookingReceipt, BookingError> {
        let url = self.url(INSCRIPTIONS_PATH);
        info!("🌐 POST {} for schedule {}", url, request.schedule_id);

        let response = self
            .client
            .post(&url)
            .json(&BookingMapper::to_dto(request))
            .send()
            .await
            .map_err(|e| BookingError::Network { detail: e.to_string() })?;

        let status = response.status();
        if status.is_success() {
            let records = response
                .json::<Vec<InscriptionRecord>>()
                .await
                .map_err(|e| BookingError::Server {
                    status: Some(status.as_u16()),
                    detail: format!("unreadable success body: {}", e),
                })?;
            return Ok(BookingMapper::to_receipt(records));
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify_failure(status, &body);
        warn!("🌐 Booking API answered {} ({})", status, error.category());
        Err(error)
    }
}

/// Map a non-success response to a failure category
pub fn classify_failure(status: StatusCode, body: &str) -> BookingError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message().map(str::to_string))
        .unwrap_or_else(|| if body.is_empty() { status.to_string() } else { body.to_string() });

    match status {
        StatusCode::NOT_FOUND => BookingError::NotFound { detail },
        StatusCode::CONFLICT => BookingError::DuplicateRegistration { detail },
        StatusCode::BAD_REQUEST if detail.to_lowercase().contains(CAPACITY_MARKER) => {
            BookingError::CapacityConflict { detail }
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => BookingError::Validation { detail },
        status => BookingError::Server {
            status: Some(status.as_u16()),
            detail,
        },
    }
}
