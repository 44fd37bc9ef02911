use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::PrayerType;
use crate::prayer_times::arithmetic::format_date_dmy;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no city selected")]
    MissingCity,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prayer times request failed: HTTP {0}")]
    Status(StatusCode),
    #[error("prayer times service answered with code {code}")]
    Api { code: i64 },
    #[error("unexpected response body: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingsRequest {
    pub date: NaiveDate,
    pub city: String,
    pub country: String,
    pub method: u8,
}

/// Raw timing strings as the service sends them, e.g. `"04:40 (EET)"`.
/// A missing field deserializes as empty and later shows as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayTimings {
    #[serde(default)]
    pub fajr: String,
    #[serde(default)]
    pub dhuhr: String,
    #[serde(default)]
    pub asr: String,
    #[serde(default)]
    pub maghrib: String,
    #[serde(default)]
    pub isha: String,
}

impl DayTimings {
    pub fn get(&self, prayer: PrayerType) -> &str {
        match prayer {
            PrayerType::Fajr => &self.fajr,
            PrayerType::Dhuhr => &self.dhuhr,
            PrayerType::Asr => &self.asr,
            PrayerType::Maghrib => &self.maghrib,
            PrayerType::Isha => &self.isha,
        }
    }
}

/// Anything that can answer "what are today's timings in this city".
#[async_trait]
pub trait TimingsSource: Send + Sync {
    async fn timings(&self, request: &TimingsRequest) -> Result<DayTimings, FetchError>;
}

#[derive(Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TimingsData {
    timings: DayTimings,
}

/// Decode a `timingsByCity` body. Error bodies carry a non-200 `code` and a
/// string in `data`, so `data` is only decoded once the code checks out.
pub fn parse_timings_body(body: &str) -> Result<DayTimings, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(FetchError::Api {
            code: envelope.code,
        });
    }
    let data: TimingsData = serde_json::from_value(envelope.data)?;
    Ok(data.timings)
}

pub struct AladhanClient {
    http: Client,
    base_url: String,
}

impl AladhanClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn timings_url(&self, date: NaiveDate) -> String {
        format!("{}/timingsByCity/{}", self.base_url, format_date_dmy(date))
    }
}

#[async_trait]
impl TimingsSource for AladhanClient {
    async fn timings(&self, request: &TimingsRequest) -> Result<DayTimings, FetchError> {
        if request.city.trim().is_empty() {
            return Err(FetchError::MissingCity);
        }

        let url = self.timings_url(request.date);
        debug!(
            "GET {} city={} country={} method={}",
            url, request.city, request.country, request.method
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("city", request.city.clone()),
                ("country", request.country.clone()),
                ("method", request.method.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_timings_body(&body)
    }
}
