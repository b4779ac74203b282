//! Fixed-result clients for previews, demos and tests.
//!
//! None of these touch the network and all resolve immediately.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::{
    error::{ClientError, ClientResult},
    model::{ConsolidatedWeather, Coordinate, Location, WeatherResponse},
};

use super::WeatherClient;

/// Always returns an empty forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyClient;

#[async_trait]
impl WeatherClient for EmptyClient {
    async fn weather(&self) -> ClientResult<WeatherResponse> {
        Ok(WeatherResponse::default())
    }

    async fn search_locations(&self, _coordinate: Coordinate) -> ClientResult<Vec<Location>> {
        Ok(Vec::new())
    }
}

/// Returns two fabricated days: a warm one followed by a freezing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HappyPathClient {
    anchor: Option<NaiveDate>,
}

impl HappyPathClient {
    /// Day 0 is the local date at the time of each `weather()` call.
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Day 0 is always `date`.
    pub fn starting(date: NaiveDate) -> Self {
        Self { anchor: Some(date) }
    }

    pub fn forecast(&self) -> WeatherResponse {
        let today = self.anchor.unwrap_or_else(|| Local::now().date_naive());
        let tomorrow = today.succ_opt().unwrap_or(today);

        WeatherResponse::new(vec![
            ConsolidatedWeather {
                applicable_date: today,
                id: 1,
                max_temp: 30.0,
                min_temp: 10.0,
                the_temp: 20.0,
            },
            ConsolidatedWeather {
                applicable_date: tomorrow,
                id: 2,
                max_temp: -10.0,
                min_temp: -30.0,
                the_temp: -20.0,
            },
        ])
    }
}

#[async_trait]
impl WeatherClient for HappyPathClient {
    async fn weather(&self) -> ClientResult<WeatherResponse> {
        Ok(self.forecast())
    }

    async fn search_locations(&self, _coordinate: Coordinate) -> ClientResult<Vec<Location>> {
        Ok(Vec::new())
    }
}

/// `weather()` always fails; location search still succeeds with nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailedClient;

impl FailedClient {
    pub const DOMAIN: &'static str = "any-domain";
    pub const CODE: i64 = 2;
}

#[async_trait]
impl WeatherClient for FailedClient {
    async fn weather(&self) -> ClientResult<WeatherResponse> {
        Err(ClientError::Service { domain: Self::DOMAIN, code: Self::CODE })
    }

    async fn search_locations(&self, _coordinate: Coordinate) -> ClientResult<Vec<Location>> {
        Ok(Vec::new())
    }
}
