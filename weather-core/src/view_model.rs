//! State holder that drives a weather screen from a [`WeatherClient`].
//!
//! The view model starts one `weather()` request when it is created. The
//! request runs on the Tokio runtime, but its outcome only reaches the
//! observable state through [`AppViewModel::settle`], which runs on the
//! owner's context. Dropping the view model aborts the request, and because
//! nothing else can apply its outcome, a late response is simply discarded.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    client::{WeatherClient, live::LiveClient},
    error::ClientResult,
    model::{ConsolidatedWeather, WeatherResponse},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    /// The request failed. Results keep whatever they held before.
    Failed { reason: String },
}

/// Snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub is_connected: bool,
    pub weather_results: Vec<ConsolidatedWeather>,
    pub fetch_status: FetchStatus,
}

impl Default for AppState {
    fn default() -> Self {
        Self { is_connected: true, weather_results: Vec::new(), fetch_status: FetchStatus::Loading }
    }
}

pub struct AppViewModel {
    client: Arc<dyn WeatherClient>,
    state: watch::Sender<AppState>,
    pending: Option<JoinHandle<ClientResult<WeatherResponse>>>,
}

impl AppViewModel {
    /// Create a connected view model and start fetching.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self::with_connectivity(true, client)
    }

    pub fn with_connectivity(is_connected: bool, client: Arc<dyn WeatherClient>) -> Self {
        let (state, _) = watch::channel(AppState { is_connected, ..AppState::default() });

        let request = Arc::clone(&client);
        debug!(client = ?client, "starting weather request");
        let pending = tokio::spawn(async move { request.weather().await });

        Self { client, state, pending: Some(pending) }
    }

    /// View model backed by the default [`LiveClient`].
    pub fn live() -> Self {
        Self::new(Arc::new(LiveClient::new()))
    }

    pub fn client(&self) -> &Arc<dyn WeatherClient> {
        &self.client
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().is_connected
    }

    pub fn weather_results(&self) -> Vec<ConsolidatedWeather> {
        self.state.borrow().weather_results.clone()
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.state.borrow().fetch_status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the in-flight request and publish its outcome.
    ///
    /// Cancel safe: if this future is dropped early the request keeps running
    /// and a later call picks it up. Returns immediately once resolved.
    pub async fn settle(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let outcome = pending.await;
        self.pending = None;

        match outcome {
            Ok(Ok(response)) => self.apply_response(response),
            Ok(Err(err)) => self.apply_failure(err.to_string()),
            Err(join_err) => self.apply_failure(format!("weather request did not complete: {join_err}")),
        }
    }

    fn apply_response(&self, response: WeatherResponse) {
        debug!(entries = response.consolidated_weather.len(), "weather request resolved");
        self.state.send_modify(|state| {
            state.weather_results = response.consolidated_weather;
            state.fetch_status = FetchStatus::Loaded;
        });
    }

    fn apply_failure(&self, reason: String) {
        warn!(%reason, "weather request failed");
        self.state.send_modify(|state| state.fetch_status = FetchStatus::Failed { reason });
    }
}

impl std::fmt::Debug for AppViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppViewModel")
            .field("client", &self.client)
            .field("state", &*self.state.borrow())
            .field("loading", &self.is_loading())
            .finish()
    }
}

impl Drop for AppViewModel {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("discarding view model with a pending weather request");
            pending.abort();
        }
    }
}
