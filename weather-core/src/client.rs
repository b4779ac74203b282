use crate::{
    Coordinate, Location, WeatherResponse,
    client::{
        fixture::{EmptyClient, FailedClient, HappyPathClient},
        live::{LiveClient, LiveSettings},
    },
    error::{ClientResult, UnknownClient},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod fixture;
pub mod live;

/// A client for accessing weather data for locations.
///
/// Implementations are interchangeable: consumers hold an
/// `Arc<dyn WeatherClient>` and never branch on which one they were given.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn weather(&self) -> ClientResult<WeatherResponse>;

    async fn search_locations(&self, coordinate: Coordinate) -> ClientResult<Vec<Location>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientId {
    #[default]
    Live,
    Empty,
    HappyPath,
    Failed,
}

impl ClientId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientId::Live => "live",
            ClientId::Empty => "empty",
            ClientId::HappyPath => "happy-path",
            ClientId::Failed => "failed",
        }
    }

    pub const fn all() -> &'static [ClientId] {
        &[ClientId::Live, ClientId::Empty, ClientId::HappyPath, ClientId::Failed]
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ClientId {
    type Error = UnknownClient;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "live" => Ok(ClientId::Live),
            "empty" => Ok(ClientId::Empty),
            "happy-path" | "happy_path" | "happypath" => Ok(ClientId::HappyPath),
            "failed" => Ok(ClientId::Failed),
            _ => Err(UnknownClient(value.to_string())),
        }
    }
}

/// Construct the client named by `id`. `settings` only matter for [`ClientId::Live`].
pub fn client_from_id(id: ClientId, settings: &LiveSettings) -> ClientResult<Arc<dyn WeatherClient>> {
    let client: Arc<dyn WeatherClient> = match id {
        ClientId::Live => Arc::new(LiveClient::with_settings(settings)?),
        ClientId::Empty => Arc::new(EmptyClient),
        ClientId::HappyPath => Arc::new(HappyPathClient::new()),
        ClientId::Failed => Arc::new(FailedClient),
    };

    Ok(client)
}
