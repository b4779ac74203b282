//! Core library for the `weather` demo.
//!
//! This crate defines:
//! - The weather data model and its wire decoding rules
//! - The `WeatherClient` abstraction with live and fixture implementations
//! - `AppViewModel`, the observable state holder a renderer subscribes to
//!
//! It is used by `weather-cli`, but any front end can drive it.

pub mod client;
pub mod error;
pub mod model;
pub mod view_model;

pub use client::{
    ClientId, WeatherClient, client_from_id,
    fixture::{EmptyClient, FailedClient, HappyPathClient},
    live::{LiveClient, LiveSettings},
};
pub use error::{ClientError, ClientResult, UnknownClient};
pub use model::{ConsolidatedWeather, Coordinate, Location, WeatherResponse, decode};
pub use view_model::{AppState, AppViewModel, FetchStatus};
