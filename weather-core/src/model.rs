use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// Decoded weather data for one location.
///
/// Entries keep the order the producer returned them in; nothing here sorts
/// them by date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub consolidated_weather: Vec<ConsolidatedWeather>,
}

/// One daily forecast record. Temperatures are degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedWeather {
    #[serde(with = "day_format")]
    pub applicable_date: NaiveDate,
    pub id: i64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub the_temp: f64,
}

/// Result entry of a location search. Carries no data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl WeatherResponse {
    pub fn new(consolidated_weather: Vec<ConsolidatedWeather>) -> Self {
        Self { consolidated_weather }
    }

    pub fn from_json(body: &str) -> ClientResult<Self> {
        decode(body.as_bytes())
    }
}

/// Decode a raw weather-service body.
///
/// Any missing field, type mismatch or badly formatted date fails the whole
/// decode.
pub fn decode(body: &[u8]) -> ClientResult<WeatherResponse> {
    Ok(serde_json::from_slice(body)?)
}

/// `applicable_date` is always `yyyy-MM-dd` on the wire.
mod day_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(|err| {
            D::Error::custom(format!("date '{raw}' does not match yyyy-MM-dd: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn body_with_date(date: &str) -> String {
        format!(
            r#"{{"consolidated_weather":[{{"applicable_date":"{date}","id":7,"max_temp":12.5,"min_temp":3.25,"the_temp":9.0}}]}}"#
        )
    }

    #[test]
    fn decodes_day_without_time_component() {
        let response = WeatherResponse::from_json(&body_with_date("2021-04-06")).unwrap();

        let entry = &response.consolidated_weather[0];
        assert_eq!(entry.applicable_date, NaiveDate::from_ymd_opt(2021, 4, 6).unwrap());
        assert_eq!(entry.id, 7);
        assert_eq!(entry.max_temp, 12.5);
        assert_eq!(entry.min_temp, 3.25);
        assert_eq!(entry.the_temp, 9.0);
    }

    #[test]
    fn rejects_other_date_formats() {
        for date in ["2021-04-06T10:00:00", "06/04/2021", "2021.04.06", "April 6 2021", ""] {
            let err = WeatherResponse::from_json(&body_with_date(date)).unwrap_err();
            assert!(matches!(err, ClientError::Decode(_)), "{date} should fail");
            assert!(err.to_string().contains("yyyy-MM-dd"), "{err}");
        }
    }

    #[test]
    fn missing_field_fails_whole_decode() {
        let body = r#"{"consolidated_weather":[
            {"applicable_date":"2021-04-06","id":1,"max_temp":1.0,"min_temp":0.0,"the_temp":0.5},
            {"applicable_date":"2021-04-07","id":2,"max_temp":1.0,"min_temp":0.0}
        ]}"#;

        assert!(matches!(WeatherResponse::from_json(body), Err(ClientError::Decode(_))));
    }

    #[test]
    fn type_mismatch_fails_decode() {
        let body = r#"{"consolidated_weather":[
            {"applicable_date":"2021-04-06","id":"one","max_temp":1.0,"min_temp":0.0,"the_temp":0.5}
        ]}"#;

        assert!(WeatherResponse::from_json(body).is_err());
    }

    #[test]
    fn sequence_must_be_present() {
        assert!(WeatherResponse::from_json("{}").is_err());
        assert!(WeatherResponse::from_json(r#"{"consolidated_weather":null}"#).is_err());

        let empty = WeatherResponse::from_json(r#"{"consolidated_weather":[]}"#).unwrap();
        assert!(empty.consolidated_weather.is_empty());
    }

    #[test]
    fn ignores_unknown_fields_and_accepts_inverted_temperatures() {
        let body = r#"{"title":"London","woeid":44418,"consolidated_weather":[
            {"weather_state_name":"Showers","applicable_date":"2021-04-06","id":1,
             "max_temp":-5.0,"min_temp":8.0,"the_temp":100.0,"humidity":70}
        ]}"#;

        let response = WeatherResponse::from_json(body).unwrap();
        assert_eq!(response.consolidated_weather[0].min_temp, 8.0);
        assert_eq!(response.consolidated_weather[0].max_temp, -5.0);
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let response = WeatherResponse::from_json(&body_with_date("2021-04-06")).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["consolidated_weather"][0]["applicable_date"], "2021-04-06");
        assert_eq!(json["consolidated_weather"][0]["the_temp"], 9.0);
    }
}
