// crates/addrcheck-core/src/geocode/client.rs

//! The one external call: asking a geocoder about an address.

use super::{score, GeocodeResult, ScoreOutcome};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// No response within the configured deadline.
    #[error("geocoder timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body was not a JSON array.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Black-box geocoder: free-text query in, result list out.
///
/// Implementations must bound the call by a timeout and must not retry.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        (**self).geocode(query)
    }
}

/// Decodes a geocoder response body: a JSON array of result objects.
/// Records that do not fit [`GeocodeResult`] are skipped, not fatal.
pub fn decode_results(body: &[u8]) -> Result<Vec<GeocodeResult>, GeocodeError> {
    let raw: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    let total = raw.len();
    let results: Vec<GeocodeResult> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed geocoder record");
                None
            }
        })
        .collect();
    tracing::debug!(total, kept = results.len(), "decoded geocoder response");
    Ok(results)
}

/// Geocodes `address` once and scores the answer.
///
/// A timeout becomes [`ScoreOutcome::Timeout`], any other failure
/// [`ScoreOutcome::ApiError`]; a successful call that finds nothing is a
/// legitimate `Scored(NoMatch)`.
pub fn check_with_geocoder<G: Geocoder + ?Sized>(geocoder: &G, address: &str) -> ScoreOutcome {
    match geocoder.geocode(address) {
        Ok(results) => ScoreOutcome::Scored(score(address, &results)),
        Err(GeocodeError::Timeout) => {
            tracing::warn!(address, "geocoder timeout");
            ScoreOutcome::Timeout
        }
        Err(e) => {
            tracing::warn!(address, error = %e, "geocoder request failed");
            ScoreOutcome::ApiError(e.to_string())
        }
    }
}

// -----------------------------------------------------------------------------
// NOMINATIM (blocking reqwest)
// -----------------------------------------------------------------------------

#[cfg(feature = "http")]
pub use nominatim::NominatimClient;

#[cfg(feature = "http")]
mod nominatim {
    use super::{decode_results, GeocodeError, Geocoder};
    use crate::config::GeocoderConfig;
    use crate::geocode::GeocodeResult;

    /// `GET <endpoint>?q=<query>&format=json` with a fixed User-Agent and
    /// request deadline.
    #[derive(Debug, Clone)]
    pub struct NominatimClient {
        client: reqwest::blocking::Client,
        endpoint: String,
    }

    impl NominatimClient {
        pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent.as_str())
                .build()
                .map_err(|e| {
                    GeocodeError::Transport(format!("Failed to create HTTP client: {e}"))
                })?;
            Ok(Self {
                client,
                endpoint: config.endpoint.clone(),
            })
        }
    }

    impl Geocoder for NominatimClient {
        fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[("q", query), ("format", "json")])
                .send()
                .map_err(map_reqwest)?;

            if !response.status().is_success() {
                return Err(GeocodeError::Transport(format!(
                    "HTTP {} from {}",
                    response.status(),
                    self.endpoint
                )));
            }

            let body = response.bytes().map_err(map_reqwest)?;
            decode_results(&body)
        }
    }

    fn map_reqwest(e: reqwest::Error) -> GeocodeError {
        if e.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::Score;
    use std::cell::Cell;

    struct Canned {
        answer: Result<&'static str, GeocodeError>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(answer: Result<&'static str, GeocodeError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl Geocoder for Canned {
        fn geocode(&self, _query: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Ok(body) => decode_results(body.as_bytes()),
                Err(e) => Err(e.clone()),
            }
        }
    }

    const BODY: &str = r#"[
        {"place_rank": 30, "name": "", "display_name": "175, Asmara, Eritrea",
         "boundingbox": ["15.3", "15.3001", "38.9", "38.9001"]},
        {"place_rank": "not a number"}
    ]"#;

    #[test]
    fn malformed_records_are_skipped() {
        let results = decode_results(BODY.as_bytes()).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn non_array_body_is_decode_error() {
        assert!(matches!(decode_results(b"{}"), Err(GeocodeError::Decode(_))));
    }

    #[test]
    fn success_scores() {
        let g = Canned::new(Ok(BODY));
        let outcome = check_with_geocoder(&g, "175 Harnet Avenue, Asmara, Eritrea");
        assert_eq!(outcome, ScoreOutcome::Scored(Score::Building));
    }

    #[test]
    fn empty_answer_is_a_real_zero() {
        let g = Canned::new(Ok("[]"));
        assert_eq!(
            check_with_geocoder(&g, "175 Harnet Avenue, Asmara, Eritrea"),
            ScoreOutcome::Scored(Score::NoMatch)
        );
    }

    #[test]
    fn timeout_is_distinct_and_not_retried() {
        let g = Canned::new(Err(GeocodeError::Timeout));
        assert_eq!(check_with_geocoder(&g, "x"), ScoreOutcome::Timeout);
        assert_eq!(g.calls.get(), 1);
    }

    #[test]
    fn transport_and_decode_errors_are_api_errors() {
        let g = Canned::new(Err(GeocodeError::Transport("connection refused".into())));
        assert!(matches!(check_with_geocoder(&g, "x"), ScoreOutcome::ApiError(_)));
        let g = Canned::new(Ok("<html>"));
        assert!(matches!(check_with_geocoder(&g, "x"), ScoreOutcome::ApiError(_)));
    }
}
