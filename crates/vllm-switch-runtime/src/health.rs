use crate::Result;
use std::time::Duration;
use vllm_switch_types::Reachability;

/// Reachability check for an HTTP endpoint.
pub trait HealthProbe {
    fn probe(&self, url: &str) -> Reachability;
}

/// Blocking GET with a short timeout.
///
/// Transport failures and HTTP error statuses both count as unreachable.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|err| crate::Error::Config(format!("HTTP client: {}", err)))?;
        Ok(Self { client })
    }
}

impl HealthProbe for HttpProbe {
    fn probe(&self, url: &str) -> Reachability {
        log::debug!("probing {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status());

        match response {
            Ok(_) => Reachability::Reachable,
            Err(err) => {
                log::debug!("{} unreachable: {}", url, err);
                Reachability::Unreachable(describe(&err))
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    if let Some(status) = err.status() {
        format!("HTTP {}", status)
    } else if err.is_timeout() {
        "timed out".to_string()
    } else if err.is_connect() {
        "connection refused".to_string()
    } else {
        err.to_string()
    }
}
