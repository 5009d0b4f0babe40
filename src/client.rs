use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::FailureDetails;
use crate::logger::{MessageLogMode, MessageLogger};
use crate::protocol::{
    self, MODEL_PATH, PROGRAM_COOL_PATH, PROGRAM_HEAT_PATH, RawModel, RawProgram, RawStatus,
    STATUS_PATH,
};
use crate::types::*;
use crate::Result;

type FailureCallback = Box<dyn Fn(&FailureDetails) + Send + Sync>;

/// Default failure policy: one user-facing line at error level, the raw
/// detail at debug. Installed unless the builder supplies `on_failure`.
pub fn log_failure(details: &FailureDetails) {
    error!("thermostat request failed: {details}");
    debug!(detail = %details.detail, "failure detail");
}

pub struct TstatClientBuilder {
    address: String,
    protocol: String,
    failure_callback: Option<FailureCallback>,
    log_mode: Option<MessageLogMode>,
    log_path: Option<String>,
}

impl TstatClientBuilder {
    pub fn new() -> Self {
        Self {
            address: "localhost".to_string(),
            protocol: "http".to_string(),
            failure_callback: None,
            log_mode: None,
            log_path: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn protocol(mut self, proto: &str) -> Self {
        self.protocol = proto.to_string();
        self
    }

    pub fn on_failure(mut self, f: impl Fn(&FailureDetails) + Send + Sync + 'static) -> Self {
        self.failure_callback = Some(Box::new(f));
        self
    }

    pub fn message_log(mut self, mode: MessageLogMode, path: impl Into<String>) -> Self {
        self.log_mode = Some(mode);
        self.log_path = Some(path.into());
        self
    }

    pub fn build(self) -> TstatClient {
        let logger = match (self.log_mode, self.log_path) {
            (Some(mode), Some(path)) => {
                Some(MessageLogger::new(mode, &path).expect("failed to open log file"))
            }
            _ => None,
        };

        TstatClient {
            http: reqwest::Client::new(),
            base_url: format!("{}://{}", self.protocol, self.address),
            identity: None,
            failure_callback: self
                .failure_callback
                .unwrap_or_else(|| Box::new(log_failure)),
            logger,
        }
    }
}

impl Default for TstatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only client for the thermostat's embedded HTTP API. Construct via
/// [`TstatClient::builder`].
pub struct TstatClient {
    http: reqwest::Client,
    base_url: String,
    identity: Option<Identity>,
    failure_callback: FailureCallback,
    logger: Option<MessageLogger>,
}

impl TstatClient {
    pub fn builder() -> TstatClientBuilder {
        TstatClientBuilder::new()
    }

    /// Model name and firmware version. Queried once per client; later
    /// calls are served from the cache without touching the network.
    pub async fn identity(&mut self) -> Result<Identity> {
        if let Some(ref identity) = self.identity {
            return Ok(identity.clone());
        }

        let raw: RawModel = self.get_json(MODEL_PATH).await?;
        let identity = protocol::parse_identity(&raw.model)?;
        debug!(model = %identity.model, version = %identity.version, "resolved identity");
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Current temperature, HVAC and fan run states, and device clock.
    ///
    /// Resolves the identity first: the model decides which raw field
    /// carries fan status. An identity failure propagates unchanged and
    /// no status request is made.
    pub async fn state(&mut self) -> Result<ThermostatState> {
        let identity = self.identity().await?;
        let raw: RawStatus = self.get_json(STATUS_PATH).await?;
        protocol::normalize_state(&identity.model, &raw)
    }

    /// Target temperature, configured mode, fan mode, and program flags.
    ///
    /// Same identity-first dependency as [`state`](Self::state).
    pub async fn target(&mut self) -> Result<ThermostatTarget> {
        self.identity().await?;
        let raw: RawStatus = self.get_json(STATUS_PATH).await?;
        Ok(protocol::normalize_target(&raw))
    }

    /// Stored weekly heat program.
    pub async fn heat_program(&mut self) -> Result<ProgramSchedule> {
        let raw: RawProgram = self.get_json(PROGRAM_HEAT_PATH).await?;
        protocol::normalize_program(&raw)
    }

    /// Stored weekly cool program.
    pub async fn cool_program(&mut self) -> Result<ProgramSchedule> {
        let raw: RawProgram = self.get_json(PROGRAM_COOL_PATH).await?;
        protocol::normalize_program(&raw)
    }

    /// Identity resolved by an earlier call, if any.
    pub fn cached_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    async fn get_json<T: DeserializeOwned>(&mut self, path: &str) -> Result<T> {
        match self.try_get_json(path).await {
            Ok(value) => Ok(value),
            Err(e) => {
                let details = FailureDetails::from_error(&e);
                (self.failure_callback)(&details);
                Err(e)
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(&mut self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "querying thermostat");
        if let Some(ref mut logger) = self.logger {
            logger.log_request(path);
        }

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success()
            && let Some(ref mut logger) = self.logger
        {
            logger.log_response(status.as_u16(), None);
        }

        let body = resp.error_for_status()?.text().await?;
        if let Some(ref mut logger) = self.logger {
            logger.log_response(status.as_u16(), Some(&body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_http_localhost() {
        let client = TstatClient::builder().build();
        assert_eq!(client.base_url, "http://localhost");
    }

    #[test]
    fn builder_overrides_address_and_protocol() {
        let client = TstatClient::builder()
            .address("10.0.0.20")
            .protocol("https")
            .build();
        assert_eq!(client.base_url, "https://10.0.0.20");
    }
}
