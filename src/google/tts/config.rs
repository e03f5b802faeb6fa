use super::Rpc;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::{collections::BTreeMap, sync::RwLock, time::Duration};
use tonic::Code;

pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com";
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Backoff settings handed to the transport. This layer never retries.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: f64,
    pub retry_codes: Vec<Code>,
}

impl RetryPolicy {
    pub fn retries(&self, code: Code) -> bool {
        self.retry_codes.contains(&code)
    }

    /// Delay before the attempt following one that waited `previous`, kept
    /// within `0..=max_delay`.
    pub fn next_delay(&self, previous: Duration) -> Duration {
        let next = previous.as_secs_f64() * self.multiplier;
        if next.is_nan() {
            return self.max_delay;
        }
        let next = next.max(0.0).min(self.max_delay.as_secs_f64());
        Duration::try_from_secs_f64(next).unwrap_or(self.max_delay)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(format!(
                "retry multiplier must be a positive number, got {}",
                self.multiplier
            ));
        }
        if self.initial_delay > self.max_delay {
            return Err(format!(
                "retry initial delay {:?} exceeds max delay {:?}",
                self.initial_delay, self.max_delay
            ));
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(60),
            multiplier: 1.3,
            retry_codes: vec![Code::Unavailable, Code::DeadlineExceeded],
        }
    }
}

/// Per invocation transport parameters. Every field is optional so a layer
/// only overrides what it sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
    pub metadata: BTreeMap<String, String>,
    pub retry_policy: Option<RetryPolicy>,
}

impl CallOptions {
    pub fn new() -> CallOptions {
        CallOptions::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> CallOptions {
        self.timeout = Some(timeout);
        self
    }

    pub fn metadata(mut self, key: &str, value: &str) -> CallOptions {
        self.metadata.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn retry_policy(mut self, retry_policy: RetryPolicy) -> CallOptions {
        self.retry_policy = Some(retry_policy);
        self
    }

    /// Returns `self` with everything set in `higher` laid on top.
    pub fn layered(&self, higher: &CallOptions) -> CallOptions {
        let mut metadata = self.metadata.clone();
        metadata.extend(
            higher
                .metadata
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        CallOptions {
            timeout: higher.timeout.or(self.timeout),
            metadata,
            retry_policy: higher
                .retry_policy
                .clone()
                .or_else(|| self.retry_policy.clone()),
        }
    }
}

/// Effective options of one call: `call` over `client` over `defaults`.
pub fn resolve(defaults: &CallOptions, client: &CallOptions, call: &CallOptions) -> CallOptions {
    defaults.layered(client).layered(call)
}

/// Options every rpc of the service starts from.
pub fn rpc_defaults(rpc: Rpc) -> CallOptions {
    match rpc {
        Rpc::ListVoices | Rpc::SynthesizeSpeech => CallOptions {
            timeout: Some(Duration::from_secs(600)),
            metadata: BTreeMap::new(),
            retry_policy: Some(RetryPolicy::default()),
        },
    }
}

#[derive(Clone)]
pub enum Credentials {
    /// Service account key, json as downloaded from the console.
    ServiceAccountKey(String),
    /// Ready bearer token.
    AccessToken(String),
    /// Plaintext channel without authorization, for emulators.
    Insecure,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ServiceAccountKey(_) => f.write_str("ServiceAccountKey(..)"),
            Credentials::AccessToken(_) => f.write_str("AccessToken(..)"),
            Credentials::Insecure => f.write_str("Insecure"),
        }
    }
}

/// Override slot of a single rpc.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcConfig {
    pub timeout: Option<Duration>,
    pub metadata: BTreeMap<String, String>,
    pub retry_policy: Option<RetryPolicy>,
}

impl RpcConfig {
    fn call_options(&self) -> CallOptions {
        CallOptions {
            timeout: self.timeout,
            metadata: self.metadata.clone(),
            retry_policy: self.retry_policy.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rpcs {
    pub list_voices: RpcConfig,
    pub synthesize_speech: RpcConfig,
}

impl Rpcs {
    pub fn get(&self, rpc: Rpc) -> &RpcConfig {
        match rpc {
            Rpc::ListVoices => &self.list_voices,
            Rpc::SynthesizeSpeech => &self.synthesize_speech,
        }
    }
}

/// Settings of one client.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub endpoint: String,
    pub credentials: Option<Credentials>,
    pub scope: Vec<String>,
    /// Appended to the `x-goog-api-client` header, with `lib_version`.
    pub lib_name: Option<String>,
    pub lib_version: Option<String>,
    /// Project billed for the calls, sent as `x-goog-user-project`.
    pub quota_project: Option<String>,
    pub timeout: Option<Duration>,
    pub metadata: BTreeMap<String, String>,
    pub retry_policy: Option<RetryPolicy>,
    pub rpcs: Rpcs,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            credentials: None,
            scope: vec![DEFAULT_SCOPE.to_owned()],
            lib_name: None,
            lib_version: None,
            quota_project: None,
            timeout: None,
            metadata: BTreeMap::new(),
            retry_policy: None,
            rpcs: Rpcs::default(),
        }
    }
}

impl Configuration {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::Configuration("endpoint is empty".to_owned()));
        }
        let policies = [
            self.retry_policy.as_ref(),
            self.rpcs.list_voices.retry_policy.as_ref(),
            self.rpcs.synthesize_speech.retry_policy.as_ref(),
        ];
        for policy in policies.iter().copied().flatten() {
            policy.validate().map_err(Error::Configuration)?;
        }
        match &self.credentials {
            None => Err(Error::Configuration("credentials are not set".to_owned())),
            Some(Credentials::ServiceAccountKey(_)) if self.scope.is_empty() => Err(
                Error::Configuration("service account credentials need a scope".to_owned()),
            ),
            Some(_) => Ok(()),
        }
    }

    /// Client level options of `rpc`: the client wide settings with the
    /// slot of the rpc on top, plus the headers the client always sends.
    pub fn call_options(&self, rpc: Rpc) -> CallOptions {
        let mut client = CallOptions {
            timeout: self.timeout,
            metadata: self.metadata.clone(),
            retry_policy: self.retry_policy.clone(),
        };
        client
            .metadata
            .insert("x-goog-api-client".to_owned(), self.api_client_header());
        if let Some(project) = &self.quota_project {
            client
                .metadata
                .insert("x-goog-user-project".to_owned(), project.clone());
        }
        client.layered(&self.rpcs.get(rpc).call_options())
    }

    fn api_client_header(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let mut header = format!("gl-rust/{} gapic/{}", version, version);
        if let Some(name) = &self.lib_name {
            header.push(' ');
            header.push_str(name);
            if let Some(lib_version) = &self.lib_version {
                header.push('/');
                header.push_str(lib_version);
            }
        }
        header
    }
}

static DEFAULTS: Lazy<RwLock<Configuration>> = Lazy::new(|| RwLock::new(Configuration::default()));

/// Edits the configuration every client constructed afterwards starts from.
pub fn configure_defaults<F>(block: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut defaults = match DEFAULTS.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    block(&mut defaults);
}

pub fn default_configuration() -> Configuration {
    match DEFAULTS.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
