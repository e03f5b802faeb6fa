use super::{CallOptions, Configuration, Credentials, Operation, RetryPolicy, Rpc, Transport};
use crate::{
    google::{auth, tls_config},
    Error, Result,
};
use async_trait::async_trait;
use http::uri::PathAndQuery;
use std::{future::Future, time::Duration};
use tokio::time::Instant;
use tonic::{
    client::Grpc,
    codec::ProstCodec,
    metadata::{AsciiMetadataKey, MetadataValue},
    transport::Channel,
    Request, Status,
};
use yup_oauth2::authenticator::DefaultAuthenticator;

enum Authorization {
    ServiceAccount {
        auth: DefaultAuthenticator,
        scopes: Vec<String>,
    },
    Token(String),
    None,
}

/// [`Transport`] over a tonic channel.
pub struct GrpcTransport {
    channel: Channel,
    authorization: Authorization,
}

impl GrpcTransport {
    pub async fn connect(config: &Configuration) -> Result<GrpcTransport> {
        config.validate()?;

        let endpoint = Channel::from_shared(config.endpoint.clone()).map_err(|e| {
            Error::Configuration(format!("invalid endpoint `{}`: {}", config.endpoint, e))
        })?;

        let (endpoint, authorization) = match &config.credentials {
            Some(Credentials::ServiceAccountKey(key)) => {
                let auth = auth(key, &config.scope).await?;
                let authorization = Authorization::ServiceAccount {
                    auth,
                    scopes: config.scope.clone(),
                };
                (secure(endpoint)?, authorization)
            }
            Some(Credentials::AccessToken(token)) => {
                (secure(endpoint)?, Authorization::Token(token.clone()))
            }
            Some(Credentials::Insecure) => (endpoint, Authorization::None),
            None => return Err(Error::Configuration("credentials are not set".to_owned())),
        };

        let channel = endpoint.connect().await.map_err(|e| {
            Error::Configuration(format!("failed to connect to {}: {}", config.endpoint, e))
        })?;
        tracing::info!(endpoint = %config.endpoint, "connected text-to-speech transport");

        Ok(GrpcTransport {
            channel,
            authorization,
        })
    }

    async fn bearer(&self) -> Result<Option<String>, Status> {
        match &self.authorization {
            Authorization::ServiceAccount { auth, scopes } => {
                let token = auth
                    .token(scopes)
                    .await
                    .map_err(|e| Status::unauthenticated(format!("failed to get token: {}", e)))?;
                Ok(Some(format!("Bearer {}", token.as_str())))
            }
            Authorization::Token(token) => Ok(Some(format!("Bearer {}", token))),
            Authorization::None => Ok(None),
        }
    }

    async fn attempt<Req, Resp>(
        &self,
        rpc: Rpc,
        request: Req,
        options: &CallOptions,
        timeout: Option<Duration>,
    ) -> Result<(Resp, Operation), Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut request = Request::new(request);
        let metadata = request.metadata_mut();
        for (key, value) in &options.metadata {
            let name = AsciiMetadataKey::from_bytes(key.as_bytes())
                .map_err(|_| Status::invalid_argument(format!("invalid metadata key `{}`", key)))?;
            let value = MetadataValue::from_str(value).map_err(|_| {
                Status::invalid_argument(format!("invalid value of metadata `{}`", key))
            })?;
            metadata.insert(name, value);
        }
        if let Some(bearer) = self.bearer().await? {
            let value = MetadataValue::from_str(&bearer)
                .map_err(|_| Status::unauthenticated("token is not a valid header value"))?;
            metadata.insert("authorization", value);
        }
        if let Some(timeout) = timeout {
            let value = MetadataValue::from_str(&grpc_timeout(timeout))
                .map_err(|_| Status::internal("unrepresentable timeout"))?;
            metadata.insert("grpc-timeout", value);
        }

        let mut grpc = Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {}", e)))?;
        let codec = ProstCodec::<Req, Resp>::default();
        let path = PathAndQuery::from_static(rpc.path());

        let call = grpc.unary(request, path, codec);
        let response = match timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| Status::deadline_exceeded("deadline exceeded"))??,
            None => call.await?,
        };

        let metadata = response.metadata().clone();
        Ok((response.into_inner(), Operation::new(rpc, metadata)))
    }
}

fn secure(endpoint: tonic::transport::Endpoint) -> Result<tonic::transport::Endpoint> {
    endpoint
        .tls_config(tls_config())
        .map_err(|e| Error::Configuration(format!("failed to configure tls: {}", e)))
}

// The header allows at most eight digits.
fn grpc_timeout(timeout: Duration) -> String {
    let millis = timeout.as_millis();
    if millis < 100_000_000 {
        format!("{}m", millis)
    } else {
        format!("{}S", timeout.as_secs().min(99_999_999))
    }
}

/// Attempts made at most when no deadline bounds the retries of a call.
const MAX_ATTEMPTS_WITHOUT_DEADLINE: u32 = 10;

/// Runs `attempt` until it succeeds, fails with a code `policy` doesn't
/// retry, or the next backoff would end past the deadline. `attempt` gets the
/// time left until the deadline.
async fn with_retries<T, F, Fut>(
    rpc: Rpc,
    policy: Option<&RetryPolicy>,
    timeout: Option<Duration>,
    mut attempt: F,
) -> Result<T, Status>
where
    F: FnMut(Option<Duration>) -> Fut,
    Fut: Future<Output = Result<T, Status>>,
{
    // A timeout the clock can't represent leaves the call without a deadline.
    let deadline = timeout.and_then(|timeout| Instant::now().checked_add(timeout));
    let mut delay = policy.map(|policy| policy.initial_delay).unwrap_or_default();
    let mut attempts = 1u32;

    loop {
        let remaining = deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()));
        let status = match attempt(remaining).await {
            Ok(done) => return Ok(done),
            Err(status) => status,
        };

        let policy = match policy {
            Some(policy) if policy.retries(status.code()) => policy,
            _ => return Err(status),
        };
        match deadline {
            Some(deadline) => match Instant::now().checked_add(delay) {
                Some(next) if next < deadline => {}
                _ => return Err(status),
            },
            None if attempts >= MAX_ATTEMPTS_WITHOUT_DEADLINE => return Err(status),
            None => {}
        }

        tracing::warn!(
            rpc = rpc.name(),
            attempt = attempts,
            code = ?status.code(),
            delay_ms = delay.as_millis() as u64,
            "retrying rpc"
        );
        tokio::time::sleep(delay).await;
        delay = policy.next_delay(delay);
        attempts += 1;
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    async fn call_rpc<Req, Resp>(
        &self,
        rpc: Rpc,
        request: Req,
        options: CallOptions,
    ) -> Result<(Resp, Operation), Status>
    where
        Req: prost::Message + Clone + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        with_retries(
            rpc,
            options.retry_policy.as_ref(),
            options.timeout,
            |remaining| self.attempt(rpc, request.clone(), &options, remaining),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::VecDeque};
    use tonic::Code;

    #[test]
    fn timeout_header() {
        assert_eq!(grpc_timeout(Duration::from_secs(600)), "600000m");
        assert_eq!(grpc_timeout(Duration::from_millis(1500)), "1500m");
        assert_eq!(grpc_timeout(Duration::from_secs(200_000)), "200000S");
    }

    fn policy() -> RetryPolicy {
        RetryPolicy {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(3),
            multiplier: 2.0,
            retry_codes: vec![Code::Unavailable],
        }
    }

    /// Fails with the scripted codes in order, then succeeds. Records when
    /// each attempt started and the time it was left.
    struct Script {
        start: Instant,
        codes: RefCell<VecDeque<Code>>,
        attempts: RefCell<Vec<(Duration, Option<Duration>)>>,
    }

    impl Script {
        fn new(codes: Vec<Code>) -> Script {
            Script {
                start: Instant::now(),
                codes: RefCell::new(codes.into()),
                attempts: RefCell::new(Vec::new()),
            }
        }

        fn failing(code: Code) -> Script {
            Script::new(vec![code; 100])
        }

        fn attempt(&self, remaining: Option<Duration>) -> impl Future<Output = Result<(), Status>> {
            self.attempts
                .borrow_mut()
                .push((self.start.elapsed(), remaining));
            let code = self.codes.borrow_mut().pop_front();
            async move {
                match code {
                    Some(code) => Err(Status::new(code, "scripted failure")),
                    None => Ok(()),
                }
            }
        }

        fn starts(&self) -> Vec<Duration> {
            self.attempts.borrow().iter().map(|(at, _)| *at).collect()
        }

        fn remaining(&self) -> Vec<Option<Duration>> {
            self.attempts.borrow().iter().map(|(_, left)| *left).collect()
        }
    }

    fn assert_near(actual: Duration, expected: Duration) {
        let diff = if actual > expected {
            actual - expected
        } else {
            expected - actual
        };
        assert!(
            diff < Duration::from_millis(50),
            "{:?} is not close to {:?}",
            actual,
            expected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn code_outside_policy_is_not_retried() {
        let script = Script::failing(Code::InvalidArgument);
        let policy = policy();

        let result = with_retries(Rpc::ListVoices, Some(&policy), None, |left| {
            script.attempt(left)
        })
        .await;
        assert_eq!(result.unwrap_err().code(), Code::InvalidArgument);
        assert_eq!(script.starts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_policy_means_one_attempt() {
        let script = Script::failing(Code::Unavailable);

        let result = with_retries(Rpc::ListVoices, None, None, |left| script.attempt(left)).await;
        assert_eq!(result.unwrap_err().code(), Code::Unavailable);
        assert_eq!(script.starts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_back_off_until_success() {
        let script = Script::new(vec![Code::Unavailable; 4]);
        let policy = policy();

        with_retries(Rpc::SynthesizeSpeech, Some(&policy), None, |left| {
            script.attempt(left)
        })
        .await
        .unwrap();

        let starts = script.starts();
        assert_eq!(starts.len(), 5);
        let gaps = starts.windows(2).map(|pair| pair[1] - pair[0]);
        for (gap, expected) in gaps.zip(&[1, 2, 3, 3]) {
            assert_near(gap, Duration::from_secs(*expected));
        }
        assert!(script.remaining().iter().all(Option::is_none));
    }

    #[tokio::test(start_paused = true)]
    async fn attempts_are_capped_without_deadline() {
        let script = Script::failing(Code::Unavailable);
        let policy = RetryPolicy {
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(10),
            ..policy()
        };

        let result = with_retries(Rpc::ListVoices, Some(&policy), None, |left| {
            script.attempt(left)
        })
        .await;
        assert_eq!(result.unwrap_err().code(), Code::Unavailable);
        assert_eq!(script.starts().len(), MAX_ATTEMPTS_WITHOUT_DEADLINE as usize);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_stop_before_deadline() {
        let script = Script::failing(Code::Unavailable);
        let policy = policy();

        let result = with_retries(
            Rpc::SynthesizeSpeech,
            Some(&policy),
            Some(Duration::from_secs(4)),
            |left| script.attempt(left),
        )
        .await;
        assert_eq!(result.unwrap_err().code(), Code::Unavailable);

        // Attempts at 0s, 1s and 3s; waiting 3s more would end past 4s.
        let starts = script.starts();
        assert_eq!(starts.len(), 3);
        for (start, expected) in starts.iter().zip(&[0, 1, 3]) {
            assert_near(*start, Duration::from_secs(*expected));
        }
        let remaining = script.remaining();
        for (left, expected) in remaining.iter().zip(&[4, 3, 1]) {
            assert_near(left.unwrap(), Duration::from_secs(*expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn huge_timeout_does_not_overflow() {
        let script = Script::new(vec![Code::Unavailable]);
        let policy = policy();

        with_retries(
            Rpc::ListVoices,
            Some(&policy),
            Some(Duration::MAX),
            |left| script.attempt(left),
        )
        .await
        .unwrap();
        assert_eq!(script.starts().len(), 2);
    }
}
