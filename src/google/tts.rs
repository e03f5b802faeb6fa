//! Client of the `google.cloud.texttospeech.v1beta1.TextToSpeech` service.
//!
//! ```no_run
//! use tomoru_tts_rs::google::tts::{Client, Credentials, Fields};
//!
//! # async fn run(key: String) -> tomoru_tts_rs::Result<()> {
//! let client = Client::new(|config| {
//!     config.credentials = Some(Credentials::ServiceAccountKey(key));
//! })
//! .await?;
//!
//! let voices = client
//!     .list_voices(Fields::new().set("language_code", "ru-RU"), None)
//!     .await?;
//! println!("{} voices", voices.voices.len());
//! # Ok(())
//! # }
//! ```

mod config;
#[cfg(feature = "grpc-transport")]
mod grpc;
mod request;
mod transport;

pub use super::generated::google::cloud::texttospeech::v1beta1::*;
pub use config::{
    configure_defaults, default_configuration, resolve, rpc_defaults, CallOptions,
    Configuration, Credentials, RetryPolicy, RpcConfig, Rpcs, DEFAULT_ENDPOINT, DEFAULT_SCOPE,
};
#[cfg(feature = "grpc-transport")]
pub use grpc::GrpcTransport;
pub use request::{Fields, MessageFields, RequestArg};
pub use transport::{Operation, Rpc, Transport};

pub struct Client<T> {
    transport: T,
    config: Configuration,
}

#[cfg(feature = "grpc-transport")]
impl Client<GrpcTransport> {
    /// Connects a client. `block` edits the configuration, which starts as
    /// a copy of [`default_configuration`]. Credentials must be set.
    pub async fn new<F>(block: F) -> crate::Result<Client<GrpcTransport>>
    where
        F: FnOnce(&mut Configuration),
    {
        let mut config = default_configuration();
        block(&mut config);
        config.validate()?;

        let transport = GrpcTransport::connect(&config).await?;
        Ok(Client { transport, config })
    }
}

impl<T: Transport> Client<T> {
    /// Same as [`Client::new`] over a transport of the caller's choice.
    pub fn with_transport<F>(transport: T, block: F) -> crate::Result<Client<T>>
    where
        F: FnOnce(&mut Configuration),
    {
        let mut config = default_configuration();
        block(&mut config);
        config.validate()?;

        Ok(Client { transport, config })
    }

    /// Edits the configuration of this client. Returns the very object the
    /// block edited; every later call sees the change.
    pub fn configure<F>(&mut self, block: F) -> &Configuration
    where
        F: FnOnce(&mut Configuration),
    {
        block(&mut self.config);
        &self.config
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    unary_rpc!(
        /// Returns the voices supported for synthesis.
        fn list_voices, list_voices_with(ListVoicesRequest) -> ListVoicesResponse = Rpc::ListVoices
    );

    unary_rpc!(
        /// Synthesizes speech synchronously: receive results after all text input
        /// has been processed.
        fn synthesize_speech, synthesize_speech_with(SynthesizeSpeechRequest)
            -> SynthesizeSpeechResponse = Rpc::SynthesizeSpeech
    );

    async fn dispatch<Req, Resp, F>(
        &self,
        rpc: Rpc,
        request: RequestArg<Req>,
        options: Option<CallOptions>,
        on_complete: Option<F>,
    ) -> crate::Result<Resp>
    where
        Req: prost::Message + MessageFields + Clone + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
        F: FnOnce(&Resp, &Operation),
    {
        let request = request.into_request()?;
        let options = resolve(
            &rpc_defaults(rpc),
            &self.config.call_options(rpc),
            &options.unwrap_or_default(),
        );
        if let Some(policy) = &options.retry_policy {
            policy.validate().map_err(crate::Error::Configuration)?;
        }

        tracing::debug!(rpc = rpc.name(), timeout = ?options.timeout, "dispatching rpc");
        let (response, operation) = self.transport.call_rpc(rpc, request, options).await?;

        if let Some(on_complete) = on_complete {
            on_complete(&response, &operation);
        }
        Ok(response)
    }
}
