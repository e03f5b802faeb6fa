// Process wide defaults are global, so they get a test binary of their own.

use async_trait::async_trait;
use std::{sync::Mutex, time::Duration};
use tomoru_tts_rs::google::tts::*;
use tonic::{metadata::MetadataMap, Status};

#[derive(Default)]
struct RecordingTransport {
    options: Mutex<Vec<CallOptions>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn call_rpc<Req, Resp>(
        &self,
        rpc: Rpc,
        _request: Req,
        options: CallOptions,
    ) -> Result<(Resp, Operation), Status>
    where
        Req: prost::Message + Clone + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.options.lock().unwrap().push(options);
        Ok((Resp::default(), Operation::new(rpc, MetadataMap::new())))
    }
}

#[tokio::test]
async fn clients_start_from_process_defaults() {
    configure_defaults(|config| {
        config.credentials = Some(Credentials::Insecure);
        config.lib_name = Some("tomoru-bot".to_owned());
        config.lib_version = Some("3.1.0".to_owned());
        config.timeout = Some(Duration::from_secs(10));
    });
    assert_eq!(default_configuration().lib_name.as_deref(), Some("tomoru-bot"));

    let plain = Client::with_transport(RecordingTransport::default(), |_| {}).unwrap();
    let tuned = Client::with_transport(RecordingTransport::default(), |config| {
        config.timeout = Some(Duration::from_secs(1));
    })
    .unwrap();

    plain.list_voices((), None).await.unwrap();
    tuned.list_voices((), None).await.unwrap();

    let options = plain.transport().options.lock().unwrap().remove(0);
    assert_eq!(options.timeout, Some(Duration::from_secs(10)));
    assert!(options.metadata["x-goog-api-client"].ends_with(" tomoru-bot/3.1.0"));

    let options = tuned.transport().options.lock().unwrap().remove(0);
    assert_eq!(options.timeout, Some(Duration::from_secs(1)));

    // editing a client does not leak into the defaults
    let mut tuned = tuned;
    tuned.configure(|config| config.lib_name = None);
    assert_eq!(default_configuration().lib_name.as_deref(), Some("tomoru-bot"));
}
