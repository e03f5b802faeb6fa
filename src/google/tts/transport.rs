use super::CallOptions;
use async_trait::async_trait;
use tonic::{metadata::MetadataMap, Status};

/// Methods of the `TextToSpeech` service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rpc {
    ListVoices,
    SynthesizeSpeech,
}

impl Rpc {
    pub fn name(self) -> &'static str {
        match self {
            Rpc::ListVoices => "list_voices",
            Rpc::SynthesizeSpeech => "synthesize_speech",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Rpc::ListVoices => "/google.cloud.texttospeech.v1beta1.TextToSpeech/ListVoices",
            Rpc::SynthesizeSpeech => {
                "/google.cloud.texttospeech.v1beta1.TextToSpeech/SynthesizeSpeech"
            }
        }
    }
}

/// Handle of a finished call, as produced by the transport.
#[derive(Debug, Clone)]
pub struct Operation {
    rpc: Rpc,
    metadata: MetadataMap,
}

impl Operation {
    pub fn new(rpc: Rpc, metadata: MetadataMap) -> Operation {
        Operation { rpc, metadata }
    }

    pub fn rpc(&self) -> Rpc {
        self.rpc
    }

    /// Response headers.
    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }
}

/// A unary rpc primitive. Called exactly once per client call, with the
/// options already resolved. Retrying, if any, happens in here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call_rpc<Req, Resp>(
        &self,
        rpc: Rpc,
        request: Req,
        options: CallOptions,
    ) -> Result<(Resp, Operation), Status>
    where
        Req: prost::Message + Clone + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static;
}
