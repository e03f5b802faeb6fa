use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The call argument could not be turned into the request message.
    /// Nothing was sent.
    #[error("invalid request argument: {0}")]
    ArgumentShape(String),

    /// Failure reported by the transport, untouched.
    #[error("rpc failed: {0}")]
    Transport(#[from] tonic::Status),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Transport(status) => Some(status),
            _ => None,
        }
    }
}
