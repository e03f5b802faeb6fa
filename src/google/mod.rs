#[macro_use]
mod macros;

mod coerce;
mod generated;
pub mod tts;

#[cfg(feature = "grpc-transport")]
use tonic::transport::ClientTlsConfig;
#[cfg(feature = "grpc-transport")]
use yup_oauth2::{authenticator::DefaultAuthenticator, ServiceAccountAuthenticator};

#[cfg(feature = "grpc-transport")]
use crate::{Error, Result};

#[cfg(feature = "grpc-transport")]
pub(crate) fn tls_config() -> ClientTlsConfig {
    let mut tls_config = tokio_rustls::rustls::ClientConfig::new();
    tls_config
        .root_store
        .add_server_trust_anchors(&webpki_roots::TLS_SERVER_ROOTS);
    tls_config.set_protocols(&["h2".into()]);
    ClientTlsConfig::new().rustls_client_config(tls_config)
}

#[cfg(feature = "grpc-transport")]
pub(crate) async fn auth(key: &str, scopes: &[String]) -> Result<DefaultAuthenticator> {
    let key = serde_json::from_str(key)
        .map_err(|e| Error::Configuration(format!("malformed service account key: {}", e)))?;

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| Error::Configuration(format!("failed to build authenticator: {}", e)))?;

    // Warm the token up, so broken keys show up at startup and not on the
    // first call.
    auth.token(scopes)
        .await
        .map_err(|e| Error::Configuration(format!("failed to obtain access token: {}", e)))?;
    Ok(auth)
}
