use async_trait::async_trait;
use pdns_stats_domain::{Target, TransportError};

/// Port for one request/response exchange with a target's control socket.
#[async_trait]
pub trait StatTransport: Send + Sync {
    /// Sends the target's command and returns the raw reply text.
    ///
    /// An empty reply is not an error. No retry happens inside a call.
    async fn query(&self, target: &Target) -> Result<String, TransportError>;
}
