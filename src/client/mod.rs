pub mod http;

use async_trait::async_trait;

pub use http::HttpRegisterClient;

use crate::model::RegisterRequest;
use crate::model::RegisterResult;

/// The remote registration service as seen from the form.
///
/// Implementations never return an error: every way a call can end is a [`RegisterResult`].
#[async_trait]
pub trait RegisterClient: Send + Sync {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> RegisterResult;
}
