//! Generation client boundary and the HTTP gateway implementation.

pub mod gateway;
pub mod http;
pub mod provider;

pub use gateway::{GatewayClient, GatewayHealth};
pub use provider::ProviderKey;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RoastError;
use crate::types::{GenerationRequest, GenerationResponse};

/// Capability: given a persona configuration and prompt, produce raw text.
///
/// Implementations are non-deterministic and fallible. An `Err` means the
/// call did not complete; an `Ok` with empty text is a successful-but-empty
/// response and is reported as such.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Short name used in logs (e.g. "gateway").
    fn name(&self) -> &str;

    /// Run one generation call.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, RoastError>;
}

#[async_trait]
impl<T: GenerationClient + ?Sized> GenerationClient for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, RoastError> {
        (**self).generate(request).await
    }
}
