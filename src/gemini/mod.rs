/// Gemini integration
///
/// - `types`: request/response bodies for `generateContent`
/// - `client`: the reqwest-backed transport
/// - `tryon`: builds the try-on request and picks the image out of the reply

pub mod client;
pub mod tryon;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;
pub use tryon::{GeneratedImage, TryOnClient, TryOnError, TryOnRequest};
pub use types::{GenerateContentRequest, GenerateContentResponse};

/// A transport-level failure talking to the service
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ServiceError(pub String);

/// Anything that can answer a `generateContent` call.
///
/// The real implementation is `GeminiClient`; tests plug in fakes.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ServiceError>;
}
