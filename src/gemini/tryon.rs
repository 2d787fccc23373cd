use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;

use super::types::{Content, GenerateContentRequest, GenerationConfig, Modality, Part};
use super::ContentGenerator;
use crate::encoder::{self, EncodedImage, ImageSelection};

/// The instruction sent alongside the two photos.
/// "First image" is the person, "second image" is the clothing.
pub const INSTRUCTION: &str = "Take the person from the first image and the clothing item from the second image. Generate a new, photorealistic image of the person wearing the clothing item. The output should only be the final image. Ensure the fit and lighting are natural.";

/// Media type assumed when the service doesn't label its image
const DEFAULT_RESULT_MEDIA_TYPE: &str = "image/jpeg";

pub const VALIDATION_MESSAGE: &str = "Please upload both images before proceeding.";

const NO_IMAGE_MESSAGE: &str = "The AI did not return an image. It might have refused the request due to safety policies. Please try with different images.";

/// Everything that can go wrong with a try-on, as a user-facing message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TryOnError {
    /// Submission attempted without both photos
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("Failed to generate image: {0}")]
    ServiceCallFailed(String),

    #[error("Failed to generate image: {}", NO_IMAGE_MESSAGE)]
    NoImageReturned,
}

/// A single try-on invocation. Only constructible with both photos present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnRequest {
    pub person: ImageSelection,
    pub clothing: ImageSelection,
    pub instruction: &'static str,
}

impl TryOnRequest {
    pub fn new(person: ImageSelection, clothing: ImageSelection) -> Self {
        Self {
            person,
            clothing,
            instruction: INSTRUCTION,
        }
    }

    /// Wire body: person part, clothing part, then the instruction
    pub fn to_wire(&self) -> GenerateContentRequest {
        let person = self.person.encoded();
        let clothing = self.clothing.encoded();

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    inline_part(person),
                    inline_part(clothing),
                    Part::text(self.instruction),
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec![Modality::Image, Modality::Text],
            },
        }
    }
}

fn inline_part(image: EncodedImage) -> Part {
    Part::inline(image.media_type, image.data)
}

/// The image the service produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub media_type: String,
    /// Base64 payload exactly as returned
    pub data: String,
    /// Decoded payload
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    /// `data:<media type>;base64,<payload>` for display
    pub fn data_url(&self) -> String {
        encoder::to_data_url(&self.media_type, &self.bytes)
    }
}

/// Runs try-on requests against a content generator
pub struct TryOnClient<G> {
    generator: G,
}

impl<G: ContentGenerator> TryOnClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// One request, one response, no retries.
    ///
    /// Returns the first inline image of the first candidate.
    pub async fn try_on(&self, request: &TryOnRequest) -> Result<GeneratedImage, TryOnError> {
        let wire = request.to_wire();

        tracing::debug!(
            person = %request.person.file_name(),
            person_bytes = request.person.bytes().len(),
            clothing = %request.clothing.file_name(),
            clothing_bytes = request.clothing.bytes().len(),
            "Built try-on request"
        );

        let response = self
            .generator
            .generate_content(&wire)
            .await
            .map_err(|e| {
                tracing::error!("Error in try-on service call: {}", e);
                TryOnError::ServiceCallFailed(e.to_string())
            })?;

        let Some(inline) = response
            .first_candidate_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
        else {
            let block_reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref());
            let finish_reason = response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.as_deref());
            tracing::warn!(?block_reason, ?finish_reason, "Gemini returned no image");
            return Err(TryOnError::NoImageReturned);
        };

        let bytes = BASE64.decode(inline.data.as_bytes()).map_err(|e| {
            TryOnError::ServiceCallFailed(format!("Image payload was not valid base64: {}", e))
        })?;

        let media_type = inline
            .mime_type
            .clone()
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| DEFAULT_RESULT_MEDIA_TYPE.to_string());

        tracing::info!(media_type = %media_type, size = bytes.len(), "✅ Received generated image");

        Ok(GeneratedImage {
            media_type,
            data: inline.data.clone(),
            bytes,
        })
    }
}
