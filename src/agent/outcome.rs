use crate::gemini::{GenerateContentResponse, SafetyRating};

pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API key not configured. Please ensure the POSTCRAFT_GEMINI_API_KEY environment variable is set.";
pub const INVALID_KEY_MESSAGE: &str =
    "Invalid API key for text generation. Please check your API key configuration.";
const NO_TEXT_REASON: &str = "The AI model did not provide any text content.";

const FINISH_STOP: &str = "STOP";
const FINISH_UNSPECIFIED: &str = "FINISH_REASON_UNSPECIFIED";
const FINISH_SAFETY: &str = "SAFETY";

/// Result of one generation request: the post text or a classified failure.
pub type GenerationOutcome = Result<String, GenerationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    ContentBlocked,
    EmptyResponse,
    Transport,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),
    #[error("Failed to generate post: {reason} Please try rephrasing your input or try again later.")]
    ContentBlocked {
        reason: String,
        categories: Vec<String>,
    },
    #[error("Failed to generate post: {0} Please try rephrasing your input or try again later.")]
    EmptyResponse(String),
    #[error("Failed to reach the generation service: {0}")]
    Transport(String),
    #[error("{0}")]
    InvalidRequest(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Configuration(_) => ErrorKind::Configuration,
            GenerationError::ContentBlocked { .. } => ErrorKind::ContentBlocked,
            GenerationError::EmptyResponse(_) => ErrorKind::EmptyResponse,
            GenerationError::Transport(_) => ErrorKind::Transport,
            GenerationError::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    /// Message meant for the end user.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Turns a raw model response into a post or a classified failure.
/// Non-empty text is returned untouched.
pub fn classify_response(response: &GenerateContentResponse) -> GenerationOutcome {
    if let Some(text) = response.text().filter(|t| !t.trim().is_empty()) {
        return Ok(text);
    }

    if let Some(candidate) = response.candidates.first() {
        return Err(match candidate.finish_reason.as_deref() {
            None | Some(FINISH_STOP) | Some(FINISH_UNSPECIFIED) => {
                GenerationError::EmptyResponse(NO_TEXT_REASON.to_string())
            }
            Some(FINISH_SAFETY) => blocked("Model finished due to SAFETY.", &candidate.safety_ratings),
            Some(other) => {
                GenerationError::EmptyResponse(format!("Model finished due to {}.", other))
            }
        });
    }

    if let Some(feedback) = response.prompt_feedback.as_ref() {
        if let Some(reason) = feedback.block_reason.as_deref() {
            return Err(blocked(
                &format!("The prompt was blocked due to {}.", reason),
                &feedback.safety_ratings,
            ));
        }
    }

    Err(GenerationError::EmptyResponse(NO_TEXT_REASON.to_string()))
}

/// Maps a failed call to the taxonomy. Credential problems are detected by
/// looking for known markers in the error text, which is best effort only.
pub fn classify_transport_error(err: &anyhow::Error) -> GenerationError {
    let message = format!("{:#}", err);
    if mentions_invalid_credential(&message) {
        GenerationError::Configuration(INVALID_KEY_MESSAGE.to_string())
    } else {
        GenerationError::Transport(message)
    }
}

pub fn mentions_invalid_credential(message: &str) -> bool {
    message.contains("API_KEY_INVALID") || message.contains("API key not valid")
}

/// Categories rated above LOW, without the `HARM_CATEGORY_` prefix.
pub fn flagged_categories(ratings: &[SafetyRating]) -> Vec<String> {
    ratings
        .iter()
        .filter(|r| r.probability != "NEGLIGIBLE" && r.probability != "LOW")
        .map(|r| {
            r.category
                .strip_prefix("HARM_CATEGORY_")
                .unwrap_or(&r.category)
                .to_string()
        })
        .collect()
}

fn blocked(lead: &str, ratings: &[SafetyRating]) -> GenerationError {
    let categories = flagged_categories(ratings);
    let reason = if categories.is_empty() {
        lead.to_string()
    } else {
        format!(
            "{} Potentially harmful content detected in categories: {}.",
            lead,
            categories.join(", ")
        )
    };
    GenerationError::ContentBlocked { reason, categories }
}
