pub mod outcome;
pub mod persona;
pub mod prompt;

use crate::gemini::{
    ContentModel, GenerateContentRequest, GenerationConfig, HarmBlockThreshold, HarmCategory,
    SafetySetting,
};

use outcome::{
    classify_response, classify_transport_error, GenerationError, GenerationOutcome,
    MISSING_KEY_MESSAGE,
};
use persona::Persona;
use prompt::{compose, MANDATORY_SUFFIX};

pub const SAMPLING: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    top_k: 32,
    top_p: 0.9,
};

pub const SAFETY_SETTINGS: [SafetySetting; 4] = [
    SafetySetting {
        category: HarmCategory::HarmCategoryHarassment,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategoryHateSpeech,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategorySexuallyExplicit,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
    SafetySetting {
        category: HarmCategory::HarmCategoryDangerousContent,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Fresh,
    Improve { draft: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Source material. Empty means the model picks a timely topic.
    pub topic: String,
    pub persona: Persona,
    pub mode: Mode,
}

impl GenerationRequest {
    pub fn fresh(topic: impl Into<String>, persona: Persona) -> Self {
        Self {
            topic: topic.into(),
            persona,
            mode: Mode::Fresh,
        }
    }

    pub fn improve(draft: impl Into<String>, persona: Persona) -> Self {
        Self {
            topic: String::new(),
            persona,
            mode: Mode::Improve {
                draft: draft.into(),
            },
        }
    }
}

/// Sends composed prompts to a [`ContentModel`] and classifies what comes back.
pub struct Generator<M> {
    model: M,
}

impl<M: ContentModel> Generator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Composes the prompt for `request` and runs it. `today` is the
    /// caller's formatted calendar date.
    pub async fn generate(&self, request: &GenerationRequest, today: &str) -> GenerationOutcome {
        if let Mode::Improve { draft } = &request.mode {
            if draft.trim().is_empty() {
                return Err(GenerationError::InvalidRequest(
                    "There is no draft to improve. Please provide the post text first.".to_string(),
                ));
            }
        }

        let prompt = compose(request, today);
        log::info!(
            "generating post (persona: {}, mode: {})",
            request.persona,
            match request.mode {
                Mode::Fresh => "fresh",
                Mode::Improve { .. } => "improve",
            }
        );
        self.generate_prompt(&prompt).await
    }

    /// One call to the model with the fixed sampling and safety settings.
    pub async fn generate_prompt(&self, prompt: &str) -> GenerationOutcome {
        if !self.model.has_credential() {
            return Err(GenerationError::Configuration(
                MISSING_KEY_MESSAGE.to_string(),
            ));
        }

        let request = GenerateContentRequest::new(prompt, SAMPLING, SAFETY_SETTINGS.to_vec());
        log::info!("sending prompt to model");
        let outcome = match self.model.generate_content(&request).await {
            Ok(response) => classify_response(&response),
            Err(err) => Err(classify_transport_error(&err)),
        };

        match &outcome {
            Ok(text) if !text.trim_end().ends_with(MANDATORY_SUFFIX) => {
                log::warn!("generated post does not end with the mandatory suffix");
            }
            Ok(_) => {}
            Err(err) => log::warn!("generation failed: {}", err),
        }
        outcome
    }
}
