use postcraft::agent::outcome::{ErrorKind, MISSING_KEY_MESSAGE};
use postcraft::agent::persona::Persona;
use postcraft::agent::prompt::{build_fresh_prompt, build_improvement_prompt};
use postcraft::agent::{GenerationRequest, Generator, SAFETY_SETTINGS, SAMPLING};
use postcraft::gemini::{ContentModel, GenerateContentRequest, GenerateContentResponse};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const TODAY: &str = "October 19, 2026";

enum Reply {
    Body(serde_json::Value),
    Fail(&'static str),
}

struct StubModel {
    credential: bool,
    reply: Reply,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateContentRequest>>,
}

impl StubModel {
    fn new(reply: Reply) -> Self {
        Self {
            credential: true,
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn text(text: &str) -> Self {
        Self::new(Reply::Body(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        })))
    }

    fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_prompt(&self) -> String {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .expect("No request recorded")
            .prompt_text()
    }
}

impl ContentModel for StubModel {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> anyhow::Result<GenerateContentResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            Reply::Body(value) => Ok(serde_json::from_value(value.clone())?),
            Reply::Fail(message) => Err(anyhow::anyhow!(*message)),
        }
    }
}

#[tokio::test]
async fn returns_model_text_unchanged() {
    let generator = Generator::new(StubModel::text("Hello #AI"));

    let post = generator
        .generate(&GenerationRequest::fresh("", Persona::Neutral), TODAY)
        .await
        .expect("Generation failed");

    assert_eq!(post, "Hello #AI");
    assert_eq!(generator.model().calls(), 1);
}

#[tokio::test]
async fn sends_composed_prompt_with_fixed_settings() {
    let generator = Generator::new(StubModel::text("Post"));
    let request = GenerationRequest::fresh("pricing strategy", Persona::Executive);

    generator
        .generate(&request, TODAY)
        .await
        .expect("Generation failed");

    let model = generator.model();
    assert_eq!(
        model.last_prompt(),
        build_fresh_prompt(Persona::Executive, "pricing strategy", TODAY)
    );
    let sent = model.last_request.lock().unwrap().clone().expect("No request");
    assert_eq!(sent.generation_config, SAMPLING);
    assert_eq!(sent.safety_settings, SAFETY_SETTINGS.to_vec());
}

#[tokio::test]
async fn improve_mode_sends_improvement_prompt() {
    let generator = Generator::new(StubModel::text("Better post"));
    let request = GenerationRequest::improve("Rough draft", Persona::Analytical);

    let post = generator
        .generate(&request, TODAY)
        .await
        .expect("Generation failed");

    assert_eq!(post, "Better post");
    assert_eq!(
        generator.model().last_prompt(),
        build_improvement_prompt(Persona::Analytical, "Rough draft")
    );
}

#[tokio::test]
async fn blank_draft_is_rejected_without_calling_model() {
    let generator = Generator::new(StubModel::text("unused"));

    let err = generator
        .generate(&GenerationRequest::improve("  ", Persona::Neutral), TODAY)
        .await
        .expect_err("Expected invalid request");

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(generator.model().calls(), 0);
}

#[tokio::test]
async fn missing_credential_fails_before_call() {
    let generator = Generator::new(StubModel::text("unused").without_credential());

    let err = generator
        .generate_prompt("Write something")
        .await
        .expect_err("Expected configuration error");

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.detail(), MISSING_KEY_MESSAGE);
    assert_eq!(generator.model().calls(), 0);
}

#[tokio::test]
async fn safety_block_is_surfaced() {
    let generator = Generator::new(StubModel::new(Reply::Body(json!({
        "candidates": [{
            "finishReason": "SAFETY",
            "safetyRatings": [{ "category": "HARM_CATEGORY_HATE_SPEECH", "probability": "HIGH" }]
        }]
    }))));

    let err = generator
        .generate_prompt("Write something")
        .await
        .expect_err("Expected blocked content");

    assert_eq!(err.kind(), ErrorKind::ContentBlocked);
    assert!(err.detail().contains("HATE_SPEECH"));
}

#[tokio::test]
async fn invalid_key_failure_is_configuration_error() {
    let generator = Generator::new(StubModel::new(Reply::Fail(
        "Gemini API error (status 400): API_KEY_INVALID",
    )));

    let err = generator
        .generate_prompt("Write something")
        .await
        .expect_err("Expected configuration error");

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(generator.model().calls(), 1);
}

#[tokio::test]
async fn network_failure_is_transport_error() {
    let generator = Generator::new(StubModel::new(Reply::Fail("connection reset by peer")));

    let err = generator
        .generate_prompt("Write something")
        .await
        .expect_err("Expected transport error");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.detail().contains("connection reset by peer"));
}
