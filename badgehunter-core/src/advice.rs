//! Badge advice assistant: the capability trait, the Gemini-backed
//! implementation and the chat transcript the client keeps.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::transport::{HttpRequest, HttpTransport, TransportError};

pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const APOLOGY: &str = "Sorry, I encountered an error while fetching the badge advice. Please check your API key or try again later.";
pub const EMPTY_REPLY: &str = "I couldn't generate a response. Please try again.";
pub const GREETING: &str =
    "Hi! I can help you earn GitHub badges. Ask me how to get \"Pull Shark\" or tips for \"Galaxy Brain\"!";

const SYSTEM_INSTRUCTION: &str = "You are an expert on GitHub Profile Achievements and Badges.
Your goal is to help users earn badges like Pull Shark, Galaxy Brain, YOLO, etc.
Provide clear, actionable, and accurate advice.
If a badge is retired, tell them.
If a user asks for a strategy, give step-by-step instructions.
Be encouraging and professional.";

const TEMPERATURE: f64 = 0.7;
const DEEP_THINKING_BUDGET: u32 = 32_768;

/// Fast answers or slower, higher-quality reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdviceMode {
    #[default]
    Fast,
    Deep,
}

impl AdviceMode {
    #[must_use]
    pub const fn model_id(self) -> &'static str {
        match self {
            Self::Fast => "gemini-2.5-flash-lite",
            Self::Deep => "gemini-3-pro-preview",
        }
    }

    #[must_use]
    pub const fn thinking_budget(self) -> Option<u32> {
        match self {
            Self::Fast => None,
            Self::Deep => Some(DEEP_THINKING_BUDGET),
        }
    }

    #[must_use]
    pub const fn is_deep(self) -> bool {
        matches!(self, Self::Deep)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("generation request failed with HTTP {0}")]
    Status(u16),
    #[error("malformed generation response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of natural-language advice. Never fails: problems come back as a
/// user-facing apology.
#[async_trait(?Send)]
pub trait AdviceProvider {
    async fn ask(&self, query: &str, mode: AdviceMode) -> String;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

/// Build the `generateContent` request body for a query.
#[must_use]
pub fn generation_body(query: &str, mode: AdviceMode) -> serde_json::Value {
    let mut generation_config = json!({ "temperature": TEMPERATURE });
    if let Some(budget) = mode.thinking_budget() {
        generation_config["thinkingConfig"] = json!({ "thinkingBudget": budget });
    }
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": query }] }],
        "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "generationConfig": generation_config,
    })
}

/// Concatenate the answer text of the first candidate, skipping thought parts.
///
/// # Errors
///
/// Returns an error if the body is not a generation response.
pub fn extract_reply(body: &str) -> Result<Option<String>, serde_json::Error> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .filter(|text| !text.trim().is_empty());
    Ok(text)
}

#[derive(Debug, Clone)]
pub struct GeminiAdvisor<T> {
    transport: T,
    api_key: Option<String>,
    base_url: String,
}

impl<T: HttpTransport> GeminiAdvisor<T> {
    /// Advisor using the build-time `GEMINI_API_KEY`.
    #[must_use]
    pub fn from_env(transport: T) -> Self {
        Self::new(transport, option_env!("GEMINI_API_KEY").map(str::to_string))
    }

    #[must_use]
    pub fn new(transport: T, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_GEMINI_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn endpoint(&self, mode: AdviceMode) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            mode.model_id()
        )
    }

    /// Ask the model and surface failures as typed errors.
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured, the request fails, the
    /// status is not 2xx, or the body cannot be parsed.
    pub async fn try_ask(&self, query: &str, mode: AdviceMode) -> Result<String, AdviceError> {
        let api_key = self.api_key.as_deref().ok_or(AdviceError::MissingApiKey)?;
        let request = HttpRequest::post_json(
            self.endpoint(mode),
            generation_body(query, mode).to_string(),
        )
        .with_header("x-goog-api-key", api_key);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(AdviceError::Status(response.status));
        }
        Ok(extract_reply(&response.body)?.unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> AdviceProvider for GeminiAdvisor<T> {
    async fn ask(&self, query: &str, mode: AdviceMode) -> String {
        log::debug!("advice request ({})", mode.model_id());
        match self.try_ask(query, mode).await {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("advice provider error: {err}");
                APOLOGY.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Reply produced in deep mode.
    #[serde(default)]
    pub deep: bool,
}

/// Chat transcript, opened with the assistant's greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
                deep: false,
            }],
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's message. Returns the trimmed query to send, or
    /// `None` for blank input, which is not recorded.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: query.to_string(),
            deep: false,
        });
        Some(query.to_string())
    }

    pub fn push_reply(&mut self, text: String, mode: AdviceMode) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text,
            deep: mode.is_deep(),
        });
    }

    /// Send one exchange through `provider`. Blank input is ignored.
    pub async fn exchange<P>(&mut self, provider: &P, input: &str, mode: AdviceMode) -> bool
    where
        P: AdviceProvider + ?Sized,
    {
        let Some(query) = self.push_user(input) else {
            return false;
        };
        let reply = provider.ask(&query, mode).await;
        self.push_reply(reply, mode);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct CannedTransport {
        reply: Result<HttpResponse, TransportError>,
        last: RefCell<Option<HttpRequest>>,
    }

    impl CannedTransport {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                last: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for CannedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            *self.last.borrow_mut() = Some(request);
            self.reply.clone()
        }
    }

    const REPLY: &str = r#"{"candidates":[{"content":{"parts":[
        {"text":"thinking...","thought":true},
        {"text":"Open a PR "},{"text":"and get it merged."}
    ]}}]}"#;

    #[test]
    fn deep_mode_selects_model_and_thinking_budget() {
        let fast = generation_body("hi", AdviceMode::Fast);
        assert!(fast["generationConfig"].get("thinkingConfig").is_none());
        let deep = generation_body("hi", AdviceMode::Deep);
        assert_eq!(
            deep["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            32_768
        );
        assert_eq!(deep["contents"][0]["parts"][0]["text"], "hi");
        assert_ne!(
            AdviceMode::Fast.model_id(),
            AdviceMode::Deep.model_id()
        );
    }

    #[test]
    fn reply_text_joins_answer_parts() {
        let advisor = GeminiAdvisor::new(CannedTransport::ok(200, REPLY), Some("key".into()))
            .with_base_url("https://ai.test/v1beta/");
        let reply = block_on(advisor.ask("pull shark?", AdviceMode::Deep));
        assert_eq!(reply, "Open a PR and get it merged.");

        let sent = advisor.transport.last.borrow().clone().unwrap();
        assert_eq!(
            sent.url,
            "https://ai.test/v1beta/models/gemini-3-pro-preview:generateContent"
        );
        assert!(
            sent.headers
                .iter()
                .any(|(name, value)| name == "x-goog-api-key" && value == "key")
        );
    }

    #[test]
    fn empty_generation_gets_retry_hint() {
        let advisor =
            GeminiAdvisor::new(CannedTransport::ok(200, r#"{"candidates":[]}"#), Some("k".into()));
        assert_eq!(block_on(advisor.ask("q", AdviceMode::Fast)), EMPTY_REPLY);
    }

    #[test]
    fn failures_become_the_apology() {
        let missing_key = GeminiAdvisor::new(CannedTransport::ok(200, REPLY), None);
        assert_eq!(block_on(missing_key.ask("q", AdviceMode::Fast)), APOLOGY);
        assert!(missing_key.transport.last.borrow().is_none());

        let server_error = GeminiAdvisor::new(CannedTransport::ok(500, "oops"), Some("k".into()));
        assert_eq!(block_on(server_error.ask("q", AdviceMode::Fast)), APOLOGY);
        assert!(matches!(
            block_on(server_error.try_ask("q", AdviceMode::Fast)),
            Err(AdviceError::Status(500))
        ));

        let garbage = GeminiAdvisor::new(CannedTransport::ok(200, "<html>"), Some("k".into()));
        assert!(matches!(
            block_on(garbage.try_ask("q", AdviceMode::Fast)),
            Err(AdviceError::Malformed(_))
        ));

        let offline = GeminiAdvisor {
            transport: CannedTransport {
                reply: Err(TransportError::Network("down".into())),
                last: RefCell::new(None),
            },
            api_key: Some("k".into()),
            base_url: DEFAULT_GEMINI_BASE.to_string(),
        };
        assert_eq!(block_on(offline.ask("q", AdviceMode::Deep)), APOLOGY);
    }

    struct Echo;

    #[async_trait(?Send)]
    impl AdviceProvider for Echo {
        async fn ask(&self, query: &str, mode: AdviceMode) -> String {
            format!("{query}:{mode:?}")
        }
    }

    #[test]
    fn conversation_records_exchanges_and_skips_blank_input() {
        let mut chat = Conversation::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, GREETING);

        assert!(!block_on(chat.exchange(&Echo, "   ", AdviceMode::Fast)));
        assert_eq!(chat.messages().len(), 1);

        assert!(block_on(chat.exchange(&Echo, " yolo? ", AdviceMode::Deep)));
        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].text, "yolo?");
        assert_eq!(messages[2].text, "yolo?:Deep");
        assert!(messages[2].deep);
    }
}
