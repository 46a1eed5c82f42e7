//! Summarizer gateway - AI-backed text condensation with a local fallback

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You summarize work log entries into a short, professional \
paragraph. Keep concrete tasks and achievements, drop filler. Reply with the summary only.";

/// Text condensation capability consumed by the report generator.
///
/// Implementations never fail for plain textual input; degraded output is
/// returned instead of an error.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> String;
}

/// Settings for the summarizer gateway, passed in explicitly at construction.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub fallback_max_chars: usize,
}

/// Where a summary came from. Internal only; callers see a plain string.
enum SummaryOutcome {
    Backend(String),
    Fallback(String),
}

/// Gateway over the remote AI backend and the local truncation heuristic.
///
/// Stateless across calls: each `summarize` either completes against the
/// backend or degrades to the heuristic, and no session is retained.
pub struct SummarizerGateway {
    backend: Option<HttpBackend>,
    fallback_max_chars: usize,
}

impl SummarizerGateway {
    pub fn new(config: SummarizerConfig) -> Self {
        let backend = config.api_key.as_ref().map(|key| HttpBackend {
            api_key: key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        });

        SummarizerGateway {
            backend,
            fallback_max_chars: config.fallback_max_chars,
        }
    }

    fn condense(&self, text: &str) -> SummaryOutcome {
        let Some(backend) = &self.backend else {
            debug!("no api key configured, using fallback summary");
            return SummaryOutcome::Fallback(fallback_summary(text, self.fallback_max_chars));
        };

        match backend.complete(text) {
            Ok(summary) if !summary.trim().is_empty() => {
                debug!(chars = summary.len(), "summary obtained from backend");
                SummaryOutcome::Backend(summary.trim().to_string())
            }
            Ok(_) => {
                warn!("backend returned an empty summary, using fallback");
                SummaryOutcome::Fallback(fallback_summary(text, self.fallback_max_chars))
            }
            Err(e) => {
                warn!(error = %e, "summarization backend failed, using fallback");
                SummaryOutcome::Fallback(fallback_summary(text, self.fallback_max_chars))
            }
        }
    }
}

impl Summarizer for SummarizerGateway {
    fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        match self.condense(text) {
            SummaryOutcome::Backend(s) | SummaryOutcome::Fallback(s) => s,
        }
    }
}

/// Deterministic local heuristic: the input unchanged when short enough,
/// otherwise truncated on a char boundary with an ellipsis marker.
fn fallback_summary(text: &str, max_chars: usize) -> String {
    let text = text.trim();

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    // Cut back to the last whitespace so words stay whole
    let cut = truncated
        .rfind(char::is_whitespace)
        .filter(|&i| i > 0)
        .unwrap_or(truncated.len());
    format!("{}…", truncated[..cut].trim_end())
}

/// OpenAI-style chat-completions backend
struct HttpBackend {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl HttpBackend {
    fn complete(&self, text: &str) -> anyhow::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("failed to build http client")?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Summarize these work log entries:\n\n{}", text),
                },
            ],
            temperature: 0.3,
        };

        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .context("request to summarization backend failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("backend returned status {}", status));
        }

        let body: ChatResponse = response
            .json()
            .context("invalid response from summarization backend")?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow!("backend returned no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_without_backend(max_chars: usize) -> SummarizerGateway {
        SummarizerGateway::new(SummarizerConfig {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 1,
            fallback_max_chars: max_chars,
        })
    }

    #[test]
    fn test_empty_input_returns_empty_summary() {
        let gateway = gateway_without_backend(100);
        assert_eq!(gateway.summarize(""), "");
        assert_eq!(gateway.summarize("   \n"), "");
    }

    #[test]
    fn test_short_input_returned_unchanged() {
        let gateway = gateway_without_backend(100);
        assert_eq!(gateway.summarize("fixed bug A"), "fixed bug A");
    }

    #[test]
    fn test_long_input_truncated() {
        let gateway = gateway_without_backend(20);
        let summary = gateway.summarize("fixed a very long and complicated bug in the parser");

        assert!(summary.ends_with('…'));
        assert!(summary.chars().count() <= 21);
        assert!(summary.starts_with("fixed a very long"));
    }

    #[test]
    fn test_non_empty_input_gives_non_empty_output() {
        for max in [0usize, 1, 5, 1000] {
            let gateway = gateway_without_backend(max);
            assert!(!gateway.summarize("did something").is_empty());
        }
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let gateway = gateway_without_backend(5);
        // Multi-byte characters must not be split
        let summary = gateway.summarize("héllo wörld and more text here");
        assert!(summary.ends_with('…'));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let gateway = gateway_without_backend(25);
        let text = "reviewed three pull requests and updated deployment scripts";
        assert_eq!(gateway.summarize(text), gateway.summarize(text));
    }

    #[test]
    fn test_fallback_summary_cuts_on_word_boundary() {
        let out = fallback_summary("alpha beta gamma delta", 12);
        assert_eq!(out, "alpha beta…");
    }

    #[test]
    fn test_gateway_without_key_has_no_backend() {
        let gateway = gateway_without_backend(100);
        assert!(gateway.backend.is_none());
    }

    #[test]
    fn test_gateway_with_key_builds_backend() {
        let gateway = SummarizerGateway::new(SummarizerConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "https://api.openai.com/v1/".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 5,
            fallback_max_chars: 100,
        });

        let backend = gateway.backend.as_ref().unwrap();
        assert_eq!(backend.base_url, "https://api.openai.com/v1");
        assert_eq!(backend.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unreachable_backend_falls_back() {
        // Port 9 (discard) refuses connections; the error must be absorbed
        let gateway = SummarizerGateway::new(SummarizerConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 1,
            fallback_max_chars: 100,
        });

        let summary = gateway.summarize("wrote integration tests");
        assert_eq!(summary, "wrote integration tests");
    }
}
