use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
   config::AutoPrConfig,
   error::{AutoPrError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
   System,
   User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
   pub role:    Role,
   pub content: String,
}

impl Message {
   pub fn system(content: impl Into<String>) -> Self {
      Self { role: Role::System, content: content.into() }
   }

   pub fn user(content: impl Into<String>) -> Self {
      Self { role: Role::User, content: content.into() }
   }
}

/// One chat-completion request (OpenAI wire format)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
   pub model:       String,
   pub messages:    Vec<Message>,
   pub max_tokens:  u32,
   pub temperature: f32,
}

/// A model that turns a chat request into a single text completion.
#[cfg_attr(test, mockall::automock)]
pub trait ChatModel {
   fn complete(&self, request: &ChatRequest) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct Choice {
   message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
   #[serde(default)]
   content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
   choices: Vec<Choice>,
}

/// Blocking client for OpenAI-compatible `/chat/completions` endpoints
pub struct OpenAiClient {
   http:         reqwest::blocking::Client,
   api_base_url: String,
   api_key:      String,
}

impl fmt::Debug for OpenAiClient {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("OpenAiClient")
         .field("api_base_url", &self.api_base_url)
         .finish_non_exhaustive()
   }
}

impl OpenAiClient {
   /// Build a client from config. Fails without an API key.
   pub fn from_config(config: &AutoPrConfig) -> Result<Self> {
      let api_key = config
         .api_key
         .clone()
         .filter(|key| !key.trim().is_empty())
         .ok_or(AutoPrError::MissingApiKey)?;

      let http = reqwest::blocking::Client::builder()
         .timeout(Duration::from_secs(config.request_timeout_secs))
         .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
         .build()?;

      Ok(Self { http, api_base_url: config.api_base_url.trim_end_matches('/').to_string(), api_key })
   }
}

impl ChatModel for OpenAiClient {
   fn complete(&self, request: &ChatRequest) -> Result<String> {
      tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "sending chat completion");

      let response = self
         .http
         .post(format!("{}/chat/completions", self.api_base_url))
         .header("content-type", "application/json")
         .header("Authorization", format!("Bearer {}", self.api_key))
         .json(request)
         .send()?;

      let status = response.status();
      if !status.is_success() {
         let error_text = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
         return Err(AutoPrError::ApiError { status: status.as_u16(), body: error_text });
      }

      let api_response: ApiResponse = response.json()?;
      extract_content(api_response)
   }
}

fn extract_content(response: ApiResponse) -> Result<String> {
   response
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .ok_or_else(|| AutoPrError::Other("API returned no completion text".to_string()))
}
