use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AutoPrError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutoPrConfig {
   /// Base URL of an OpenAI-compatible API (`/chat/completions` is appended)
   pub api_base_url: String,

   /// Optional API key (overridden by `AUTOPR_API_KEY`, then `OPENAI_API_KEY`)
   pub api_key: Option<String>,

   /// Model identifier sent with every completion request
   pub model: String,

   /// HTTP request timeout in seconds
   pub request_timeout_secs: u64,

   /// HTTP connection timeout in seconds
   pub connect_timeout_secs: u64,

   pub commit_max_tokens:  u32,
   pub commit_temperature: f32,
   pub pr_max_tokens:      u32,
   pub pr_temperature:     f32,

   /// GitHub REST endpoint (override for GitHub Enterprise)
   pub github_api_url: String,

   /// GitHub token; falls back to `gh auth token`, `GITHUB_TOKEN`, `GH_TOKEN`
   pub github_token: Option<String>,

   /// Prefix for branches created by `workon` (`<prefix>/<number>-<slug>`)
   pub branch_prefix: String,

   /// Base branch for new pull requests. The repository default branch is
   /// used when unset.
   pub default_base: Option<String>,
}

impl Default for AutoPrConfig {
   fn default() -> Self {
      Self {
         api_base_url:         "https://api.openai.com/v1".to_string(),
         api_key:              None,
         model:                "gpt-4o-mini".to_string(),
         request_timeout_secs: 120,
         connect_timeout_secs: 30,
         commit_max_tokens:    100,
         commit_temperature:   0.5,
         pr_max_tokens:        700,
         pr_temperature:       0.7,
         github_api_url:       "https://api.github.com".to_string(),
         github_token:         None,
         branch_prefix:        "feature".to_string(),
         default_base:         None,
      }
   }
}

impl AutoPrConfig {
   /// Load config from `AUTOPR_CONFIG` or the default location
   /// (~/.config/autopr/config.toml). Falls back to defaults when the file
   /// doesn't exist. Environment variables override file values:
   /// - `AUTOPR_API_URL` overrides `api_base_url`
   /// - `AUTOPR_API_KEY` / `OPENAI_API_KEY` override `api_key`
   /// - `AUTOPR_MODEL` overrides `model`
   ///
   /// `GITHUB_TOKEN` is not read here; it is a fallback after `gh auth token`
   /// in [`crate::github::resolve_token`].
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("AUTOPR_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_default()
      };

      if config_path.exists() {
         return Self::from_file(&config_path);
      }

      let mut config = Self::default();
      config.apply_env_overrides();
      Ok(config)
   }

   /// Load config from specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path).map_err(|e| {
         AutoPrError::Other(format!("Failed to read config {}: {e}", path.display()))
      })?;
      let mut config: Self = toml::from_str(&contents)?;
      config.apply_env_overrides();
      tracing::debug!(path = %path.display(), "loaded config file");
      Ok(config)
   }

   fn apply_env_overrides(&mut self) {
      self.apply_overrides(non_empty_env);
   }

   fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
      if let Some(api_url) = lookup("AUTOPR_API_URL") {
         self.api_base_url = api_url;
      }

      if let Some(api_key) = lookup("AUTOPR_API_KEY").or_else(|| lookup("OPENAI_API_KEY")) {
         self.api_key = Some(api_key);
      }

      if let Some(model) = lookup("AUTOPR_MODEL") {
         self.model = model;
      }
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      std::env::var("HOME")
         .or_else(|_| std::env::var("USERPROFILE"))
         .map(|home| PathBuf::from(home).join(".config/autopr/config.toml"))
         .map_err(|_| {
            AutoPrError::Other("No home directory found (tried HOME and USERPROFILE)".to_string())
         })
   }
}

fn non_empty_env(name: &str) -> Option<String> {
   std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
