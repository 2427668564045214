use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoPrError {
   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("GitHub API request failed (HTTP {status}): {body}")]
   GitHubError { status: u16, body: String },

   #[error("Model API request failed (HTTP {status}): {body}")]
   ApiError { status: u16, body: String },

   #[error("No API key configured (set AUTOPR_API_KEY or OPENAI_API_KEY)")]
   MissingApiKey,

   #[error("No GitHub token found (run `gh auth login` or set GITHUB_TOKEN)")]
   MissingGitHubToken,

   #[error("Error detecting repository: {0}")]
   RepoDetection(String),

   #[error("HTTP error: {0}")]
   HttpError(#[from] reqwest::Error),

   #[error("Failed to parse config: {0}")]
   ConfigError(#[from] toml::de::Error),

   #[error("Clipboard error: {0}")]
   ClipboardError(#[from] arboard::Error),

   #[error("{0}")]
   Other(String),
}

impl AutoPrError {
   /// Whether this error came from talking to a remote API (connection,
   /// timeout, or a non-2xx response), as opposed to a local failure.
   pub const fn is_transport(&self) -> bool {
      matches!(self, Self::HttpError(_) | Self::ApiError { .. })
   }
}

pub type Result<T> = std::result::Result<T, AutoPrError>;

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_api_error_is_transport() {
      let err = AutoPrError::ApiError { status: 502, body: "bad gateway".to_string() };
      assert!(err.is_transport());
   }

   #[test]
   fn test_local_errors_are_not_transport() {
      assert!(!AutoPrError::Other("boom".to_string()).is_transport());
      assert!(!AutoPrError::MissingApiKey.is_transport());
      assert!(!AutoPrError::GitHubError { status: 404, body: String::new() }.is_transport());
   }

   #[test]
   fn test_api_error_display() {
      let err = AutoPrError::ApiError { status: 401, body: "invalid key".to_string() };
      assert_eq!(err.to_string(), "Model API request failed (HTTP 401): invalid key");
   }
}
