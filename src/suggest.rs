//! AI-drafted commit messages and pull request descriptions.
//!
//! Every path returns printable text. Missing input, a missing model client,
//! API failures and anything unexpected are turned into fixed placeholder
//! strings and logged, so a drafting failure never aborts the CLI.

use tracing::{error, warn};

use crate::{
   api::{ChatModel, ChatRequest, Message},
   config::AutoPrConfig,
   error::{AutoPrError, Result},
   prompt::{self, COMMIT_SYSTEM_PROMPT, PR_SYSTEM_PROMPT},
   sanitize::{sanitize_single_line, sanitize_title_and_body},
   types::{IssueRecord, PrTitleBody},
};

pub const NO_DIFF_PLACEHOLDER: &str = "[No diff provided to generate commit message.]";
pub const NO_PR_INPUT_PLACEHOLDER: &str =
   "[Cannot generate PR description without issue details and commits.]";
pub const MODEL_UNAVAILABLE_PLACEHOLDER: &str = "[OpenAI client not initialized. Check API key.]";
pub const TRANSPORT_FAILURE_PLACEHOLDER: &str = "[Error communicating with OpenAI API]";
pub const COMMIT_FAILURE_PLACEHOLDER: &str = "[Error generating commit message]";
pub const PR_FAILURE_PLACEHOLDER: &str = "[Error generating PR description]";

/// Whether `text` is one of the placeholders above rather than model output.
pub fn is_placeholder(text: &str) -> bool {
   [
      NO_DIFF_PLACEHOLDER,
      NO_PR_INPUT_PLACEHOLDER,
      MODEL_UNAVAILABLE_PLACEHOLDER,
      TRANSPORT_FAILURE_PLACEHOLDER,
      COMMIT_FAILURE_PLACEHOLDER,
      PR_FAILURE_PLACEHOLDER,
   ]
   .contains(&text)
}

/// Suggest a conventional commit subject for a staged diff.
pub fn suggest_commit_message(
   model: Option<&dyn ChatModel>,
   diff: &str,
   config: &AutoPrConfig,
) -> String {
   if diff.trim().is_empty() {
      return NO_DIFF_PLACEHOLDER.to_string();
   }
   let Some(model) = model else {
      warn!("commit message requested without a model client");
      return MODEL_UNAVAILABLE_PLACEHOLDER.to_string();
   };

   match draft_commit_message(model, diff, config) {
      Ok(message) => message,
      Err(e) if e.is_transport() => {
         error!("Model API error: {e}");
         TRANSPORT_FAILURE_PLACEHOLDER.to_string()
      },
      Err(e) => {
         error!("Unexpected error while generating commit message: {e}");
         COMMIT_FAILURE_PLACEHOLDER.to_string()
      },
   }
}

/// Suggest a PR title and body from the issue being worked on and the
/// branch's commit subjects. Failures yield a placeholder title and an empty
/// body.
pub fn suggest_pr_description(
   model: Option<&dyn ChatModel>,
   issue: Option<&IssueRecord>,
   commits: &[String],
   config: &AutoPrConfig,
) -> PrTitleBody {
   let Some(issue) = issue.filter(|_| !commits.is_empty()) else {
      return PrTitleBody::new(NO_PR_INPUT_PLACEHOLDER, "");
   };
   let Some(model) = model else {
      warn!("PR description requested without a model client");
      return PrTitleBody::new(MODEL_UNAVAILABLE_PLACEHOLDER, "");
   };

   match draft_pr_description(model, issue, commits, config) {
      Ok(pr) => pr,
      Err(e) if e.is_transport() => {
         error!("Model API error: {e}");
         PrTitleBody::new(TRANSPORT_FAILURE_PLACEHOLDER, "")
      },
      Err(e) => {
         error!("Unexpected error while generating PR description: {e}");
         PrTitleBody::new(PR_FAILURE_PLACEHOLDER, "")
      },
   }
}

fn draft_commit_message(model: &dyn ChatModel, diff: &str, config: &AutoPrConfig) -> Result<String> {
   let request = ChatRequest {
      model:       config.model.clone(),
      messages:    vec![
         Message::system(COMMIT_SYSTEM_PROMPT),
         Message::user(prompt::build_commit_prompt(diff)?),
      ],
      max_tokens:  config.commit_max_tokens,
      temperature: config.commit_temperature,
   };

   let raw = model.complete(&request)?;
   let message = sanitize_single_line(&raw);
   if is_blank_or_backticks(&message) {
      return Err(AutoPrError::Other("model returned an empty commit message".to_string()));
   }
   Ok(message)
}

fn draft_pr_description(
   model: &dyn ChatModel,
   issue: &IssueRecord,
   commits: &[String],
   config: &AutoPrConfig,
) -> Result<PrTitleBody> {
   let request = ChatRequest {
      model:       config.model.clone(),
      messages:    vec![
         Message::system(PR_SYSTEM_PROMPT),
         Message::user(prompt::build_pr_description_prompt(issue, commits)?),
      ],
      max_tokens:  config.pr_max_tokens,
      temperature: config.pr_temperature,
   };

   let raw = model.complete(&request)?;
   let pr = sanitize_title_and_body(&raw);
   if is_blank_or_backticks(&pr.title) {
      return Err(AutoPrError::Other(format!("model returned an unusable PR title: {:?}", pr.title)));
   }
   Ok(pr)
}

/// Empty, or a stray fence/backtick run left over from a wrapper that did
/// not match any unwrappable shape.
fn is_blank_or_backticks(text: &str) -> bool {
   text.chars().all(|c| c == '`' || c.is_whitespace())
}
