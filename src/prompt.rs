//! Prompt assembly for commit messages and PR descriptions.
//!
//! Templates live in `prompts/` and are compiled into the binary, so the
//! rendered prompt depends only on the arguments.

use rust_embed::RustEmbed;
use tera::{Context, Tera};

use crate::{
   error::{AutoPrError, Result},
   types::IssueRecord,
};

/// Embedded prompts folder (compiled into binary)
#[derive(RustEmbed)]
#[folder = "prompts/"]
struct Prompts;

/// Conventional commit types the model may choose from
pub const COMMIT_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Maximum commit subject length requested from the model
pub const MAX_SUBJECT_CHARS: usize = 72;

pub const COMMIT_SYSTEM_PROMPT: &str =
   "You are an expert at writing concise, conventional git commit messages.";

pub const PR_SYSTEM_PROMPT: &str =
   "You are an expert at writing clear, well-structured GitHub pull request titles and descriptions.";

fn load_template(name: &str) -> Result<String> {
   let file = Prompts::get(name)
      .ok_or_else(|| AutoPrError::Other(format!("Embedded template {name} not found")))?;
   String::from_utf8(file.data.into_owned())
      .map_err(|e| AutoPrError::Other(format!("Embedded template {name} is not valid UTF-8: {e}")))
}

fn render(name: &str, context: &Context) -> Result<String> {
   let template = load_template(name)?;
   // Markdown output, no HTML escaping
   Tera::one_off(&template, context, false)
      .map_err(|e| AutoPrError::Other(format!("Failed to render prompt template {name}: {e}")))
}

/// Render the commit message prompt. The caller guarantees `diff` is not
/// empty.
pub fn build_commit_prompt(diff: &str) -> Result<String> {
   let mut context = Context::new();
   context.insert("diff", diff);
   context.insert("commit_types", COMMIT_TYPES);
   context.insert("max_subject_chars", &MAX_SUBJECT_CHARS);
   render("commit.md", &context)
}

/// Render the pull request prompt from an issue and the branch's commit
/// subjects (oldest first). The caller guarantees both are present.
pub fn build_pr_description_prompt(issue: &IssueRecord, commits: &[String]) -> Result<String> {
   let body = if issue.body.trim().is_empty() {
      "No description provided."
   } else {
      issue.body.trim()
   };

   let mut context = Context::new();
   context.insert("number", &issue.number);
   context.insert("title", &issue.title);
   context.insert("labels", &issue.labels);
   context.insert("body", body);
   context.insert("commits", commits);
   render("pr_description.md", &context)
}
