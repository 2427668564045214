use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;

// === Issue tracking ===

/// The unit of work a pull request is motivated by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRecord {
   pub number: u64,
   pub title:  String,
   pub body:   String,
   pub labels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
   Open,
   Closed,
}

/// Issue as shown by `ls`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
   pub number:     u64,
   pub title:      String,
   pub state:      IssueState,
   pub labels:     Vec<String>,
   pub updated_at: Option<DateTime<Utc>>,
}

/// Pull request returned by GitHub after creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
   pub number:   u64,
   pub html_url: String,
}

// === Model output ===

/// Title and body drafted for a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrTitleBody {
   pub title: String,
   pub body:  String,
}

impl PrTitleBody {
   pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
      Self { title: title.into(), body: body.into() }
   }
}

// CLI Args
#[derive(Parser, Debug)]
#[command(author, version, about = "GitHub workflow assistant with AI-drafted commits and PRs", long_about = None)]
pub struct Args {
   /// Path to config file (default: ~/.config/autopr/config.toml)
   #[arg(long, global = true)]
   pub config: Option<PathBuf>,

   /// Directory to run git commands in
   #[arg(long, global = true, default_value = ".")]
   pub dir: String,

   #[command(subcommand)]
   pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
   /// List issues of the current repository
   Ls {
      /// Include closed issues
      #[arg(short = 'a', long = "all")]
      all: bool,
   },

   /// Start work on an issue by creating a branch for it
   Workon {
      /// Issue number
      issue: u64,
   },

   /// Push the current branch and open a pull request
   Create {
      /// PR title. When omitted the title and body are drafted by the model
      #[arg(long)]
      title: Option<String>,

      /// Base branch (default: config `default_base` or the repository
      /// default branch)
      #[arg(long)]
      base: Option<String>,

      /// Open the pull request as a draft
      #[arg(long)]
      draft: bool,

      /// Print the pull request instead of pushing and creating it
      #[arg(long)]
      dry_run: bool,
   },

   /// Suggest a commit message for the staged changes and commit
   Commit {
      /// Preview without committing
      #[arg(long)]
      dry_run: bool,

      /// Copy the message to clipboard
      #[arg(long)]
      copy: bool,
   },
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_parse_ls() {
      let args = Args::try_parse_from(["autopr", "ls"]).unwrap();
      assert_eq!(args.command, Command::Ls { all: false });
      assert_eq!(args.dir, ".");
   }

   #[test]
   fn test_parse_ls_all() {
      let args = Args::try_parse_from(["autopr", "ls", "-a"]).unwrap();
      assert_eq!(args.command, Command::Ls { all: true });
   }

   #[test]
   fn test_parse_workon() {
      let args = Args::try_parse_from(["autopr", "workon", "789"]).unwrap();
      assert_eq!(args.command, Command::Workon { issue: 789 });
   }

   #[test]
   fn test_parse_workon_rejects_non_number() {
      assert!(Args::try_parse_from(["autopr", "workon", "not_a_number"]).is_err());
   }

   #[test]
   fn test_parse_create_with_title() {
      let args = Args::try_parse_from(["autopr", "create", "--title", "Test PR"]).unwrap();
      assert_eq!(args.command, Command::Create {
         title:   Some("Test PR".to_string()),
         base:    None,
         draft:   false,
         dry_run: false,
      });
   }

   #[test]
   fn test_parse_commit_with_global_dir() {
      let args = Args::try_parse_from(["autopr", "commit", "--dry-run", "--dir", "/tmp/repo"]).unwrap();
      assert_eq!(args.command, Command::Commit { dry_run: true, copy: false });
      assert_eq!(args.dir, "/tmp/repo");
   }
}
