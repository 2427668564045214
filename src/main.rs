use std::process::ExitCode;

use arboard::Clipboard;
use autopr::{
   api::{ChatModel, OpenAiClient},
   config::AutoPrConfig,
   error::{AutoPrError, Result},
   git,
   github::{GitHubClient, RepoSlug, parse_github_remote, resolve_token},
   style,
   suggest::{is_placeholder, suggest_commit_message, suggest_pr_description},
   types::{Args, Command},
   workflow::{
      format_issue_details, format_issue_line, issue_branch_name, issue_number_from_branch,
      manual_pr_body,
   },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log to stderr; level from `AUTOPR_LOG` (default: warn)
fn init_tracing() {
   let filter = EnvFilter::try_from_env("AUTOPR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
   tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .with_target(false)
      .without_time()
      .init();
}

/// Load config from args or default
fn load_config(args: &Args) -> Result<AutoPrConfig> {
   if let Some(ref config_path) = args.config {
      AutoPrConfig::from_file(config_path)
   } else {
      AutoPrConfig::load()
   }
}

fn detect_repo(dir: &str) -> Result<RepoSlug> {
   let url = git::origin_url(dir)?;
   parse_github_remote(&url)
}

fn github_client(config: &AutoPrConfig, dir: &str) -> Result<GitHubClient> {
   let repo = detect_repo(dir)?;
   let token = resolve_token(config)?;
   GitHubClient::new(config, token, repo)
}

/// Model client, or `None` when it can't be set up (e.g. no API key)
fn model_client(config: &AutoPrConfig) -> Option<OpenAiClient> {
   match OpenAiClient::from_config(config) {
      Ok(client) => Some(client),
      Err(e) => {
         tracing::warn!("Model client unavailable: {e}");
         None
      },
   }
}

/// Base branch: CLI flag, then config, then `None` (ask GitHub)
fn preferred_base(cli_base: Option<&str>, config: &AutoPrConfig) -> Option<String> {
   cli_base
      .or(config.default_base.as_deref())
      .map(str::to_string)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
   let mut clipboard = Clipboard::new()?;
   clipboard.set_text(text)?;
   Ok(())
}

fn run_ls(config: &AutoPrConfig, dir: &str, all: bool) -> Result<()> {
   let github = github_client(config, dir)?;
   let issues = github.list_issues(all)?;

   if issues.is_empty() {
      let which = if all { "" } else { "open " };
      println!("No {which}issues in {}", github.repo());
      return Ok(());
   }

   for issue in &issues {
      println!("{}", format_issue_line(issue));
   }
   Ok(())
}

fn run_workon(config: &AutoPrConfig, dir: &str, number: u64) -> Result<()> {
   let github = github_client(config, dir)?;
   let issue = github.get_issue(number)?;
   println!("{}\n", format_issue_details(&issue));

   let branch = issue_branch_name(&config.branch_prefix, &issue);
   git::create_branch(&branch, dir)?;
   style::print_success(&format!("Switched to new branch {}", style::bold(&branch)));
   Ok(())
}

fn run_create(
   config: &AutoPrConfig,
   dir: &str,
   title: Option<&str>,
   base: Option<&str>,
   draft: bool,
   dry_run: bool,
) -> Result<()> {
   let branch = git::current_branch(dir)?;
   let github = github_client(config, dir)?;
   let base = match preferred_base(base, config) {
      Some(base) => base,
      None => github.default_branch()?,
   };
   if branch == base {
      return Err(AutoPrError::Other(format!(
         "Current branch is the base branch '{base}'; run `autopr workon <issue>` first"
      )));
   }

   let issue_number = issue_number_from_branch(&branch);
   let (title, body) = if let Some(title) = title {
      (title.to_string(), manual_pr_body(issue_number))
   } else {
      let issue = match issue_number {
         Some(number) => Some(github.get_issue(number)?),
         None => {
            style::print_warning(&format!("Branch '{branch}' does not reference an issue number"));
            None
         },
      };
      let commits = git::get_branch_commits(&base, dir)
         .or_else(|_| git::get_branch_commits(&format!("origin/{base}"), dir))?;

      println!("Drafting pull request description...");
      let model = model_client(config);
      let pr = suggest_pr_description(
         model.as_ref().map(|m| m as &dyn ChatModel),
         issue.as_ref(),
         &commits,
         config,
      );
      if is_placeholder(&pr.title) {
         return Err(AutoPrError::Other(format!(
            "Could not draft the pull request: {} (pass --title to create it manually)",
            pr.title
         )));
      }
      if pr.body.is_empty() {
         style::print_warning("The model returned a title without a body");
      }
      (pr.title, pr.body)
   };

   let preview = if body.is_empty() { title.clone() } else { format!("{title}\n\n{body}") };
   println!("{}", style::boxed_message(&format!("{branch} -> {base}"), &preview, style::term_width()));

   if dry_run {
      println!("DRY RUN - would push '{branch}' and open a pull request against '{base}'");
      return Ok(());
   }

   git::push_branch(&branch, dir)?;
   let pr = github.create_pull_request(&branch, &base, &title, &body, draft)?;
   style::print_success(&format!("Created pull request #{}: {}", pr.number, pr.html_url));
   Ok(())
}

fn run_commit(config: &AutoPrConfig, dir: &str, dry_run: bool, copy: bool) -> Result<()> {
   println!("Handling commit command...");
   let diff = git::get_staged_diff(dir)?;
   if diff.trim().is_empty() {
      println!("No changes staged for commit.");
      return Ok(());
   }

   let width = style::term_width();
   println!("{}", style::section_header("Staged Diffs", width));
   println!("{diff}");

   let model = model_client(config);
   let message = suggest_commit_message(model.as_ref().map(|m| m as &dyn ChatModel), &diff, config);
   if is_placeholder(&message) {
      style::print_warning(&message);
      println!("Please commit manually using git.");
      return Ok(());
   }

   println!("{}", style::boxed_message("Suggested commit message", &message, width));

   if copy {
      match copy_to_clipboard(&message) {
         Ok(()) => style::print_success("Copied to clipboard"),
         Err(e) => style::print_warning(&format!("Failed to copy to clipboard: {e}")),
      }
   }

   git::git_commit(&message, dry_run, dir)?;
   if !dry_run {
      style::print_success("Successfully committed!");
   }
   Ok(())
}

fn run(args: &Args) -> Result<()> {
   let config = load_config(args)?;
   let dir = args.dir.as_str();

   match &args.command {
      Command::Ls { all } => run_ls(&config, dir, *all),
      Command::Workon { issue } => run_workon(&config, dir, *issue),
      Command::Create { title, base, draft, dry_run } => {
         run_create(&config, dir, title.as_deref(), base.as_deref(), *draft, *dry_run)
      },
      Command::Commit { dry_run, copy } => run_commit(&config, dir, *dry_run, *copy),
   }
}

fn main() -> ExitCode {
   dotenvy::dotenv().ok();
   init_tracing();
   let args = Args::parse();

   match run(&args) {
      Ok(()) => ExitCode::SUCCESS,
      Err(e) => {
         style::print_error(&e.to_string());
         ExitCode::FAILURE
      },
   }
}
