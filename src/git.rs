use std::process::{Command, Output};

use crate::error::{AutoPrError, Result};

fn run_git(args: &[&str], dir: &str) -> Result<Output> {
   tracing::debug!(?args, dir, "running git");
   Command::new("git")
      .args(args)
      .current_dir(dir)
      .output()
      .map_err(|e| AutoPrError::GitError(format!("Failed to run git {}: {e}", args.join(" "))))
}

/// Run git and return trimmed stdout, failing on a non-zero exit
fn git_stdout(args: &[&str], dir: &str) -> Result<String> {
   let output = run_git(args, dir)?;
   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(AutoPrError::GitError(format!("git {} failed: {}", args.join(" "), stderr.trim())));
   }
   Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

/// Get the staged diff. Empty when nothing is staged.
pub fn get_staged_diff(dir: &str) -> Result<String> {
   git_stdout(&["diff", "--cached"], dir)
}

/// Commit subjects in `base..HEAD`, oldest first
pub fn get_branch_commits(base: &str, dir: &str) -> Result<Vec<String>> {
   let range = format!("{base}..HEAD");
   let stdout = git_stdout(&["log", "--reverse", "--pretty=format:%s", &range], dir)?;
   Ok(stdout
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(|s| s.to_string())
      .collect())
}

/// Name of the checked-out branch
pub fn current_branch(dir: &str) -> Result<String> {
   let branch = git_stdout(&["rev-parse", "--abbrev-ref", "HEAD"], dir)?;
   if branch == "HEAD" {
      return Err(AutoPrError::GitError("HEAD is detached; check out a branch first".to_string()));
   }
   Ok(branch)
}

/// Create and check out a new branch
pub fn create_branch(name: &str, dir: &str) -> Result<()> {
   git_stdout(&["checkout", "-b", name], dir).map(|_| ())
}

/// URL of the `origin` remote
pub fn origin_url(dir: &str) -> Result<String> {
   let url = git_stdout(&["config", "--get", "remote.origin.url"], dir)
      .map_err(|_| AutoPrError::RepoDetection("no 'origin' remote configured".to_string()))?;
   if url.is_empty() {
      return Err(AutoPrError::RepoDetection("no 'origin' remote configured".to_string()));
   }
   Ok(url)
}

/// Execute git commit with the given message
pub fn git_commit(message: &str, dry_run: bool, dir: &str) -> Result<()> {
   if dry_run {
      println!("\n{}", "=".repeat(60));
      println!("DRY RUN - Would execute:");
      println!("git commit -m \"{}\"", message.replace('\n', "\\n"));
      println!("{}", "=".repeat(60));
      return Ok(());
   }

   let output = run_git(&["commit", "-m", message], dir)?;
   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      return Err(AutoPrError::GitError(format!(
         "Git commit failed:\nstderr: {stderr}\nstdout: {stdout}"
      )));
   }

   let stdout = String::from_utf8_lossy(&output.stdout);
   println!("\n{stdout}");
   Ok(())
}

/// Push `branch` to origin and set upstream
pub fn push_branch(branch: &str, dir: &str) -> Result<()> {
   let output = run_git(&["push", "-u", "origin", branch], dir)?;
   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      return Err(AutoPrError::GitError(format!(
         "Git push failed:\nstderr: {stderr}\nstdout: {stdout}"
      )));
   }
   Ok(())
}
