//! Branch naming and issue presentation shared by the CLI commands.

use crate::{
   style,
   types::{IssueRecord, IssueState, IssueSummary},
};

const MAX_SLUG_CHARS: usize = 40;

/// Lowercase the title and collapse every run of non-alphanumeric characters
/// into a single `-`.
pub fn slugify(title: &str) -> String {
   let mut slug = String::with_capacity(title.len());
   for c in title.chars() {
      if c.is_ascii_alphanumeric() {
         slug.push(c.to_ascii_lowercase());
      } else if !slug.is_empty() && !slug.ends_with('-') {
         slug.push('-');
      }
   }

   if slug.len() > MAX_SLUG_CHARS {
      slug.truncate(MAX_SLUG_CHARS);
   }
   slug.trim_end_matches('-').to_string()
}

/// `<prefix>/<number>-<slug>`, or `<prefix>/<number>` when the title has no
/// usable characters.
pub fn issue_branch_name(prefix: &str, issue: &IssueRecord) -> String {
   let slug = slugify(&issue.title);
   let prefix = prefix.trim_matches('/');
   let name = if slug.is_empty() {
      issue.number.to_string()
   } else {
      format!("{}-{slug}", issue.number)
   };

   if prefix.is_empty() {
      name
   } else {
      format!("{prefix}/{name}")
   }
}

/// Issue number encoded in a branch created by `workon`
/// (`feature/42-title`, `42-title`, `fix/42`).
pub fn issue_number_from_branch(branch: &str) -> Option<u64> {
   let last = branch.rsplit('/').next()?;
   let digits: String = last.chars().take_while(char::is_ascii_digit).collect();
   if digits.is_empty() {
      return None;
   }
   let rest = &last[digits.len()..];
   if !(rest.is_empty() || rest.starts_with('-')) {
      return None;
   }
   digits.parse().ok()
}

/// Body used when the PR title is given on the command line
pub fn manual_pr_body(issue_number: Option<u64>) -> String {
   issue_number.map_or_else(String::new, |n| format!("Closes #{n}"))
}

/// One line of `ls` output
pub fn format_issue_line(issue: &IssueSummary) -> String {
   let mut line = format!("{} {}", style::bold(&format!("#{}", issue.number)), issue.title);

   if !issue.labels.is_empty() {
      line.push(' ');
      line.push_str(&style::info(&format!("[{}]", issue.labels.join(", "))));
   }
   if issue.state == IssueState::Closed {
      line.push(' ');
      line.push_str(&style::dim("(closed)"));
   }
   if let Some(updated) = issue.updated_at {
      line.push(' ');
      line.push_str(&style::dim(&format!("updated {}", updated.format("%Y-%m-%d"))));
   }
   line
}

/// Issue header printed by `workon`
pub fn format_issue_details(issue: &IssueRecord) -> String {
   let mut out = format!("#{} {}", issue.number, issue.title);
   if !issue.labels.is_empty() {
      out.push_str(&format!("\nLabels: {}", issue.labels.join(", ")));
   }
   if !issue.body.trim().is_empty() {
      out.push_str("\n\n");
      out.push_str(issue.body.trim());
   }
   out
}
