//! Removal of wrapper artifacts models put around their answers.
//!
//! Only wrapping that spans the whole answer is touched. Anything else, such
//! as inline code spans in the middle of a sentence or code blocks inside a
//! PR body, passes through unchanged.

use crate::types::PrTitleBody;

const FENCE: &str = "```";
const BACKTICK: char = '`';

/// Clean a single-line answer (commit subject, PR title).
///
/// Tries, in order: a fence with a language tag, a plain fence, then a
/// single-backtick pair. Each unwrap is followed by a trim, and the steps are
/// repeated until nothing changes, so the result is a fixed point:
/// `sanitize_single_line(sanitize_single_line(x)) == sanitize_single_line(x)`.
pub fn sanitize_single_line(raw: &str) -> String {
   let mut text = raw.trim();
   loop {
      let next = unwrap_once(text);
      // every successful unwrap drops at least two characters
      if next.len() == text.len() {
         break;
      }
      text = next;
   }
   text.to_string()
}

/// Split a PR answer into title (first line) and body (the rest).
///
/// The title gets the full [`sanitize_single_line`] treatment. The body is
/// only unwrapped when a single fenced block covers all of it; backticks
/// inside the body are Markdown and are kept.
pub fn sanitize_title_and_body(raw: &str) -> PrTitleBody {
   let raw = raw.trim();
   let (title, body) = raw.split_once('\n').unwrap_or((raw, ""));

   let title = sanitize_single_line(title);
   let body = body.trim();
   let body = unwrap_block_fence(body).map_or(body, str::trim);

   PrTitleBody::new(title, body)
}

fn unwrap_once(text: &str) -> &str {
   if let Some(inner) = unwrap_fence(text) {
      return inner.trim();
   }
   if let Some(inner) = unwrap_backticks(text) {
      return inner.trim();
   }
   text
}

/// `<fence>[tag]\n...\n<fence>` or a one-line `<fence>...<fence>`, with no
/// other fence inside. Any other shape is left alone.
fn unwrap_fence(text: &str) -> Option<&str> {
   let inner = text.strip_prefix(FENCE)?.strip_suffix(FENCE)?;
   if inner.contains(FENCE) {
      return None;
   }

   match inner.split_once('\n') {
      None => Some(inner),
      Some((tag, rest)) if is_language_tag(tag) => rest.strip_suffix('\n'),
      Some(_) => None,
   }
}

/// `` `...` `` with no backtick in between.
fn unwrap_backticks(text: &str) -> Option<&str> {
   let inner = text.strip_prefix(BACKTICK)?.strip_suffix(BACKTICK)?;
   (!inner.contains(BACKTICK)).then_some(inner)
}

/// Block form only: opening fence line, content lines, closing fence line.
fn unwrap_block_fence(text: &str) -> Option<&str> {
   let (opening, rest) = text.split_once('\n')?;
   let tag = opening.trim_end().strip_prefix(FENCE)?;
   if !is_language_tag(tag) {
      return None;
   }

   let (content, closing) = rest.rsplit_once('\n').unwrap_or(("", rest));
   if closing.trim() != FENCE || content.contains(FENCE) {
      return None;
   }

   Some(content)
}

/// Empty, or something like `rust`, `c++`, `objective-c`, `md`.
fn is_language_tag(line: &str) -> bool {
   line
      .trim()
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.' | '#'))
}

#[cfg(test)]
mod tests {
   use super::*;

   // ========== sanitize_single_line ==========

   #[test]
   fn test_plain_text_is_trimmed_only() {
      assert_eq!(sanitize_single_line("  feat: add login page \n"), "feat: add login page");
   }

   #[test]
   fn test_inline_fence() {
      assert_eq!(sanitize_single_line("```feat: x```"), "feat: x");
   }

   #[test]
   fn test_fence_with_language_tag() {
      assert_eq!(sanitize_single_line("```text\nfeat: x\n```"), "feat: x");
   }

   #[test]
   fn test_fence_without_language_tag() {
      assert_eq!(sanitize_single_line("```\nfix: handle empty input\n```"), "fix: handle empty input");
   }

   #[test]
   fn test_multiline_fence_without_block_newlines_left_alone() {
      let text = "```feat: add x\n\nlonger body```";
      assert_eq!(sanitize_single_line(text), text);
   }

   #[test]
   fn test_tag_like_first_word_kept_without_closing_newline() {
      assert_eq!(sanitize_single_line("```chore\nbump deps```"), "```chore\nbump deps```");
   }

   #[test]
   fn test_block_fence_needs_newline_before_closing() {
      assert_eq!(sanitize_single_line("```feat: x\n```"), "```feat: x\n```");
      assert_eq!(sanitize_single_line("```rust\nfeat: x\n```"), "feat: x");
   }

   #[test]
   fn test_single_backticks() {
      assert_eq!(sanitize_single_line("`feat: x`"), "feat: x");
      assert_eq!(sanitize_single_line("  ` chore: bump deps `  "), "chore: bump deps");
   }

   #[test]
   fn test_interior_backticks_preserved() {
      assert_eq!(
         sanitize_single_line("feat: has `inline` code"),
         "feat: has `inline` code"
      );
   }

   #[test]
   fn test_wrapping_with_interior_code_span_preserved() {
      assert_eq!(
         sanitize_single_line("`fix: use `Vec` here`"),
         "`fix: use `Vec` here`"
      );
   }

   #[test]
   fn test_empty_fence_collapses() {
      assert_eq!(sanitize_single_line("``` ```"), "");
      assert_eq!(sanitize_single_line("``````"), "");
   }

   #[test]
   fn test_two_fenced_blocks_left_alone() {
      let text = "```a``` and ```b```";
      assert_eq!(sanitize_single_line(text), text);
   }

   #[test]
   fn test_unbalanced_backticks_left_alone() {
      assert_eq!(sanitize_single_line("feat: a ``` b"), "feat: a ``` b");
      assert_eq!(sanitize_single_line("`feat: x"), "`feat: x");
      assert_eq!(sanitize_single_line("```"), "```");
      assert_eq!(sanitize_single_line("````"), "````");
   }

   #[test]
   fn test_nested_wrappers_fully_unwrapped() {
      assert_eq!(sanitize_single_line("```\n`feat: x`\n```"), "feat: x");
      assert_eq!(sanitize_single_line("````feat: x````"), "feat: x");
   }

   #[test]
   fn test_empty_input() {
      assert_eq!(sanitize_single_line(""), "");
      assert_eq!(sanitize_single_line("   \n\t"), "");
   }

   #[test]
   fn test_idempotent() {
      let samples = [
         "feat: x",
         "  `feat: x`  ",
         "```text\nfeat: x\n```",
         "```\n`feat: x`\n```",
         "``` ```x``` ```",
         "feat: has `inline` code",
         "`a` `b`",
         "````",
         "```",
         "`",
         "```chore\nbump deps```",
         "",
         "``` `` ```",
      ];
      for sample in samples {
         let once = sanitize_single_line(sample);
         assert_eq!(sanitize_single_line(&once), once, "not idempotent for {sample:?}");
      }
   }

   #[test]
   fn test_backtick_free_round_trip() {
      let samples = ["docs: update README", "  refactor: split parser  ", "a\nb", "", "x:y"];
      for sample in samples {
         assert_eq!(sanitize_single_line(sample.trim()), sample.trim());
      }
   }

   // ========== sanitize_title_and_body ==========

   #[test]
   fn test_title_body_split() {
      assert_eq!(sanitize_title_and_body("T\n\nB1\nB2"), PrTitleBody::new("T", "B1\nB2"));
   }

   #[test]
   fn test_title_cleaned_and_body_fence_unwrapped() {
      assert_eq!(
         sanitize_title_and_body("`T`\n\n```md\nB\n```"),
         PrTitleBody::new("T", "B")
      );
   }

   #[test]
   fn test_leading_blank_lines_dropped_before_split() {
      assert_eq!(sanitize_title_and_body("\nTitle\n\nBody"), PrTitleBody::new("Title", "Body"));
   }

   #[test]
   fn test_no_newline_gives_empty_body() {
      assert_eq!(sanitize_title_and_body("Add login page"), PrTitleBody::new("Add login page", ""));
   }

   #[test]
   fn test_body_inline_code_preserved() {
      let pr = sanitize_title_and_body("Fix parser\n\nUses `Vec` instead of `LinkedList`.\n\nCloses #4");
      assert_eq!(pr.title, "Fix parser");
      assert_eq!(pr.body, "Uses `Vec` instead of `LinkedList`.\n\nCloses #4");
   }

   #[test]
   fn test_body_single_backticks_not_stripped() {
      let pr = sanitize_title_and_body("Title\n`whole body`");
      assert_eq!(pr.body, "`whole body`");
   }

   #[test]
   fn test_body_with_inner_code_block_preserved() {
      let raw = "Title\n\n## Changes\n\n```rust\nfn main() {}\n```";
      let pr = sanitize_title_and_body(raw);
      assert_eq!(pr.body, "## Changes\n\n```rust\nfn main() {}\n```");
   }

   #[test]
   fn test_body_starting_and_ending_with_separate_blocks_preserved() {
      let raw = "Title\n```rust\nfn a() {}\n```\ntext\n```rust\nfn b() {}\n```";
      let pr = sanitize_title_and_body(raw);
      assert_eq!(pr.body, "```rust\nfn a() {}\n```\ntext\n```rust\nfn b() {}\n```");
   }

   #[test]
   fn test_body_fence_without_tag() {
      let pr = sanitize_title_and_body("Title\n\n```\n## Summary\n\nCloses #12\n```");
      assert_eq!(pr.body, "## Summary\n\nCloses #12");
   }

   #[test]
   fn test_body_empty_fence() {
      let pr = sanitize_title_and_body("Title\n```\n```");
      assert_eq!(pr.body, "");
   }

   #[test]
   fn test_fenced_title_line() {
      let pr = sanitize_title_and_body("```Add retries```\n\nBody");
      assert_eq!(pr, PrTitleBody::new("Add retries", "Body"));
   }

   #[test]
   fn test_crlf_line_endings() {
      let pr = sanitize_title_and_body("`Title`\r\n\r\nBody line\r\n");
      assert_eq!(pr, PrTitleBody::new("Title", "Body line"));
   }
}
