//! Terminal styling for CLI output.
//!
//! Respects `NO_COLOR` and terminal capabilities.

use std::sync::OnceLock;

use owo_colors::OwoColorize;

static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used (cached on first call).
pub fn colors_enabled() -> bool {
   *COLOR_ENABLED.get_or_init(|| {
      // https://no-color.org/
      if std::env::var("NO_COLOR").is_ok() {
         return false;
      }
      supports_color::on(supports_color::Stream::Stdout).is_some_and(|level| level.has_basic)
   })
}

fn paint(s: &str, styled: impl FnOnce(&str) -> String) -> String {
   if colors_enabled() {
      styled(s)
   } else {
      s.to_string()
   }
}

/// Completed actions (green + bold).
pub fn success(s: &str) -> String {
   paint(s, |s| s.green().bold().to_string())
}

/// Non-fatal issues (yellow).
pub fn warning(s: &str) -> String {
   paint(s, |s| s.yellow().to_string())
}

/// Failures (red + bold).
pub fn error(s: &str) -> String {
   paint(s, |s| s.red().bold().to_string())
}

/// Labels, informational notes (cyan).
pub fn info(s: &str) -> String {
   paint(s, |s| s.cyan().to_string())
}

/// Less important details (dimmed).
pub fn dim(s: &str) -> String {
   paint(s, |s| s.dimmed().to_string())
}

/// Headers, key values.
pub fn bold(s: &str) -> String {
   paint(s, |s| s.bold().to_string())
}

pub fn print_success(msg: &str) {
   println!("{} {msg}", success(icons::SUCCESS));
}

pub fn print_warning(msg: &str) {
   eprintln!("{} {}", warning(icons::WARNING), warning(msg));
}

pub fn print_error(msg: &str) {
   eprintln!("{} {}", error(icons::ERROR), error(msg));
}

/// Terminal width, capped at 100 columns.
pub fn term_width() -> usize {
   terminal_size::terminal_size()
      .map_or(80, |(w, _)| w.0 as usize)
      .min(100)
}

mod box_chars {
   pub const TOP_LEFT: char = '\u{256D}';
   pub const TOP_RIGHT: char = '\u{256E}';
   pub const BOTTOM_LEFT: char = '\u{2570}';
   pub const BOTTOM_RIGHT: char = '\u{256F}';
   pub const HORIZONTAL: char = '\u{2500}';
   pub const VERTICAL: char = '\u{2502}';
}

/// Wrap text to fit within a given width, preserving words.
fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
   let mut lines = Vec::new();
   let mut current = String::new();

   for word in line.split_whitespace() {
      let fits = current.chars().count() + 1 + word.chars().count() <= max_width;
      if current.is_empty() {
         // a word longer than the line still goes on its own line
         current = word.to_string();
      } else if fits {
         current.push(' ');
         current.push_str(word);
      } else {
         lines.push(std::mem::take(&mut current));
         current = word.to_string();
      }
   }

   if !current.is_empty() || lines.is_empty() {
      lines.push(current);
   }
   lines
}

/// Frame `content` in a rounded box with `title` in the top border.
pub fn boxed_message(title: &str, content: &str, width: usize) -> String {
   use box_chars::*;

   let inner_width = width.saturating_sub(4); // "│ " and " │"
   let border_width = width.saturating_sub(2);
   let padding = border_width.saturating_sub(title.chars().count() + 2);
   let left_pad = padding / 2;
   let right_pad = padding - left_pad;

   let mut out = String::new();
   out.push(TOP_LEFT);
   out.push_str(&HORIZONTAL.to_string().repeat(left_pad));
   out.push(' ');
   out.push_str(&bold(title));
   out.push(' ');
   out.push_str(&HORIZONTAL.to_string().repeat(right_pad));
   out.push(TOP_RIGHT);
   out.push('\n');

   for line in content.lines() {
      for wrapped in wrap_line(line, inner_width) {
         let pad = inner_width.saturating_sub(wrapped.chars().count());
         out.push(VERTICAL);
         out.push(' ');
         out.push_str(&wrapped);
         out.push_str(&" ".repeat(pad));
         out.push(' ');
         out.push(VERTICAL);
         out.push('\n');
      }
   }

   out.push(BOTTOM_LEFT);
   out.push_str(&HORIZONTAL.to_string().repeat(border_width));
   out.push(BOTTOM_RIGHT);
   out
}

/// Section header with decorative lines.
pub fn section_header(title: &str, width: usize) -> String {
   let line_len = width.saturating_sub(title.chars().count() + 2) / 2;
   let line = box_chars::HORIZONTAL.to_string().repeat(line_len);
   format!("{} {} {}", dim(&line), bold(title), dim(&line))
}

pub mod icons {
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const ERROR: &str = "\u{2717}";
}
