//! Terminal output for conversion results.

use owo_colors::{OwoColorize, Stream::Stdout};
use sessions_core::WriteReport;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for WriteReport {
    fn render(&self) -> String {
        let count = self.count.to_string();
        let path = self.path.display().to_string();
        format!(
            "Wrote {} {} to {}",
            count.if_supports_color(Stdout, |t| t.green()),
            pluralize("event", self.count),
            path.if_supports_color(Stdout, |t| t.bold()),
        )
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
