//! Views for the dbnav table browser.
//!
//! Views are stateless: they turn component state into markup for the host
//! page, or plain text for a terminal.

mod feedback;
mod results;

pub use feedback::{Panel, PanelKind};
pub use results::{ResultRenderer, ResultTable};

/// HTML-escape a string before inserting it into markup.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
