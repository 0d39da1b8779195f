//! Inline feedback panels shown in the results area.

use super::html_escape;

/// Severity of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Success,
    Warning,
    Danger,
}

impl PanelKind {
    fn css_class(self) -> &'static str {
        match self {
            PanelKind::Success => "alert-success",
            PanelKind::Warning => "alert-warning",
            PanelKind::Danger => "alert-danger",
        }
    }
}

/// An alert panel with a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub kind: PanelKind,
    pub message: String,
}

impl Panel {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: PanelKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: PanelKind::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: PanelKind::Danger,
            message: message.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="alert {}" role="alert">{}</div>"#,
            self.kind.css_class(),
            html_escape(&self.message)
        )
    }
}
