use serde::{Deserialize, Serialize};

/// One piece of tooltip content. Rendering is up to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum TooltipFragment {
    /// Plain text
    Text(String),
    /// Line break
    LineBreak,
    /// Emphasized text
    Emphasis(String),
}

impl std::fmt::Display for TooltipFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TooltipFragment::Text(text) => write!(f, "{text}"),
            TooltipFragment::LineBreak => writeln!(f),
            TooltipFragment::Emphasis(text) => write!(f, "{text}"),
        }
    }
}

/// What a bar chart tooltip describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipTarget {
    /// The whole bar group: balance and budget per currency
    Aggregate,
    /// A single account's layer in the stacks
    Account(String),
}

impl TooltipTarget {
    /// Map a raw account selector to a target; empty means the whole group.
    pub fn from_selector(selector: &str) -> Self {
        if selector.is_empty() {
            TooltipTarget::Aggregate
        } else {
            TooltipTarget::Account(selector.to_string())
        }
    }
}
