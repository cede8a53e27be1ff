// Rendered panel model
use serde::Serialize;

/// What a render target currently shows. Chart figures are opaque to the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Panel {
    Tile { text: String },
    Chart { figure: serde_json::Value },
}

impl Panel {
    pub fn tile(text: impl Into<String>) -> Self {
        Panel::Tile { text: text.into() }
    }

    pub fn chart(figure: serde_json::Value) -> Self {
        Panel::Chart { figure }
    }

    #[cfg(test)]
    pub fn figure(&self) -> Option<&serde_json::Value> {
        match self {
            Panel::Chart { figure } => Some(figure),
            Panel::Tile { .. } => None,
        }
    }
}
