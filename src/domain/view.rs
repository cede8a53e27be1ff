// Dashboard page identifiers
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

/// A top-level page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Executive,
    Drivers,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::Executive, ViewId::Drivers];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Executive => "executive",
            ViewId::Drivers => "drivers",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
