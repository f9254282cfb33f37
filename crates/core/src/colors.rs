//! Static lookup data for record colors and dispositions.

use serde::{Deserialize, Serialize};

/// A color known to the records API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Brown,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// Every known color, in the order filters are sent to the server.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Brown,
        Color::Blue,
        Color::Yellow,
        Color::Green,
    ];

    /// Look up a color by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Brown => "brown",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, Color::Red | Color::Blue | Color::Yellow)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// True only when `name` is a known primary color.
pub fn is_primary_name(name: &str) -> bool {
    Color::from_name(name).is_some_and(Color::is_primary)
}

/// Lifecycle state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Open,
    Closed,
}
