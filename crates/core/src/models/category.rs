use serde::{Deserialize, Serialize};

/// Display form of a raw category: human label plus a stable color token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCategory {
    /// e.g. "Food & Drink"
    pub display_name: String,

    /// `#RRGGBB`
    pub color: String,
}

impl ResolvedCategory {
    pub fn new(display_name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            color: color.into(),
        }
    }
}
