use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority level of a todo
///
/// The variant name doubles as the catalog key and is what gets serialized,
/// so the variants use snake_case to match the TOML seed format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait
    low,
    /// Should be done soon
    medium,
    /// Needs attention first
    high,
}

impl Priority {
    /// Every priority in the order the picker offers them
    pub const ALL: [Priority; 3] = [Priority::low, Priority::medium, Priority::high];

    /// Catalog key (e.g. "low")
    pub fn key(self) -> &'static str {
        match self {
            Priority::low => "low",
            Priority::medium => "medium",
            Priority::high => "high",
        }
    }

    /// Human readable label (e.g. "Low")
    pub fn label(self) -> &'static str {
        match self {
            Priority::low => "Low",
            Priority::medium => "Medium",
            Priority::high => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selectable `(key, label)` pairs in catalog order
pub fn priority_options() -> Vec<(&'static str, &'static str)> {
    Priority::ALL.iter().map(|p| (p.key(), p.label())).collect()
}
