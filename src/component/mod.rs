//! Hardware components as supplied by the catalog.
//!
//! A component carries a category tag, a display name, and a spec sheet: an
//! unordered label -> value map scraped from varied sources. The same logical
//! attribute shows up under different labels depending on the source, so all
//! reads go through an ordered first-match-wins lookup over candidate labels.

pub mod normalize;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use normalize::{parse_numeric, parse_numeric_str};

/// Component category. Each category has exactly one scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cpu,
    Gpu,
    Memory,
    Storage,
    PowerSupply,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Memory => "Memory",
            Category::Storage => "Storage",
            Category::PowerSupply => "Power Supply",
        }
    }

    /// Parse the short names accepted on the command line.
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Some(Category::Cpu),
            "gpu" => Some(Category::Gpu),
            "memory" | "ram" => Some(Category::Memory),
            "storage" | "disk" => Some(Category::Storage),
            "psu" | "power_supply" | "power-supply" => Some(Category::PowerSupply),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw spec sheet value. Sources mix native numbers, free text, and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl SpecValue {
    /// Text rendering used for pattern matching. Flags render as `true`/`false`.
    pub fn as_text(&self) -> String {
        match self {
            SpecValue::Number(n) => n.to_string(),
            SpecValue::Text(s) => s.clone(),
            SpecValue::Flag(b) => b.to_string(),
        }
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        SpecValue::Number(n)
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::Text(s.to_string())
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        SpecValue::Flag(b)
    }
}

/// Label -> value map with ordered candidate-label lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecSheet(BTreeMap<String, SpecValue>);

impl SpecSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<SpecValue>) {
        self.0.insert(label.into(), value.into());
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.insert(label, value);
        self
    }

    /// First value present under any of `labels`, probed in order.
    pub fn first(&self, labels: &[&str]) -> Option<&SpecValue> {
        labels.iter().find_map(|l| self.0.get(*l))
    }

    /// Numeric reading of the first present label, `0` when none match.
    pub fn number(&self, labels: &[&str]) -> f64 {
        parse_numeric(self.first(labels))
    }

    /// Like [`number`](Self::number), but `None` when no label is present or
    /// the value holds no number. Negative readings are kept.
    pub fn measured(&self, labels: &[&str]) -> Option<f64> {
        Some(self.number(labels)).filter(|n| *n != 0.0)
    }

    /// Text of the first present label, empty when none match.
    pub fn text(&self, labels: &[&str]) -> String {
        self.first(labels).map(SpecValue::as_text).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<SpecValue>> FromIterator<(K, V)> for SpecSheet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SpecSheet(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A catalog component. `specs == None` means no spec sheet at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub id: String,
    pub category: Category,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specs: Option<SpecSheet>,
}

impl Component {
    pub fn new(category: Category, name: impl Into<String>, specs: SpecSheet) -> Self {
        Self {
            id: String::new(),
            category,
            name: name.into(),
            specs: Some(specs),
        }
    }
}

/// The selected components of one build. Every slot is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Build {
    pub cpu: Option<Component>,
    pub gpu: Option<Component>,
    pub memory: Option<Component>,
    pub storage: Option<Component>,
    pub power_supply: Option<Component>,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
