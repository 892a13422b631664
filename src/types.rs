use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named comparison with scored options and a closing recommendation.
///
/// Topics are identified by `key`; the order topics appear in a dataset
/// defines the tab order in every renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonTopic {
    /// Unique identifier, e.g. "api"
    pub key: String,
    /// Display title, e.g. "REST API vs GraphQL"
    pub title: String,
    /// Candidate options, in display order
    pub options: Vec<OptionProfile>,
    /// Closing recommendation for the topic
    pub recommendation: Recommendation,
}

/// One candidate in a comparison: a scored option with its trade-offs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionProfile {
    pub name: String,
    /// Overall score on a 0-10 scale
    pub score: f64,
    /// Strengths, in display order
    pub pros: Vec<WeightedPoint>,
    /// Weaknesses, in display order
    pub cons: Vec<WeightedPoint>,
    /// Situations this option suits best
    #[serde(default)]
    pub best_for: Vec<String>,
    /// Free-form label/value pairs; labels vary per topic, order is kept
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// A single label/value metric. Kept as a pair rather than a map so the
/// stored order survives into every rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A pro or con annotated with how heavily it should weigh on the decision
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeightedPoint {
    pub text: String,
    #[serde(default)]
    pub weight: Weight,
}

impl WeightedPoint {
    pub fn new<S: Into<String>>(text: S, weight: Weight) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Priority/impact weight of a single point.
///
/// Deserialization never fails: anything outside the three known values
/// falls back to `Medium`, so rendering always has a style to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    High,
    #[default]
    Medium,
    Low,
}

impl Weight {
    /// Parse a weight string, falling back to `Medium` for unknown values
    pub fn parse(value: &str) -> Self {
        match value {
            "high" => Weight::High,
            "low" => Weight::Low,
            _ => Weight::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::High => "high",
            Weight::Medium => "medium",
            Weight::Low => "low",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Weight::parse(&raw))
    }
}

/// The closing recommendation attached to a topic
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recommendation {
    /// The situation the recommendation applies to
    pub context: String,
    /// Name of the suggested option; validated against the topic's options
    pub choice: String,
    /// Why that option wins in this context
    pub reasoning: String,
}

impl ComparisonTopic {
    /// Look up an option by name
    pub fn option_by_name(&self, name: &str) -> Option<&OptionProfile> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Format a score the way the comparison cards display it: whole numbers
/// without a decimal point, everything else with one decimal (8.0 -> "8",
/// 7.5 -> "7.5").
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}
