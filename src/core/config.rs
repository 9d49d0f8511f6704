//! Simulator configuration types.
//!
//! The planner and simulation consume, but never produce, these values:
//! - `RuleSet`: which shapes are currently enabled
//! - `PriorityTable`: value of triggering each shape or shape group
//! - `SimulatorConfig`: board size, rules, priorities, bonus and seed together

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Deserializer, Serialize};

/// Set of enabled rule strings.
///
/// A rule is an exact shape name (`"2-orb_v"`), a group name (`"2-orb"`),
/// or a size wildcard of the form `"{n}-orb-any"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: FxHashSet<String>,
}

impl RuleSet {
    /// Create an empty rule set. Nothing is authorized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a rule.
    pub fn insert(&mut self, rule: impl Into<String>) {
        self.rules.insert(rule.into());
    }

    /// Enable a rule, builder style.
    #[must_use]
    pub fn with(mut self, rule: impl Into<String>) -> Self {
        self.insert(rule);
        self
    }

    /// Check whether a rule string is enabled verbatim.
    #[must_use]
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    /// Number of enabled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rule is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the enabled rules (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Score weight per shape name or group name. Absent entries score 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable {
    values: FxHashMap<String, i64>,
}

impl PriorityTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a shape or group name.
    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    /// Set a value, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.set(name, value);
        self
    }

    /// Look up an exact entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for PriorityTable {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Complete simulator configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Board rows.
    #[serde(deserialize_with = "positive")]
    pub rows: usize,

    /// Board columns.
    #[serde(deserialize_with = "positive")]
    pub cols: usize,

    /// Enabled shapes, groups and wildcards.
    pub skills: RuleSet,

    /// Value of triggering each shape or group.
    pub priorities: PriorityTable,

    /// Score added per cleared orb, independent of shape.
    pub orb_bonus: i64,

    /// RNG seed. `None` draws one from entropy at construction.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 7,
            skills: ["1-orb", "2-orb", "4-orb-square", "4-orb-L", "4-orb-I"]
                .into_iter()
                .collect(),
            priorities: [
                ("1-orb", 10),
                ("2-orb", 50),
                ("4-orb-square", 100),
                ("4-orb-L", 80),
                ("4-orb-I", 80),
            ]
            .into_iter()
            .collect(),
            orb_bonus: 9,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Replace the enabled skills.
    #[must_use]
    pub fn with_skills(mut self, skills: RuleSet) -> Self {
        self.skills = skills;
        self
    }

    /// Replace the priority table.
    #[must_use]
    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }

    /// Set the per-orb exploration bonus.
    #[must_use]
    pub fn with_orb_bonus(mut self, bonus: i64) -> Self {
        self.orb_bonus = bonus;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Reject zero board dimensions at load time.
fn positive<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let value = usize::deserialize(deserializer)?;
    if value == 0 {
        return Err(serde::de::Error::custom("board dimension must be at least 1"));
    }
    Ok(value)
}
