use serde::{Deserialize, Serialize};

/// Which of a role's five narrative texts was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeVariant {
    /// Tied for the highest score.
    TopRank,
    /// Tied for the lowest score.
    BottomRank,
    /// Inside the core window.
    Core,
    /// Inside the peripheral window.
    Peripheral,
    /// Everything else.
    Default,
}
