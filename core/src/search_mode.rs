use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Year the edge weights are measured against. Older movies produce heavier edges.
pub const REFERENCE_YEAR: i32 = 2015;

/// Year reported for actor pairs that never become connected.
pub const NEVER_CONNECTED_YEAR: i32 = 9999;

/// How path queries measure distance between two actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Fewest shared movies (breadth-first search)
    #[default]
    Unweighted,
    /// Lowest recency-weighted distance (Dijkstra)
    Weighted,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Unweighted => "unweighted",
            SearchMode::Weighted => "weighted",
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "u" | "unweighted" => Ok(SearchMode::Unweighted),
            "w" | "weighted" => Ok(SearchMode::Weighted),
            other => Err(format!("unknown search mode '{}' (expected u or w)", other)),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How connectivity queries decide that two actors share a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityStrategy {
    /// Grow the edge set one year at a time and search it breadth-first
    #[default]
    Bfs,
    /// Merge each movie's cast in a disjoint-set forest
    #[serde(rename = "ufind")]
    UnionFind,
}

impl ConnectivityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityStrategy::Bfs => "bfs",
            ConnectivityStrategy::UnionFind => "ufind",
        }
    }
}

impl FromStr for ConnectivityStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "bfs" => Ok(ConnectivityStrategy::Bfs),
            "ufind" | "union-find" => Ok(ConnectivityStrategy::UnionFind),
            other => Err(format!(
                "unknown connectivity strategy '{}' (expected bfs or ufind)",
                other
            )),
        }
    }
}

impl fmt::Display for ConnectivityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
