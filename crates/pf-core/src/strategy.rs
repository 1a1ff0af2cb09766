//! Search strategy selector shared by the model, the navigator and outputs.

/// Which pathfinding algorithm answers a route query.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first search; ties resolved by up/down/left/right order.
    #[default]
    Bfs,
    /// A* with the Manhattan heuristic.
    AStar,
}

impl Strategy {
    /// The other strategy.
    #[inline]
    pub fn toggled(self) -> Strategy {
        match self {
            Strategy::Bfs   => Strategy::AStar,
            Strategy::AStar => Strategy::Bfs,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Bfs   => "bfs",
            Strategy::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
