//! Plain data row types written by log backends.

/// One planned route.  `route` numbers routes from 0 within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRow {
    pub route:     u64,
    pub strategy:  &'static str,
    pub start_row: u32,
    pub start_col: u32,
    pub goal_row:  u32,
    pub goal_col:  u32,
    /// Number of moves in the route.
    pub edges:     u64,
}

/// The car's cell after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRow {
    pub route: u64,
    /// 1-based move number within the route.
    pub step:  u64,
    pub row:   u32,
    pub col:   u32,
}
