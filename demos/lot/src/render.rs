//! Text rendering of the lot for the terminal.
//!
//! ```text
//! #  occupied      .  free
//! *  route         C  car
//! ```

use std::fmt::Write;

use pf_core::Cell;
use pf_sim::Navigator;

/// Draw the grid with the current route and car position, one row per line.
pub fn frame(nav: &Navigator) -> String {
    let grid = nav.lot().grid();
    let size = grid.size();
    let mut out = String::with_capacity((size as usize + 1) * (size as usize * 2 + 1));

    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            let ch = if nav.car() == Some(cell) {
                'C'
            } else if nav.path().is_some_and(|p| p.cells().contains(&cell)) {
                '*'
            } else {
                grid.spot(cell).map_or(' ', |s| s.as_char())
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One line per free cell listing its neighbours, the text form of the
/// graph preview.
pub fn adjacency(nav: &Navigator) -> String {
    let graph = nav.lot().graph();
    let mut out = String::new();
    for cell in graph.cells() {
        let neighbors = graph.neighbors(cell).unwrap_or_default();
        let list: Vec<String> = neighbors.iter().map(Cell::to_string).collect();
        let _ = writeln!(out, "{cell} -> [{}]", list.join(", "));
    }
    out
}
