//! Unit tests for pf-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction, PfError};

    #[test]
    fn index_roundtrip() {
        let c = Cell::new(2, 3);
        assert_eq!(c.index(6), 15);
        assert_eq!(Cell::from_index(15, 6), c);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(1, 1) > Cell::new(1, 0));
    }

    #[test]
    fn bounds() {
        assert!(Cell::new(0, 0).in_bounds(1));
        assert!(!Cell::new(0, 1).in_bounds(1));
        assert!(!Cell::new(3, 0).in_bounds(3));
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.neighbor(Direction::Up, 3), None);
        assert_eq!(corner.neighbor(Direction::Left, 3), None);
        assert_eq!(corner.neighbor(Direction::Down, 3), Some(Cell::new(1, 0)));
        assert_eq!(corner.neighbor(Direction::Right, 3), Some(Cell::new(0, 1)));

        let far = Cell::new(2, 2);
        assert_eq!(far.neighbor(Direction::Down, 3), None);
        assert_eq!(far.neighbor(Direction::Right, 3), None);
    }

    #[test]
    fn neighbor_never_overflows() {
        let edge = Cell::new(u32::MAX, u32::MAX);
        assert_eq!(edge.neighbor(Direction::Down, u32::MAX), None);
        assert_eq!(edge.neighbor(Direction::Right, u32::MAX), None);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(2, 2)), 4);
        assert_eq!(Cell::new(3, 1).manhattan(Cell::new(1, 4)), 5);
        assert!(Cell::new(1, 1).is_adjacent(Cell::new(1, 2)));
        assert!(!Cell::new(1, 1).is_adjacent(Cell::new(2, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, 7).to_string(), "(4, 7)");
    }

    #[test]
    fn parse_plain_and_display_forms() {
        assert_eq!("1,2".parse::<Cell>().unwrap(), Cell::new(1, 2));
        assert_eq!(" 3 , 4 ".parse::<Cell>().unwrap(), Cell::new(3, 4));
        assert_eq!("(5, 0)".parse::<Cell>().unwrap(), Cell::new(5, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("12".parse::<Cell>(), Err(PfError::Parse(_))));
        assert!(matches!("a,1".parse::<Cell>(), Err(PfError::Parse(_))));
        assert!(matches!("-1,1".parse::<Cell>(), Err(PfError::Parse(_))));
    }
}

#[cfg(test)]
mod strategy {
    use crate::Strategy;

    #[test]
    fn default_is_bfs() {
        assert_eq!(Strategy::default(), Strategy::Bfs);
    }

    #[test]
    fn toggle_flips_back() {
        assert_eq!(Strategy::Bfs.toggled(), Strategy::AStar);
        assert_eq!(Strategy::Bfs.toggled().toggled(), Strategy::Bfs);
    }

    #[test]
    fn display() {
        assert_eq!(Strategy::Bfs.to_string(), "bfs");
        assert_eq!(Strategy::AStar.to_string(), "astar");
    }
}

#[cfg(test)]
mod config {
    use crate::{LotConfig, PfError};

    #[test]
    fn defaults_match_stock_lot() {
        let cfg = LotConfig::default();
        assert_eq!(cfg.size, 6);
        assert_eq!(cfg.occupied_one_in, 4);
        assert_eq!(cfg.step_delay_ms, 300);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        let cfg = LotConfig { size: 0, ..LotConfig::default() };
        assert!(matches!(cfg.validate(), Err(PfError::Config(_))));
    }

    #[test]
    fn oversized_lot_rejected() {
        let at_max = LotConfig { size: LotConfig::MAX_SIZE, ..LotConfig::default() };
        assert!(at_max.validate().is_ok());
        let over = LotConfig { size: LotConfig::MAX_SIZE + 1, ..LotConfig::default() };
        assert!(matches!(over.validate(), Err(PfError::Config(_))));
    }

    #[test]
    fn zero_outcomes_rejected() {
        let cfg = LotConfig { occupied_one_in: 0, ..LotConfig::default() };
        assert!(matches!(cfg.validate(), Err(PfError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::LotRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = LotRng::new(12345);
        let mut r2 = LotRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..4);
            let b: u32 = r2.gen_range(0..4);
            assert_eq!(a, b);
        }
    }
}
