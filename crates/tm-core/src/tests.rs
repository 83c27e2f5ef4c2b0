//! Unit tests for tm-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction, GRID_SIZE, TmError};

    #[test]
    fn try_new_rejects_out_of_bounds() {
        assert!(Cell::try_new(0, 0).is_ok());
        assert!(Cell::try_new(49, 49).is_ok());
        assert!(matches!(
            Cell::try_new(50, 3),
            Err(TmError::CellOutOfBounds { x: 50, y: 3 })
        ));
        assert!(Cell::try_new(-1, 3).is_err());
    }

    #[test]
    fn clamped_pins_to_grid() {
        assert_eq!(Cell::clamped(-5, 70), Cell::new(0, GRID_SIZE - 1));
        assert_eq!(Cell::clamped(12, 13), Cell::new(12, 13));
    }

    #[test]
    fn edge_ring() {
        assert!(Cell::new(0, 10).is_edge());
        assert!(Cell::new(10, 49).is_edge());
        assert!(!Cell::new(1, 1).is_edge());
        assert!(!Cell::new(48, 48).is_edge());
    }

    #[test]
    fn chebyshev_range() {
        let a = Cell::new(10, 10);
        assert_eq!(a.range_to(a), 0);
        assert_eq!(a.range_to(Cell::new(11, 11)), 1);
        assert_eq!(a.range_to(Cell::new(13, 8)), 3);
        assert!(a.is_adjacent(Cell::new(9, 11)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let c = Cell::new(5, 5);
        let n: Vec<Cell> = c.neighbors().collect();
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&m| c.is_adjacent(m)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(Cell::new(0, 0).neighbors().count(), 3);
    }

    #[test]
    fn direction_to_adjacent_only() {
        let c = Cell::new(5, 5);
        assert_eq!(c.direction_to(Cell::new(5, 4)), Some(Direction::Top));
        assert_eq!(c.direction_to(Cell::new(4, 6)), Some(Direction::BottomLeft));
        assert_eq!(c.direction_to(c), None);
        assert_eq!(c.direction_to(Cell::new(7, 5)), None);
    }

    #[test]
    fn step_toward_far_target() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step_toward(Cell::new(20, 5)), Cell::new(6, 5));
        assert_eq!(c.step_toward(Cell::new(1, 1)), Cell::new(4, 4));
        assert_eq!(c.step_toward(c), c);
    }

    #[test]
    fn packed_roundtrip() {
        let c = Cell::new(3, 7);
        assert_eq!(c.packed(), 3 + 50 * 7);
        assert_eq!(Cell::from_packed(c.packed()), Some(c));
        assert_eq!(Cell::from_packed(50 * 50), None);
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn codes_are_clockwise_from_top() {
        assert_eq!(Direction::Top.code(), 1);
        assert_eq!(Direction::TopLeft.code(), 8);
    }

    #[test]
    fn from_delta_inverts_delta() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(Direction::from_delta(dx as i32, dy as i32), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(257, 0), None);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::BottomRight.to_string(), "bottom_right");
    }
}

#[cfg(test)]
mod cycle {
    use crate::{Cycle, DEFAULT_COST_THRESHOLD, ResolverConfig};

    #[test]
    fn next_and_display() {
        assert_eq!(Cycle::ZERO.next(), Cycle(1));
        assert_eq!(Cycle(12).to_string(), "C12");
    }

    #[test]
    fn default_config() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.threshold, DEFAULT_COST_THRESHOLD);
        assert_eq!(cfg.max_searches, None);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = AgentRng::new(7, AgentId(3));
        let mut v: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }
}
