//! The eight single-step movement directions.
//!
//! Numbered 1–8 clockwise starting from `Top`, which is the numbering move
//! commands are emitted with.

/// A one-cell step on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Top         = 1,
    TopRight    = 2,
    Right       = 3,
    BottomRight = 4,
    Bottom      = 5,
    BottomLeft  = 6,
    Left        = 7,
    TopLeft     = 8,
}

impl Direction {
    /// Every direction, clockwise from `Top`.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// `(dx, dy)` offset of one step.  `y` grows downward.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Top         => ( 0, -1),
            Direction::TopRight    => ( 1, -1),
            Direction::Right       => ( 1,  0),
            Direction::BottomRight => ( 1,  1),
            Direction::Bottom      => ( 0,  1),
            Direction::BottomLeft  => (-1,  1),
            Direction::Left        => (-1,  0),
            Direction::TopLeft     => (-1, -1),
        }
    }

    /// Inverse of [`delta`](Self::delta).  `None` for `(0, 0)` and for any
    /// offset longer than one step.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        if dx.abs() > 1 || dy.abs() > 1 {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|d| d.delta() == (dx as i8, dy as i8))
    }

    /// Numeric code of the direction (1–8).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable label, useful for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top         => "top",
            Direction::TopRight    => "top_right",
            Direction::Right       => "right",
            Direction::BottomRight => "bottom_right",
            Direction::Bottom      => "bottom",
            Direction::BottomLeft  => "bottom_left",
            Direction::Left        => "left",
            Direction::TopLeft     => "top_left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
