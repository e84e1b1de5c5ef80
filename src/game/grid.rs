/// A cell position on the game grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: i32,
    pub c: i32,
}

impl Position {
    pub fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// Offset position by (dr, dc).
    pub fn moved_by(&self, dr: i32, dc: i32) -> Self {
        Self {
            r: self.r + dr,
            c: self.c + dc,
        }
    }

    /// Offset position one cell in a direction.
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        self.moved_by(dr, dc)
    }
}

/// Direction the snake can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180-degree reverse of this direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dr, dc) for moving in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Static board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check if a position is within the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.r >= 0 && pos.r < self.rows as i32 && pos.c >= 0 && pos.c < self.cols as i32
    }

    /// The center cell, where the snake's head spawns.
    pub fn center(&self) -> Position {
        Position::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
