use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen space (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Top-left pixel corner of a board cell. Always a multiple of the cell size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Wraps a pixel coordinate onto `[0, axis_length)`, snapped to a cell boundary.
pub fn wrap(coordinate: i32, axis_length: i32, cell_size: i32) -> i32 {
    let snapped = coordinate - coordinate.rem_euclid(cell_size);
    snapped.rem_euclid(axis_length)
}

/// Board dimensions in pixels. Width and height are multiples of `cell_size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Board center, rounded down to the enclosing cell.
    pub fn center(&self) -> Cell {
        Cell {
            x: wrap(self.width / 2, self.width, self.cell_size),
            y: wrap(self.height / 2, self.height, self.cell_size),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// The neighbouring cell in `direction`, wrapping around the board edges.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: wrap(cell.x + dx * self.cell_size, self.width, self.cell_size),
            y: wrap(cell.y + dy * self.cell_size, self.height, self.cell_size),
        }
    }

    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.columns()) * self.cell_size,
            y: rng.gen_range(0..self.rows()) * self.cell_size,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            cell_size: 20,
        }
    }
}
