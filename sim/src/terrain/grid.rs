use bevy::math::IVec2;

pub const FOUR_OFFSETS: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];

pub const EIGHT_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Square two-layer occupancy grid. Cells outside the grid read as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    ground: Vec<bool>,
    upper: Vec<bool>,
    ground_count: usize,
    upper_count: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ground: vec![false; size * size],
            upper: vec![false; size * size],
            ground_count: 0,
            upper_count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Grid coordinate that maps onto world origin.
    pub fn center_offset(&self) -> f32 {
        (self.size as f32 - 1.0) / 2.0
    }

    pub fn filled_count(&self) -> usize {
        self.ground_count
    }

    pub fn upper_count(&self) -> usize {
        self.upper_count
    }

    #[inline]
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.size && (cell.y as usize) < self.size
    }

    #[inline]
    pub(crate) fn index(&self, cell: IVec2) -> usize {
        cell.y as usize * self.size + cell.x as usize
    }

    #[inline]
    pub(crate) fn cell_at(&self, index: usize) -> IVec2 {
        IVec2::new((index % self.size) as i32, (index / self.size) as i32)
    }

    pub fn is_filled(&self, cell: IVec2) -> bool {
        self.in_bounds(cell) && self.ground[self.index(cell)]
    }

    pub fn is_upper(&self, cell: IVec2) -> bool {
        self.in_bounds(cell) && self.upper[self.index(cell)]
    }

    /// Sets first layer occupancy. Clearing a cell also clears its second
    /// layer so the upper layer never floats.
    pub(crate) fn set_filled(&mut self, cell: IVec2, filled: bool) {
        let index = self.index(cell);
        if self.ground[index] == filled {
            return;
        }
        self.ground[index] = filled;
        if filled {
            self.ground_count += 1;
        } else {
            self.ground_count -= 1;
            if self.upper[index] {
                self.upper[index] = false;
                self.upper_count -= 1;
            }
        }
    }

    pub(crate) fn set_upper(&mut self, cell: IVec2, raised: bool) {
        let index = self.index(cell);
        if self.upper[index] == raised || (raised && !self.ground[index]) {
            return;
        }
        self.upper[index] = raised;
        if raised {
            self.upper_count += 1;
        } else {
            self.upper_count -= 1;
        }
    }

    /// Every in-bounds cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.size * self.size).map(|i| self.cell_at(i))
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells().filter(|c| self.is_filled(*c))
    }

    pub fn upper_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells().filter(|c| self.is_upper(*c))
    }

    /// Occupied cell with at least one empty 8-neighbour.
    pub fn is_edge(&self, cell: IVec2) -> bool {
        self.is_filled(cell) && EIGHT_OFFSETS.iter().any(|o| !self.is_filled(cell + *o))
    }

    /// Occupied cell whose eight neighbours are all occupied.
    pub fn is_interior(&self, cell: IVec2) -> bool {
        self.is_filled(cell) && !self.is_edge(cell)
    }

    /// Whether a 4-neighbour of `cell` is empty.
    pub fn has_open_side(&self, cell: IVec2) -> bool {
        FOUR_OFFSETS.iter().any(|o| !self.is_filled(cell + *o))
    }
}
