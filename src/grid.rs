use crate::occupant::Occupant;
use crate::types::{ObjectId, Position};

// One square of ice: an occupant slot, plus a floor slot for plugged holes
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    occupant: Option<Occupant>,
    floor: Option<Occupant>,
}

/// The square icy terrain. Owns where every occupant is.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>, // Row-major
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        let size = self.size as i32;
        pos.row < 0 || pos.row >= size || pos.col < 0 || pos.col >= size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_out_of_bounds(pos) {
            None
        } else {
            Some(pos.row as usize * self.size + pos.col as usize)
        }
    }

    fn position_from_index(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Occupant standing in a cell; `None` for empty or off-grid cells
    pub fn occupant_at(&self, pos: Position) -> Option<&Occupant> {
        self.index(pos).and_then(|i| self.cells[i].occupant.as_ref())
    }

    pub fn occupant_at_mut(&mut self, pos: Position) -> Option<&mut Occupant> {
        let i = self.index(pos)?;
        self.cells[i].occupant.as_mut()
    }

    /// Whatever lies under the occupant slot (only ever a plugged hole)
    pub fn floor_at(&self, pos: Position) -> Option<&Occupant> {
        self.index(pos).and_then(|i| self.cells[i].floor.as_ref())
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.index(pos)
            .is_some_and(|i| self.cells[i].occupant.is_none())
    }

    /// Overwrites the cell. Off-grid placements are ignored.
    pub fn place(&mut self, pos: Position, occupant: Occupant) {
        if let Some(i) = self.index(pos) {
            self.cells[i].occupant = Some(occupant);
        }
    }

    /// Empties the cell and hands back what was there
    pub fn clear(&mut self, pos: Position) -> Option<Occupant> {
        self.index(pos).and_then(|i| self.cells[i].occupant.take())
    }

    /// Moves the occupant slot of a cell into its floor slot
    pub fn sink_into_floor(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            if let Some(occupant) = self.cells[i].occupant.take() {
                self.cells[i].floor = Some(occupant);
            }
        }
    }

    pub fn position_of(&self, id: ObjectId) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| cell.occupant.is_some_and(|o| o.id == id))
            .map(|i| self.position_from_index(i))
    }

    /// Moves whatever is at `from` to `to`, vacating `from` in the same step.
    /// Anything already at `to` is overwritten; callers account for it first.
    pub fn move_atomic(&mut self, from: Position, to: Position) {
        if self.is_out_of_bounds(to) {
            return;
        }
        if let Some(occupant) = self.clear(from) {
            self.place(to, occupant);
        }
    }

    /// All occupants in row-major order
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &Occupant)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.occupant
                .as_ref()
                .map(|o| (self.position_from_index(i), o))
        })
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..self.cells.len())
            .filter(|&i| self.cells[i].occupant.is_none())
            .map(|i| self.position_from_index(i))
            .collect()
    }
}
