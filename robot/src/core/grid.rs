//! Room map: rows of cells with passability and per-run visit flags.

use crate::core::geometry::Position;

/// Whether the robot may occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Floor the robot can drive on (`S` in input maps).
    Open,
    /// Obstacle or column (`C` or `null` in input maps).
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub visited: bool,
    pub cleaned: bool,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            visited: false,
            cleaned: false,
        }
    }
}

/// Grid indexed `[row][column]`. Rows may have different lengths.
///
/// The shape never changes after construction; only the `visited` and
/// `cleaned` flags do, and they are never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_kinds(kinds: Vec<Vec<CellKind>>) -> Self {
        let rows = kinds
            .into_iter()
            .map(|row| row.into_iter().map(Cell::new).collect())
            .collect();
        Self { rows }
    }

    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        let (row, column) = self.index(position)?;
        Some(&self.rows[row][column])
    }

    /// True if `position` is inside the grid and the cell is open floor.
    pub fn is_passable(&self, position: Position) -> bool {
        matches!(self.cell(position), Some(cell) if cell.kind == CellKind::Open)
    }

    /// Set `visited` on the cell at `position`. Out-of-range positions are ignored.
    pub fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.visited = true;
        }
    }

    /// Set `cleaned` on the cell at `position`. Out-of-range positions are ignored.
    pub fn mark_cleaned(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.cleaned = true;
        }
    }

    /// Positions with `visited=true`, row-major.
    pub fn visited_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.visited)
    }

    /// Positions with `cleaned=true`, row-major.
    pub fn cleaned_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.cleaned)
    }

    fn positions_where<F: Fn(&Cell) -> bool>(&self, predicate: F) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            for (column_index, cell) in row.iter().enumerate() {
                if predicate(cell) {
                    positions.push(Position::new(column_index as i32, row_index as i32));
                }
            }
        }
        positions
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let (row, column) = self.index(position)?;
        Some(&mut self.rows[row][column])
    }

    fn index(&self, position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        let cells = self.rows.get(row)?;
        if column < cells.len() {
            Some((row, column))
        } else {
            None
        }
    }
}
