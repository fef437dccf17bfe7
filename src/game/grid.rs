use crate::game::palette::Color;
use rand::Rng;

pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 5;

/// A grid of colors and the selection flags for it. Both are always
/// created together so their dimensions cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board
{
    cells: Vec<Vec<Color>>,
    selected: Vec<Vec<bool>>,
}

impl Board
{
    pub fn generate(rows: usize, cols: usize, rng: &mut impl Rng) -> Self
    {
        let cells: Vec<Vec<Color>> = (0..rows)
            .map(|_| (0..cols).map(|_| Color::random(rng)).collect::<Vec<_>>())
            .collect();
        Self::from_cells(cells)
    }

    pub fn from_cells(cells: Vec<Vec<Color>>) -> Self
    {
        let selected = cells.iter().map(|row| vec![false; row.len()]).collect();
        Self { cells, selected }
    }

    pub fn rows(&self) -> usize
    {
        self.cells.len()
    }

    pub fn cols(&self) -> usize
    {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Color>
    {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool
    {
        self.selected
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Marks the cell; returns false if it was already marked or out of range.
    pub fn select(&mut self, row: usize, col: usize) -> bool
    {
        match self.selected.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn count_of(&self, color: Color) -> usize
    {
        self.cells.iter().flatten().filter(|c| **c == color).count()
    }

    pub fn all_selected(&self, color: Color) -> bool
    {
        self.cells
            .iter()
            .zip(self.selected.iter())
            .flat_map(|(row, sel)| row.iter().zip(sel.iter()))
            .all(|(cell, sel)| *cell != color || *sel)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = (&[Color], &[bool])>
    {
        self.cells
            .iter()
            .zip(self.selected.iter())
            .map(|(row, sel)| (row.as_slice(), sel.as_slice()))
    }
}
