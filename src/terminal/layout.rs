pub const HEADER_LINES: u16 = 4;
pub const CELL_WIDTH: u16 = 6;
pub const CELL_HEIGHT: u16 = 2;
pub const GAP_X: u16 = 1;
pub const GAP_Y: u16 = 1;
pub const MARGIN_LEFT: u16 = 2;
pub const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit
{
    Cell
    {
        row: usize,
        col: usize,
    },
    PlayAgain,
}

/// Screen geometry shared by the renderer and mouse hit-testing.
/// Rows and columns are terminal lines and character columns from (0, 0).
#[derive(Clone, Copy, Debug)]
pub struct Layout
{
    rows: usize,
    cols: usize,
}

impl Layout
{
    pub fn new(rows: usize, cols: usize) -> Self
    {
        Self { rows, cols }
    }

    pub fn grid_top(&self) -> u16
    {
        HEADER_LINES
    }

    pub fn grid_height(&self) -> u16
    {
        span(self.rows, CELL_HEIGHT, GAP_Y)
    }

    #[cfg(test)]
    pub fn grid_width(&self) -> u16
    {
        span(self.cols, CELL_WIDTH, GAP_X)
    }

    /// First line of the game-over panel, one blank line below the grid.
    pub fn panel_top(&self) -> u16
    {
        self.grid_top() + self.grid_height() + 1
    }

    pub fn play_again_line(&self) -> u16
    {
        self.panel_top() + 2
    }

    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16)
    {
        (
            MARGIN_LEFT + col as u16 * (CELL_WIDTH + GAP_X),
            self.grid_top() + row as u16 * (CELL_HEIGHT + GAP_Y),
        )
    }

    pub fn hit(&self, column: u16, line: u16) -> Option<Hit>
    {
        if line == self.play_again_line() {
            let end = MARGIN_LEFT + PLAY_AGAIN_LABEL.len() as u16;
            return (MARGIN_LEFT..end).contains(&column).then_some(Hit::PlayAgain);
        }

        let col = axis_index(column.checked_sub(MARGIN_LEFT)?, CELL_WIDTH, GAP_X)?;
        let row = axis_index(line.checked_sub(self.grid_top())?, CELL_HEIGHT, GAP_Y)?;
        (row < self.rows && col < self.cols).then_some(Hit::Cell { row, col })
    }
}

fn span(count: usize, size: u16, gap: u16) -> u16
{
    if count == 0 {
        return 0;
    }
    count as u16 * size + (count as u16 - 1) * gap
}

fn axis_index(offset: u16, size: u16, gap: u16) -> Option<usize>
{
    let stride = size + gap;
    (offset % stride < size).then_some((offset / stride) as usize)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn layout() -> Layout
    {
        Layout::new(7, 5)
    }

    #[test]
    fn test_grid_geometry()
    {
        let layout = layout();
        assert_eq!(layout.grid_height(), 7 * 2 + 6);
        assert_eq!(layout.grid_width(), 5 * 6 + 4);
        assert_eq!(layout.panel_top(), 4 + 20 + 1);
        assert_eq!(layout.play_again_line(), 27);
    }

    #[test]
    fn test_every_cell_origin_hits_that_cell()
    {
        let layout = layout();
        for row in 0..7 {
            for col in 0..5 {
                let (x, y) = layout.cell_origin(row, col);
                assert_eq!(layout.hit(x, y), Some(Hit::Cell { row, col }));
                // bottom right corner of the cell
                let corner = layout.hit(x + CELL_WIDTH - 1, y + CELL_HEIGHT - 1);
                assert_eq!(corner, Some(Hit::Cell { row, col }));
            }
        }
    }

    #[test]
    fn test_gaps_and_margins_miss()
    {
        let layout = layout();
        let (x, y) = layout.cell_origin(0, 0);
        assert_eq!(layout.hit(x + CELL_WIDTH, y), None);
        assert_eq!(layout.hit(x, y + CELL_HEIGHT), None);
        assert_eq!(layout.hit(0, y), None);
        assert_eq!(layout.hit(x, 1), None);
    }

    #[test]
    fn test_outside_grid_misses()
    {
        let layout = layout();
        let (x, _) = layout.cell_origin(0, 4);
        assert_eq!(layout.hit(x + CELL_WIDTH + GAP_X, layout.grid_top()), None);
        let (_, y) = layout.cell_origin(6, 0);
        assert_eq!(layout.hit(MARGIN_LEFT, y + CELL_HEIGHT + GAP_Y), None);
    }

    #[test]
    fn test_play_again_control()
    {
        let layout = layout();
        let line = layout.play_again_line();
        assert_eq!(layout.hit(MARGIN_LEFT, line), Some(Hit::PlayAgain));
        assert_eq!(layout.hit(MARGIN_LEFT + 13, line), Some(Hit::PlayAgain));
        assert_eq!(layout.hit(MARGIN_LEFT + 14, line), None);
        assert_eq!(layout.hit(0, line), None);
    }
}
