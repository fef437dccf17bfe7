use crate::error::GameError;
use crate::terminal::layout::{Hit, Layout};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction
{
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command
{
    Quit,
    Select
    {
        row: usize,
        col: usize,
    },
    Move(Direction),
    /// Space/Enter: pick the cursor cell, or restart once the game is over.
    Confirm,
    PlayAgain,
}

/// Keyboard cursor over the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor
{
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl Cursor
{
    pub fn new(rows: usize, cols: usize) -> Self
    {
        Self {
            row: 0,
            col: 0,
            rows,
            cols,
        }
    }

    pub fn position(&self) -> (usize, usize)
    {
        (self.row, self.col)
    }

    pub fn place(&mut self, row: usize, col: usize)
    {
        self.row = row.min(self.rows.saturating_sub(1));
        self.col = col.min(self.cols.saturating_sub(1));
    }

    pub fn step(&mut self, direction: Direction)
    {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.place(self.row + 1, self.col),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.place(self.row, self.col + 1),
        }
    }
}

pub fn read_commands(layout: &Layout) -> Result<Vec<Command>, GameError>
{
    let mut commands = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Some(command) = translate(&event::read()?, layout) {
            commands.push(command);
        }
    }
    Ok(commands)
}

pub fn translate(event: &Event, layout: &Layout) -> Option<Command>
{
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => match layout.hit(*column, *row)? {
            Hit::Cell { row, col } => Some(Command::Select { row, col }),
            Hit::PlayAgain => Some(Command::PlayAgain),
        },
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command>
{
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::Confirm,
        KeyCode::Char('r') => Command::PlayAgain,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn key(code: KeyCode) -> Event
    {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event
    {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_click_on_cell_selects_it()
    {
        let layout = Layout::new(7, 5);
        let (x, y) = layout.cell_origin(3, 2);
        let event = click(MouseEventKind::Down(MouseButton::Left), x + 1, y);
        assert_eq!(translate(&event, &layout), Some(Command::Select { row: 3, col: 2 }));
    }

    #[test]
    fn test_other_mouse_events_are_dropped()
    {
        let layout = Layout::new(7, 5);
        let (x, y) = layout.cell_origin(0, 0);
        let right = click(MouseEventKind::Down(MouseButton::Right), x, y);
        let release = click(MouseEventKind::Up(MouseButton::Left), x, y);
        let moved = click(MouseEventKind::Moved, x, y);
        assert_eq!(translate(&right, &layout), None);
        assert_eq!(translate(&release, &layout), None);
        assert_eq!(translate(&moved, &layout), None);
        // gap between cells
        let gap = click(MouseEventKind::Down(MouseButton::Left), x + 6, y);
        assert_eq!(translate(&gap, &layout), None);
    }

    #[test]
    fn test_click_on_play_again()
    {
        let layout = Layout::new(7, 5);
        let event = click(
            MouseEventKind::Down(MouseButton::Left),
            4,
            layout.play_again_line(),
        );
        assert_eq!(translate(&event, &layout), Some(Command::PlayAgain));
    }

    #[test]
    fn test_key_bindings()
    {
        let layout = Layout::new(7, 5);
        let cases = [
            (KeyCode::Esc, Some(Command::Quit)),
            (KeyCode::Char('q'), Some(Command::Quit)),
            (KeyCode::Up, Some(Command::Move(Direction::Up))),
            (KeyCode::Char('l'), Some(Command::Move(Direction::Right))),
            (KeyCode::Enter, Some(Command::Confirm)),
            (KeyCode::Char(' '), Some(Command::Confirm)),
            (KeyCode::Char('r'), Some(Command::PlayAgain)),
            (KeyCode::Char('x'), None),
        ];
        for (code, expected) in cases {
            assert_eq!(translate(&key(code), &layout), expected, "{code:?}");
        }
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c, &layout), Some(Command::Quit));
    }

    #[test]
    fn test_key_release_is_ignored()
    {
        let layout = Layout::new(7, 5);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release), &layout), None);
    }

    #[test]
    fn test_cursor_stays_on_grid()
    {
        let mut cursor = Cursor::new(7, 5);
        cursor.step(Direction::Up);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), (0, 0));
        for _ in 0..10 {
            cursor.step(Direction::Down);
            cursor.step(Direction::Right);
        }
        assert_eq!(cursor.position(), (6, 4));
        cursor.place(20, 1);
        assert_eq!(cursor.position(), (6, 1));
    }
}
