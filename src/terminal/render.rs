use crate::error::GameError;
use crate::game::{Color, GameState, Rgb};
use crate::terminal::layout::{
    CELL_HEIGHT, CELL_WIDTH, GAP_X, GAP_Y, Layout, MARGIN_LEFT, PLAY_AGAIN_LABEL,
};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{Stdout, Write};

const TITLE: &str = "Color Rush";
const SWATCH: &str = "      ";

/// Builds the frame as plain lines; line `n` is drawn on terminal row `n`.
pub fn compose_frame(game: &GameState, layout: &Layout, cursor: Option<(usize, usize)>) -> Vec<String>
{
    let target = game.target();
    let margin = " ".repeat(MARGIN_LEFT as usize);
    let mut lines = Vec::new();
    lines.push(format!("{margin}{TITLE}"));
    lines.push(format!(
        "{margin}Target: {} {:<7} Timer: {}s",
        paint(target.rgb(), SWATCH),
        target.name().to_uppercase(),
        game.timer()
    ));
    lines.push(format!("{margin}Round: {}", game.round()));
    lines.push(String::new());

    let board = game.board();
    for (r, (colors, selected)) in board.iter_rows().enumerate() {
        if r > 0 {
            for _ in 0..GAP_Y {
                lines.push(String::new());
            }
        }
        for sub in 0..CELL_HEIGHT {
            let mut line = margin.clone();
            for (c, (color, picked)) in colors.iter().zip(selected.iter()).enumerate() {
                if c > 0 {
                    line.push_str(&" ".repeat(GAP_X as usize));
                }
                let under_cursor = cursor == Some((r, c));
                line.push_str(&render_cell(*color, *picked, under_cursor, sub));
            }
            lines.push(line);
        }
    }

    debug_assert_eq!(lines.len() as u16, layout.grid_top() + layout.grid_height());
    lines.push(String::new());

    if game.is_game_over() {
        lines.push(format!("{margin}Game Over"));
        lines.push(format!("{margin}Final Score: {}", game.score()));
        lines.push(format!("{margin}{PLAY_AGAIN_LABEL}"));
        lines.push(String::new());
        lines.push(format!("{margin}Click Play Again or press R. Esc quits."));
    } else {
        lines.push(format!(
            "{margin}Pick every {} cell before the timer runs out.",
            target.name()
        ));
        lines.push(format!(
            "{margin}Click cells, or move with arrows and press Space. Esc quits."
        ));
    }

    lines
}

fn render_cell(color: Color, picked: bool, under_cursor: bool, sub: u16) -> String
{
    let rgb = if picked { color.rgb().faded() } else { color.rgb() };
    let width = CELL_WIDTH as usize;
    let inner = width - 2;
    let text = match (sub, under_cursor, picked) {
        (0, true, _) => format!("[{}]", " ".repeat(inner)),
        (1, _, true) => format!("{:^width$}", "xx"),
        _ => " ".repeat(width),
    };
    paint(rgb, &text)
}

fn paint(background: Rgb, text: &str) -> String
{
    let foreground = if background.is_light() {
        Rgb { r: 0, g: 0, b: 0 }
    } else {
        Rgb {
            r: 255,
            g: 255,
            b: 255,
        }
    };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}\x1b[0m",
        background.r, background.g, background.b, foreground.r, foreground.g, foreground.b, text
    )
}

pub fn draw(stdout: &mut Stdout, lines: &[String]) -> Result<(), GameError>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
