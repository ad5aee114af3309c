use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::game::{GamePhase, GameState};
use crate::grid::{Cell, Grid};
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Upper half-block glyph; fg paints the upper grid row, bg the lower one.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_board(frame.buffer_mut(), inner, state, theme);

    match state.current_phase() {
        GamePhase::Menu => render_start_menu(frame, play_area, theme),
        GamePhase::GameOver => render_game_over_menu(
            frame,
            play_area,
            state.score(),
            state.death_reason(),
            theme,
        ),
        GamePhase::Playing => {}
    }
}

/// Paints every visible grid cell, two grid rows per terminal row.
fn render_board(buffer: &mut Buffer, inner: Rect, state: &GameState, theme: &Theme) {
    let grid = state.grid();

    for row in 0..inner.height {
        for column in 0..inner.width {
            let x = i32::from(column);
            let upper = Cell::new(x, i32::from(row) * 2);
            let lower = Cell::new(x, i32::from(row) * 2 + 1);
            if !grid.contains(upper) {
                continue;
            }

            let style = Style::new()
                .fg(cell_color(state, grid, upper, theme))
                .bg(cell_color(state, grid, lower, theme));
            buffer.set_string(inner.x + column, inner.y + row, GLYPH_HALF_UPPER, style);
        }
    }
}

fn cell_color(state: &GameState, grid: Grid, cell: Cell, theme: &Theme) -> Color {
    if !grid.contains(cell) {
        return theme.border_bg;
    }

    let snake = state.snake_cells();
    if snake.first() == Some(&cell) {
        return theme.snake_head;
    }
    if snake.contains(&cell) {
        return theme.snake_body;
    }
    if state.food_cell() == cell {
        return theme.food;
    }

    theme.play_bg
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::config::GameConfig;
    use crate::game::{GameState, StartMode};
    use crate::grid::Cell;
    use crate::theme::THEME_CLASSIC;

    use super::{GLYPH_HALF_UPPER, render};

    #[test]
    fn head_is_drawn_in_the_lower_half_of_its_row() {
        let mut state = GameState::new_with_seed(GameConfig::default(), StartMode::Immediate, 1)
            .expect("default config is valid");
        state.set_food(Cell::new(40, 40));

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &state, &THEME_CLASSIC))
            .expect("draw succeeds");

        // Border is one cell wide; head (5,5) lands on terminal row 1 + 5/2.
        let buffer = terminal.backend().buffer();
        let position: (u16, u16) = (1 + 5, 1 + 2);
        let cell = &buffer[position];
        assert_eq!(cell.symbol(), GLYPH_HALF_UPPER);
        assert_eq!(cell.bg, THEME_CLASSIC.snake_head);
    }
}
