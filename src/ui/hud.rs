use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::{GamePhase, GameState};
use crate::theme::Theme;

const HUD_HEIGHT: u16 = 1;
const HUD_SEPARATOR: &str = "  ";

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let fields = hud_fields(state);
    frame.render_widget(
        Paragraph::new(hud_line(&fields, usize::from(hud_area.width), theme))
            .alignment(Alignment::Right),
        hud_area,
    );

    play_area
}

/// Label/value pairs shown in the HUD, most important first.
fn hud_fields(state: &GameState) -> Vec<(&'static str, String)> {
    vec![
        ("Score", state.score().to_string()),
        ("Length", state.snake_cells().len().to_string()),
        ("Tick", state.tick_count().to_string()),
        ("", phase_label(state.current_phase()).to_owned()),
    ]
}

fn phase_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Menu => "menu",
        GamePhase::Playing => "playing",
        GamePhase::GameOver => "game over",
    }
}

/// Builds the HUD line, dropping trailing fields that do not fit.
fn hud_line(
    fields: &[(&'static str, String)],
    available_width: usize,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0;

    for (label, value) in fields {
        let label_text = if label.is_empty() {
            String::new()
        } else {
            format!("{label} ")
        };
        let separator = if spans.is_empty() { "" } else { HUD_SEPARATOR };
        let width = separator.width() + label_text.width() + value.width();
        if used + width > available_width {
            break;
        }
        used += width;

        if !separator.is_empty() {
            spans.push(Span::raw(separator));
        }
        spans.push(Span::styled(label_text, Style::new().fg(theme.hud_label)));
        spans.push(Span::styled(
            value.clone(),
            Style::new()
                .fg(theme.hud_value)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::theme::THEME_CLASSIC;

    use super::hud_line;

    fn fields() -> Vec<(&'static str, String)> {
        vec![("Score", "12".to_owned()), ("Length", "15".to_owned())]
    }

    #[test]
    fn all_fields_fit_on_wide_terminals() {
        let line = hud_line(&fields(), 80, &THEME_CLASSIC);

        assert_eq!(line.to_string(), "Score 12  Length 15");
    }

    #[test]
    fn narrow_terminals_keep_leading_fields() {
        let line = hud_line(&fields(), 12, &THEME_CLASSIC);

        assert_eq!(line.to_string(), "Score 12");
    }
}
