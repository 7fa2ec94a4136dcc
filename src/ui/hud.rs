use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Theme;

/// Supplemental values displayed by the HUD line.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Renders the single status line above the play field.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo<'_>) {
    let theme = info.theme;
    let best = info.best_score.max(state.score);
    let sep = Span::styled(" | ", Style::new().fg(theme.menu_dim));

    let line = Line::from(vec![
        Span::styled("SNAKE // ", Style::new().fg(theme.menu_dim)),
        Span::raw(format!("SCORE {}", state.score)),
        sep.clone(),
        Span::raw(format!("BEST {best}")),
        sep.clone(),
        Span::raw(format!("LEN {}", state.snake.len())),
        sep.clone(),
        Span::raw(format!("{}x{}", state.config.width, state.config.height)),
        sep,
        Span::raw(format!("TICK {}", state.tick)),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud)),
        area,
    );
}
