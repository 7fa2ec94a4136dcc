use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::BoardConfig;
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Point;
use crate::theme::{
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, Theme,
};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Everything the renderer needs besides the engine state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    /// False while the start screen is showing.
    pub open: bool,
    pub paused: bool,
    pub best_score: u32,
}

/// Renders one full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, view: ViewContext<'_>) {
    let area = frame.area();
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_hud(
        frame,
        hud_area,
        state,
        HudInfo {
            best_score: view.best_score,
            theme: view.theme,
        },
    );

    let board = board_rect(play_area, state.config);
    let block = Block::bordered()
        .border_style(Style::new().fg(view.theme.border))
        .style(Style::new().bg(view.theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, view.theme);
    render_snake(frame, inner, state, view.theme);

    if !view.open {
        render_start_menu(frame, play_area, view.best_score, view.theme);
        return;
    }

    if state.game_over {
        render_game_over_menu(frame, play_area, state, view.best_score, view.theme);
    } else if view.paused {
        render_pause_menu(frame, play_area, view.theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.config, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.head();
    let tail = state.snake.last().copied();

    let buffer = frame.buffer_mut();
    for segment in &state.snake {
        let Some((x, y)) = logical_to_terminal(inner, state.config, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered board inside `area`, clipping when the terminal is
/// too small.
fn board_rect(area: Rect, config: BoardConfig) -> Rect {
    let width = config.width.saturating_add(2).min(area.width);
    let height = config.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, config: BoardConfig, position: Point) -> Option<(u16, u16)> {
    if !position.in_bounds(config) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
