use ratatui::style::Color;

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Directional head glyph color.
    pub snake_head: Color,
    /// Body segment color.
    pub snake_body: Color,
    /// Tail segment color.
    pub snake_tail: Color,
    pub food: Color,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub border: Color,
    pub hud: Color,
    pub menu_title: Color,
    pub menu_dim: Color,
}

/// Monochrome theme matching the web easter egg's black-and-white look.
pub const THEME_MONO: Theme = Theme {
    name: "Mono",
    snake_head: Color::White,
    snake_body: Color::Gray,
    snake_tail: Color::DarkGray,
    food: Color::White,
    play_bg: Color::Black,
    border: Color::White,
    hud: Color::Gray,
    menu_title: Color::White,
    menu_dim: Color::DarkGray,
};

/// Classic green snake on dark.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border: Color::Green,
    hud: Color::Gray,
    menu_title: Color::Green,
    menu_dim: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border: Color::Magenta,
    hud: Color::Magenta,
    menu_title: Color::Magenta,
    menu_dim: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_MONO, THEME_CLASSIC, THEME_NEON];

/// Snake head glyph when moving up.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";

/// Snake head glyph when moving down.
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";

/// Snake head glyph when moving left.
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";

/// Snake head glyph when moving right.
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▒";

/// Food glyph.
pub const GLYPH_FOOD: &str = "◆";
