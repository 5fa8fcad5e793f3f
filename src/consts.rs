//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Number of cells along each side of the play grid
pub(crate) const GRID_SIZE: i16 = 25;

/// Width & height of the play field on screen: the grid plus its border
pub(crate) const BOARD_SIDE: u16 = GRID_SIZE as u16 + 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 29,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food pellet
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Style for the food pellet
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the title line above the play field
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Style for the score bar below the play field
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the game-over panel title
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
