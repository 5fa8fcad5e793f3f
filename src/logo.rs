use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Offset, Rect},
    text::Text,
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    const GRID_WIDTH: u16 = 20;
    const SNAKE_WIDTH: u16 = 28;
    pub(crate) const HEIGHT: u16 = 5;
    pub(crate) const WIDTH: u16 = Self::GRID_WIDTH + Self::SNAKE_WIDTH;
}

#[rustfmt::skip]
static GRID: &[&str] = &[
     "  ____      _     _ ",
     " / ___|_ __(_) __| |",
     "| |  _| '__| |/ _` |",
     "| |_| | |  | | (_| |",
    r" \____|_|  |_|\__,_|",
];

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____              _        ",
     "/ ___| _ __   __ _| | _____ ",
    r"\___ \| '_ \ / _` | |/ / _ \",
     " ___) | | | | (_| |   <  __/",
    r"|____/|_| |_|\__,_|_|\_\___|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid_text = Text::from_iter(GRID.iter().copied()).style(consts::FOOD_STYLE);
        grid_text.render(area, buf);
        let snake_text = Text::from_iter(SNAKE.iter().copied()).style(consts::SNAKE_STYLE);
        let snake_area = area
            .offset(Offset {
                x: Self::GRID_WIDTH.into(),
                y: 0,
            })
            .intersection(area);
        snake_text.render(snake_area, buf);
    }
}
