use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::game::Game;
use crate::logo::Logo;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

static TAGLINE: &[&str] = &[
    "Steer with the arrow keys or WASD.",
    "Eat the food, avoid the walls and your own tail.",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: MenuItem,
    difficulty: Difficulty,
}

impl MainMenu {
    pub(crate) fn new(difficulty: Difficulty) -> MainMenu {
        MainMenu {
            selection: MenuItem::default(),
            difficulty,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) => return Some(Screen::Quit),
            (_, Command::P) | (MenuItem::Play, Command::Enter | Command::Space) => {
                return Some(self.play())
            }
            (MenuItem::Difficulty, Command::Enter | Command::Space | Command::Right) => {
                self.difficulty = self.difficulty.cycled();
            }
            (MenuItem::Quit, Command::Enter | Command::Space) => return Some(Screen::Quit),
            (_, Command::Up) => {
                if let Some(item) = self.selection.prev() {
                    self.selection = item;
                }
            }
            (_, Command::Down) => {
                if let Some(item) = self.selection.next() {
                    self.selection = item;
                }
            }
            (_, Command::Next) => {
                self.selection = self.selection.next().unwrap_or_else(MenuItem::min);
            }
            (_, Command::Prev) => {
                self.selection = self.selection.prev().unwrap_or_else(MenuItem::max);
            }
            _ => (),
        }
        None
    }

    fn play(&self) -> Screen {
        Screen::Playing(Game::new(self.difficulty))
    }

    fn item_style(&self, item: MenuItem) -> Style {
        if self.selection == item {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        }
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, tagline_area, play_area, difficulty_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, 2, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        for (&text, row) in TAGLINE.iter().zip(tagline_area.rows()) {
            Line::from(text).centered().render(row, buf);
        }

        let play_style = self.item_style(MenuItem::Play);
        Line::from_iter([
            Span::styled("[Play (", play_style),
            Span::styled("p", consts::KEY_STYLE.patch(play_style)),
            Span::styled(")]", play_style),
        ])
        .centered()
        .render(play_area, buf);

        Line::styled(
            format!("[Difficulty: {} ▶]", self.difficulty),
            self.item_style(MenuItem::Difficulty),
        )
        .centered()
        .render(difficulty_area, buf);

        let quit_style = self.item_style(MenuItem::Quit);
        Line::from_iter([
            Span::styled("[Quit (", quit_style),
            Span::styled("q", consts::KEY_STYLE.patch(quit_style)),
            Span::styled(")]", quit_style),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum MenuItem {
    #[default]
    Play,
    Difficulty,
    Quit,
}
