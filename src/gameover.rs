use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The screen shown after the snake crashes.  It keeps the finished game
/// around so that the final score stays visible and a rematch can reuse the
/// same difficulty.
#[derive(Clone, Debug)]
pub(crate) struct GameOverScreen {
    game: Game,
    selection: GameOverOpt,
}

impl GameOverScreen {
    /*
     * ┌───── GAME OVER ──────┐
     * │ Your score: 3        │
     * │                      │
     * │ » Play Again (r)     │
     * │   Main Menu (m)      │
     * │   Quit (q)           │
     * └──────────────────────┘
     */

    const WIDTH: u16 = 24;
    const HEIGHT: u16 = 7;

    pub(crate) fn new(game: Game) -> GameOverScreen {
        GameOverScreen {
            game,
            selection: GameOverOpt::min(),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::R => return Some(self.retry()),
            Command::M => return Some(self.to_menu()),
            Command::Enter | Command::Space => {
                return Some(match self.selection {
                    GameOverOpt::PlayAgain => self.retry(),
                    GameOverOpt::MainMenu => self.to_menu(),
                    GameOverOpt::Quit => Screen::Quit,
                })
            }
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(GameOverOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(GameOverOpt::max),
            _ => (),
        }
        None
    }

    fn retry(&self) -> Screen {
        let mut game = self.game.clone();
        game.reset();
        Screen::Playing(game)
    }

    fn to_menu(&self) -> Screen {
        Screen::Menu(MainMenu::new(self.game.difficulty()))
    }
}

impl Widget for &GameOverScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let panel = center_rect(
            display,
            Size {
                width: GameOverScreen::WIDTH,
                height: GameOverScreen::HEIGHT,
            },
        );
        let block = Block::bordered()
            .title(Span::styled(" GAME OVER ", consts::GAME_OVER_STYLE))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(panel);
        block.render(panel, buf);
        let mut rows = inner.rows();
        if let Some(row) = rows.next() {
            Line::from(format!("Your score: {}", self.game.score())).render(row, buf);
        }
        let _ = rows.next();
        for (opt, row) in GameOverOpt::iter().zip(rows) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

/// The choices on the game-over screen
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum GameOverOpt {
    /// Start another round at the same difficulty
    PlayAgain,

    /// Return to the main menu
    MainMenu,

    /// Quit the application
    Quit,
}

impl GameOverOpt {
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        match self {
            GameOverOpt::PlayAgain => {
                line.push_span("Play Again (");
                line.push_span(Span::styled("r", consts::KEY_STYLE));
                line.push_span(")");
            }
            GameOverOpt::MainMenu => {
                line.push_span("Main Menu (");
                line.push_span(Span::styled("m", consts::KEY_STYLE));
                line.push_span(")");
            }
            GameOverOpt::Quit => {
                line.push_span("Quit (");
                line.push_span(Span::styled("q", consts::KEY_STYLE));
                line.push_span(")");
            }
        }
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}
