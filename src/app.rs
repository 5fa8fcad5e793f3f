use crate::config::Config;
use crate::game::Game;
use crate::gameover::GameOverScreen;
use crate::menu::MainMenu;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(config: Config) -> App {
        let screen = Screen::Menu(MainMenu::new(config.difficulty));
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Playing(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::GameOver(ref over) => {
                terminal.draw(|frame| over.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref mut menu) => {
                if let Some(screen) = menu.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Playing(ref mut game) => {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::GameOver(ref mut over) => {
                if let Some(screen) = over.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Menu(MainMenu),
    Playing(Game),
    GameOver(GameOverScreen),
    Quit,
}
