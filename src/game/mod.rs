mod direction;
mod food;
mod grid;
mod snake;
use self::direction::Direction;
use self::food::Food;
use self::grid::Cell;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::gameover::GameOverScreen;
use crate::util::get_display_area;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// One round of the game: the snake, the food it chases, and the score earned
/// so far
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    difficulty: Difficulty,
    snake: Snake,
    food: Food,
    score: u32,
    running: bool,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(difficulty: Difficulty) -> Game {
        Game::new_with_rng(difficulty, rand::rng())
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + self.difficulty.tick_period());
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.tick();
            self.next_tick = None;
            if !self.running {
                return Ok(Some(Screen::GameOver(GameOverScreen::new(self.clone()))));
            }
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(difficulty: Difficulty, mut rng: R) -> Game<R> {
        let snake = Snake::new();
        let food = Food::new(&mut rng, snake.body());
        Game {
            rng,
            difficulty,
            snake,
            food,
            score: 0,
            running: true,
            next_tick: None,
        }
    }

    /// Advance the game by one step: move the snake one cell and resolve
    /// eating and collisions.  Does nothing if the game has already ended.
    pub(crate) fn tick(&mut self) {
        if !self.running {
            return;
        }
        let ate = self.snake.next_head() == self.food.position();
        if ate {
            self.snake.schedule_growth();
        }
        self.snake.advance();
        if ate {
            self.score += 1;
            self.food.regenerate(&mut self.rng, self.snake.body());
        }
        if !self.snake.head().in_bounds() || self.snake.bites_itself() {
            self.game_over();
        }
    }

    /// End the round.  The score is kept so that the game-over screen can
    /// show it; `reset()` is what clears it.
    fn game_over(&mut self) {
        self.snake.reset();
        self.food.regenerate(&mut self.rng, self.snake.body());
        self.running = false;
    }

    /// Start a fresh round at the same difficulty
    pub(crate) fn reset(&mut self) {
        self.snake.reset();
        self.food.regenerate(&mut self.rng, self.snake.body());
        self.score = 0;
        self.running = true;
        self.next_tick = None;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.snake.set_direction(Direction::Up),
            Command::Down => self.snake.set_direction(Direction::Down),
            Command::Left => self.snake.set_direction(Direction::Left),
            Command::Right => self.snake.set_direction(Direction::Right),
            _ => (),
        }
        None
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn running(&self) -> bool {
        self.running
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [title_area, board_area, score_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(consts::BOARD_SIDE),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(" Gridsnake", consts::TITLE_STYLE).render(title_area, buf);

        let [board_area] = Layout::horizontal([consts::BOARD_SIDE])
            .flex(Flex::Center)
            .areas(board_area);
        Block::bordered().render(board_area, buf);
        let mut grid = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        grid.draw_cell(self.food.position(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &cell in self.snake.body().iter().skip(1) {
            grid.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that it wins any overlap
        grid.draw_cell(self.snake.head(), self.snake.head_symbol(), consts::SNAKE_STYLE);

        Line::styled(
            format!(" Score: {}    Difficulty: {}", self.score, self.difficulty),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(pos) = cell.buffer_position(self.area) else {
            return;
        };
        if let Some(buf_cell) = self.buf.cell_mut(pos) {
            buf_cell.set_char(symbol);
            buf_cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn seeded_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(Difficulty::Medium, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn new_game() {
        let game = seeded_game();
        assert_eq!(game.score(), 0);
        assert!(game.running());
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(game.snake.head(), Cell::new(6, 9));
        assert_eq!(game.snake.body().len(), 3);
        assert!(game.food.position().in_bounds());
        assert!(!game.snake.body().contains(&game.food.position()));
    }

    #[test]
    fn tick_without_food() {
        let mut game = seeded_game();
        game.food.position = Cell::new(0, 0);
        game.tick();
        assert_eq!(
            game.snake.body(),
            &VecDeque::from([Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)])
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.food.position(), Cell::new(0, 0));
        assert!(game.running());
    }

    #[test]
    fn tick_eats_food() {
        let mut game = seeded_game();
        game.food.position = Cell::new(7, 9);
        game.tick();
        assert_eq!(
            game.snake.body(),
            &VecDeque::from([
                Cell::new(7, 9),
                Cell::new(6, 9),
                Cell::new(5, 9),
                Cell::new(4, 9)
            ])
        );
        assert_eq!(game.score(), 1);
        assert!(game.running());
        assert!(game.food.position().in_bounds());
        assert!(!game.snake.body().contains(&game.food.position()));
    }

    #[test]
    fn boundary_collision() {
        let mut game = seeded_game();
        game.snake.body = VecDeque::from([Cell::new(24, 9), Cell::new(23, 9), Cell::new(22, 9)]);
        game.food.position = Cell::new(0, 0);
        game.score = 5;
        game.tick();
        assert!(!game.running());
        assert_eq!(game.score(), 5);
        assert_eq!(game.snake, Snake::new());
    }

    #[test]
    fn self_collision() {
        let mut game = seeded_game();
        game.snake.body = VecDeque::from([
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
        ]);
        game.snake.direction = Direction::Down;
        game.food.position = Cell::new(0, 0);
        game.tick();
        assert!(!game.running());
    }

    #[test]
    fn tick_noop_after_game_over() {
        let mut game = seeded_game();
        game.snake.body = VecDeque::from([Cell::new(24, 9), Cell::new(23, 9), Cell::new(22, 9)]);
        game.food.position = Cell::new(0, 0);
        game.tick();
        assert!(!game.running());
        let stopped = game.clone();
        game.tick();
        assert_eq!(game, stopped);
    }

    #[test]
    fn reset_clears_score() {
        let mut game = seeded_game();
        game.snake.body = VecDeque::from([Cell::new(24, 9), Cell::new(23, 9), Cell::new(22, 9)]);
        game.food.position = Cell::new(0, 0);
        game.score = 7;
        game.tick();
        assert!(!game.running());
        assert_eq!(game.score(), 7);
        game.reset();
        assert_eq!(game.score(), 0);
        assert!(game.running());
        assert_eq!(game.snake, Snake::new());
    }

    #[test]
    fn turn_via_key() {
        let mut game = seeded_game();
        assert!(game.handle_event(Event::Key(KeyCode::Up.into())).is_none());
        assert_eq!(game.snake.direction, Direction::Up);
    }

    #[test]
    fn reversal_via_key_ignored() {
        let mut game = seeded_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Left.into()))
            .is_none());
        assert_eq!(game.snake.direction, Direction::Right);
    }

    #[test]
    fn quit_key() {
        let mut game = seeded_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Char('q').into()))
            .is_none());
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(game.handle_event(ctrl_c), Some(Screen::Quit)));
    }

    #[test]
    fn render_new_game() {
        let mut game = seeded_game();
        game.food.position = Cell::new(20, 4);
        let area = Rect::new(0, 0, 80, 29);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Gridsnake",
            "                           ┌─────────────────────────┐                          ",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                    ●    │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │    ⚬⚬>                  │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           │                         │",
            "                           └─────────────────────────┘",
            " Score: 0    Difficulty: Medium",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::TITLE_STYLE);
        expected.set_style(Rect::new(0, 28, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(48, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(32, 11, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
