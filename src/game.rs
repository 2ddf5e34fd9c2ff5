//! Game state: board geometry, snake, apple, one tick of the rules.

use crate::GameConfig;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;

/// One grid cell; (0, 0) is the top-left corner of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four movement directions; each is the negation of its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector (dx, dy) for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Board extent in cells; owns the wraparound arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: i32::from(width),
            height: i32::from(height),
        }
    }

    pub fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Wrap a cell back onto the board. Each axis wraps on its own: below
    /// zero lands on the far edge, at or past the extent lands on zero.
    pub fn wrap(self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// Cell one step from `cell` in `direction`, wrapped.
    pub fn step(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(Cell::new(cell.x + dx, cell.y + dy))
    }

    fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}

/// The snake: occupied cells head-first, plus steering and growth state.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Head at the front. No duplicate cells except at the instant a
    /// self-collision is detected.
    cells: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    /// Length the snake should grow to; the cell sequence approaches it by
    /// one cell per tick.
    target_len: usize,
    /// Tail cell dropped by the last advance, for the renderer to repaint.
    vacated: Option<Cell>,
}

impl Snake {
    fn spawn<R: Rng>(board: Board, rng: &mut R) -> Self {
        let direction = Direction::ALL.choose(rng).copied().unwrap_or(Direction::Right);
        Self {
            cells: VecDeque::from([board.center()]),
            direction,
            pending: None,
            target_len: 1,
            vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true in practice; paired with `len` for API completeness.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Queue a direction change for the next tick. Reversing straight into
    /// the body is ignored.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = Some(direction);
        }
    }

    /// Consume the queued direction change. Runs once per tick, before the
    /// snake advances, so a change never lands mid-step.
    fn apply_pending(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
    }

    /// Where the head lands on the next advance.
    fn next_head(&self, board: Board) -> Cell {
        board.step(self.head(), self.direction)
    }

    /// One step: new head at the front; the tail is dropped and recorded as
    /// vacated unless the snake still owes growth toward its target length.
    fn advance(&mut self, board: Board) {
        let new_head = self.next_head(board);
        self.cells.push_front(new_head);
        if self.cells.len() > self.target_len {
            self.vacated = self.cells.pop_back();
        } else {
            self.vacated = None;
        }
    }

    /// True when the head occupies a body cell at index 2 or beyond. Index 1
    /// is always the cell just behind the head and can never be a genuine
    /// hit under grid movement.
    fn hit_self(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(2).any(|&cell| cell == head)
    }

    fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Back to the start: length 1 at the board center, a fresh random
    /// heading, queued steering discarded.
    fn reset<R: Rng>(&mut self, board: Board, rng: &mut R) {
        *self = Self::spawn(board, rng);
    }
}

/// The apple: a single cell, never on the snake.
#[derive(Debug, Clone, Copy)]
pub struct Apple {
    pos: Cell,
}

impl Apple {
    fn spawn<R: Rng>(board: Board, snake: &Snake, rng: &mut R) -> Self {
        let mut apple = Self { pos: board.center() };
        apple.randomize(board, snake, rng);
        apple
    }

    pub fn pos(&self) -> Cell {
        self.pos
    }

    /// Rejection-sample a fresh position off the snake. Terminates as long
    /// as the board has at least one free cell.
    pub fn randomize<R: Rng>(&mut self, board: Board, snake: &Snake, rng: &mut R) {
        loop {
            let pos = board.random_cell(rng);
            if !snake.occupies(pos) {
                self.pos = pos;
                return;
            }
        }
    }
}

/// What one tick did, for the caller to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate_apple: bool,
    pub self_collision: bool,
}

/// Whole-game state. Generic over the RNG so tests can inject a seeded one.
#[derive(Debug)]
pub struct GameState<R = rand::rngs::ThreadRng> {
    pub board: Board,
    pub snake: Snake,
    pub apple: Apple,
    rng: R,
}

impl GameState<rand::rngs::ThreadRng> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Self {
        let board = Board::new(config.grid_width, config.grid_height);
        let snake = Snake::spawn(board, &mut rng);
        let apple = Apple::spawn(board, &snake, &mut rng);
        Self {
            board,
            snake,
            apple,
            rng,
        }
    }

    /// One tick of the rules: apply queued steering, advance one cell, then
    /// the apple check before the self-collision check, so an apple eaten on
    /// the same tick as a collision is never lost.
    ///
    /// Growth registers on the eating tick: the target length goes up before
    /// the advance decides whether to drop the tail.
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.apply_pending();

        let ate_apple = self.snake.next_head(self.board) == self.apple.pos();
        if ate_apple {
            self.snake.grow();
        }
        self.snake.advance(self.board);
        if ate_apple {
            self.apple.randomize(self.board, &self.snake, &mut self.rng);
        }

        let self_collision = self.snake.hit_self();
        if self_collision {
            self.snake.reset(self.board, &mut self.rng);
        }

        TickOutcome {
            ate_apple,
            self_collision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123_4567_89AB_CDEF;

    fn config(width: u16, height: u16) -> GameConfig {
        GameConfig {
            grid_width: width,
            grid_height: height,
            tick_rate: 8.0,
        }
    }

    /// 32x24 board, snake pinned heading Right so scenarios are deterministic.
    fn state() -> GameState<ChaCha12Rng> {
        let mut state = GameState::with_rng(&config(32, 24), ChaCha12Rng::seed_from_u64(RNG_SEED));
        state.snake.direction = Direction::Right;
        state.snake.pending = None;
        state
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn steer_rejects_direct_reversal() {
        let mut state = state();
        state.snake.steer(Direction::Left);
        assert_eq!(state.snake.pending, None);

        state.snake.steer(Direction::Up);
        assert_eq!(state.snake.pending, Some(Direction::Up));

        // Rejection is against the current direction, not the queued one
        state.snake.steer(Direction::Left);
        assert_eq!(state.snake.pending, Some(Direction::Up));
    }

    #[test]
    fn step_wraps_each_axis_independently() {
        let board = Board::new(32, 24);
        assert_eq!(board.step(Cell::new(31, 0), Direction::Right), Cell::new(0, 0));
        assert_eq!(board.step(Cell::new(0, 0), Direction::Up), Cell::new(0, 23));
        assert_eq!(board.step(Cell::new(0, 5), Direction::Left), Cell::new(31, 5));
        assert_eq!(board.step(Cell::new(7, 23), Direction::Down), Cell::new(7, 0));
        // Both axes out of range at once wrap together
        assert_eq!(board.wrap(Cell::new(-1, -1)), Cell::new(31, 23));
        assert_eq!(board.wrap(Cell::new(32, 24)), Cell::new(0, 0));
    }

    #[test]
    fn eating_grows_by_one_per_apple() {
        let mut state = state();
        for eaten in 1usize..=4 {
            state.apple.pos = state.board.step(state.snake.head(), Direction::Right);
            let outcome = state.tick();
            assert!(outcome.ate_apple);
            assert!(!outcome.self_collision);
            assert_eq!(state.snake.len(), eaten + 1);
            // A growing step vacates nothing
            assert_eq!(state.snake.vacated(), None);
        }
    }

    #[test]
    fn plain_move_keeps_length_and_records_vacated_tail() {
        let mut state = state();
        let old_head = state.snake.head();
        state.apple.pos = Cell::new(0, 0);

        let outcome = state.tick();
        assert!(!outcome.ate_apple);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.vacated(), Some(old_head));
    }

    #[test]
    fn fresh_snake_cannot_self_collide() {
        let mut state = state();
        state.apple.pos = Cell::new(0, 0);
        assert!(!state.tick().self_collision);
    }

    #[test]
    fn apple_never_lands_on_the_snake() {
        let mut state = GameState::with_rng(&config(4, 4), ChaCha12Rng::seed_from_u64(RNG_SEED));
        // Fill most of the board so rejection sampling has to work for it
        state.snake.cells = (0..14).map(|i| Cell::new(i % 4, i / 4)).collect();
        state.snake.target_len = 14;

        for _ in 0..20 {
            let snake = state.snake.clone();
            state.apple.randomize(state.board, &snake, &mut state.rng);
            assert!(!state.snake.occupies(state.apple.pos()));
        }
    }

    #[test]
    fn two_ticks_to_the_apple() {
        let mut state = state();
        let center = state.board.center();
        state.apple.pos = Cell::new(center.x + 2, center.y);

        assert!(!state.tick().ate_apple);
        let outcome = state.tick();

        assert!(outcome.ate_apple);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Cell::new(center.x + 2, center.y));
        // Relocated apple avoids both occupied cells
        assert!(!state.snake.occupies(state.apple.pos()));
    }

    #[test]
    fn tight_loop_resets_to_center() {
        let mut state = state();
        state.apple.pos = Cell::new(0, 0);
        state.snake.cells = VecDeque::from([
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
            Cell::new(2, 5),
            Cell::new(1, 5),
        ]);
        state.snake.target_len = 5;

        state.snake.steer(Direction::Down);
        assert!(!state.tick().self_collision);
        state.snake.steer(Direction::Left);
        assert!(!state.tick().self_collision);
        state.snake.steer(Direction::Up);
        let outcome = state.tick();

        assert!(outcome.self_collision);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.target_len, 1);
        assert_eq!(state.snake.head(), state.board.center());
        assert_eq!(state.snake.pending, None);

        // A freshly reset snake has fewer than 3 cells and cannot collide
        // on its next move, whatever its new heading is
        assert!(!state.tick().self_collision);
    }

    #[test]
    fn tight_turns_by_a_short_snake_never_false_collide() {
        // After a move the old head sits at index 1; the collision scan
        // starts at index 2, so a three-cell snake can U-turn freely.
        let mut state = state();
        state.apple.pos = Cell::new(0, 0);
        state.snake.cells = VecDeque::from([
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
        ]);
        state.snake.target_len = 3;

        for turn in [Direction::Down, Direction::Left, Direction::Up] {
            state.snake.steer(turn);
            assert!(!state.tick().self_collision);
        }
    }
}
