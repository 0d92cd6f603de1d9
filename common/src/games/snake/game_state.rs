use std::collections::{HashSet, VecDeque};

use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::types::{Direction, FieldSize, GameEndReason, Point};

/// Random probes before falling back to enumerating the free cells.
const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// State of one play session: the snake, its food and the score.
///
/// Mutated only through [`SnakeGameState::step`] and
/// [`SnakeGameState::set_direction`]. Once `end_reason` is set the state is
/// frozen; a new session needs a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    food: Point,
    direction: Direction,
    score: u32,
    food_reward: u32,
    field_size: FieldSize,
    end_reason: Option<GameEndReason>,
}

impl SnakeGameState {
    /// One-cell snake in the middle of the field heading right, food on a random free cell.
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let field_size = settings.field_size.clone();
        let start = field_size.center();

        let mut state = Self {
            body: VecDeque::from([start]),
            body_set: HashSet::from([start]),
            food: start,
            direction: Direction::Right,
            score: 0,
            food_reward: settings.food_reward,
            field_size,
            end_reason: None,
        };

        match state.find_free_cell(rng) {
            Some(food) => state.food = food,
            None => state.finish(GameEndReason::BoardFilled),
        }

        state
    }

    /// Builds a running state from an explicit layout. `snake` is head-first.
    pub fn with_layout(
        field_size: FieldSize,
        food_reward: u32,
        snake: &[Point],
        direction: Direction,
        food: Point,
    ) -> Result<Self, String> {
        if snake.is_empty() {
            return Err("Snake must have at least one cell".to_string());
        }

        let mut body_set = HashSet::with_capacity(snake.len());
        for &cell in snake {
            if !field_size.contains(cell) {
                return Err(format!("Snake cell ({}, {}) is outside the field", cell.x, cell.y));
            }
            if !body_set.insert(cell) {
                return Err(format!("Snake cell ({}, {}) appears twice", cell.x, cell.y));
            }
        }

        if !field_size.contains(food) {
            return Err(format!("Food ({}, {}) is outside the field", food.x, food.y));
        }
        if body_set.contains(&food) {
            return Err(format!("Food ({}, {}) overlaps the snake", food.x, food.y));
        }

        Ok(Self {
            body: snake.iter().copied().collect(),
            body_set,
            food,
            direction,
            score: 0,
            food_reward,
            field_size,
            end_reason: None,
        })
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_game_over() || direction.is_opposite(&self.direction) {
            return;
        }
        self.direction = direction;
    }

    /// Advances the session by one tick.
    pub fn step(&mut self, rng: &mut SessionRng) {
        if self.is_game_over() {
            return;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => {
                self.finish(reason);
                return;
            }
        };

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if next_head == self.food {
            self.score = self.score.saturating_add(self.food_reward);
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.respawn_food(rng);
        } else if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }

    pub fn snake(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.body.iter()
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    fn finish(&mut self, reason: GameEndReason) {
        self.end_reason = Some(reason);
        log!(
            "Game over ({:?}) with score {} and length {}",
            reason,
            self.score,
            self.body.len()
        );
    }

    fn next_head_position(&self) -> Result<Point, GameEndReason> {
        let head = self.head();

        let next_head = match self.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(GameEndReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y + 1 >= self.field_size.height {
                    return Err(GameEndReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(GameEndReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x + 1 >= self.field_size.width {
                    return Err(GameEndReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        // The tail counts: it is still on the board when the head arrives.
        if self.occupies(next_head) {
            return Err(GameEndReason::SelfCollision);
        }

        Ok(next_head)
    }

    fn respawn_food(&mut self, rng: &mut SessionRng) {
        match self.find_free_cell(rng) {
            Some(food) => {
                self.food = food;
                log!("Food spawned at ({}, {})", food.x, food.y);
            }
            None => self.finish(GameEndReason::BoardFilled),
        }
    }

    fn find_free_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        if self.body_set.len() >= self.field_size.cell_count() {
            return None;
        }

        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let x = rng.random_range(0..self.field_size.width);
            let y = rng.random_range(0..self.field_size.height);
            let pos = Point::new(x, y);

            if !self.occupies(pos) {
                return Some(pos);
            }
        }

        let free_cells: Vec<Point> = self
            .field_size
            .cells()
            .filter(|cell| !self.occupies(*cell))
            .collect();
        rng.pick(&free_cells).copied()
    }
}
