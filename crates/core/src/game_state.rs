//! Game state module - the arena, the falling piece and the drop timer
//!
//! All mutation goes through [`GameState::apply`] (or the individual
//! `player_*` operations it dispatches to). Each call runs to completion, so
//! callers never observe the active piece overlapping the arena.
//!
//! Per piece the state moves `Falling -> Landing -> Falling`. Landing merges
//! the piece, sweeps full rows, then spawns the next piece. If that spawn
//! collides the game is over: the arena and score are reset in place and play
//! continues with the new piece.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::arena::{Arena, SweepResult};
use crate::clock::GameClock;
use crate::pieces::{spawn_x, Shape};
use crate::rng::PieceRandomizer;
use crate::rotation::rotate_with_kick;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameConfig, GameEvent, PieceKind, Position, RotateDirection};

/// Maximum number of undrained events kept; older ones are dropped first.
pub const EVENT_CAPACITY: usize = 8;

/// The falling piece and the session score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
    pub score: u32,
}

/// Result of a one-row drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not move, was merged, and a new piece spawned
    Landed(SweepResult),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    player: Player,
    clock: GameClock,
    randomizer: PieceRandomizer,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
    started: bool,
}

impl GameState {
    /// Create a game from a configuration.
    ///
    /// The first piece is already spawned; call [`GameState::start`] before
    /// applying commands.
    pub fn new(config: &GameConfig) -> Self {
        let randomizer = match config.seed {
            Some(seed) => PieceRandomizer::new(seed),
            None => PieceRandomizer::from_entropy(),
        };
        Self::with_randomizer(config, randomizer)
    }

    /// Create a game with an explicit piece source.
    ///
    /// Arena sides are clamped through [`GameConfig::validated`].
    pub fn with_randomizer(config: &GameConfig, mut randomizer: PieceRandomizer) -> Self {
        let config = config.validated();
        let arena = Arena::new(config.arena_width, config.arena_height);
        let kind = randomizer.next_kind();
        let shape = Shape::for_kind(kind);
        let player = Player {
            kind,
            shape,
            position: Position::new(spawn_x(arena.width(), &shape), 0),
            score: 0,
        };

        Self {
            arena,
            player,
            clock: GameClock::new(config.drop_interval_ms),
            randomizer,
            events: ArrayVec::new(),
            started: false,
        }
    }

    /// Start accepting commands and publish the initial score
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.emit(GameEvent::ScoreChanged(self.player.score));
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Direct arena access for setting up positions (puzzles, tests).
    ///
    /// Callers must not fill cells under the active piece.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Take all pending events, oldest first
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Apply one command. Returns true if the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if !self.started {
            return false;
        }
        match command {
            Command::MoveLeft => self.player_move(-1),
            Command::MoveRight => self.player_move(1),
            Command::SoftDrop => {
                self.player_drop();
                true
            }
            Command::RotateCw => self.player_rotate(RotateDirection::Clockwise),
            Command::RotateCcw => self.player_rotate(RotateDirection::CounterClockwise),
            Command::Tick(elapsed_ms) => self.tick(elapsed_ms),
        }
    }

    /// Advance the drop timer; drops the piece once the interval has passed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.clock.advance(elapsed_ms) {
            return false;
        }
        self.player_drop();
        true
    }

    /// Move the piece down one row, landing it if it is blocked.
    ///
    /// Landing merges the piece, sweeps full rows, then spawns the next piece.
    /// The sweep runs before the spawn so the new piece is tested against the
    /// settled arena. `ScoreChanged` is only emitted when the sweep scored.
    /// The drop timer is reset either way.
    pub fn player_drop(&mut self) -> DropOutcome {
        self.player.position.y += 1;

        let outcome = if self.collides() {
            self.player.position.y -= 1;
            DropOutcome::Landed(self.land())
        } else {
            DropOutcome::Fell
        };

        self.clock.reset();
        outcome
    }

    /// Shift the piece by `direction` columns (-1 left, +1 right).
    ///
    /// Returns false and leaves the piece in place if the move collides.
    pub fn player_move(&mut self, direction: i32) -> bool {
        self.player.position.x += direction;
        if self.collides() {
            self.player.position.x -= direction;
            return false;
        }
        true
    }

    /// Rotate the piece with a horizontal wall-kick search.
    ///
    /// Returns false if no nearby column fits; the piece is then unchanged.
    pub fn player_rotate(&mut self, direction: RotateDirection) -> bool {
        rotate_with_kick(
            &self.arena,
            &mut self.player.shape,
            &mut self.player.position,
            direction,
        )
    }

    /// Spawn a uniformly random piece at the top of the arena.
    ///
    /// Returns false if the spawn collided and the game was reset.
    pub fn player_reset(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        self.spawn_piece(kind)
    }

    /// Spawn a specific piece centred on row 0.
    ///
    /// Returns false if the spawn collided and the game was reset.
    pub fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        let shape = Shape::for_kind(kind);
        self.player.kind = kind;
        self.player.shape = shape;
        self.player.position = Position::new(spawn_x(self.arena.width(), &shape), 0);

        if !self.collides() {
            return true;
        }

        let final_score = self.player.score;
        self.arena.clear();
        self.player.score = 0;
        info!(final_score, "game over: arena reset");

        self.emit(GameEvent::GameOver { final_score });
        if final_score != 0 {
            self.emit(GameEvent::ScoreChanged(0));
        }
        false
    }

    /// Clear full rows and add their points to the score
    pub fn arena_sweep(&mut self) -> SweepResult {
        let result = self.arena.sweep();
        if result.points > 0 {
            self.player.score = self.player.score.saturating_add(result.points);
            self.emit(GameEvent::ScoreChanged(self.player.score));
        }
        result
    }

    /// True if the active piece overlaps the arena or its bounds
    pub fn collides(&self) -> bool {
        self.arena.collide(&self.player.shape, self.player.position)
    }

    fn land(&mut self) -> SweepResult {
        let kind = self.player.kind;
        let merged = self.arena.merge(&self.player.shape, self.player.position);
        debug_assert!(merged, "active piece overlapped the arena before landing");

        let sweep = self.arena_sweep();
        debug!(
            ?kind,
            rows_cleared = sweep.rows_cleared,
            points = sweep.points,
            "piece landed"
        );
        self.emit(GameEvent::Landed {
            kind,
            rows_cleared: sweep.rows_cleared,
            points: sweep.points,
        });

        self.player_reset();
        sweep
    }

    /// Copy the observable state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.arena.width();
        out.height = self.arena.height();
        self.arena.write_cells(&mut out.arena);
        out.active = Some(ActiveSnapshot {
            kind: self.player.kind,
            shape: self.player.shape,
            position: self.player.position,
        });
        out.score = self.player.score;
        out.drop_counter_ms = self.clock.drop_counter_ms();
        out.drop_interval_ms = self.clock.drop_interval_ms();
        out.started = self.started;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_randomizer(&GameConfig::default(), PieceRandomizer::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY, MIN_ARENA_SIDE};

    fn game(width: u16, height: u16) -> GameState {
        let config = GameConfig {
            arena_width: width,
            arena_height: height,
            seed: Some(12345),
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config);
        state.start();
        state.take_events();
        state
    }

    #[test]
    fn commands_are_ignored_before_start() {
        let mut state = GameState::default();
        let before = state.player().position;
        assert!(!state.apply(Command::MoveLeft));
        assert!(!state.apply(Command::Tick(5000)));
        assert_eq!(state.player().position, before);
    }

    #[test]
    fn start_publishes_initial_score_once() {
        let mut state = GameState::default();
        state.start();
        state.start();
        let events = state.take_events();
        assert_eq!(events.as_slice(), &[GameEvent::ScoreChanged(0)]);
    }

    #[test]
    fn drop_resets_clock_even_when_falling() {
        let mut state = game(10, 20);
        state.clock.advance(700);
        assert_eq!(state.player_drop(), DropOutcome::Fell);
        assert_eq!(state.clock().drop_counter_ms(), 0);
    }

    #[test]
    fn undersized_config_is_clamped() {
        let config = GameConfig {
            arena_width: 2,
            arena_height: 1,
            seed: Some(5),
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config);
        state.start();
        assert_eq!(state.arena().width(), MIN_ARENA_SIDE);
        assert_eq!(state.arena().height(), MIN_ARENA_SIDE);
        assert!(!state.collides());

        // The I spans the full width, so landing it on the floor clears a row.
        assert!(state.spawn_piece(PieceKind::I));
        for _ in 0..3 {
            state.apply(Command::SoftDrop);
            assert!(!state.collides());
        }
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn move_into_wall_is_reverted() {
        let mut state = game(10, 20);
        state.spawn_piece(PieceKind::O);
        let mut moves = 0;
        while state.player_move(-1) {
            moves += 1;
        }
        assert_eq!(moves, 4);
        assert_eq!(state.player().position.x, 0);
        assert!(!state.collides());
    }

    #[test]
    fn events_overflow_drops_oldest() {
        let mut state = game(10, 20);
        for i in 0..(EVENT_CAPACITY as u32 + 2) {
            state.emit(GameEvent::ScoreChanged(i));
        }
        let events = state.take_events();
        assert_eq!(events.len(), EVENT_CAPACITY);
        assert_eq!(events[0], GameEvent::ScoreChanged(2));
    }

    #[test]
    fn snapshot_reflects_arena_and_piece() {
        let mut state = game(10, 20);
        state.spawn_piece(PieceKind::T);
        state.arena_mut().set(0, 19, 5);

        let snap = state.snapshot();
        assert_eq!(snap.width, 10);
        assert_eq!(snap.height, 20);
        assert_eq!(snap.cell(0, 19), 5);
        assert_eq!(snap.cell(1, 19), EMPTY);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!(active.position, Position::new(4, 0));
        assert!(snap.started);
    }
}
