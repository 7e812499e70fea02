//! The gameplay engine.
//!
//! `Engine` is the single authority over the board, scores and turn. A
//! presentation layer forwards intents (`select`, `acknowledge`, `restart`,
//! `save`) and redraws from `snapshot()`.
//!
//! ## Implementation Notes
//!
//! - Rejected intents (`InvalidAction`) never mutate anything
//! - Pair resolution runs inside the `select` call that completes the pair
//! - Mismatched cards stay face-up until `acknowledge`; there is no timer

use log::{debug, info};

use super::outcome::{GameResult, Resolution, TransitionOutcome};
use super::phase::Phase;
use super::selection::SelectionBuffer;
use crate::board::{Board, BoardView};
use crate::cards::{Position, SymbolPool};
use crate::core::{GameRng, MemoryConfig, PlayerId, PlayerMap};
use crate::error::{
    ActionResult, BuildResult, ConstructionError, InvalidAction, PersistResult, PersistenceError,
};
use crate::persist::{self, BoardState, CardsState, GameState, PlayerState, PlayersState, SavePaths};

/// Builder for creating or restoring an `Engine`.
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: MemoryConfig,
    pool: SymbolPool,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MemoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Symbols to deal from (defaults to the stock image pool).
    pub fn symbol_pool(mut self, pool: SymbolPool) -> Self {
        self.pool = pool;
        self
    }

    /// Fix the dealing seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    fn rng(&self) -> GameRng {
        self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }

    /// Deal a new game.
    pub fn build(self, width: u32, height: u32) -> BuildResult<Engine> {
        if !self.config.dimension_in_bounds(width) || !self.config.dimension_in_bounds(height) {
            return Err(ConstructionError::InvalidDimensions { width, height });
        }

        let mut rng = self.rng();
        let board = Board::new(width, height, &self.pool, &mut rng)?;
        info!("New {}x{} game", width, height);

        Ok(Engine {
            config: self.config,
            pool: self.pool,
            rng,
            board,
            scores: PlayerMap::with_value(0),
            current_player: PlayerId::ONE,
            phase: Phase::AwaitingFirstPick,
            selection: SelectionBuffer::new(),
        })
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The game resumes at the start of the saved player's turn, or in
    /// `GameOver` if every pair was already matched.
    pub fn restore(self, state: GameState) -> PersistResult<Engine> {
        state.validate()?;
        let current_player = state
            .current_player()
            .ok_or_else(|| PersistenceError::MalformedData("invalid current player".into()))?;
        let scores = PlayerMap::new(|p| state.score(p));

        let GameState { board, cards, .. } = state;
        let board = Board::restore(board.width, board.height, cards.all_cards, cards.matched_cards)?;
        let phase = if board.all_matched() {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };

        Ok(Engine {
            rng: self.rng(),
            config: self.config,
            pool: self.pool,
            board,
            scores,
            current_player,
            phase,
            selection: SelectionBuffer::new(),
        })
    }

    /// Load and restore the game saved at `paths`.
    pub fn load(self, paths: &SavePaths) -> PersistResult<Engine> {
        let state = persist::load(paths)?;
        self.restore(state)
    }
}

/// A two-player memory game in progress.
#[derive(Clone, Debug)]
pub struct Engine {
    config: MemoryConfig,
    pool: SymbolPool,
    rng: GameRng,
    board: Board,
    scores: PlayerMap<u32>,
    current_player: PlayerId,
    phase: Phase,
    selection: SelectionBuffer,
}

impl Engine {
    /// Deal a new game with default configuration.
    pub fn new_game(width: u32, height: u32, pool: SymbolPool) -> BuildResult<Self> {
        EngineBuilder::new().symbol_pool(pool).build(width, height)
    }

    /// Load a saved game with default configuration.
    pub fn load(paths: &SavePaths) -> PersistResult<Self> {
        EngineBuilder::new().load(paths)
    }

    /// Start over on a freshly shuffled board of the same size.
    ///
    /// Accepted in every phase. A game restored at a size outside the
    /// configured bounds cannot be restarted at that size and fails with
    /// `InvalidDimensions`. On error the current game is left as is.
    pub fn restart(&mut self) -> BuildResult<()> {
        let (width, height) = (self.board.width(), self.board.height());
        if !self.config.dimension_in_bounds(width) || !self.config.dimension_in_bounds(height) {
            return Err(ConstructionError::InvalidDimensions { width, height });
        }

        let board = Board::new(width, height, &self.pool, &mut self.rng)?;
        self.board = board;
        self.scores = PlayerMap::with_value(0);
        self.current_player = PlayerId::ONE;
        self.phase = Phase::AwaitingFirstPick;
        self.selection.clear();
        info!("Restarted {}x{} game", self.board.width(), self.board.height());
        Ok(())
    }

    /// Reveal a card.
    ///
    /// Completing a pair resolves it before returning: a match scores and keeps
    /// the turn, a mismatch moves to `AwaitingNextPlayerAck`.
    pub fn select(&mut self, position: Position) -> ActionResult<TransitionOutcome> {
        if !self.phase.accepts_selection() {
            return Err(InvalidAction::WrongState(self.phase));
        }

        let card = self.board.card_at(position)?;
        if !card.is_selectable() {
            return Err(InvalidAction::NoopSelection(position));
        }
        let symbol = card.symbol.clone();

        self.board.flip(position)?;
        self.selection.push(position);
        self.phase = if self.phase == Phase::AwaitingFirstPick {
            Phase::AwaitingSecondPick
        } else {
            Phase::Resolving
        };
        debug!("{} revealed {} at {}", self.current_player, symbol, position);

        let resolution = if self.phase == Phase::Resolving {
            Some(self.resolve()?)
        } else {
            None
        };

        Ok(TransitionOutcome {
            revealed: position,
            symbol,
            phase: self.phase,
            resolution,
        })
    }

    fn resolve(&mut self) -> ActionResult<Resolution> {
        let (first, second) = self
            .selection
            .pair()
            .ok_or(InvalidAction::WrongState(self.phase))?;
        let player = self.current_player;

        if self.board.card_at(first)?.symbol != self.board.card_at(second)?.symbol {
            self.phase = Phase::AwaitingNextPlayerAck;
            debug!("{} missed with {} and {}", player, first, second);
            return Ok(Resolution::Mismatch {
                positions: [first, second],
            });
        }

        self.board.mark_matched(first)?;
        self.board.mark_matched(second)?;
        self.selection.clear();
        self.scores[player] += 1;
        let score = self.scores[player];
        info!("{} matched {} and {} (score {})", player, first, second, score);

        self.phase = if self.board.all_matched() {
            info!(
                "Game over: Player 1 {} - Player 2 {}",
                self.scores[PlayerId::ONE],
                self.scores[PlayerId::TWO]
            );
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };

        Ok(Resolution::Match {
            player,
            positions: [first, second],
            score,
        })
    }

    /// Turn a mismatched pair back face-down and pass the turn.
    pub fn acknowledge(&mut self) -> ActionResult<()> {
        if self.phase != Phase::AwaitingNextPlayerAck {
            return Err(InvalidAction::WrongState(self.phase));
        }
        let (first, second) = self
            .selection
            .pair()
            .ok_or(InvalidAction::WrongState(self.phase))?;

        self.board.flip(first)?;
        self.board.flip(second)?;
        self.selection.clear();
        self.current_player = self.current_player.other();
        self.phase = Phase::AwaitingFirstPick;
        info!("Turn passes to {}", self.current_player);
        Ok(())
    }

    /// Capture the persistent part of the game.
    ///
    /// Allowed in any phase. Face-up unresolved cards are recorded as
    /// unmatched and will come back face-down.
    #[must_use]
    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: BoardState {
                width: self.board.width(),
                height: self.board.height(),
            },
            players: PlayersState {
                player1: PlayerState {
                    score: self.scores[PlayerId::ONE],
                },
                player2: PlayerState {
                    score: self.scores[PlayerId::TWO],
                },
                current_player: self.current_player.number(),
            },
            cards: CardsState {
                all_cards: self.board.symbols(),
                matched_cards: self.board.matched_flags(),
            },
        }
    }

    /// Encrypt and write the game to `paths`. Does not change game state.
    pub fn save(&self, paths: &SavePaths) -> PersistResult<()> {
        persist::save(paths, &self.to_game_state())
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        BoardView::new(&self.board, &self.scores, self.current_player, self.phase)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// A player's score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards revealed this turn and not yet resolved.
    #[must_use]
    pub fn selection(&self) -> &[Position] {
        self.selection.as_slice()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.phase.is_terminal() {
            return None;
        }
        let one = self.scores[PlayerId::ONE];
        let two = self.scores[PlayerId::TWO];
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
