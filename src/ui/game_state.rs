//! Game state management for the Othello GUI

use crate::rules::{apply_move, has_legal_move, is_legal_move, legal_moves, outcome, Outcome};
use crate::{Board, Color, Move, MoveResult, OthelloEngine, SearchConfig, Strategy};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Limit used for hints in hotseat mode
const HINT_LIMIT: u8 = 3;

/// Minimax ply cap on boards too large to search to the end
const MINIMAX_LIMIT: u8 = 4;

/// Minimax limit for a board size. Only 4x4 games are searched to the end.
pub fn minimax_limit_for(size: usize) -> Option<u8> {
    (size > 4).then_some(MINIMAX_LIMIT)
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::Dark,
        }
    }
}

/// AI computation state. The engine travels to the worker thread and back
/// so its cache outlives a single move.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(OthelloEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// One entry of the move history; `mv` is `None` for a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub color: Color,
    pub mv: Option<Move>,
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub dark: u32,
    pub light: u32,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Color,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Move>,
    pub move_history: Vec<Turn>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    /// Search settings applied to the engine before each AI move
    pub config: SearchConfig,

    initial: Board,
    /// `None` while the engine is on the worker thread
    engine: Option<OthelloEngine>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_board(mode, Board::standard())
    }

    pub fn with_board(mode: GameMode, board: Board) -> Self {
        let config = SearchConfig::default();
        let mut state = Self {
            board,
            mode,
            current_turn: Color::Dark,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            config,
            initial: board,
            engine: Some(OthelloEngine::with_config(config)),
        };
        state.resolve_passes();
        state
    }

    /// Start over on a fresh board of the same size.
    pub fn reset(&mut self) {
        self.board = self.initial;
        self.current_turn = Color::Dark;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;

        // A search in flight returns a stale result; drop it with the engine
        if self.is_ai_thinking() {
            self.ai_state = AiState::Idle;
            self.engine = Some(OthelloEngine::with_config(self.config));
        } else if let Some(engine) = self.engine.as_mut() {
            engine.clear_cache();
        }
        self.resolve_passes();
    }

    /// Start over on a new board size
    pub fn resize(&mut self, size: usize) -> Result<(), crate::OthelloError> {
        self.initial = Board::new(size)?;
        self.reset();
        Ok(())
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal placements for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current_turn)
    }

    /// Attempt to place a disc at the given position
    pub fn try_place_disc(&mut self, mv: Move) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_legal_move(&self.board, mv, self.current_turn) {
            return Err("Illegal move (must flip at least one disc)".to_string());
        }

        self.execute_move(mv);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        let color = self.current_turn;

        self.board = apply_move(&self.board, color, mv);
        self.move_history.push(Turn { color, mv: Some(mv) });
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();

        self.current_turn = color.opponent();
        self.move_timer.start();
        self.resolve_passes();
    }

    /// Skip the side to move while it has no legal placement, and detect the
    /// end of the game.
    fn resolve_passes(&mut self) {
        if let Some(outcome) = outcome(&self.board) {
            let (dark, light) = self.board.score();
            self.game_over = Some(GameResult { outcome, dark, light });
            self.move_timer.stop();
            return;
        }

        if !has_legal_move(&self.board, self.current_turn) {
            let color = self.current_turn;
            self.move_history.push(Turn { color, mv: None });
            self.message = Some(format!("{} has no legal move and passes", color.name()));
            self.current_turn = color.opponent();
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        self.config.minimax_limit = minimax_limit_for(self.board.size());
        engine.set_limit(self.config.limit);
        engine.set_strategy(self.config.strategy);
        engine.set_minimax_limit(self.config.minimax_limit);

        let board = self.board;
        let color = self.current_turn;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.engine = Some(OthelloEngine::with_config(self.config));
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(((engine, move_result), elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.engine = Some(engine);
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(mv) => self.execute_move(mv),
                // Passes are resolved before the AI is asked, so this is a stale turn
                None => self.resolve_passes(),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = OthelloEngine::with_config(SearchConfig {
            limit: HINT_LIMIT,
            strategy: Strategy::AlphaBeta,
            ..self.config
        });
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        // For PvE, undo back to the human's previous placement
        let placements = self.move_history.iter().filter(|t| t.mv.is_some()).count();
        let undo_count = match self.mode {
            GameMode::PvE { .. } if placements >= 2 => 2,
            _ if placements >= 1 => 1,
            _ => return,
        };

        let mut kept: Vec<Turn> = self.move_history.clone();
        let mut removed = 0;
        while removed < undo_count {
            match kept.pop() {
                Some(Turn { mv: Some(_), .. }) => removed += 1,
                Some(_) => {}
                None => break,
            }
        }

        // Simple undo: reset and replay
        self.board = self.initial;
        self.current_turn = Color::Dark;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;
        self.move_history.clear();
        self.resolve_passes();

        for turn in kept.into_iter().filter(|t| t.mv.is_some()) {
            if let Some(mv) = turn.mv {
                self.board = apply_move(&self.board, turn.color, mv);
                self.move_history.push(turn);
                self.last_move = Some(mv);
                self.current_turn = turn.color.opponent();
                self.resolve_passes();
            }
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameMode::default());
        assert_eq!(state.current_turn, Color::Dark);
        assert_eq!(state.legal_moves().len(), 4);
        assert!(state.is_human_turn());
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_place_and_switch_turn() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false });
        assert!(state.try_place_disc(Move::new(0, 0)).is_err());
        state.try_place_disc(Move::new(2, 3)).unwrap();

        assert_eq!(state.current_turn, Color::Light);
        assert_eq!(state.last_move, Some(Move::new(2, 3)));
        assert_eq!(state.board.score(), (4, 1));
    }

    #[test]
    fn test_not_human_turn_in_pve() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: Color::Light,
        });
        assert!(state.is_ai_turn());
        assert!(state.try_place_disc(Move::new(2, 3)).is_err());
    }

    #[test]
    fn test_auto_pass_and_game_over() {
        // Dark takes (0,2); Light then has no move and passes; Dark takes (4,2)
        let board = Board::from_ascii(
            "
            XO...
            .....
            .....
            .....
            XO...
            ",
        )
        .unwrap();
        let mut state = GameState::with_board(GameMode::PvP { show_suggestions: false }, board);

        state.try_place_disc(Move::new(0, 2)).unwrap();
        assert_eq!(state.current_turn, Color::Dark);
        assert_eq!(state.move_history.last().map(|t| t.mv), Some(None));

        state.try_place_disc(Move::new(4, 2)).unwrap();
        let result = state.game_over.unwrap();
        assert_eq!(result.outcome, Outcome::Win(Color::Dark));
        assert_eq!((result.dark, result.light), (6, 0));
    }

    #[test]
    fn test_undo() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: true });
        state.try_place_disc(Move::new(2, 3)).unwrap();
        state.try_place_disc(Move::new(2, 2)).unwrap();

        state.undo();
        assert_eq!(state.current_turn, Color::Light);
        assert_eq!(state.move_history.len(), 1);

        state.undo();
        assert_eq!(state.board, Board::standard());
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: true });
        state.request_suggestion();
        let hint = state.suggested_move.unwrap();
        assert!(state.legal_moves().contains(&hint));
    }

    #[test]
    fn test_ai_move_round_trip() {
        let mut state = GameState::with_board(
            GameMode::PvE {
                human_color: Color::Light,
            },
            Board::new(4).unwrap(),
        );
        state.config.limit = 2;
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.board.disc_count(), 5);
        assert!(state.engine.is_some());
    }

    #[test]
    fn test_minimax_limit_for_size() {
        assert_eq!(minimax_limit_for(4), None);
        assert_eq!(minimax_limit_for(6), Some(MINIMAX_LIMIT));
        assert_eq!(minimax_limit_for(8), Some(MINIMAX_LIMIT));
    }

    #[test]
    fn test_ai_minimax_finishes_on_full_board() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: Color::Light,
        });
        state.config.strategy = Strategy::Minimax;
        state.start_ai_thinking();
        assert_eq!(state.config.minimax_limit, Some(MINIMAX_LIMIT));

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.board.disc_count(), 5);
    }

    #[test]
    fn test_resize() {
        let mut state = GameState::new(GameMode::default());
        state.resize(6).unwrap();
        assert_eq!(state.board.size(), 6);
        assert!(state.resize(5).is_err());
    }
}
