use log::{debug, info, warn};
use web_time::Instant;

use crate::ai::MinCostSelector;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::effects::{Effect, Presenter};
use crate::layout::StartingPosition;
use crate::types::{
    BOARD_CELLS, Candidate, Cell, GameMode, GameResult, GameState, Player, Position, Scores,
};

const STEPS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const JUMPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

pub trait MoveSelector: Send + Sync {
    /// Picks one of `candidates` for the side to move, or `None` if empty.
    fn select_move(&self, candidates: &[Candidate], scores: Scores) -> Option<usize>;
}

/// An automated move waiting for its think delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMove {
    pub generation: u64,
    pub due_at: Instant,
    pub candidate: Candidate,
}

/// Everything that belongs to one match. Replaced as a whole on restart.
#[derive(Debug, Clone)]
struct Match {
    board: Board,
    current_player: Player,
    mode: GameMode,
    selected: Option<Position>,
    candidates: Vec<Candidate>,
    /// The previous mover had no legal move and forfeited.
    stuck: bool,
    finished: bool,
    total_placed: u8,
    black_count: u8,
    white_count: u8,
    generation: u64,
    pending: Option<ScheduledMove>,
}

impl Match {
    fn new(layout: &StartingPosition, mode: GameMode, generation: u64) -> Self {
        Self {
            board: Board::with_layout(layout),
            current_player: Player::Black,
            mode,
            selected: None,
            candidates: Vec::new(),
            stuck: false,
            finished: false,
            total_placed: layout.chip_count() as u8,
            black_count: layout.black.len() as u8,
            white_count: layout.white.len() as u8,
            generation,
            pending: None,
        }
    }

    fn count_mut(&mut self, player: Player) -> &mut u8 {
        match player {
            Player::Black => &mut self.black_count,
            Player::White => &mut self.white_count,
        }
    }
}

/// Giveaway rules engine.
///
/// The presentation layer calls in with board events and receives effects
/// through a `Presenter`; nothing here touches rendering.
pub struct Giveaway {
    state: Match,
    config: EngineConfig,
    layout: StartingPosition,
    selector: Box<dyn MoveSelector>,
    generations: u64,
}

impl Giveaway {
    pub fn new(
        config: EngineConfig,
        layout: StartingPosition,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        Self {
            state: Match::new(&layout, GameMode::default(), 0),
            config,
            layout,
            selector,
            generations: 0,
        }
    }

    pub fn new_with_default_selector(config: EngineConfig) -> Self {
        Self::new(
            config,
            StartingPosition::standard().clone(),
            Box::new(MinCostSelector),
        )
    }

    /// Starts a fresh match in `mode`, discarding the previous one along
    /// with any scheduled automated move.
    pub fn start(&mut self, mode: GameMode, presenter: &mut dyn Presenter) {
        self.generations += 1;
        self.state = Match::new(&self.layout, mode, self.generations);
        info!(
            "starting giveaway match #{} in {:?} mode",
            self.generations, mode
        );

        presenter.emit(Effect::Reset);
        for (at, cell) in self.state.board.cells() {
            presenter.emit(Effect::Put { at, cell });
        }
        presenter.emit(Effect::Counter {
            player: Player::Black,
            delta: self.state.black_count as i8,
        });
        presenter.emit(Effect::Counter {
            player: Player::White,
            delta: self.state.white_count as i8,
        });
        presenter.emit(Effect::CurrentPlayer {
            player: self.state.current_player,
        });

        self.try_computer_step(presenter);
    }

    /// Board click. A click on one of the mover's chips selects it, anything
    /// else is a move attempt. Returns whether the click changed anything.
    pub fn click(&mut self, at: Position, presenter: &mut dyn Presenter) -> bool {
        if self.state.board.get(at).owner() == Some(self.state.current_player) {
            self.select(at, presenter)
        } else {
            self.commit_move(at, presenter)
        }
    }

    /// Selects the mover's chip at `at` and shows its candidates. A chip
    /// with nowhere to go forfeits the turn.
    pub fn select(&mut self, at: Position, presenter: &mut dyn Presenter) -> bool {
        if !self.accepts_human_input() {
            return false;
        }
        if self.state.board.get(at).owner() != Some(self.state.current_player) {
            return false;
        }

        self.clear_candidates(presenter);
        let candidates = self.candidates_from(at, self.state.current_player);
        debug!(
            "{:?} selected {:?}: {} candidate(s)",
            self.state.current_player,
            at,
            candidates.len()
        );

        self.state.selected = Some(at);
        presenter.emit(Effect::Highlight {
            at,
            player: self.state.current_player,
        });
        if candidates.is_empty() {
            self.forfeit_turn(presenter);
        } else {
            self.show_candidates(candidates, presenter);
        }
        true
    }

    /// Moves the selected chip to `at` if `at` is one of its candidates.
    /// Anything else is ignored.
    pub fn commit_move(&mut self, at: Position, presenter: &mut dyn Presenter) -> bool {
        if !self.accepts_human_input() {
            return false;
        }
        match self.state.candidates.iter().position(|c| c.to == at) {
            Some(idx) => {
                self.apply_candidate(idx, presenter);
                true
            }
            None => false,
        }
    }

    /// Commits the scheduled automated move once `now` reaches its due time.
    /// On an automated turn with nothing scheduled (after `cancel_scheduled`)
    /// a fresh move is scheduled instead.
    pub fn poll(&mut self, now: Instant, presenter: &mut dyn Presenter) -> bool {
        let Some(ticket) = self.state.pending.clone() else {
            self.try_computer_step(presenter);
            return false;
        };
        if now < ticket.due_at {
            return false;
        }
        self.fire(&ticket, presenter)
    }

    /// Commits `ticket` regardless of its due time. Tickets from an earlier
    /// match, or ones already fired or cancelled, do nothing.
    pub fn fire(&mut self, ticket: &ScheduledMove, presenter: &mut dyn Presenter) -> bool {
        if ticket.generation != self.state.generation {
            warn!(
                "dropping automated move from match #{} (current #{})",
                ticket.generation, self.state.generation
            );
            return false;
        }
        if self.state.pending.as_ref() != Some(ticket) {
            return false;
        }
        self.state.pending = None;

        if self.state.finished || !self.is_computer_turn() {
            return false;
        }
        match self
            .state
            .candidates
            .iter()
            .position(|c| *c == ticket.candidate)
        {
            Some(idx) => {
                self.apply_candidate(idx, presenter);
                true
            }
            None => false,
        }
    }

    /// Drops the scheduled move. The next `poll` schedules a new one.
    pub fn cancel_scheduled(&mut self) -> Option<ScheduledMove> {
        self.state.pending.take()
    }

    pub fn pending_move(&self) -> Option<&ScheduledMove> {
        self.state.pending.as_ref()
    }

    /// Every legal move of `player`, chip by chip in row-major order.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Candidate> {
        self.state
            .board
            .chips_of(player)
            .flat_map(|from| self.candidates_from(from, player))
            .collect()
    }

    /// Moves available to the chip at `from`: one diagonal step onto an
    /// empty cell, or a two-step jump onto an empty cell over an opponent.
    pub fn candidates_from(&self, from: Position, player: Player) -> Vec<Candidate> {
        let board = &self.state.board;
        let opponent = player.opponent().chip();
        let mut out = Vec::new();

        for (dr, dc) in STEPS {
            if let Some(to) = from.offset(dr, dc)
                && board.get(to).is_empty()
            {
                out.push(Candidate::simple(from, to));
            }
        }

        for (dr, dc) in JUMPS {
            if let Some(to) = from.offset(dr, dc)
                && board.get(to).is_empty()
                && let Some(over) = from.offset(dr / 2, dc / 2)
                && board.get(over) == opponent
            {
                out.push(Candidate::capture(from, over, to));
            }
        }

        out
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn is_game_over(&self) -> bool {
        self.state.finished
    }

    pub fn is_stuck(&self) -> bool {
        self.state.stuck
    }

    pub fn selected(&self) -> Option<Position> {
        self.state.selected
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.state.candidates
    }

    pub fn total_placed(&self) -> u8 {
        self.state.total_placed
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.mode == GameMode::HumanVsComputer
            && self.state.current_player == self.config.computer_side
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.state.board.to_array().to_vec(),
            current_player: self.state.current_player.code(),
            black_count: self.state.black_count,
            white_count: self.state.white_count,
            total_placed: self.state.total_placed,
            empty_count: self.state.board.empty_count(),
            is_game_over: self.state.finished,
            is_stuck: self.state.stuck,
            mode: self.state.mode,
            selected: self.state.selected,
            available: self.state.candidates.iter().map(|c| c.to).collect(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = (self.state.black_count, self.state.white_count);
        GameResult {
            winner: if black_count < white_count {
                Player::Black.code()
            } else if white_count < black_count {
                Player::White.code()
            } else {
                0
            },
            black_count,
            white_count,
        }
    }

    fn accepts_human_input(&self) -> bool {
        !self.state.finished && !self.is_computer_turn()
    }

    fn apply_candidate(&mut self, idx: usize, presenter: &mut dyn Presenter) {
        let candidate = self.state.candidates.remove(idx);
        let mover = self.state.current_player;
        let opponent = mover.opponent();

        self.state.total_placed = self.state.total_placed.saturating_add(1);
        if self.state.total_placed as usize >= BOARD_CELLS {
            self.state.finished = true;
        }

        self.state.board.relocate(candidate.from, candidate.to);
        presenter.emit(Effect::Put {
            at: candidate.to,
            cell: mover.chip(),
        });
        presenter.emit(Effect::Remove { at: candidate.from });

        for &flip in &candidate.flips {
            self.state.board.set(flip, Cell::Empty);
            let count = self.state.count_mut(opponent);
            *count = count.saturating_sub(1);
            presenter.emit(Effect::Recolor {
                at: flip,
                cell: opponent.chip(),
                delta: -1,
            });
            presenter.emit(Effect::Counter {
                player: opponent,
                delta: -1,
            });
        }
        debug!(
            "{:?} moved {:?} -> {:?}, removed {:?}",
            mover, candidate.from, candidate.to, candidate.flips
        );

        self.state.selected = None;
        if self.state.finished {
            self.finish(presenter);
        } else {
            self.prepare_for_next_step(presenter);
        }
    }

    fn prepare_for_next_step(&mut self, presenter: &mut dyn Presenter) {
        self.state.current_player = self.state.current_player.opponent();
        presenter.emit(Effect::CurrentPlayer {
            player: self.state.current_player,
        });
        self.clear_candidates(presenter);
        self.state.selected = None;
        self.try_computer_step(presenter);
    }

    /// Passes the turn of a mover without moves; a second pass in a row
    /// ends the game.
    fn forfeit_turn(&mut self, presenter: &mut dyn Presenter) {
        let player = self.state.current_player;
        if self.state.stuck {
            info!("{player:?} cannot move after a pass; game over");
            self.finish(presenter);
        } else {
            info!("{player:?} has no legal move and passes");
            self.state.stuck = true;
            self.prepare_for_next_step(presenter);
        }
    }

    fn try_computer_step(&mut self, presenter: &mut dyn Presenter) {
        if self.state.finished || !self.is_computer_turn() || self.state.pending.is_some() {
            return;
        }

        let candidates = self.legal_moves_for(self.state.current_player);
        if candidates.is_empty() {
            self.forfeit_turn(presenter);
            return;
        }
        let scores = presenter.scores();
        let Some(idx) = self.selector.select_move(&candidates, scores) else {
            return;
        };
        let Some(candidate) = candidates.get(idx).cloned() else {
            warn!("move selector returned out-of-range index {idx}");
            return;
        };
        self.show_candidates(candidates, presenter);

        let due_at = Instant::now() + self.config.think_delay();
        debug!(
            "scheduled {:?} -> {:?} for match #{}",
            candidate.from, candidate.to, self.state.generation
        );
        self.state.pending = Some(ScheduledMove {
            generation: self.state.generation,
            due_at,
            candidate,
        });
    }

    fn show_candidates(&mut self, candidates: Vec<Candidate>, presenter: &mut dyn Presenter) {
        if !candidates.is_empty() {
            self.state.stuck = false;
        }
        for candidate in &candidates {
            presenter.emit(Effect::Put {
                at: candidate.to,
                cell: Cell::AvailableMove,
            });
        }
        self.state.candidates = candidates;
    }

    fn clear_candidates(&mut self, presenter: &mut dyn Presenter) {
        for candidate in self.state.candidates.drain(..) {
            presenter.emit(Effect::Remove { at: candidate.to });
        }
    }

    fn finish(&mut self, presenter: &mut dyn Presenter) {
        self.state.finished = true;
        self.state.pending = None;
        self.clear_candidates(presenter);
        let result = self.to_game_result();
        info!(
            "game over: black {} white {} winner {}",
            result.black_count, result.white_count, result.winner
        );
        presenter.emit(Effect::GameFinished);
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player, total_placed: u8) {
        let (black_count, white_count) = board.count();
        self.state.board = board;
        self.state.current_player = current_player;
        self.state.total_placed = total_placed;
        self.state.black_count = black_count;
        self.state.white_count = white_count;
        self.state.selected = None;
        self.state.candidates.clear();
        self.state.stuck = false;
        self.state.finished = false;
        self.state.pending = None;
    }
}
