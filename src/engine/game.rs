//! Setup and the self-playing turn loop.
//!
//! A [`DominoGame`] runs one session to completion, synchronously, with no
//! suspension points: `setup` deals the hands and plays the starting move,
//! `run` iterates turns until an empty-hand win or a blocked game. Every
//! atomic state change is pushed to the [`ProgressSink`] before control
//! moves on.
//!
//! The loop is an explicit `while`, not recursion: a full game can take
//! dozens of turns and must not grow the call stack with them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::chain::Chain;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::stack::TileStack;
use crate::core::tile::{standard_set, TileId, STANDARD_SET_SIZE};
use crate::error::{EngineError, SinkError};
use crate::progress::encode::{encode_tiles, Orientation};
use crate::progress::{ProgressSink, ResultRecord, ResultStatus, SessionId, Snapshot};

/// Minimum supported player count.
pub const MIN_PLAYERS: usize = 2;

/// Maximum supported player count.
pub const MAX_PLAYERS: usize = 4;

/// Tiles dealt to each player.
pub const HAND_SIZE: usize = 7;

/// Engine configuration: who plays and which session the records tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players, 2..=4.
    pub player_count: usize,
    /// Opaque session token for snapshot and result tagging.
    pub session: SessionId,
}

impl GameConfig {
    /// Create a configuration. Validation happens in
    /// [`DominoGame::setup`], before any state is created.
    #[must_use]
    pub fn new(player_count: usize, session: SessionId) -> Self {
        Self {
            player_count,
            session,
        }
    }
}

/// Terminal outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player played their last tile; sole winner.
    EmptyHand(PlayerId),
    /// Boneyard exhausted and every player passed; all players holding the
    /// minimum hand pip sum win, so ties yield multiple winners.
    Blocked(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::EmptyHand(p) => *p == player,
            GameResult::Blocked(ps) => ps.contains(&player),
        }
    }

    /// The winner ids, in turn order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::EmptyHand(p) => std::slice::from_ref(p),
            GameResult::Blocked(ps) => ps,
        }
    }

    /// The persisted status tag for this outcome.
    #[must_use]
    pub fn status(&self) -> ResultStatus {
        match self {
            GameResult::EmptyHand(_) => ResultStatus::EmptyHandWin,
            GameResult::Blocked(_) => ResultStatus::BlockedWin,
        }
    }
}

/// One self-playing game session.
#[derive(Debug)]
pub struct DominoGame<S: ProgressSink> {
    session: SessionId,
    players: Vec<Player>,
    chain: Chain,
    boneyard: TileStack,
    active: PlayerId,
    step: u64,
    ended: bool,
    rng: GameRng,
    sink: S,
}

impl<S: ProgressSink> DominoGame<S> {
    /// Validate the configuration, deal the hands, and play the starting
    /// move.
    ///
    /// Emits one snapshot per fully dealt player and one for the opening
    /// move. The starter is the highest double seen while dealing, with
    /// first-dealt winning among equal values (impossible in the standard
    /// set, where each double exists once); when no double was dealt, a
    /// uniformly random tile of a uniformly random player opens instead.
    pub fn setup(config: GameConfig, seed: u64, sink: S) -> Result<Self, EngineError> {
        let player_count = config.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount(player_count));
        }

        let mut rng = GameRng::new(seed);
        let mut boneyard = TileStack::from_tiles(standard_set());
        boneyard.shuffle(&mut rng);

        let mut game = Self {
            session: config.session,
            players: (0..player_count).map(|_| Player::new()).collect(),
            chain: Chain::new(),
            boneyard,
            active: PlayerId::new(0),
            step: 1,
            ended: false,
            rng,
            sink,
        };

        info!(
            session = %game.session,
            player_count,
            seed,
            "setting up game"
        );

        // Deal 7 tiles per player, one player fully dealt before the next,
        // tracking the highest double seen as the starting candidate.
        let mut starter: Option<(usize, TileId, u8)> = None;
        for idx in 0..player_count {
            for _ in 0..HAND_SIZE {
                let tile = game
                    .boneyard
                    .draw_front()
                    .expect("the standard set covers a full deal for 2-4 players");
                if tile.is_double() && starter.map_or(true, |(_, _, pip)| pip < tile.left()) {
                    starter = Some((idx, tile.id(), tile.left()));
                }
                game.players[idx].add_to_hand(tile);
            }
            game.emit_snapshot(PlayerId::new(idx as u8))?;
        }

        let (starter_idx, starter_tile) = match starter {
            Some((idx, tile_id, _)) => (idx, game.players[idx].remove_from_hand(tile_id)),
            None => {
                let idx = game.rng.gen_range_usize(0..player_count);
                let tile = game.players[idx].random_starter(&mut game.rng);
                (idx, tile)
            }
        };

        game.active = PlayerId::new(starter_idx as u8);
        info!(
            session = %game.session,
            starter = %game.active,
            tile = %starter_tile,
            "opening move"
        );
        game.chain.open(starter_tile);
        game.emit_snapshot(game.active)?;

        Ok(game)
    }

    /// Play turns until the game reaches a terminal state.
    ///
    /// # Panics
    ///
    /// Panics when called again after the game has ended.
    pub fn run(&mut self) -> Result<GameResult, EngineError> {
        assert!(!self.ended, "run() called on a finished game");

        loop {
            // Blocked terminal: nothing left to draw and nobody can move.
            if self.boneyard.is_empty() && self.players.iter().all(Player::is_inactive) {
                self.ended = true;
                let result = GameResult::Blocked(lowest_pip_winners(&self.players));
                self.emit_result(&result)?;
                return Ok(result);
            }

            self.active = self.next_player();
            let idx = self.active.index();
            let (left, right) = (self.chain.left_open(), self.chain.right_open());

            // Draw until a legal move appears or the boneyard runs dry. The
            // legal set is recomputed fresh after every draw.
            let mut legal = self.players[idx].legal_moves(left, right);
            while legal.is_empty() && !self.boneyard.is_empty() {
                let tile = self
                    .boneyard
                    .draw_front()
                    .expect("boneyard checked non-empty");
                debug!(session = %self.session, player = %self.active, tile = %tile, "drew from boneyard");
                self.players[idx].add_to_hand(tile);
                self.emit_snapshot(self.active)?;
                legal = self.players[idx].legal_moves(left, right);
            }

            if legal.is_empty() {
                self.players[idx].set_inactive(true);
                debug!(session = %self.session, player = %self.active, "passed");
                self.emit_snapshot(self.active)?;
                continue;
            }

            let tile = self.players[idx].play_random(&legal, &mut self.rng);
            debug!(session = %self.session, player = %self.active, tile = %tile, "played");
            self.chain.attach(tile);
            self.players[idx].set_inactive(false);
            self.emit_snapshot(self.active)?;

            if self.players[idx].has_empty_hand() {
                self.players[idx].set_winner();
                self.ended = true;
                let result = GameResult::EmptyHand(self.active);
                self.emit_result(&result)?;
                return Ok(result);
            }
        }
    }

    /// The session this game is tagged with.
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The chain of played tiles.
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The remaining draw pile.
    #[must_use]
    pub fn boneyard(&self) -> &TileStack {
        &self.boneyard
    }

    /// The player who acted most recently.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// True once a terminal state was reached.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Consume the game and hand back its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn next_player(&self) -> PlayerId {
        PlayerId::new((self.active.0 + 1) % self.players.len() as u8)
    }

    fn emit_snapshot(&mut self, player: PlayerId) -> Result<(), SinkError> {
        debug_assert!(
            self.tiles_conserved(),
            "tile conservation violated at step {}",
            self.step
        );
        let snapshot = Snapshot {
            session: self.session.clone(),
            player,
            step: self.step,
            hand: encode_tiles(self.players[player.index()].hand().iter(), Orientation::Horizontal),
            chain: encode_tiles(self.chain.tiles(), Orientation::Horizontal),
            boneyard: encode_tiles(self.boneyard.iter(), Orientation::Horizontal),
        };
        self.step += 1;
        self.sink.record_snapshot(snapshot)
    }

    fn emit_result(&mut self, result: &GameResult) -> Result<(), SinkError> {
        info!(
            session = %self.session,
            status = ?result.status(),
            winners = ?result.winners(),
            "game ended"
        );
        self.sink.record_result(ResultRecord {
            session: self.session.clone(),
            status: result.status(),
            winners: result.winners().to_vec(),
        })
    }

    /// Boneyard, hands, and chain together always hold exactly the
    /// standard 28-tile set.
    fn tiles_conserved(&self) -> bool {
        let mut seen = 0u32;
        let mut count = 0usize;
        let all = self
            .boneyard
            .iter()
            .chain(self.players.iter().flat_map(|p| p.hand().iter()))
            .chain(self.chain.tiles());
        for tile in all {
            let bit = 1u32 << tile.id().index();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
            count += 1;
        }
        count == STANDARD_SET_SIZE && seen == (1u32 << STANDARD_SET_SIZE) - 1
    }
}

/// Winners of a blocked game: every player whose hand pip sum equals the
/// minimum over all hands. Empty hands never take part; an empty hand would
/// already have ended the game as a win.
fn lowest_pip_winners(players: &[Player]) -> Vec<PlayerId> {
    let min = players
        .iter()
        .filter_map(Player::hand_pip_sum)
        .min()
        .expect("a blocked game has at least one non-empty hand");

    players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.hand_pip_sum() == Some(min))
        .map(|(idx, _)| PlayerId::new(idx as u8))
        .collect()
}
