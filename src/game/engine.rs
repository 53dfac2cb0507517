//! The live game: roster, board, tile bag, and the turn state machine.
//!
//! ## Lifecycle
//!
//! 1. `Game::new(seed)` creates an unconfigured game.
//! 2. `init_players_from_ui` reads a `GameSetup`, seats the players and puts
//!    the trains on their stations.
//! 3. The presentation layer drives turns with `change_state`. Human players
//!    pick tiles and squares with `select_held_tile` / `select_target`;
//!    computer players are driven through `apply_computer_move`.
//! 4. After every placement, finished tracks are scored. The game ends when
//!    the bag is empty and nobody holds a tile.
//!
//! ## Determinism
//!
//! All tile draws come from the game's `GameRng`, so a seed and a sequence
//! of requests fully determine a match.

use im::Vector;
use tracing::{debug, info, warn};

use super::state::TurnState;
use crate::board::{self, Board, StationId, TrackStatus, BOARD_HEIGHT, BOARD_WIDTH, NUM_STATIONS};
use crate::core::{
    BoardError, ControlKind, GameError, GameOptions, GameRng, GameSetup, HeldSlot, MoveKind,
    MovePacket, MoveRecord, Player, PlayerId, PlayerMap, ScoreError, MAX_PLAYERS,
};
use crate::rules::{self, GameResult, Standing, TrackScore};
use crate::tiles::{TileId, TilePool};

/// A TrackInsanity match.
///
/// ## Example
///
/// ```
/// use track_insanity::core::GameSetup;
/// use track_insanity::game::{Game, TurnState};
///
/// let mut game = Game::new(42);
/// game.init_players_from_ui(&GameSetup::new(2)).unwrap();
/// game.change_state(TurnState::NextPlayerTurn).unwrap();
///
/// // One human at the table: the turn starts straight away.
/// assert_eq!(game.state(), TurnState::SelectAction);
///
/// game.change_state(TurnState::TileDraw).unwrap();
/// assert_eq!(game.current().tile_count(), 1);
/// assert_eq!(game.pool().num_unplayed_tiles(), 59);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    pool: TilePool,
    /// Always six seats; seats past `player_count` are `Nobody`.
    players: PlayerMap<Player>,
    player_count: usize,
    stations_per_player: usize,
    cur_player: PlayerId,
    state: TurnState,
    previous_state: TurnState,
    options: GameOptions,
    player_has_drawn: bool,
    selected_slot: HeldSlot,
    selected_tile: Option<TileId>,
    selected_target: Option<(usize, usize)>,
    rng: GameRng,
    history: Vector<MoveRecord>,
    turn_number: u32,
}

impl Game {
    /// Create an unconfigured game whose draws are fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            pool: TilePool::standard(),
            players: PlayerMap::with_default(MAX_PLAYERS),
            player_count: 0,
            stations_per_player: 0,
            cur_player: PlayerId::new(0),
            state: TurnState::Default,
            previous_state: TurnState::Default,
            options: GameOptions::default(),
            player_has_drawn: false,
            selected_slot: HeldSlot::Primary,
            selected_tile: None,
            selected_target: None,
            rng: GameRng::new(seed),
            history: Vector::new(),
            turn_number: 0,
        }
    }

    /// Clear the board, bag and roster for a new match.
    ///
    /// Options are kept. The RNG is forked, so the next match draws a
    /// different but reproducible sequence.
    pub fn reset(&mut self) {
        let rng = self.rng.fork();
        let options = std::mem::take(&mut self.options);
        *self = Self {
            rng,
            options,
            ..Self::new(0)
        };
    }

    /// Seat the players, place their trains and take over the options.
    pub fn init_players_from_ui(&mut self, setup: &GameSetup) -> Result<(), GameError> {
        setup.validate()?;
        if self.player_count != 0 {
            self.reset();
        }

        let count = setup.player_count;
        self.players = PlayerMap::new(MAX_PLAYERS, |id| match setup.players.get(id.index()) {
            Some(seat) if id.index() < count => Player {
                avatar_id: seat.avatar_id,
                ..Player::new(seat.control, setup.ai_skill)
            },
            _ => Player::new(ControlKind::Nobody, setup.ai_skill),
        });
        self.board.populate_stations(count)?;

        self.player_count = count;
        self.stations_per_player = NUM_STATIONS / count;
        self.cur_player = PlayerId::new(0);
        self.turn_number = 1;
        self.options = setup.options.clone();

        info!(players = count, skill = ?setup.ai_skill, seed = self.rng.seed(), "game configured");
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// A seated player. `None` for seats outside the game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        (id.index() < self.player_count).then(|| &self.players[id])
    }

    /// All six seats, including empty ones.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Seated players in turn order.
    pub fn active_players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().take(self.player_count)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.cur_player
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.cur_player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn stations_per_player(&self) -> usize {
        self.stations_per_player
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn previous_state(&self) -> TurnState {
        self.previous_state
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Has the current player drawn (or been barred from drawing) this turn?
    #[must_use]
    pub fn player_has_drawn(&self) -> bool {
        self.player_has_drawn
    }

    #[must_use]
    pub fn selected_slot(&self) -> HeldSlot {
        self.selected_slot
    }

    #[must_use]
    pub fn selected_tile(&self) -> Option<TileId> {
        self.selected_tile
    }

    #[must_use]
    pub fn selected_target(&self) -> Option<(usize, usize)> {
        self.selected_target
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current turn, starting at 1 once the game is configured.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Independent copy for look-ahead.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.player_count == 0 {
            return Err(GameError::NotStarted);
        }
        Ok(())
    }

    fn record(&mut self, packet: MovePacket) {
        self.history.push_back(MoveRecord {
            player: self.cur_player,
            packet,
            turn: self.turn_number,
        });
    }

    // === State Machine ===

    /// Move to `state` and run its action.
    ///
    /// States that continue by themselves (see `TurnState`) are followed
    /// until one waits for input. If an action fails, the state is left as
    /// it was before the call.
    pub fn change_state(&mut self, state: TurnState) -> Result<(), GameError> {
        if state == TurnState::Default {
            return Ok(());
        }
        self.ensure_started()?;

        let mut next = Some(state);
        while let Some(state) = next {
            let saved = (self.state, self.previous_state);
            self.previous_state = self.state;
            self.state = state;
            debug!(?state, player = %self.cur_player, "changing state");

            next = match self.enter_state(state) {
                Ok(next) => next,
                Err(err) => {
                    (self.state, self.previous_state) = saved;
                    warn!(?state, %err, "state change rejected");
                    return Err(err);
                }
            };
        }
        Ok(())
    }

    fn enter_state(&mut self, state: TurnState) -> Result<Option<TurnState>, GameError> {
        let current = &self.players[self.cur_player];
        let is_computer = current.is_computer();
        let has_reserve = current.reserve.is_some();
        let hand_full = current.tile_count() == 2;

        let next = match state {
            TurnState::NextPlayerTurn => {
                let humans = self.active_players().filter(|(_, p)| p.is_human()).count();
                (humans == 1 || is_computer).then_some(TurnState::SelectAction)
            }
            TurnState::SelectAction => {
                if is_computer {
                    Some(TurnState::ComputerMove)
                } else {
                    if hand_full {
                        self.player_has_drawn = true;
                    }
                    self.selected_slot = if has_reserve { HeldSlot::Reserve } else { HeldSlot::Primary };
                    None
                }
            }
            TurnState::TileDraw => {
                self.draw_tile()?;
                Some(TurnState::SelectAction)
            }
            TurnState::TileSelect => {
                let slot = if has_reserve { HeldSlot::Reserve } else { HeldSlot::Primary };
                self.select_held_tile(slot)?;
                None
            }
            TurnState::TilePlay => {
                self.play_selected_tile()?;
                Some(TurnState::EndTurn)
            }
            TurnState::Pass => Some(TurnState::EndTurn),
            TurnState::Discard => {
                self.discard_tile()?;
                Some(TurnState::EndTurn)
            }
            TurnState::EndTurn => {
                self.end_turn();
                if self.check_for_end_of_game() {
                    Some(TurnState::GameFinished)
                } else {
                    Some(TurnState::NextPlayerTurn)
                }
            }
            TurnState::Default
            | TurnState::GameFinished
            | TurnState::ConfirmExit
            | TurnState::ShowBoard
            | TurnState::ComputerMove
            | TurnState::Pause => None,
        };
        Ok(next)
    }

    fn end_turn(&mut self) {
        self.record(MovePacket::end_turn());
        self.player_has_drawn = false;
        self.selected_slot = HeldSlot::Primary;
        self.selected_tile = None;
        self.selected_target = None;
        self.cur_player = PlayerId::new(((self.cur_player.index() + 1) % self.player_count) as u8);
        self.turn_number += 1;
    }

    /// Is the bag empty with no tile left in any hand?
    #[must_use]
    pub fn check_for_end_of_game(&self) -> bool {
        self.pool.num_unplayed_tiles() == 0 && self.active_players().all(|(_, p)| p.tile_count() == 0)
    }

    // === Player Actions ===

    /// Draw a random tile into the current player's first free slot.
    pub fn draw_tile(&mut self) -> Result<TileId, GameError> {
        self.ensure_started()?;
        let player = self.cur_player;
        if self.players[player].tile_count() >= 2 {
            return Err(GameError::HandFull(player));
        }

        let tile = self.pool.draw_random_tile(&mut self.rng)?;
        let slot = self.players[player]
            .receive_tile(tile)
            .ok_or(GameError::HandFull(player))?;

        self.selected_slot = slot;
        self.selected_tile = Some(tile);
        self.player_has_drawn = true;
        self.record(MovePacket::draw());
        debug!(%player, %tile, ?slot, "drew tile");
        Ok(tile)
    }

    /// Hand a specific tile from the bag to a player.
    ///
    /// Meant for scenario setup; not recorded in the history.
    pub fn deal_tile(&mut self, player: PlayerId, tile: TileId) -> Result<HeldSlot, GameError> {
        self.ensure_started()?;
        if player.index() >= self.player_count {
            return Err(GameError::InvalidPlayer(player));
        }
        if self.players[player].tile_count() >= 2 {
            return Err(GameError::HandFull(player));
        }
        self.pool.draw_tile(tile)?;
        self.players[player]
            .receive_tile(tile)
            .ok_or(GameError::HandFull(player))
    }

    /// Choose which held tile to play and mark its legal squares.
    ///
    /// Returns the number of legal squares.
    pub fn select_held_tile(&mut self, slot: HeldSlot) -> Result<usize, GameError> {
        self.ensure_started()?;
        let player = self.cur_player;
        let tile = self.players[player]
            .held(slot)
            .ok_or(GameError::NoTileHeld(player))?;

        let instance = self.pool.get_tile(tile)?;
        let legal = self
            .board
            .mark_legal_moves(instance, self.pool.num_unplayed_tiles());

        self.selected_slot = slot;
        self.selected_tile = Some(tile);
        self.selected_target = None;
        Ok(legal)
    }

    /// Choose the square to play on. Must be legal for the selected tile.
    pub fn select_target(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return Err(BoardError::OutOfBounds { x, y }.into());
        }
        if !self.board.is_legal_move(x, y) {
            return Err(BoardError::IllegalMove { x, y }.into());
        }
        self.selected_target = Some((x, y));
        Ok(())
    }

    fn play_selected_tile(&mut self) -> Result<(), GameError> {
        let player = self.cur_player;
        let (x, y) = self.selected_target.ok_or(GameError::NoTargetSelected)?;
        let slot = self.selected_slot;
        let tile = self.players[player]
            .held(slot)
            .ok_or(GameError::NoTileHeld(player))?;

        let instance = self.pool.get_tile(tile)?;
        self.board
            .mark_legal_moves(instance, self.pool.num_unplayed_tiles());
        if let Err(err) = self.board.place_tile(x, y, tile) {
            warn!(%player, %tile, x, y, %err, "placement rejected");
            return Err(err.into());
        }

        let held = &mut self.players[player];
        held.take_tile(slot);
        held.last_move = Some((x, y));
        self.selected_tile = None;
        self.selected_target = None;
        self.record(MovePacket::play(slot, x, y));
        debug!(%player, %tile, x, y, "placed tile");

        self.check_for_completed_tracks()?;
        Ok(())
    }

    /// Return the selected held tile to the bag.
    ///
    /// Discarding the primary tile promotes the reserve.
    pub fn discard_tile(&mut self) -> Result<TileId, GameError> {
        self.ensure_started()?;
        let player = self.cur_player;
        let slot = self.selected_slot;
        let tile = self.players[player]
            .held(slot)
            .ok_or(GameError::NoTileHeld(player))?;

        if let Err(err) = self.pool.return_tile_to_pool(tile) {
            warn!(%player, %tile, %err, "discard rejected");
            return Err(err.into());
        }
        self.players[player].take_tile(slot);
        self.selected_tile = None;
        self.record(MovePacket::discard(slot));
        debug!(%player, %tile, ?slot, "discarded tile");
        Ok(tile)
    }

    /// Carry out a move chosen by the computer player.
    ///
    /// `EndTurn` does nothing here; the caller follows it with
    /// `change_state(TurnState::EndTurn)`.
    pub fn apply_computer_move(&mut self, packet: &MovePacket) -> Result<(), GameError> {
        self.ensure_started()?;
        match packet.kind {
            MoveKind::Draw => {
                self.draw_tile()?;
            }
            MoveKind::Play => {
                let (slot, (x, y)) = packet
                    .slot
                    .zip(packet.target)
                    .ok_or(GameError::IncompleteMove(packet.kind))?;
                self.select_held_tile(slot)?;
                self.selected_target = Some((x, y));
                self.play_selected_tile()?;
            }
            MoveKind::Discard => {
                let slot = packet.slot.ok_or(GameError::IncompleteMove(packet.kind))?;
                self.selected_slot = slot;
                self.discard_tile()?;
            }
            MoveKind::EndTurn => {}
        }
        debug!(player = %self.cur_player, ?packet, "applied computer move");
        Ok(())
    }

    // === Scoring ===

    /// Trace the track of one station on the live board.
    pub fn calculate_track_score(
        &self,
        station: StationId,
        pass_through: Option<TileId>,
    ) -> Result<TrackScore, ScoreError> {
        rules::calculate_track_score(&self.board, &self.pool, station, pass_through)
    }

    /// Score every track that has just reached a station.
    ///
    /// Returns the stations whose tracks were scored by this call.
    pub fn check_for_completed_tracks(&mut self) -> Result<Vec<StationId>, GameError> {
        let mut completed = Vec::new();
        for station in StationId::all() {
            let track = match self.calculate_track_score(station, None) {
                Ok(track) => track,
                Err(ScoreError::NoTrain(_) | ScoreError::Incomplete(_)) => continue,
                Err(err) => return Err(err.into()),
            };
            if self.board.track_status(station) == Some(TrackStatus::Processed) {
                continue;
            }
            self.board.set_track_status(station, TrackStatus::Complete)?;
            self.process_completed_track(station, track.score)?;
            completed.push(station);
        }
        Ok(completed)
    }

    /// Award a completed track to its owner and retire the train.
    ///
    /// Does nothing unless the station's track is marked `Complete`.
    pub fn process_completed_track(&mut self, station: StationId, score: u32) -> Result<(), GameError> {
        let status = self
            .board
            .track_status(station)
            .ok_or(BoardError::InvalidStation(station.raw()))?;
        if status != TrackStatus::Complete {
            return Ok(());
        }

        if let Some(owner) = board::station_owner(self.player_count, station)? {
            let player = &mut self.players[owner];
            player.score += score;
            player.stations_complete += 1;
            info!(%owner, %station, score, total = player.score, "track completed");
        }
        self.board.clear_train(station)?;
        self.board.set_track_status(station, TrackStatus::Processed)?;
        Ok(())
    }

    // === Results ===

    /// Seated players ranked by score, then completed stations.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .active_players()
            .map(|(player, p)| Standing {
                player,
                score: p.score,
                stations_complete: p.stations_complete,
            })
            .collect();
        rules::rank_standings(&mut standings);
        standings
    }

    /// Final result, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state != TurnState::GameFinished {
            return None;
        }
        GameResult::from_standings(&self.standings())
    }
}
