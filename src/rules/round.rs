//! The turn engine.
//!
//! `Round` owns the running point total, whose turn it is, the turn
//! direction, the played pile and any pending forced turn. It derives the
//! legal actions for the active player and applies one action at a time.
//!
//! ## Transition Order
//!
//! 1. Check legality and the effect's target (nothing changes on failure)
//! 2. Move the card from the active hand to the played pile
//! 3. Resolve the card effect
//! 4. Draw a replacement, reshuffling the played pile if the deck is empty
//! 5. Bust: above 99 clamps to 99 and eliminates the active player
//! 6. Anyone left with an empty hand is eliminated
//! 7. Pick the next player: forced turn first, else step by direction

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{Card, Deck, RankClass};
use crate::core::{Action, GameError, GameRng, Player, PlayerId, PlayerMap, Sign, MAX_POINTS};
use crate::effects::{CardEffect, EffectResolver};

/// Turn direction around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat ids.
    #[default]
    Clockwise,
    /// Decreasing seat ids.
    CounterClockwise,
}

impl Direction {
    /// `+1` or `-1`.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Shared round state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// Running point total. Never above 99 between transitions; may go negative.
    pub points: i32,

    /// The active player.
    pub turn_pointer: PlayerId,

    pub direction: Direction,

    /// Cards played since the last reshuffle.
    pub played_cards: Vector<Card>,

    /// Set by an Ace: who plays next, bypassing direction.
    pub pending_forced_turn: Option<PlayerId>,

    player_count: usize,
}

impl Round {
    /// A fresh round: 0 points, player 0 to act, clockwise.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            points: 0,
            turn_pointer: PlayerId::new(0),
            direction: Direction::Clockwise,
            played_cards: Vector::new(),
            pending_forced_turn: None,
            player_count,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Legal actions for the active player, in hand order.
    ///
    /// Choose-target cards expand to one action per other alive player,
    /// in seat order.
    #[must_use]
    pub fn legal_actions(&self, players: &PlayerMap<Player>) -> Vec<Action> {
        let active = self.turn_pointer;
        let Some(player) = players.get(active) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for &card in &player.hand {
            match card.rank.class() {
                RankClass::Single => actions.push(Action::Play(card)),
                RankClass::Dual => {
                    actions.push(Action::PlaySigned { card, sign: Sign::Plus });
                    actions.push(Action::PlaySigned { card, sign: Sign::Minus });
                }
                RankClass::ChooseTarget => {
                    let targets = players
                        .iter()
                        .filter(|(id, p)| *id != active && p.is_alive())
                        .map(|(target, _)| Action::PlayTargeted { card, target });
                    actions.extend(targets);
                }
            }
        }
        actions
    }

    /// Check `action` against the current legal set.
    #[must_use]
    pub fn is_legal(&self, players: &PlayerMap<Player>, action: &Action) -> bool {
        self.legal_actions(players).contains(action)
    }

    /// Apply one action and return the next active player.
    ///
    /// Fails with `IllegalAction` or `InvalidTarget` before anything changes.
    pub fn proceed(
        &mut self,
        players: &mut PlayerMap<Player>,
        deck: &mut Deck,
        rng: &mut GameRng,
        action: &Action,
    ) -> Result<PlayerId, GameError> {
        let active = self.turn_pointer;
        let illegal = || GameError::IllegalAction {
            action: *action,
            player: active,
        };

        if !self.is_legal(players, action) {
            return Err(illegal());
        }
        let effect = CardEffect::of(action).ok_or_else(illegal)?;
        EffectResolver::check_target(players, &effect)?;

        let card = action.card();
        players[active].discard(&card);
        self.played_cards.push_back(card);

        EffectResolver::resolve(self, players, active, &effect, rng)?;

        if effect.draws_replacement() {
            if deck.is_empty() {
                self.reshuffle(deck, rng);
            }
            match deck.draw() {
                Some(drawn) => players[active].receive(drawn),
                None => warn!(player = active.0, "No card left to draw"),
            }
        }

        if self.points > MAX_POINTS {
            self.points = MAX_POINTS;
            if players[active].eliminate() {
                info!(player = active.0, "Player busted");
            }
        }

        for (id, player) in players.iter_mut() {
            if player.hand.is_empty() && player.eliminate() {
                info!(player = id.0, "Player eliminated with an empty hand");
            }
        }

        let next = self.next_player(players);
        debug!(
            player = active.0,
            action = %action,
            points = self.points,
            next = next.0,
            "Applied action"
        );
        self.turn_pointer = next;
        Ok(next)
    }

    /// Move the played pile back into the deck and shuffle it.
    pub fn reshuffle(&mut self, deck: &mut Deck, rng: &mut GameRng) {
        info!(cards = self.played_cards.len(), "Reshuffling played cards into the deck");
        deck.extend(std::mem::take(&mut self.played_cards));
        deck.shuffle(rng);
    }

    /// Resolve who acts after the current player. Clears any forced turn.
    ///
    /// Without a forced turn, steps by direction and skips dead seats. If no
    /// seat is alive the pointer stays where it is.
    pub fn next_player(&mut self, players: &PlayerMap<Player>) -> PlayerId {
        if let Some(forced) = self.pending_forced_turn.take() {
            if players.get(forced).is_some_and(Player::is_alive) {
                return forced;
            }
            warn!(player = forced.0, "Forced turn target is not alive, following direction");
        }

        let count = self.player_count as i32;
        let mut seat = self.turn_pointer.index() as i32;
        for _ in 0..count {
            seat = (seat + self.direction.step()).rem_euclid(count);
            let candidate = PlayerId::new(seat as u8);
            if players[candidate].is_alive() {
                return candidate;
            }
        }
        self.turn_pointer
    }
}
