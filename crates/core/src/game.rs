// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round and game state machine.
use log::{debug, error, info};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use drawpoker_cards::DeckError;
use drawpoker_eval::{Card, Deck, evaluate_hand};

use crate::{
    game_state::{
        GameState, HAND_SIZE, MAX_DISCARDS, Phase, RoundResult, SUBMIT_SIZE, TOTAL_ROUNDS, Winner,
    },
    strategy::computer_action,
};

// The most cards a game can take from the deck: both hands dealt in full
// once, topped up after every round but the last, with both sides
// discarding the maximum in every round.
const MAX_CARDS_USED: usize = 2 * HAND_SIZE
    + (TOTAL_ROUNDS as usize - 1) * 2 * SUBMIT_SIZE
    + TOTAL_ROUNDS as usize * 2 * MAX_DISCARDS;
const _: () = assert!(MAX_CARDS_USED <= Deck::SIZE);

/// Game transition errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The deck error.
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    /// Hand evaluation error.
    #[error("evaluation error: {0}")]
    Eval(#[from] drawpoker_eval::Error),
}

/// A game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deal the cards for a new round.
    StartNewRound,
    /// Toggle a card in the discard selection.
    SelectDiscard(Card),
    /// Discard the selected cards.
    ConfirmDiscard,
    /// Keep all cards.
    PlayWithoutDiscard,
    /// Toggle a card in the submit selection.
    SelectSubmit(Card),
    /// Submit the selected cards.
    ConfirmSubmit,
    /// Go to the next round after the reveal.
    Continue,
    /// Start a new game.
    Reset,
}

/// A game between the player and the computer.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    deck: Option<Deck>,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a new game with a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a new game with user initialized randomness.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::default(),
            deck: None,
            rng,
        }
    }

    /// The game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies an action to the game.
    ///
    /// Actions that are not valid in the current phase leave the state
    /// unchanged, a transition that fails also leaves the state unchanged.
    pub fn apply(&mut self, action: Action) -> &GameState {
        let res = match action {
            Action::StartNewRound => self.enter_discarding(),
            Action::SelectDiscard(card) => Ok(self.toggle_discard(card)),
            Action::ConfirmDiscard => self.enter_submitting(false),
            Action::PlayWithoutDiscard => self.enter_submitting(true),
            Action::SelectSubmit(card) => Ok(self.toggle_submit(card)),
            Action::ConfirmSubmit => self.enter_revealing(),
            Action::Continue => Ok(self.enter_next_round()),
            Action::Reset => {
                self.reset();
                Ok(true)
            }
        };

        match res {
            Ok(true) => {}
            Ok(false) => debug!("Ignored {action:?} in {} phase", self.state.phase.name()),
            Err(e) => error!("Action {action:?} failed {e}"),
        }

        &self.state
    }

    /// Deals the cards for a new round.
    pub fn start_new_round(&mut self) -> &GameState {
        self.apply(Action::StartNewRound)
    }

    /// Toggles a player card in the discard selection.
    pub fn select_card_for_discard(&mut self, card: Card) -> &GameState {
        self.apply(Action::SelectDiscard(card))
    }

    /// Discards the selected cards and draws replacements.
    pub fn confirm_discard(&mut self) -> &GameState {
        self.apply(Action::ConfirmDiscard)
    }

    /// Keeps all the player cards.
    pub fn play_hand_without_discard(&mut self) -> &GameState {
        self.apply(Action::PlayWithoutDiscard)
    }

    /// Toggles a player card in the submit selection.
    pub fn select_card_for_submit(&mut self, card: Card) -> &GameState {
        self.apply(Action::SelectSubmit(card))
    }

    /// Submits the selected cards and scores the round.
    pub fn confirm_submit(&mut self) -> &GameState {
        self.apply(Action::ConfirmSubmit)
    }

    /// Moves on to the next round or ends the game.
    pub fn continue_after_reveal(&mut self) -> &GameState {
        self.apply(Action::Continue)
    }

    /// Starts a new game.
    pub fn reset_game(&mut self) -> &GameState {
        self.apply(Action::Reset)
    }

    /// Tops up both hands and starts the discard window.
    fn enter_discarding(&mut self) -> Result<bool, Error> {
        if !matches!(self.state.phase, Phase::Dealing) {
            return Ok(false);
        }

        let mut deck = match &self.deck {
            Some(deck) => deck.clone(),
            None => Deck::new_and_shuffled(&mut self.rng),
        };

        let mut player_hand = self.state.player_hand.clone();
        player_hand.extend(deck.deal(HAND_SIZE.saturating_sub(player_hand.len()))?);

        let mut ai_hand = self.state.ai_hand.clone();
        ai_hand.extend(deck.deal(HAND_SIZE.saturating_sub(ai_hand.len()))?);

        self.state.player_hand = player_hand;
        self.state.ai_hand = ai_hand;
        self.state.deck_count = deck.count();
        self.state.phase = Phase::Discarding {
            selected: Vec::default(),
        };
        self.deck = Some(deck);

        info!(
            "Round {} started, {} cards left in the deck",
            self.state.round, self.state.deck_count
        );

        Ok(true)
    }

    fn toggle_discard(&mut self, card: Card) -> bool {
        let in_hand = self.state.player_hand.contains(&card);
        match &mut self.state.phase {
            Phase::Discarding { selected } if in_hand => toggle(selected, card, MAX_DISCARDS),
            _ => false,
        }
    }

    /// Replaces the discarded cards and locks the computer submission.
    fn enter_submitting(&mut self, keep_all: bool) -> Result<bool, Error> {
        let Phase::Discarding { selected } = &self.state.phase else {
            return Ok(false);
        };

        if !keep_all && selected.is_empty() {
            return Ok(false);
        }

        let player_discards = if keep_all {
            Vec::default()
        } else {
            selected.clone()
        };

        let Some(deck) = &self.deck else {
            return Ok(false);
        };

        let mut deck = deck.clone();
        let mut discarded = self.state.discarded.clone();

        let player_hand = replace_cards(
            &self.state.player_hand,
            &player_discards,
            &mut deck,
            &mut discarded,
        )?;

        let ai_discards = computer_action(&self.state.ai_hand)?.discards;
        let ai_hand = replace_cards(&self.state.ai_hand, &ai_discards, &mut deck, &mut discarded)?;
        let ai_submission = computer_action(&ai_hand)?.submission;

        debug!(
            "Player discarded {}, computer discarded {}",
            player_discards.len(),
            ai_discards.len()
        );

        self.state.player_hand = player_hand;
        self.state.ai_hand = ai_hand;
        self.state.discarded = discarded;
        self.state.deck_count = deck.count();
        self.state.phase = Phase::Submitting {
            selected: Vec::default(),
            ai_submission,
        };
        self.deck = Some(deck);

        Ok(true)
    }

    fn toggle_submit(&mut self, card: Card) -> bool {
        let in_hand = self.state.player_hand.contains(&card);
        match &mut self.state.phase {
            Phase::Submitting { selected, .. } if in_hand => toggle(selected, card, SUBMIT_SIZE),
            _ => false,
        }
    }

    /// Scores the submitted hands.
    fn enter_revealing(&mut self) -> Result<bool, Error> {
        let Phase::Submitting {
            selected,
            ai_submission,
        } = &self.state.phase
        else {
            return Ok(false);
        };

        if selected.len() != SUBMIT_SIZE {
            return Ok(false);
        }

        let result = RoundResult::new(evaluate_hand(selected)?, evaluate_hand(ai_submission)?);
        let (selected, ai_submission) = (selected.clone(), ai_submission.clone());

        self.state.player_hand.retain(|c| !selected.contains(c));
        self.state.ai_hand.retain(|c| !ai_submission.contains(c));
        self.state.played.extend(selected);
        self.state.played.extend(ai_submission);

        match result.winner() {
            Winner::Player => self.state.player_wins += 1,
            Winner::Ai => self.state.ai_wins += 1,
            Winner::Tie => {}
        }

        info!(
            "Round {}: player {}, computer {}, {}",
            self.state.round,
            result.player_hand(),
            result.ai_hand(),
            result.winner()
        );

        self.state.results.push(result);
        self.state.phase = Phase::Revealing;

        Ok(true)
    }

    fn enter_next_round(&mut self) -> bool {
        if !matches!(self.state.phase, Phase::Revealing) {
            return false;
        }

        if self.state.round < TOTAL_ROUNDS {
            self.state.round += 1;
            self.state.phase = Phase::Dealing;
        } else {
            self.state.phase = Phase::GameEnd;
            info!(
                "Game over {}-{} with {} ties",
                self.state.player_wins,
                self.state.ai_wins,
                self.state.ties()
            );
        }

        true
    }

    fn reset(&mut self) {
        self.state = GameState::default();
        self.deck = None;
    }
}

/// Toggles a card in a selection, a new card is added only below `max`.
fn toggle(selected: &mut Vec<Card>, card: Card, max: usize) -> bool {
    if let Some(pos) = selected.iter().position(|c| c == &card) {
        selected.remove(pos);
        true
    } else if selected.len() < max {
        selected.push(card);
        true
    } else {
        false
    }
}

/// Replaces the discards from hand with cards from the deck, in place.
fn replace_cards(
    hand: &[Card],
    discards: &[Card],
    deck: &mut Deck,
    pile: &mut Vec<Card>,
) -> Result<Vec<Card>, DeckError> {
    let drawn = deck.deal(discards.len())?;

    let mut hand = hand.to_vec();
    let slots = hand.iter_mut().filter(|c| discards.contains(c));
    for (slot, card) in slots.zip(drawn) {
        pile.push(*slot);
        *slot = card;
    }

    Ok(hand)
}
