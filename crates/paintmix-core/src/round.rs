//! Round lifecycle for the potion shop.
//!
//! A [`Round`] is owned by the host UI and moves through
//! `Idle -> OrderPending -> Mixing -> Resolved -> Idle`. It only stores state;
//! order generation and matching are delegated to the stateless functions in
//! [`crate::order`].

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::error::{PaintMixError, PaintMixResult};
use crate::order::{check_match, generate_order, Order, UserMix};
use crate::palette::PaintColor;
use crate::random::RandomSource;

/// Where a round currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// Waiting for the player to accept a customer.
    #[default]
    Idle,
    /// An order has been placed and is being shown.
    OrderPending,
    /// The player is adding and removing paint.
    Mixing,
    /// The potion was submitted and judged.
    Resolved,
}

/// Caller-owned state of the current potion shop round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    state: RoundState,
    difficulty: Difficulty,
    order: Option<Order>,
    user_mix: UserMix,
    outcome: Option<bool>,
}

impl Round {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn user_mix(&self) -> &UserMix {
        &self.user_mix
    }

    /// `Some(true)` if the last submission matched, `None` until resolved.
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    fn expect_state(&self, allowed: &[RoundState], action: &'static str) -> PaintMixResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            log::warn!("Rejected {} in state {:?}", action, self.state);
            Err(PaintMixError::InvalidTransition {
                from: self.state,
                action,
            })
        }
    }

    fn transition(&mut self, to: RoundState) {
        log::debug!("Round {:?} -> {:?}", self.state, to);
        self.state = to;
    }

    /// Change difficulty for the next customer. Not allowed mid-round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> PaintMixResult<()> {
        self.expect_state(&[RoundState::Idle, RoundState::Resolved], "change difficulty")?;
        self.difficulty = difficulty;
        Ok(())
    }

    /// Greet a new customer: place an order and start from an empty mix.
    pub fn accept_customer<R: RandomSource + ?Sized>(
        &mut self,
        config: &GameConfig,
        rng: &mut R,
    ) -> PaintMixResult<&Order> {
        self.expect_state(&[RoundState::Idle], "accept a customer")?;
        let order = generate_order(&config.catalog, &config.difficulties, self.difficulty, rng)?;
        self.user_mix.clear();
        self.outcome = None;
        self.transition(RoundState::OrderPending);
        Ok(&*self.order.insert(order))
    }

    /// Leave the order view and open the paint buckets.
    pub fn begin_mixing(&mut self) -> PaintMixResult<()> {
        self.expect_state(&[RoundState::OrderPending], "begin mixing")?;
        self.transition(RoundState::Mixing);
        Ok(())
    }

    pub fn add_paint(&mut self, color: PaintColor) -> PaintMixResult<u32> {
        self.expect_state(&[RoundState::Mixing], "add paint")?;
        Ok(self.user_mix.increment(color))
    }

    pub fn remove_paint(&mut self, color: PaintColor) -> PaintMixResult<u32> {
        self.expect_state(&[RoundState::Mixing], "remove paint")?;
        Ok(self.user_mix.decrement(color))
    }

    /// Hand the potion over and judge it against the order.
    pub fn submit(&mut self) -> PaintMixResult<bool> {
        self.expect_state(&[RoundState::Mixing], "submit")?;
        let Some(order) = self.order.as_ref() else {
            return Err(PaintMixError::InvalidTransition {
                from: self.state,
                action: "submit without an order",
            });
        };
        let matched = check_match(order, &self.user_mix);
        log::info!(
            "Order {} {}",
            order,
            if matched { "matched" } else { "missed" }
        );
        self.outcome = Some(matched);
        self.transition(RoundState::Resolved);
        Ok(matched)
    }

    /// Clear the finished round and wait for the next customer.
    pub fn next_customer(&mut self) -> PaintMixResult<()> {
        self.expect_state(&[RoundState::Resolved], "call the next customer")?;
        self.order = None;
        self.outcome = None;
        self.user_mix.clear();
        self.transition(RoundState::Idle);
        Ok(())
    }
}
