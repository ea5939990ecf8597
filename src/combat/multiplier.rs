//! Multiplier engine
//!
//! Two-stage scaling of a raw hit: the dealing team's base multiplier,
//! then that team's friendly-fire multiplier when the host classifies the
//! receiver as a member of the same team. No clamping afterwards; 0 is a
//! valid result.

use crate::combat::faction::{classify_dealing_team, is_member, team_of, Allegiance};
use crate::combat::settings::DamageRules;
use crate::core::{Channel, Team};
use serde::Serialize;
use std::marker::PhantomData;

/// One incoming hit, built by the host at impact and consumed immediately
#[derive(Debug, Clone, PartialEq)]
pub struct HitEvent<E> {
    /// Absent for environmental or self-inflicted damage
    pub dealer: Option<E>,
    pub receiver: E,
    pub channel: Channel,
    /// Raw amount, non-negative
    pub amount: f32,
}

impl<E> HitEvent<E> {
    pub fn health(dealer: Option<E>, receiver: E, amount: f32) -> Self {
        Self {
            dealer,
            receiver,
            channel: Channel::Health,
            amount,
        }
    }

    pub fn stability(dealer: Option<E>, receiver: E, amount: f32) -> Self {
        Self {
            dealer,
            receiver,
            channel: Channel::Stability,
            amount,
        }
    }
}

/// Breakdown of how a hit was scaled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedHit {
    pub channel: Channel,
    pub dealing_team: Team,
    pub receiving_team: Team,
    pub raw: f32,
    pub base_factor: f32,
    /// Present only when the friendly-fire stage ran
    pub friendly_fire_factor: Option<f32>,
    pub amount: f32,
}

impl AdjustedHit {
    fn passthrough(channel: Channel, dealing_team: Team, receiving_team: Team, raw: f32) -> Self {
        Self {
            channel,
            dealing_team,
            receiving_team,
            raw,
            base_factor: 1.0,
            friendly_fire_factor: None,
            amount: raw,
        }
    }

    pub fn is_friendly_fire(&self) -> bool {
        self.friendly_fire_factor.is_some()
    }
}

/// Applies a rule set to hits, classifying entities with the host's allegiance
pub struct MultiplierEngine<'a, E, A: ?Sized> {
    rules: &'a DamageRules,
    allegiance: &'a A,
    _entity: PhantomData<fn(&E)>,
}

impl<'a, E, A> MultiplierEngine<'a, E, A>
where
    A: Allegiance<E> + ?Sized,
{
    pub fn new(rules: &'a DamageRules, allegiance: &'a A) -> Self {
        Self {
            rules,
            allegiance,
            _entity: PhantomData,
        }
    }

    pub fn rules(&self) -> &DamageRules {
        self.rules
    }

    /// Scale a raw amount on one channel, returning the full breakdown
    pub fn breakdown(
        &self,
        channel: Channel,
        dealer: Option<&E>,
        receiver: &E,
        raw: f32,
    ) -> AdjustedHit {
        let dealing_team = classify_dealing_team(self.allegiance, dealer, receiver);
        let receiving_team = team_of(self.allegiance, receiver);

        if !self.rules.enabled {
            return AdjustedHit::passthrough(channel, dealing_team, receiving_team, raw);
        }

        let settings = &self.rules[dealing_team];
        let base_factor = settings.base(channel).as_factor();
        let mut amount = raw * base_factor;

        let friendly_fire_factor = if is_member(self.allegiance, receiver, dealing_team) {
            let factor = settings.friendly_fire(channel).as_factor();
            amount *= factor;
            Some(factor)
        } else {
            None
        };

        tracing::trace!(
            "{} hit by {} on {}: {} -> {}",
            channel,
            dealing_team,
            receiving_team,
            raw,
            amount
        );

        AdjustedHit {
            channel,
            dealing_team,
            receiving_team,
            raw,
            base_factor,
            friendly_fire_factor,
            amount,
        }
    }

    pub fn apply(&self, channel: Channel, dealer: Option<&E>, receiver: &E, raw: f32) -> f32 {
        self.breakdown(channel, dealer, receiver, raw).amount
    }

    pub fn apply_health(&self, dealer: Option<&E>, receiver: &E, raw: f32) -> f32 {
        self.apply(Channel::Health, dealer, receiver, raw)
    }

    pub fn apply_stability(&self, dealer: Option<&E>, receiver: &E, raw: f32) -> f32 {
        self.apply(Channel::Stability, dealer, receiver, raw)
    }

    pub fn resolve(&self, hit: &HitEvent<E>) -> AdjustedHit {
        self.breakdown(hit.channel, hit.dealer.as_ref(), &hit.receiver, hit.amount)
    }
}
