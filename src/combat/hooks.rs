//! Host hook points
//!
//! A host combat pipeline calls these at four places: the faction
//! eligibility check before a hit lands, the combat-engagement check when a
//! hit is received, and the health and stability computations before the
//! amount is subtracted.

use crate::combat::faction::{is_friendly_fire_eligible, Allegiance};
use crate::combat::multiplier::{AdjustedHit, HitEvent, MultiplierEngine};
use crate::combat::settings::DamageRules;

pub struct CombatHooks<'a, E, A: ?Sized> {
    rules: &'a DamageRules,
    allegiance: &'a A,
    engine: MultiplierEngine<'a, E, A>,
}

impl<'a, E, A> CombatHooks<'a, E, A>
where
    E: PartialEq,
    A: Allegiance<E> + ?Sized,
{
    pub fn new(rules: &'a DamageRules, allegiance: &'a A) -> Self {
        Self {
            rules,
            allegiance,
            engine: MultiplierEngine::new(rules, allegiance),
        }
    }

    pub fn engine(&self) -> &MultiplierEngine<'a, E, A> {
        &self.engine
    }

    /// Faction eligibility, run after the host's own check
    ///
    /// Keeps a host `true`; may turn a host `false` into `true` for
    /// player-on-player hits.
    pub fn eligible_faction(&self, host_result: bool, defender: &E, attacker: Option<&E>) -> bool {
        host_result || is_friendly_fire_eligible(self.rules, self.allegiance, defender, attacker)
    }

    /// Whether receiving this hit should put the receiver into combat
    ///
    /// Friendly-fire hits don't trigger alert or aggro.
    pub fn engages_combat(&self, receiver: &E, dealer: Option<&E>) -> bool {
        !is_friendly_fire_eligible(self.rules, self.allegiance, receiver, dealer)
    }

    pub fn vitality_hit(&self, receiver: &E, dealer: Option<&E>, damage: &mut f32) {
        *damage = self.engine.apply_health(dealer, receiver, *damage);
    }

    pub fn stability_hit(&self, receiver: &E, dealer: Option<&E>, knock_value: &mut f32) {
        *knock_value = self.engine.apply_stability(dealer, receiver, *knock_value);
    }

    /// Run a whole hit through eligibility and scaling
    ///
    /// Returns `None` when the hit doesn't register between the two parties.
    pub fn process(&self, host_eligible: bool, hit: &HitEvent<E>) -> Option<AdjustedHit> {
        if !self.eligible_faction(host_eligible, &hit.receiver, hit.dealer.as_ref()) {
            return None;
        }
        Some(self.engine.resolve(hit))
    }
}
