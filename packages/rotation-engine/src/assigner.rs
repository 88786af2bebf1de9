//! Sail assignment contract: the output table, the strategy trait, and
//! strategy selection.

use rotation_types::{Division, RotationStyle, RotationType, Round, Sail, SailsList, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constant_assigner::ConstantAssigner;
use crate::frequent_assigner::FrequentAssigner;
use crate::infrequent_assigner::InfrequentAssigner;

/// Per-division sails held by one team slot in one race.
pub type DivisionSails = BTreeMap<Division, Sail>;

// ── Assignment Table ──────────────────────────────────────────────────────────

/// Computed sail assignment for a whole round: race index → team slot →
/// division → sail.
///
/// Built once per assignment run; ownership transfers to the caller for
/// persistence or rendering. BTreeMaps keep serialized output in a stable
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTable {
    races: Vec<BTreeMap<usize, DivisionSails>>,
}

impl AssignmentTable {
    /// Empty table covering `race_count` races.
    pub fn with_race_count(race_count: usize) -> Self {
        Self {
            races: vec![BTreeMap::new(); race_count],
        }
    }

    pub fn race_count(&self) -> usize {
        self.races.len()
    }

    /// Record one sail. Panics when `race` is out of range.
    pub fn insert(&mut self, race: usize, slot: usize, division: Division, sail: Sail) {
        self.races[race].entry(slot).or_default().insert(division, sail);
    }

    /// Record a slot's full per-division map at once.
    pub fn set_slot(&mut self, race: usize, slot: usize, sails: DivisionSails) {
        self.races[race].insert(slot, sails);
    }

    pub fn get(&self, race: usize, slot: usize, division: Division) -> Option<&Sail> {
        self.races.get(race)?.get(&slot)?.get(&division)
    }

    /// All slot assignments for one race. Panics when out of range.
    pub fn race(&self, race: usize) -> &BTreeMap<usize, DivisionSails> {
        &self.races[race]
    }
}

// ── Strategy Contract ─────────────────────────────────────────────────────────

/// One rotation policy: a pure function from the round, the sail pool, the
/// team list and the division order to a full assignment table.
///
/// Strategies assume validated input. A precondition violation is a
/// programming-contract bug and panics rather than producing a partial
/// table.
pub trait SailAssigner {
    /// Short policy name, used in log events.
    fn name(&self) -> &'static str;

    fn assign_sails(
        &self,
        round: &Round,
        sails: &SailsList,
        teams: &[Team],
        divisions: &[Division],
    ) -> AssignmentTable;
}

/// Shared precondition check run by every strategy on entry.
pub(crate) fn assert_contract(
    round: &Round,
    sails: &SailsList,
    teams: &[Team],
    divisions: &[Division],
) {
    assert!(!teams.is_empty(), "no teams to assign sails to");
    assert!(!divisions.is_empty(), "no divisions to assign sails in");
    assert!(
        sails.count() >= teams.len() * divisions.len(),
        "sails list holds {} sails, fleet needs {}",
        sails.count(),
        teams.len() * divisions.len()
    );
    for (race, &(a, b)) in round.pairs().enumerate() {
        assert!(
            a >= 1 && a <= teams.len() && b >= 1 && b <= teams.len(),
            "race {race} pairs slots ({a}, {b}) outside 1-{}",
            teams.len()
        );
        assert!(a != b, "race {race} pairs slot {a} against itself");
    }
}

// ── Strategy Selection ────────────────────────────────────────────────────────

/// Map a configured rotation type and style to its strategy.
///
/// Type NONE, and any type without a style, fall back to the constant
/// strategy. SWAP carries no strategy of its own: the periodic team/boat
/// exchange that distinguishes it is applied by the caller, so slot
/// assignment reuses the style-driven strategy unchanged (the validation
/// chain has already enforced its even-sail-count precondition).
pub fn assigner_for(
    rotation_type: RotationType,
    style: Option<RotationStyle>,
) -> &'static dyn SailAssigner {
    match (rotation_type, style) {
        (RotationType::None, _) | (_, None) => &ConstantAssigner,
        (_, Some(RotationStyle::Frequent)) => &FrequentAssigner,
        (_, Some(RotationStyle::Infrequent)) => &InfrequentAssigner,
    }
}
