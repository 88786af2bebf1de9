//! # rotation-types
//!
//! Shared value types for the Regatta Suite fleet rotation engine.
//!
//! These types are used by:
//! - `rotation-engine`: validating configurations and computing sail assignments
//! - the web backend: persisting rotation configurations and rendering sail tables
//!
//! ## Conventions
//!
//! - Team **slots** are 1-based indices into the ordered team list, stable for
//!   the duration of one round.
//! - Race indices are 0-based and dense: race `i` is the `i`-th entry of the
//!   round's race order.
//! - All types serialize with the same JSON conventions as the rest of the
//!   suite (SCREAMING_SNAKE_CASE enums, camelCase fields).

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Division ──────────────────────────────────────────────────────────────────

/// A scoring sub-fleet racing in parallel within the same event.
///
/// The suite supports at most four divisions. Ordering is alphabetical and
/// meaningful: it is the default allocation order when no explicit division
/// order is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    A,
    B,
    C,
    D,
}

impl Division {
    /// All divisions in scoring order.
    pub const ALL: [Division; 4] = [Division::A, Division::B, Division::C, Division::D];

    /// The first `count` divisions, in scoring order. `count` must be 1–4.
    pub fn first(count: usize) -> &'static [Division] {
        assert!(
            count >= 1 && count <= Self::ALL.len(),
            "division count {count} outside supported range 1-4"
        );
        &Self::ALL[..count]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::A => "A",
            Division::B => "B",
            Division::C => "C",
            Division::D => "D",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sail ──────────────────────────────────────────────────────────────────────

/// One physical boat identity: sail number plus optional hull/sail color.
///
/// Numbers and colors are free-form labels ("14", "Lime"). A sail is immutable
/// once created; every assignment slot receives its own clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sail {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Sail {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            color: None,
        }
    }

    pub fn with_color(number: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            color: Some(color.into()),
        }
    }
}

impl fmt::Display for Sail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

// ── Sails List ────────────────────────────────────────────────────────────────

/// Ordered pool of sails available for one assignment run.
///
/// The count is fixed for the duration of a run; the rotation strategies read
/// the list without defensive copying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SailsList {
    sails: Vec<Sail>,
}

impl SailsList {
    pub fn new(sails: Vec<Sail>) -> Self {
        Self { sails }
    }

    /// Convenience constructor for configurations without colors.
    pub fn from_numbers<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sails: numbers.into_iter().map(Sail::new).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.sails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sails.is_empty()
    }

    /// Sail at `index`. Panics when out of range; callers index within the
    /// validated count.
    pub fn get(&self, index: usize) -> &Sail {
        &self.sails[index]
    }

    /// Sail at `index` modulo the list length, for cyclic rotation cursors.
    pub fn get_mod(&self, index: usize) -> &Sail {
        &self.sails[index % self.sails.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sail> {
        self.sails.iter()
    }
}

// ── Team ──────────────────────────────────────────────────────────────────────

/// A competing team. The engine only relies on the team list's order and
/// length; the name is carried through for display by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ── Round ─────────────────────────────────────────────────────────────────────

/// Read-only race schedule for one round: per race, the ordered pair of
/// 1-based team slots that compete in it.
///
/// Pairings are not required to be exhaustive or symmetric: a slot may appear
/// in zero, one, or many races.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    race_order: Vec<(usize, usize)>,
}

impl Round {
    pub fn new(race_order: Vec<(usize, usize)>) -> Self {
        Self { race_order }
    }

    pub fn race_count(&self) -> usize {
        self.race_order.len()
    }

    /// The two team slots racing in race `index`. Panics when out of range.
    pub fn pair(&self, index: usize) -> (usize, usize) {
        self.race_order[index]
    }

    pub fn pairs(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.race_order.iter()
    }

    /// All-play-all schedule for `team_count` teams via the circle method,
    /// used when no stored race order template applies.
    ///
    /// Slot 1 stays fixed while the remaining slots rotate one position per
    /// meeting round. Odd team counts get a virtual bye whose races are
    /// skipped.
    pub fn round_robin(team_count: usize) -> Self {
        let mut race_order = Vec::new();
        if team_count < 2 {
            return Self { race_order };
        }

        let n = if team_count % 2 == 0 { team_count } else { team_count + 1 };
        let bye = n + 1; // never a real slot
        let mut ring: Vec<usize> = (1..=n)
            .map(|slot| if slot > team_count { bye } else { slot })
            .collect();

        for _ in 0..n - 1 {
            for i in 0..n / 2 {
                let (a, b) = (ring[i], ring[n - 1 - i]);
                if a != bye && b != bye {
                    race_order.push((a, b));
                }
            }
            // Rotate everything but the first slot one position.
            let last = ring[n - 1];
            for i in (2..n).rev() {
                ring[i] = ring[i - 1];
            }
            ring[1] = last;
        }

        Self { race_order }
    }
}

// ── Rotation Configuration ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationType {
    /// No rotation: one boat per team for the whole round.
    None,
    /// Regular rotation through the sail pool.
    Standard,
    /// Standard slot assignment plus periodic team/boat exchange, which the
    /// caller applies after assignment.
    Swap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationStyle {
    /// Sails advance every race.
    Frequent,
    /// Sails advance only between flights.
    Infrequent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringMode {
    #[default]
    Standard,
    /// All divisions scored as one combined fleet; every division needs its
    /// own full complement of sails.
    Combined,
}

/// Engine-visible projection of the owning event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub team_count: usize,
    /// Effective number of scoring divisions (1 for single-division events).
    pub division_count: usize,
    pub scoring: ScoringMode,
}

/// Fleet rotation configuration, built by the surrounding application from
/// user input and persisted alongside the event.
///
/// Optional fields start unset; the validation chain decides whether the
/// combination is complete enough to run an assignment. Immutable during a
/// single assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_type: Option<RotationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_style: Option<RotationStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub races_per_set: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sails_list: Option<SailsList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_order: Option<Vec<Division>>,
    pub event: EventInfo,
}

impl FleetRotation {
    /// Blank configuration for an event; everything else starts unset.
    pub fn for_event(event: EventInfo) -> Self {
        Self {
            rotation_type: None,
            rotation_style: None,
            races_per_set: None,
            sails_list: None,
            division_order: None,
            event,
        }
    }

    /// Divisions in allocation order: the configured order when present,
    /// otherwise the first `division_count` divisions alphabetically.
    pub fn divisions(&self) -> Vec<Division> {
        match &self.division_order {
            Some(order) => order.clone(),
            None => Division::first(self.event.division_count).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_order_is_alphabetical() {
        assert!(Division::A < Division::B);
        assert!(Division::C < Division::D);
        assert_eq!(Division::first(2), &[Division::A, Division::B]);
        assert_eq!(Division::B.to_string(), "B");
    }

    #[test]
    #[should_panic]
    fn division_first_rejects_zero() {
        Division::first(0);
    }

    #[test]
    fn sails_list_cyclic_access() {
        let sails = SailsList::from_numbers(["1", "2", "3"]);
        assert_eq!(sails.count(), 3);
        assert_eq!(sails.get(1).number, "2");
        assert_eq!(sails.get_mod(4).number, "2");
    }

    #[test]
    fn round_robin_even_field() {
        let round = Round::round_robin(4);
        // 3 meeting rounds of 2 races each.
        assert_eq!(round.race_count(), 6);

        let mut appearances = [0usize; 5];
        for &(a, b) in round.pairs() {
            assert_ne!(a, b);
            assert!((1..=4).contains(&a) && (1..=4).contains(&b));
            appearances[a] += 1;
            appearances[b] += 1;
        }
        // Everyone races everyone once.
        assert_eq!(&appearances[1..], &[3, 3, 3, 3]);
    }

    #[test]
    fn round_robin_odd_field_skips_byes() {
        let round = Round::round_robin(3);
        assert_eq!(round.race_count(), 3);
        for &(a, b) in round.pairs() {
            assert!((1..=3).contains(&a) && (1..=3).contains(&b));
        }
    }

    #[test]
    fn round_robin_degenerate_fields() {
        assert_eq!(Round::round_robin(0).race_count(), 0);
        assert_eq!(Round::round_robin(1).race_count(), 0);
        assert_eq!(Round::round_robin(2).race_count(), 1);
    }

    #[test]
    fn divisions_fall_back_to_alphabetical() {
        let mut rotation = FleetRotation::for_event(EventInfo {
            team_count: 4,
            division_count: 2,
            scoring: ScoringMode::Standard,
        });
        assert_eq!(rotation.divisions(), vec![Division::A, Division::B]);

        rotation.division_order = Some(vec![Division::B, Division::A]);
        assert_eq!(rotation.divisions(), vec![Division::B, Division::A]);
    }
}
