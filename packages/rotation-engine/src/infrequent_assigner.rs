//! Infrequent rotation: sails change only between flights of races, and a
//! team racing in consecutive flights keeps the same boats.

use rotation_types::{Division, Round, SailsList, Team};
use std::collections::BTreeMap;
use tracing::debug;

use crate::assigner::{assert_contract, AssignmentTable, DivisionSails, SailAssigner};

/// Flight-grouped rotation, minimizing mid-event boat swaps.
///
/// The sail list is chunked into groups of one sail per division; races are
/// chunked into flights. Within a flight every slot holds one group: slots
/// returning from the previous flight keep their old group (carry-over),
/// everyone else takes the lowest-numbered group still free.
pub struct InfrequentAssigner;

impl SailAssigner for InfrequentAssigner {
    fn name(&self) -> &'static str {
        "infrequent"
    }

    fn assign_sails(
        &self,
        round: &Round,
        sails: &SailsList,
        teams: &[Team],
        divisions: &[Division],
    ) -> AssignmentTable {
        assert_contract(round, sails, teams, divisions);

        let block = divisions.len();

        // Group formation: consecutive block-sized chunks of the sail list,
        // offset j within a chunk bound to division j.
        let mut groups: Vec<DivisionSails> = Vec::new();
        for (index, sail) in sails.iter().enumerate() {
            if groups.len() == index / block {
                groups.push(DivisionSails::new());
            }
            groups[index / block].insert(divisions[index % block], sail.clone());
        }

        // Flight formation. Rounded up so a short sail pool still yields a
        // whole flight and no trailing race falls outside the grouping; the
        // final flight may run short.
        let flight_size = ((sails.count() + 2 * block - 1) / (2 * block)).max(1);
        debug!(
            strategy = self.name(),
            races = round.race_count(),
            flight_size,
            groups = groups.len(),
            "assigning sails"
        );

        let mut table = AssignmentTable::with_race_count(round.race_count());
        let races: Vec<usize> = (0..round.race_count()).collect();
        // slot → group index, carried from the previous flight
        let mut prev_flight: BTreeMap<usize, usize> = BTreeMap::new();

        for flight in races.chunks(flight_size) {
            let mut bound: BTreeMap<usize, usize> = BTreeMap::new();
            let mut available: Vec<usize> = (0..groups.len()).collect();

            // Carry-over pass. Runs before the fill pass so a returning
            // slot's group leaves the pool before anyone else can take it.
            for &race in flight {
                let (a, b) = round.pair(race);
                for slot in [a, b] {
                    if bound.contains_key(&slot) {
                        continue;
                    }
                    if let Some(&group) = prev_flight.get(&slot) {
                        bound.insert(slot, group);
                        available.retain(|&g| g != group);
                    }
                }
            }

            // Fill pass: remaining slots take groups in group order, walking
            // the flight's races in round order.
            for &race in flight {
                let (a, b) = round.pair(race);
                for slot in [a, b] {
                    if !bound.contains_key(&slot) {
                        assert!(!available.is_empty(), "sail group pool exhausted within flight");
                        bound.insert(slot, available.remove(0));
                    }
                }
            }

            for &race in flight {
                let (a, b) = round.pair(race);
                table.set_slot(race, a, groups[bound[&a]].clone());
                table.set_slot(race, b, groups[bound[&b]].clone());
            }
            prev_flight = bound;
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_types::Sail;

    fn teams(count: usize) -> Vec<Team> {
        (1..=count).map(|n| Team::new(n.to_string())).collect()
    }

    fn number_at(table: &AssignmentTable, race: usize, slot: usize, division: Division) -> &str {
        &table.get(race, slot, division).unwrap().number
    }

    #[test]
    fn full_round_robin_carries_every_slot_across_flights() {
        // 4 sails, 1 division: flights of 2 races, and every slot races in
        // every flight, so all carry over and nobody ever changes boats.
        let round = Round::round_robin(4);
        let sails = SailsList::from_numbers(["1", "2", "3", "4"]);
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(4), &[Division::A]);

        let mut first_seen: BTreeMap<usize, String> = BTreeMap::new();
        for (race, &(a, b)) in round.pairs().enumerate() {
            for slot in [a, b] {
                let number = number_at(&table, race, slot, Division::A).to_string();
                let expected = first_seen.entry(slot).or_insert_with(|| number.clone());
                assert_eq!(&number, expected, "slot {slot} changed sails mid-round");
            }
        }
    }

    #[test]
    fn first_flight_fills_in_race_order() {
        let round = Round::round_robin(4);
        let sails = SailsList::from_numbers(["1", "2", "3", "4"]);
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(4), &[Division::A]);

        // Flight 0 is races (1,4) and (2,3): groups hand out in that order.
        assert_eq!(number_at(&table, 0, 1, Division::A), "1");
        assert_eq!(number_at(&table, 0, 4, Division::A), "2");
        assert_eq!(number_at(&table, 1, 2, Division::A), "3");
        assert_eq!(number_at(&table, 1, 3, Division::A), "4");
    }

    #[test]
    fn carried_slots_keep_groups_ahead_of_newcomers() {
        // Flight 0 features only slots 1 and 2; in flight 1 the newcomers 3
        // and 4 race first, but the carry-over pass has already reserved
        // groups 1 and 2 for the returning slots.
        let round = Round::new(vec![(1, 2), (1, 2), (3, 4), (1, 2)]);
        let sails = SailsList::from_numbers(["1", "2", "3", "4"]);
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(4), &[Division::A]);

        // Flight 1, race 2: newcomers skip the reserved groups.
        assert_eq!(number_at(&table, 2, 3, Division::A), "3");
        assert_eq!(number_at(&table, 2, 4, Division::A), "4");
        // Flight 1, race 3: carry-overs unchanged.
        assert_eq!(number_at(&table, 3, 1, Division::A), "1");
        assert_eq!(number_at(&table, 3, 2, Division::A), "2");
    }

    #[test]
    fn groups_bind_sails_to_divisions_in_order() {
        let round = Round::new(vec![(1, 2)]);
        let sails = SailsList::new(vec![
            Sail::with_color("1", "red"),
            Sail::with_color("2", "blue"),
            Sail::with_color("3", "green"),
            Sail::with_color("4", "yellow"),
        ]);
        let divisions = [Division::B, Division::A]; // configured order, not alphabetical
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(2), &divisions);

        // Group 0 = sails 1-2 bound to B then A; group 1 = sails 3-4.
        assert_eq!(number_at(&table, 0, 1, Division::B), "1");
        assert_eq!(number_at(&table, 0, 1, Division::A), "2");
        assert_eq!(number_at(&table, 0, 2, Division::B), "3");
        assert_eq!(number_at(&table, 0, 2, Division::A), "4");
    }

    #[test]
    fn short_final_flight_is_allowed() {
        // 5 races with flights of 2: the last flight holds a single race.
        let round = Round::new(vec![(1, 4), (2, 3), (1, 3), (4, 2), (1, 2)]);
        let sails = SailsList::from_numbers(["1", "2", "3", "4"]);
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(4), &[Division::A]);

        assert_eq!(table.race_count(), 5);
        // Slots 1 and 2 raced in flight 1 and keep their groups in race 4.
        assert_eq!(
            number_at(&table, 4, 1, Division::A),
            number_at(&table, 2, 1, Division::A)
        );
        assert_eq!(
            number_at(&table, 4, 2, Division::A),
            number_at(&table, 3, 2, Division::A)
        );
    }

    #[test]
    fn inexact_flight_division_rounds_up() {
        // 3 sails, 1 division: 3 / 2 rounds up to flights of 2 races.
        let round = Round::new(vec![(1, 2), (2, 3), (1, 3)]);
        let sails = SailsList::from_numbers(["1", "2", "3"]);
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(3), &[Division::A]);

        // Races 0 and 1 form one flight: slot 2 keeps its group within it.
        assert_eq!(
            number_at(&table, 0, 2, Division::A),
            number_at(&table, 1, 2, Division::A)
        );
    }

    #[test]
    fn every_triple_is_covered() {
        let round = Round::round_robin(3);
        let sails = SailsList::from_numbers((1..=6).map(|n| n.to_string()));
        let divisions = [Division::A, Division::B];
        let table = InfrequentAssigner.assign_sails(&round, &sails, &teams(3), &divisions);

        for (race, &(a, b)) in round.pairs().enumerate() {
            assert_eq!(table.race(race).len(), 2);
            for slot in [a, b] {
                for division in divisions {
                    assert!(
                        table.get(race, slot, division).is_some(),
                        "race {race} slot {slot} division {division} unassigned"
                    );
                }
            }
        }
    }
}
