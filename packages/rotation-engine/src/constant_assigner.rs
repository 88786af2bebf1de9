//! No-rotation assignment: every team keeps the same sail, in every
//! division, for the entire round.

use rotation_types::{Division, Round, SailsList, Team};
use tracing::debug;

use crate::assigner::{assert_contract, AssignmentTable, DivisionSails, SailAssigner};

/// The cheapest policy, used when no rotation is configured. Sails are
/// consumed from the list in team order, one per division, and the resulting
/// per-team maps are emitted unchanged for every race.
pub struct ConstantAssigner;

impl SailAssigner for ConstantAssigner {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn assign_sails(
        &self,
        round: &Round,
        sails: &SailsList,
        teams: &[Team],
        divisions: &[Division],
    ) -> AssignmentTable {
        assert_contract(round, sails, teams, divisions);
        debug!(
            strategy = self.name(),
            races = round.race_count(),
            teams = teams.len(),
            divisions = divisions.len(),
            "assigning sails"
        );

        // One sail per team per division, in list order: slot 1 takes the
        // first division-count sails, slot 2 the next, and so on.
        let mut team_sails: Vec<DivisionSails> = Vec::with_capacity(teams.len());
        let mut cursor = 0;
        for _ in teams {
            let mut per_division = DivisionSails::new();
            for division in divisions {
                per_division.insert(*division, sails.get(cursor).clone());
                cursor += 1;
            }
            team_sails.push(per_division);
        }

        let mut table = AssignmentTable::with_race_count(round.race_count());
        for (race, &(first, second)) in round.pairs().enumerate() {
            table.set_slot(race, first, team_sails[first - 1].clone());
            table.set_slot(race, second, team_sails[second - 1].clone());
        }
        table
    }
}
