//! Frequent rotation: sails advance one position after every race,
//! independently per division.

use rotation_types::{Division, Round, SailsList, Team};
use tracing::debug;

use crate::assigner::{assert_contract, AssignmentTable, SailAssigner};

/// Continuous round-robin rotation. A single cursor walks the sail list
/// modulo its length; the second (away) slot reads one full division-count
/// block ahead of the first, so the two competitors never hold the same sail
/// in the same division. After a race's divisions the cursor skips a further
/// block, keeping the two halves of the pool in step across races. Most
/// teams change only one sail number between consecutive races.
pub struct FrequentAssigner;

impl SailAssigner for FrequentAssigner {
    fn name(&self) -> &'static str {
        "frequent"
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
            sails = sails.count(),
            divisions = divisions.len(),
            "assigning sails"
        );

        let count = sails.count();
        let block = divisions.len();
        let mut cursor = 0;

        let mut table = AssignmentTable::with_race_count(round.race_count());
        for (race, &(first, second)) in round.pairs().enumerate() {
            for division in divisions {
                table.insert(race, first, *division, sails.get(cursor).clone());
                table.insert(race, second, *division, sails.get_mod(cursor + block).clone());
                cursor = (cursor + 1) % count;
            }
            cursor = (cursor + block) % count;
        }
        table
    }
}
