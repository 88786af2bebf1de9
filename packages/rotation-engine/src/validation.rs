//! Configuration validation for fleet rotations.
//!
//! A fixed, ordered chain of independent rules. Validation is fail-fast: the
//! first violated rule's error is returned and later rules are not evaluated.
//! The rule order is part of the public contract: it decides which message
//! the user configuring the rotation sees first.

use rotation_types::{FleetRotation, RotationType, ScoringMode};
use thiserror::Error;
use tracing::debug;

/// A fleet rotation configuration that cannot be turned into an assignment.
///
/// Always recoverable: the caller fixes the configuration and re-validates.
/// The message is surfaced verbatim to the user driving the configuration
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing rotation type")]
    MissingRotationType,
    #[error("Missing rotation style")]
    MissingRotationStyle,
    #[error("Missing order of divisions")]
    MissingDivisionOrder,
    #[error("Missing races per set")]
    MissingRacesPerSet,
    #[error("All the teams must be accounted for.")]
    SailsShort,
    #[error("All the teams must be accounted for in combined division rotations.")]
    SailsShortCombined,
    #[error("Swap rotations require an even number of sails.")]
    OddSwapSails,
}

type Rule = fn(&FleetRotation) -> Result<(), ConfigurationError>;

/// The chain, in published order.
const RULES: [Rule; 5] = [
    require_rotation_type,
    require_multi_division_fields,
    require_races_per_set,
    require_full_sails_list,
    require_swap_parity,
];

/// Check `rotation` against every rule in order, stopping at the first
/// violation.
pub fn validate(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    for rule in RULES {
        if let Err(err) = rule(rotation) {
            debug!(%err, "fleet rotation configuration rejected");
            return Err(err);
        }
    }
    Ok(())
}

fn require_rotation_type(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    match rotation.rotation_type {
        Some(_) => Ok(()),
        None => Err(ConfigurationError::MissingRotationType),
    }
}

/// Multi-divisional events additionally need a style and a division order;
/// single-division events can leave both unset.
fn require_multi_division_fields(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    if rotation.event.division_count > 1 {
        if rotation.rotation_style.is_none() {
            return Err(ConfigurationError::MissingRotationStyle);
        }
        if rotation.division_order.is_none() {
            return Err(ConfigurationError::MissingDivisionOrder);
        }
    }
    Ok(())
}

fn require_races_per_set(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    if rotation.rotation_type != Some(RotationType::None) && rotation.races_per_set.is_none() {
        return Err(ConfigurationError::MissingRacesPerSet);
    }
    Ok(())
}

/// The sail pool must cover the fleet: one sail per team, or one per team per
/// division under combined scoring. An absent list accounts for no teams.
fn require_full_sails_list(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    let count = rotation.sails_list.as_ref().map_or(0, |sails| sails.count());
    match rotation.event.scoring {
        ScoringMode::Combined => {
            if count < rotation.event.team_count * rotation.event.division_count {
                return Err(ConfigurationError::SailsShortCombined);
            }
        }
        ScoringMode::Standard => {
            if count < rotation.event.team_count {
                return Err(ConfigurationError::SailsShort);
            }
        }
    }
    Ok(())
}

fn require_swap_parity(rotation: &FleetRotation) -> Result<(), ConfigurationError> {
    if rotation.rotation_type == Some(RotationType::Swap) {
        let count = rotation.sails_list.as_ref().map_or(0, |sails| sails.count());
        if count % 2 != 0 {
            return Err(ConfigurationError::OddSwapSails);
        }
    }
    Ok(())
}
