//! Plant lifecycle transition rules.
//!
//! The legal-successor relation is a static table rather than control flow:
//!
//! ```text
//! PLANTED -> SPROUTED -> FLOWERING -> HARVESTING -> FINISHED
//! ```
//!
//! Every stage has exactly one successor except FINISHED, which has none.
//! Staying on the same stage, skipping and moving backward are all rejected.

use crate::{
    error::{GardenError, Result},
    models::PlantStatus,
};

const TRANSITIONS: [(PlantStatus, &[PlantStatus]); 5] = [
    (PlantStatus::Planted, &[PlantStatus::Sprouted]),
    (PlantStatus::Sprouted, &[PlantStatus::Flowering]),
    (PlantStatus::Flowering, &[PlantStatus::Harvesting]),
    (PlantStatus::Harvesting, &[PlantStatus::Finished]),
    (PlantStatus::Finished, &[]),
];

/// Statuses reachable in one step from `from`.
pub fn allowed_transitions(from: PlantStatus) -> &'static [PlantStatus] {
    TRANSITIONS
        .iter()
        .find(|(status, _)| *status == from)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

/// The single legal successor of `from`, if any.
pub fn next_status(from: PlantStatus) -> Option<PlantStatus> {
    allowed_transitions(from).first().copied()
}

/// Whether `from -> to` is a legal transition.
pub fn can_transition(from: PlantStatus, to: PlantStatus) -> bool {
    allowed_transitions(from).contains(&to)
}

/// Validates `from -> to`, returning [`GardenError::InvalidTransition`]
/// with the permitted successors when it is not legal.
pub fn check_transition(from: PlantStatus, to: PlantStatus) -> Result<()> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(GardenError::InvalidTransition {
            current: from,
            requested: to,
            allowed: allowed_transitions(from).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_linear() {
        assert_eq!(next_status(PlantStatus::Planted), Some(PlantStatus::Sprouted));
        assert_eq!(next_status(PlantStatus::Sprouted), Some(PlantStatus::Flowering));
        assert_eq!(next_status(PlantStatus::Flowering), Some(PlantStatus::Harvesting));
        assert_eq!(next_status(PlantStatus::Harvesting), Some(PlantStatus::Finished));
        assert_eq!(next_status(PlantStatus::Finished), None);
    }

    #[test]
    fn test_every_status_has_at_most_one_successor() {
        for status in PlantStatus::ALL {
            assert!(allowed_transitions(status).len() <= 1);
        }
    }

    #[test]
    fn test_only_successor_is_accepted() {
        for from in PlantStatus::ALL {
            for to in PlantStatus::ALL {
                let expected = next_status(from) == Some(to);
                assert_eq!(
                    check_transition(from, to).is_ok(),
                    expected,
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn test_rejection_carries_diagnostics() {
        match check_transition(PlantStatus::Sprouted, PlantStatus::Planted) {
            Err(GardenError::InvalidTransition {
                current,
                requested,
                allowed,
            }) => {
                assert_eq!(current, PlantStatus::Sprouted);
                assert_eq!(requested, PlantStatus::Planted);
                assert_eq!(allowed, vec![PlantStatus::Flowering]);
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }

        match check_transition(PlantStatus::Finished, PlantStatus::Finished) {
            Err(GardenError::InvalidTransition { allowed, .. }) => assert!(allowed.is_empty()),
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }
}
