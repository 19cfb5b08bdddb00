//! Configuration checks, accumulating every violation.

use crate::actions::ActionTypes;
use crate::builder::error::ConfigViolation;
use crate::core::History;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Validate action types and the initial history against the limit.
/// Returns Validation::Failure with ALL violations if any check fails.
pub(crate) fn validate<S>(
    action_types: &ActionTypes,
    initial_history: &History<S>,
    limit: usize,
) -> Check {
    let controls = action_types.controls();
    let mut checks: Vec<Check> = Vec::new();

    for (role, action_type) in controls {
        let check = if action_type.is_empty() {
            Validation::fail(ConfigViolation::EmptyActionType { role })
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    for (i, &(first, action_type)) in controls.iter().enumerate() {
        for &(second, other) in &controls[i + 1..] {
            if !action_type.is_empty() && action_type == other {
                checks.push(Validation::fail(ConfigViolation::DuplicateActionType {
                    action_type: action_type.to_string(),
                    first,
                    second,
                }));
            }
        }
    }

    for init in action_types.init() {
        if let Some(&(role, _)) = controls.iter().find(|(_, t)| *t == init.as_str()) {
            checks.push(Validation::fail(ConfigViolation::InitTypeShadowed {
                action_type: init.clone(),
                role,
            }));
        }
    }

    let length = initial_history.length();
    let check = if limit > 0 && initial_history.is_initialized() && length > limit {
        Validation::fail(ConfigViolation::InitialHistoryExceedsLimit { length, limit })
    } else {
        Validation::success(())
    };
    checks.push(check);

    Validation::all_vec(checks).map(|_| ())
}
