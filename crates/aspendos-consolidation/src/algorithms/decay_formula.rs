use aspendos_core::models::{ConsolidationOptions, DecayKind};

/// Soft-decay multiplier for a record `age_days` old.
///
/// ```text
/// factor = max(min_decay_factor, 1 − decay_rate × age_days / 30)
/// ```
pub fn soft_decay_factor(age_days: f64, options: &ConsolidationOptions) -> f64 {
    (1.0 - options.decay_rate * age_days / 30.0).max(options.min_decay_factor)
}

/// Decide how a record of the given age and salience decays, if at all.
///
/// Returns the decay kind and the new salience. Soft decay that does not
/// strictly lower the salience yields `None`.
pub fn decide(
    age_days: f64,
    salience: f64,
    options: &ConsolidationOptions,
) -> Option<(DecayKind, f64)> {
    if age_days > options.max_age_days && salience < options.hard_decay_salience {
        return Some((DecayKind::Hard, 0.0));
    }
    if age_days > options.soft_decay_after_days {
        let decayed = salience * soft_decay_factor(age_days, options);
        if decayed < salience {
            return Some((DecayKind::Soft, decayed));
        }
    }
    None
}
