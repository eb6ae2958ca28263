//! DF-QuAD aggregation and the influence-to-target mapping

/// Combine same-polarity influences with the probabilistic "independent or"
///
/// `1 - Π(1 - vᵢ)`: each extra value pushes the result toward 1 without ever
/// exceeding it, and an empty input contributes nothing.
///
/// Inputs are expected in [0, 1]; out-of-range values are clamped first so the
/// result always stays in [0, 1].
///
/// # Examples
///
/// ```
/// use dialectic_semantics::dfquad_aggregate;
///
/// assert_eq!(dfquad_aggregate(Vec::new()), 0.0);
/// assert_eq!(dfquad_aggregate([0.5]), 0.5);
/// assert_eq!(dfquad_aggregate([0.5, 0.5]), 0.75);
/// ```
pub fn dfquad_aggregate<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    1.0 - values
        .into_iter()
        .map(|v| 1.0 - v.clamp(0.0, 1.0))
        .product::<f64>()
}

/// Net influence on an argument: support force minus attack force, in [-1, 1]
pub fn influence(support_force: f64, attack_force: f64) -> f64 {
    support_force - attack_force
}

/// Value an argument's strength is pulled toward
///
/// Positive influence interpolates from `base_score` up toward 1, negative
/// influence from `base_score` down toward 0. Zero influence leaves the base
/// score unchanged.
pub fn target_strength(base_score: f64, influence: f64) -> f64 {
    if influence >= 0.0 {
        base_score + (1.0 - base_score) * influence
    } else {
        base_score + base_score * influence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregates_to_zero() {
        assert_eq!(dfquad_aggregate(Vec::new()), 0.0);
    }

    #[test]
    fn test_single_value_passes_through() {
        assert!((dfquad_aggregate([0.3]) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_saturates_at_one() {
        assert_eq!(dfquad_aggregate([1.0, 0.2]), 1.0);
        assert!((dfquad_aggregate([0.9, 0.9, 0.9]) - 0.999).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        assert_eq!(dfquad_aggregate([1.5]), 1.0);
        assert_eq!(dfquad_aggregate([-0.5]), 0.0);
    }

    #[test]
    fn test_target_without_influence_is_base() {
        assert_eq!(target_strength(0.37, 0.0), 0.37);
    }

    #[test]
    fn test_target_extremes() {
        assert_eq!(target_strength(0.4, 1.0), 1.0);
        assert_eq!(target_strength(0.4, -1.0), 0.0);
    }

    #[test]
    fn test_target_interpolation() {
        // 0.5 + 0.5 * 0.5
        assert_eq!(target_strength(0.5, 0.5), 0.75);
        // 0.5 + 0.5 * -0.5
        assert_eq!(target_strength(0.5, -0.5), 0.25);
    }

    #[test]
    fn test_influence_cancels() {
        assert_eq!(influence(0.5, 0.5), 0.0);
        assert_eq!(influence(0.0, 0.75), -0.75);
    }
}
