use crate::types::Percent;

/// Converts a scorer's `[0, 1]` similarity into an integer percentage.
///
/// The value is multiplied by 100 and truncated toward zero, not rounded:
/// `0.999` maps to `99`, never `100`.
///
/// Scorers are contracted to stay within `[0, 1]`. Output outside that range
/// is clamped into it before conversion rather than propagated, and `NaN`
/// maps to `0`.
///
/// ### Example:
/// ```rust
/// use name_matcher::similarity_to_percent;
///
/// assert_eq!(similarity_to_percent(0.999), 99);
/// assert_eq!(similarity_to_percent(1.0), 100);
/// assert_eq!(similarity_to_percent(0.0), 0);
/// ```
pub fn similarity_to_percent(similarity: f64) -> Percent {
    // `as` saturates on out-of-range and NaN float casts, so the clamp only
    // has to bound the scale before truncation.
    (similarity.clamp(0.0, 1.0) * 100.0) as Percent
}
