/// Narrow an accumulated channel value to a sample.
///
/// Rounds half to even, then clamps to `[0, 255]`. NaN maps to 0.
pub(crate) fn narrow(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/channel.rs"]
mod tests;
