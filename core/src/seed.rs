use alloc::string::String;
use core::fmt::Write;

/// Decimal digits in a generated seed.
pub const SEED_DIGITS: usize = 8;

/// Seed of [`SEED_DIGITS`] decimal digits taken from a uniform `[0, 1)` sample, the first digits after the point.
///
/// Out of range samples are clamped, so `Math.random()` or any other source can be passed straight in.
pub fn seed_from_unit(sample: f64) -> String {
    const SCALE: u32 = 10u32.pow(SEED_DIGITS as u32);

    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let value = ((sample * f64::from(SCALE)) as u32).min(SCALE - 1);
    alloc::format!("{value:0width$}", width = SEED_DIGITS)
}

/// Percent-encodes a seed for use as a single URL path segment.
pub fn encode_path_segment(seed: &str) -> String {
    let mut encoded = String::with_capacity(seed.len());
    for byte in seed.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(byte.into());
        } else {
            // writing into a String cannot fail
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
