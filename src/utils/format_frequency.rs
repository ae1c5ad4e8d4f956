use crate::types::Frequency;

/// Formats a frequency with `decimal_places` digits, rounding ties upwards.
///
/// `{:.N}` alone rounds exact ties to even (`0.125` becomes `0.12`); reports
/// round them up instead (`0.13`).
///
/// # Example
/// ```
/// use char_frequency::format_frequency;
///
/// assert_eq!(format_frequency(0.125, 2), "0.13");
/// assert_eq!(format_frequency(4.0 / 11.0, 2), "0.36");
/// ```
pub fn format_frequency(frequency: Frequency, decimal_places: usize) -> String {
    let scale = 10f64.powi(decimal_places as i32);
    let rounded = (frequency * scale).round() / scale;

    format!("{:.*}", decimal_places, rounded)
}
