use crate::models::WordUnit;

/// Sorts word units in place.
///
/// ### Sorting Order:
/// - **Primary:** match count, ascending.
/// - **Secondary:** word length, ascending.
/// - **Tertiary:** the rendered set of contained characters (e.g. `[t, e, s]`),
///   compared lexicographically.
///
/// The sort is stable, so units tied on all three keys keep their relative order.
pub fn sort_units(units: &mut [WordUnit]) {
    units.sort_by(|a, b| {
        a.match_count()
            .cmp(&b.match_count())
            .then_with(|| a.size().cmp(&b.size()))
            .then_with(|| a.contained_chars_key().cmp(&b.contained_chars_key()))
    });
}
