/// Get the addressable part of the strip, starting at `offset`
///
/// Pixels below the offset are left out. An offset past the end of the
/// strip yields an empty slice.
pub(crate) fn bounded<T>(leds: &mut [T], offset: usize) -> &mut [T] {
    let start = offset.min(leds.len());
    &mut leds[start..]
}
