use crate::Pins;

/// Supplies one bounded roll at a time.
///
/// `next(bound)` yields a value in `[0, bound)` for any well-behaved
/// implementation. The engine takes this as a trait object at every seam
/// that rolls, so games run fully deterministic under test.
pub trait RollSource {
    fn next(&mut self, bound: Pins) -> Pins;
}
