//! Fixed-size raw-row windows over the filtered trip set.

use crate::types::DerivedTrip;

/// Number of raw rows shown per inspection window.
pub const RAW_PAGE_SIZE: usize = 5;

/// Returns up to `size` trips starting at `offset`, in the filtered order.
///
/// At or past the end this returns fewer rows, down to an empty slice - "no
/// more pages" is a normal terminal condition, never an error. The returned
/// slice borrows from `trips`; nothing is copied.
pub fn page(trips: &[DerivedTrip], offset: usize, size: usize) -> &[DerivedTrip] {
    if offset >= trips.len() {
        return &[];
    }
    let end = trips.len().min(offset.saturating_add(size));
    &trips[offset..end]
}
