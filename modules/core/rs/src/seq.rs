use std::any::{Any, TypeId};

use eyre::Result;

use crate::Error;

/// Zip two equally long slices into a flat vector `[a0, b0, a1, b1, ...]`.
pub fn interleave<T: Clone>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        }
        .into());
    }

    Ok(itertools::interleave(a.iter().cloned(), b.iter().cloned()).collect())
}

/// Check that every item has exactly the runtime type `T`.
/// Short-circuits on the first mismatch; an empty input is uniform.
pub fn all_same_type<'a, T: Any>(items: impl IntoIterator<Item = &'a dyn Any>) -> bool {
    let expected = TypeId::of::<T>();
    items.into_iter().all(|x| x.type_id() == expected)
}

/// Keep only the first element of each pair.
pub fn first_items<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> Vec<A> {
    let pairs: Vec<(A, B)> = pairs.into_iter().collect();
    pairs.into_iter().map(|(first, _)| first).collect()
}
