/// A condition that sequence elements must satisfy to be part of a run.
pub trait Predicate<T> {
    /// Returns `true` if the value qualifies.
    ///
    /// Run finders call this once per element in order; `runs` additionally calls it
    /// a second time on the last element when closing a trailing run.
    fn test(&mut self, value: &T) -> bool;
}

/// Any function that takes a reference to `T` and returns a `bool` is a predicate.
impl<T, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, value: &T) -> bool {
        self(value)
    }
}
