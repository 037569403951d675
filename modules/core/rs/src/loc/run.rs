use std::fmt::Display;
use std::ops::RangeInclusive;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

/// Run is a closed span of indices [start, stop] within a sequence.
/// Run finders produce runs where some condition holds for every element,
/// the interval stamper consumes them as write targets.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve, Getters)]
pub struct Run {
    #[getter(copy)]
    start: usize,
    #[getter(copy)]
    stop: usize,
}

impl Run {
    pub fn new(start: usize, stop: usize) -> Result<Self> {
        ensure!(
            start <= stop,
            "Invalid run: start ({start}) > stop ({stop})"
        );
        Ok(Self { start, stop })
    }

    /// # Safety
    ///
    /// This function is unsafe because it doesn't check that `start <= stop`.
    #[inline(always)]
    pub unsafe fn new_unchecked(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop);
        Self { start, stop }
    }

    /// Number of elements covered by the run.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stop - self.start + 1
    }

    /// Distance between the first and the last index, i.e. `len() - 1`.
    /// This is the value compared against the minimum length by the run finders.
    pub fn span(&self) -> usize {
        self.stop - self.start
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.stop
    }

    /// Strict: runs separated by a single index don't touch.
    pub fn touches(&self, other: &Self) -> bool {
        self.stop + 1 == other.start || other.stop + 1 == self.start
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.stop
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.stop)
    }
}

impl TryFrom<(usize, usize)> for Run {
    type Error = eyre::Report;

    fn try_from(value: (usize, usize)) -> Result<Self> {
        Self::new(value.0, value.1)
    }
}

impl TryFrom<RangeInclusive<usize>> for Run {
    type Error = eyre::Report;

    fn try_from(value: RangeInclusive<usize>) -> Result<Self> {
        Self::new(*value.start(), *value.end())
    }
}

impl From<Run> for (usize, usize) {
    fn from(run: Run) -> Self {
        (run.start, run.stop)
    }
}

impl From<Run> for RangeInclusive<usize> {
    fn from(run: Run) -> Self {
        run.start..=run.stop
    }
}

impl PartialEq<(usize, usize)> for Run {
    fn eq(&self, other: &(usize, usize)) -> bool {
        self.start == other.0 && self.stop == other.1
    }
}

impl PartialEq<Run> for (usize, usize) {
    fn eq(&self, other: &Run) -> bool {
        self.0 == other.start && self.1 == other.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() {
        assert_eq!(Run::new(0, 10).unwrap(), (0, 10));
        assert_eq!(Run::new(3, 3).unwrap(), (3, 3));
        assert!(Run::new(1, 0).is_err());
        assert!(Run::try_from((5, 4)).is_err());
        assert_eq!(Run::try_from(2..=4).unwrap(), (2, 4));
        assert_eq!(unsafe { Run::new_unchecked(1, 2) }, (1, 2));
    }

    #[test]
    fn test_len_and_span() {
        let run = Run::new(2, 5).unwrap();
        assert_eq!(run.len(), 4);
        assert_eq!(run.span(), 3);
        assert_eq!(Run::new(7, 7).unwrap().len(), 1);
        assert_eq!(Run::new(7, 7).unwrap().span(), 0);
    }

    #[test]
    fn test_contains() {
        let run = Run::new(1, 3).unwrap();
        assert_eq!(run.contains(0), false);
        assert_eq!(run.contains(1), true);
        assert_eq!(run.contains(3), true);
        assert_eq!(run.contains(4), false);
        assert_eq!(run.indices().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_touches_and_intersects() {
        let run = Run::new(2, 4).unwrap();
        assert_eq!(run.touches(&Run::new(5, 6).unwrap()), true);
        assert_eq!(run.touches(&Run::new(0, 1).unwrap()), true);
        assert_eq!(run.touches(&Run::new(6, 7).unwrap()), false);
        assert_eq!(run.intersects(&Run::new(4, 8).unwrap()), true);
        assert_eq!(run.intersects(&Run::new(5, 8).unwrap()), false);
    }

    #[test]
    fn test_conversions() {
        let run = Run::new(4, 9).unwrap();
        assert_eq!(<(usize, usize)>::from(run), (4, 9));
        assert_eq!(RangeInclusive::from(run), 4..=9);
        assert_eq!(run.dissolve(), (4, 9));
        assert_eq!(run.to_string(), "[4, 9]");
    }
}
