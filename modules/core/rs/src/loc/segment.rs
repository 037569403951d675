use std::fmt::Display;

use derive_getters::{Dissolve, Getters};

use super::handle::Handle;

/// Segment is a chromosomal region shared (e.g. identical-by-descent) between two individuals.
///
/// Individuals and the chromosome are stored as caller-provided handles (ids, borrowed references, ...),
/// the segment records the association but never owns them.
///
/// Genetic-map bounds are either both present or both equal to [`Segment::UNMAPPED`].
/// Physical bounds are always present.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve, Getters)]
pub struct Segment<Ind: Handle, Chrom: Handle> {
    individual1: Ind,
    individual2: Ind,
    chromosome: Chrom,
    #[getter(copy)]
    start: i32,
    #[getter(copy)]
    stop: i32,
    #[getter(copy)]
    physical_start: u32,
    #[getter(copy)]
    physical_stop: u32,
}

impl<Ind: Handle, Chrom: Handle> Segment<Ind, Chrom> {
    /// Sentinel used for genetic-map bounds when they are unknown.
    pub const UNMAPPED: i32 = -1;

    /// If either `start` or `stop` is missing, both are set to [`Segment::UNMAPPED`].
    pub fn new(
        individual1: Ind,
        individual2: Ind,
        chromosome: Chrom,
        start: Option<i32>,
        stop: Option<i32>,
        physical_start: u32,
        physical_stop: u32,
    ) -> Self {
        let (start, stop) = match (start, stop) {
            (Some(start), Some(stop)) => (start, stop),
            _ => (Self::UNMAPPED, Self::UNMAPPED),
        };

        Self {
            individual1,
            individual2,
            chromosome,
            start,
            stop,
            physical_start,
            physical_stop,
        }
    }

    /// True if the segment carries genetic-map bounds.
    pub fn is_mapped(&self) -> bool {
        !(self.start == Self::UNMAPPED && self.stop == Self::UNMAPPED)
    }

    pub fn physical_len(&self) -> u32 {
        self.physical_stop.saturating_sub(self.physical_start)
    }

    /// True if `individual` is one of the two carriers.
    pub fn involves(&self, individual: &Ind) -> bool {
        &self.individual1 == individual || &self.individual2 == individual
    }
}

impl<Ind: Handle + Display, Chrom: Handle + Display> Display for Segment<Ind, Chrom> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {}:{}-{} [{}, {}]",
            self.individual1,
            self.individual2,
            self.chromosome,
            self.physical_start,
            self.physical_stop,
            self.start,
            self.stop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() {
        let segment = Segment::new("ind1", "ind2", "chr1", Some(3), Some(10), 1000, 5000);
        assert_eq!(segment.start(), 3);
        assert_eq!(segment.stop(), 10);
        assert_eq!(segment.physical_start(), 1000);
        assert_eq!(segment.physical_stop(), 5000);
        assert_eq!(segment.individual1(), &"ind1");
        assert_eq!(segment.individual2(), &"ind2");
        assert_eq!(segment.chromosome(), &"chr1");
        assert!(segment.is_mapped());
    }

    #[test]
    fn test_missing_bounds_are_forced_together() {
        for (start, stop) in [(None, Some(5)), (Some(5), None), (None, None)] {
            let segment = Segment::new(1u32, 2u32, 0u8, start, stop, 0, 100);
            assert_eq!(segment.start(), -1);
            assert_eq!(segment.stop(), -1);
            assert!(!segment.is_mapped());
            assert_eq!(segment.physical_stop(), 100);
        }
    }

    #[test]
    fn test_borrowed_handles() {
        #[derive(Debug, PartialEq)]
        struct Individual {
            label: String,
        }

        let (a, b) = (
            Individual { label: "a".into() },
            Individual { label: "b".into() },
        );
        let segment = Segment::new(&a, &b, 21u8, Some(0), Some(4), 10, 40);
        assert!(segment.involves(&&a));
        assert!(segment.involves(&&b));
        assert_eq!(segment.individual1().label, "a");
        assert_eq!(segment.physical_len(), 30);
    }

    #[test]
    fn test_display_and_dissolve() {
        let segment = Segment::new(7, 9, "chr2", None, Some(1), 5, 15);
        assert_eq!(segment.to_string(), "7/9 chr2:5-15 [-1, -1]");
        assert_eq!(segment.dissolve(), (7, 9, "chr2", -1, -1, 5, 15));
    }
}
