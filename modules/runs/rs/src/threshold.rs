use derive_getters::{Dissolve, Getters};

use pedscan_core_rs::loc::Run;

use crate::runs::DEFAULT_MIN_LENGTH;

/// Default minimum `stop - start` distance for [`runs_gte_u8`].
pub const DEFAULT_U8_MIN_LENGTH: usize = 1;

/// Find maximal runs of elements `>= minval`, keeping those with `stop - start >= minlength`.
///
/// Unlike [`crate::runs()`], a run reaching the end of the sequence is closed without
/// re-checking the last element.
pub fn runs_gte<T: PartialOrd>(sequence: &[T], minval: T, minlength: usize) -> Vec<Run> {
    scan_gte(sequence.iter(), &minval, minlength)
}

/// Byte specialization of [`runs_gte`]. Callers typically scan IBS states with `minlength = 1`,
/// see [`DEFAULT_U8_MIN_LENGTH`].
pub fn runs_gte_u8(sequence: &[u8], minval: u8, minlength: usize) -> Vec<Run> {
    scan_gte(sequence.iter(), &minval, minlength)
}

#[inline(always)]
fn scan_gte<'a, T: PartialOrd + 'a>(
    sequence: impl Iterator<Item = &'a T>,
    minval: &T,
    minlength: usize,
) -> Vec<Run> {
    let mut result = Vec::new();

    let mut inrun = false;
    let mut start = 0;
    let mut last = None;
    for (ind, value) in sequence.enumerate() {
        if !inrun && value >= minval {
            inrun = true;
            start = ind;
        } else if inrun && value < minval {
            inrun = false;
            let stop = ind - 1;
            if stop - start >= minlength {
                log::trace!("Run [{start}, {stop}] closed at {ind}");
                result.push(unsafe { Run::new_unchecked(start, stop) });
            }
        }
        last = Some(ind);
    }

    if let Some(last) = last {
        if inrun && last - start >= minlength {
            log::trace!("Trailing run [{start}, {last}]");
            result.push(unsafe { Run::new_unchecked(start, last) });
        }
    }
    result
}

/// Threshold-based run finder with its settings bundled together.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve, Getters)]
pub struct ByThreshold<T> {
    threshold: T,
    #[getter(copy)]
    min_length: usize,
}

impl<T: PartialOrd + Clone> ByThreshold<T> {
    pub fn new(threshold: T) -> Self {
        Self {
            threshold,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    pub fn set_threshold(&mut self, threshold: T) -> &mut Self {
        self.threshold = threshold;
        self
    }

    pub fn set_min_length(&mut self, min_length: usize) -> &mut Self {
        self.min_length = min_length;
        self
    }

    pub fn run(&self, sequence: &[T]) -> Vec<Run> {
        runs_gte(sequence, self.threshold.clone(), self.min_length)
    }
}

impl ByThreshold<u8> {
    pub fn run_u8(&self, sequence: &[u8]) -> Vec<Run> {
        runs_gte_u8(sequence, self.threshold, self.min_length)
    }
}
