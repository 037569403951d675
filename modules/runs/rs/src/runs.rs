use pedscan_core_rs::loc::Run;

use crate::Predicate;

/// Default minimum `stop - start` distance for a run to be reported.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Find maximal runs of consecutive elements satisfying the predicate.
///
/// A run `[start, stop]` is kept only if `stop - start >= minlength`, i.e. it covers at least
/// `minlength + 1` elements.
///
/// A run reaching the end of the sequence is reported only if the predicate still holds when
/// evaluated once more on the last element. With a pure predicate this is always the case, but
/// stateful predicates may observe the extra call.
pub fn runs<T, P: Predicate<T>>(sequence: &[T], mut predicate: P, minlength: usize) -> Vec<Run> {
    let mut result = Vec::new();
    let last = match sequence.len().checked_sub(1) {
        Some(last) => last,
        None => return result,
    };

    let mut inrun = false;
    let mut start = 0;
    for (ind, value) in sequence.iter().enumerate() {
        let qualifies = predicate.test(value);
        if !inrun && qualifies {
            inrun = true;
            start = ind;
        } else if inrun && !qualifies {
            inrun = false;
            let stop = ind - 1;
            if stop - start >= minlength {
                result.push(unsafe { Run::new_unchecked(start, stop) });
            }
        }
    }

    if inrun && predicate.test(&sequence[last]) && last - start >= minlength {
        result.push(unsafe { Run::new_unchecked(start, last) });
    }
    result
}
