use eyre::{Report, Result};

use pedscan_core_rs::loc::Run;
use pedscan_core_rs::num::PrimInt;
use pedscan_core_rs::Error;

/// Allocate a zeroed array of `size` elements and set every index covered by `intervals` to `value`.
///
/// Intervals are inclusive on both ends and may overlap, later ones win. An interval reaching
/// past the end of the array is an error, nothing is clamped.
pub fn set_intervals_to_value<V, R>(
    intervals: impl IntoIterator<Item = R>,
    size: usize,
    value: V,
) -> Result<Vec<V>>
where
    V: PrimInt,
    R: TryInto<Run>,
    R::Error: Into<Report>,
{
    let mut array = vec![V::zero(); size];
    let mut stamped = 0;

    for interval in intervals {
        let run: Run = interval.try_into().map_err(Into::<Report>::into)?;
        if run.stop() >= size {
            return Err(Error::IndexOutOfBounds {
                index: run.stop(),
                size,
            }
            .into());
        }
        array[run.start()..=run.stop()].fill(value);
        stamped += 1;
    }

    log::debug!("Stamped {stamped} intervals into an array of size {size}");
    Ok(array)
}
