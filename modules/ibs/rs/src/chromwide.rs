use eyre::Result;
use itertools::izip;

use pedscan_core_rs::Error;

use crate::genotype::state;
use crate::Allele;

/// Code used for sites where any of the four alleles is missing.
pub const DEFAULT_MISSING_IBS: u8 = 64;

/// IBS state at every site of a chromosome for two individuals with haplotypes `(a, b)` and `(c, d)`.
///
/// Sites with a missing allele are coded as `missingval`. All haplotypes must have the same length.
pub fn chromwide_ibs<A: Allele>(
    a: &[A],
    b: &[A],
    c: &[A],
    d: &[A],
    missingval: u8,
) -> Result<Vec<u8>> {
    for other in [b, c, d] {
        if other.len() != a.len() {
            return Err(Error::LengthMismatch {
                left: a.len(),
                right: other.len(),
            }
            .into());
        }
    }

    let mut missing = 0;
    let states: Vec<u8> = izip!(a, b, c, d)
        .map(|(a, b, c, d)| {
            if a.is_missing() || b.is_missing() || c.is_missing() || d.is_missing() {
                missing += 1;
                missingval
            } else {
                state(a == c, a == d, b == c, b == d)
            }
        })
        .collect();

    log::debug!(
        "Computed IBS states for {} sites, {} missing",
        states.len(),
        missing
    );
    Ok(states)
}
