use crate::Allele;

/// Diploid genotype: an unordered pair of alleles.
pub type Genotype<A> = (A, A);

/// Number of alleles (0, 1 or 2) shared by state between two genotypes.
///
/// Returns `None` if any of the four alleles is missing.
pub fn ibs<A: Allele>(genotype1: &Genotype<A>, genotype2: &Genotype<A>) -> Option<u8> {
    let (a, b) = genotype1;
    let (c, d) = genotype2;

    if a.is_missing() || b.is_missing() || c.is_missing() || d.is_missing() {
        return None;
    }
    Some(state(a == c, a == d, b == c, b == d))
}

/// Same as [`ibs`], but reports missing genotypes as `missingval`.
pub fn ibs_or<A: Allele, M: From<u8>>(
    genotype1: &Genotype<A>,
    genotype2: &Genotype<A>,
    missingval: M,
) -> M {
    ibs(genotype1, genotype2).map_or(missingval, M::from)
}

#[inline(always)]
pub(crate) fn state(a_eq_c: bool, a_eq_d: bool, b_eq_c: bool, b_eq_d: bool) -> u8 {
    if (a_eq_c && b_eq_d) || (a_eq_d && b_eq_c) {
        2
    } else if a_eq_c || a_eq_d || b_eq_c || b_eq_d {
        1
    } else {
        0
    }
}
