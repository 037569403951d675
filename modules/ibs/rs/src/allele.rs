use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

/// Allele is a value compared by state (`PartialEq`) that may be missing.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait Allele: PartialEq {
    /// Whether the allele is missing (not called).
    fn is_missing(&self) -> bool;
}

macro_rules! impl_allele_for_int {
    ($($t:ty),*) => {
        $(
            /// Zero codes a missing allele.
            impl Allele for $t {
                #[inline(always)]
                fn is_missing(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_allele_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Allele for char {
    fn is_missing(&self) -> bool {
        *self == '\0'
    }
}

impl Allele for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Allele for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Allele for Option<T> {
    fn is_missing(&self) -> bool {
        self.is_none()
    }
}
