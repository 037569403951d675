pub use allele::Allele;
pub use chromwide::{chromwide_ibs, DEFAULT_MISSING_IBS};
pub use genotype::{ibs, ibs_or, Genotype};

mod allele;
mod chromwide;
mod genotype;
