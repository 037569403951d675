use derive_more::{Display, Error};

/// Typed failures raised by the sequence helpers and scanners.
///
/// Public functions return `eyre::Result`; the variant can be recovered with
/// `report.downcast_ref::<Error>()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, Error)]
pub enum Error {
    #[display("Sequences must have the same length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
    #[display("Index {index} is out of bounds for an array of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::LengthMismatch { left: 1, right: 2 }.to_string(),
            "Sequences must have the same length, got 1 and 2"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 10, size: 5 }.to_string(),
            "Index 10 is out of bounds for an array of size 5"
        );
    }

    #[test]
    fn test_downcast_from_report() {
        let report: eyre::Report = Error::LengthMismatch { left: 3, right: 0 }.into();
        assert_eq!(
            report.downcast_ref::<Error>(),
            Some(&Error::LengthMismatch { left: 3, right: 0 })
        );
    }
}
