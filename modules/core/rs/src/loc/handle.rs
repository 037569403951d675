use std::fmt::Debug;

/// Handle is a non-owning reference to a caller-side object: an individual, a chromosome, etc.
/// Depending on the context, can be an identifier, a borrowed reference, a label, etc.
pub trait Handle: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Handle for T {}
