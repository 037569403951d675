pub use handle::Handle;
pub use run::Run;
pub use segment::Segment;

mod handle;
mod run;
mod segment;
