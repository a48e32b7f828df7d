//! Graph edge keys.
//!
//! An [`EdgeKey`] names the directed edge `source -> destination` and owns its
//! `"<source>|<destination>"` byte form so it can travel through byte-oriented
//! storage paths. It compares numerically, never through its bytes, and
//! treats a destination of [`ANY_DESTINATION`] as a wildcard when testing
//! equality. [`EdgeOrd`] gives the exact, totally ordered identity needed by
//! sorted and hashed containers.
pub mod codec;
mod key;
mod ord;

pub use key::{EdgeKey, ANY_DESTINATION};
pub use ord::EdgeOrd;
