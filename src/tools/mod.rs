/// Registry operations exposed to front ends
///
/// Each operation takes a params struct and returns a response struct, so the
/// interactive shell and any future front end share the same entry points.

pub mod add;
pub mod find;
pub mod list;

// Re-export tool functions for easy access
pub use add::*;
pub use find::*;
pub use list::*;
