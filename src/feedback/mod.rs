//! Feedback coloring
//!
//! Recomputes every cell's status from scratch for a candidate grid against the
//! solution. Recoloring only reads letters, so it is idempotent.

mod colorer;

pub use colorer::{is_won, recolor};
