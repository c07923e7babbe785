//! Game session state machine
//!
//! `Playing` → (swap) → `Playing` | `Won` | `Lost`. Won and lost are terminal.

mod state;

pub use state::{GameSession, SessionStatus, SwapError};
