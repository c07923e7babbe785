//! Command implementations

pub mod audit;
pub mod play;
pub mod today;

pub use audit::{
    AuditResult, SeedReport, Violation, audit_progress_bar, audit_seed, run_audit,
    scramble_violations,
};
pub use play::{parse_swap, play_session, run_play};
pub use today::{TodayInfo, today_info};
