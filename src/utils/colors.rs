//! ANSI color helper utilities for terminal output.
use crate::models::user_status::ClockStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: ClockStatus) -> &'static str {
    match status {
        ClockStatus::ClockedIn => GREEN,
        ClockStatus::ClockedOut => GREY,
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
