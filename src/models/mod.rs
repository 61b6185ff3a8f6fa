pub mod clock_event;
pub mod event_kind;
pub mod records;
pub mod role;
pub mod user;
pub mod user_status;
