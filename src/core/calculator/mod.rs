pub mod adjacent;
pub mod policy;
pub mod session;
pub mod source;
pub mod weekly;

pub use policy::{PairingPolicy, WeekMatch};
pub use source::{EventSource, WeekFilter};
pub use weekly::WeeklyHoursCalculator;
