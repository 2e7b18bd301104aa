pub use crate::domain::assignment::Assignment;
pub use crate::domain::participant::Participant;
