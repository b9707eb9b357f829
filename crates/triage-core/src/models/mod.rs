//! Domain models for the triage system.

mod disease;
mod doctor;
mod patient;
mod ranking;
mod symptom;
mod visit;

pub use disease::*;
pub use doctor::*;
pub use patient::*;
pub use ranking::*;
pub use symptom::*;
pub use visit::*;
