//! Application intake and review: one application per student, with room
//! occupancy reconciled on every status change.

pub mod domain;
pub mod ledger;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{Application, ApplicationId, ApplicationStatus, ApplicationView, UserId};
pub use ledger::ApplicationLedger;
pub use router::application_router;
