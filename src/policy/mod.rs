/// Band-based accept/reject decision for a single image
pub mod acceptance;
/// Top strip scan for non-white pixels
pub mod contamination;

pub use acceptance::{AcceptancePolicy, Decision, RejectionReason};
pub use contamination::{Contaminant, TopStripDetector};
