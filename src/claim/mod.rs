//! Claims: evaluative statements about a candidate and their supporting evidence.

pub mod record;
pub mod types;

pub use record::{weighted_confidence, Claim};
pub use types::{ClaimFamily, ClaimType, Importance, ReasoningMethod, ReasoningTrace};
