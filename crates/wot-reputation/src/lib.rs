// crates/wot-reputation/src/lib.rs
//
// wot-reputation: Caronni trust propagation and the Web-of-Trust container.
//
// Trust of a source in a target is derived from the link probabilities along
// every parent chain leading into the target. Independent chains are merged
// with a probabilistic OR, so corroboration raises trust without ever
// exceeding 1.0.

pub mod caronni;
pub mod web_of_trust;

pub use caronni::{probabilistic_or, Caronni, CaronniConfig};
pub use web_of_trust::WebOfTrust;
