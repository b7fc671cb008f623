/// MPRIS2 interface implementation forwarding to the player
pub mod adapter;
/// Mapping of player state into MPRIS values
pub mod metadata;
/// Poll-based state observation and property publishing
pub mod monitoring;

pub use adapter::*;
pub use metadata::*;
pub use monitoring::*;
