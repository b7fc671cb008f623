/// Radiotray-NG error types
pub mod error;
/// Player process launch and supervision
pub mod process;
/// D-Bus proxy trait definition
pub mod proxy;
/// Typed client over the control interface
pub mod service;
/// Player state and command types
pub mod types;

pub use error::*;
pub use process::*;
pub use proxy::*;
pub use service::*;
pub use types::*;
