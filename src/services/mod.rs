/// MPRIS service implementation published for desktop controllers.
pub mod mpris;
/// Client side of the Radiotray-NG control interface.
pub mod radiotray;
