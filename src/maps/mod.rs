pub mod ffi;
pub mod live_location;
pub mod marker_controller;

pub use live_location::LiveLocationTracker;
pub use marker_controller::MarkerController;
