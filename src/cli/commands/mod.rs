//! Command implementations

mod allocate;
mod analyze;
mod forecast;
mod init;
mod recipients;
mod risk;

pub use allocate::allocate;
pub use analyze::analyze;
pub use forecast::forecast;
pub use init::init;
pub use recipients::recipients;
pub use risk::risk;
