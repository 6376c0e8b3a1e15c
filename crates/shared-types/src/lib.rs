pub mod config;
pub mod error;

// Club domain modules
pub mod event;
pub mod membership;
pub mod navigation;

pub use config::*;
pub use error::*;
pub use event::*;
pub use membership::*;
pub use navigation::*;
