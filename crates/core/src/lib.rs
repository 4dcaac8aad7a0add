#![forbid(unsafe_code)]

pub mod dispatch;
pub mod error;
pub mod model;
pub mod time;

pub use dispatch::{Dispatch, dispatch, resolve_timed, settings_tapped};
pub use error::Error;
pub use time::Clock;
