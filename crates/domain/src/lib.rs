#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod calendar;
mod catalog;
mod completion;
mod error;
mod name;
mod pending;
mod plan;
mod progress;
mod service;
mod session;

pub use calendar::*;
pub use catalog::*;
pub use completion::*;
pub use error::*;
pub use name::*;
pub use pending::*;
pub use plan::*;
pub use progress::*;
pub use service::*;
pub use session::*;
