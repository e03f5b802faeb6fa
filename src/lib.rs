mod error;
pub mod google;

pub use error::{Error, Result};
