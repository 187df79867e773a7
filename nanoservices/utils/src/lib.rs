pub mod error;

use error::Error;

pub use error::{CapabilityError, Stage};

pub type SiftResult<T> = Result<T, Error>;
