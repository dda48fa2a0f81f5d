pub mod analysis;
pub mod api;
pub mod cli;
pub mod decode;
pub mod error;
#[cfg(feature = "json")]
pub mod protocol;
pub mod selection;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{select, SliceSelector};
pub use cli::report::CoverageReport;
pub use error::{CtSliceError, Result};
pub use types::*;
