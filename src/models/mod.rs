//! Models module
//!
//! Typed request and response shapes for the API resources.

mod params;
mod types;

pub use params::ListParams;
pub use types::{
    ApiCallStatus, ApiCallWithPrice, ApiToken, CreatedAtSortMode, FileConversion,
    FileExportFormat, FileImportFormat, User,
};

#[cfg(test)]
mod tests;
