//! HTTP protocol layer module
//!
//! Response builders and MIME lookup, decoupled from the showcase routing logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_attachment_response, build_file_response,
    build_options_response,
};
