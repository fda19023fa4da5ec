//! HTTP protocol layer module
//!
//! Response builders and MIME inference, decoupled from specific business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_file_response, build_html_response,
    build_json_response,
};
