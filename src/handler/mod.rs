//! Request handler module
//!
//! Responsible for request routing dispatch: registered page routes first,
//! then static assets, then 404.

pub mod pages;
pub mod router;
pub mod routes;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
