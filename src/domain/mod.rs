pub mod errors;
pub mod metrics;
pub mod panel;
pub mod timeline;
