//! Utility modules: build info, logging.

pub mod build_info;
pub mod logging;
