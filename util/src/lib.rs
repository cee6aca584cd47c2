//! Defines one-off utility functions and helpers used throughout the
//! workspace

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::needless_pass_by_value)]

pub mod concurrency;
pub mod errors;
pub mod logging;
pub mod metered_channels;
