//! `suite_shared`
//!
//! Shared libraries used by the report runner and its tests.
//!
//! Design goals:
//! - No global state: callers construct and own their aggregator.
//! - Rendering is a pure function of a snapshot.
//! - Results and config come in as JSON; file IO stays at the edges.
//! - No `unsafe`.

pub mod aggregator;
pub mod config;
pub mod input;
pub mod report;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::aggregator::*;
    pub use crate::config::*;
    pub use crate::input::*;
    pub use crate::report::*;
}
