//! Logging facilities.
//!
//! The workspace uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("type_shorthand_core=trace,type_shorthand_expand=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Tree mutation target.
    pub const DOCUMENT: &str = "type_shorthand_core::document";
    /// Stylesheet reader target.
    pub const PARSER: &str = "type_shorthand_core::parser";
}
