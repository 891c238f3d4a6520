//! Logging shorthands over `tracing`.
//!
//! `success!` is an `info` event under its own target so the terminal
//! formatter can give it a distinct symbol.

/// Target for plain program output, printed without a level symbol.
pub const PRINT_TARGET: &str = "roster::print";
/// Target for `success!` events.
pub const SUCCESS_TARGET: &str = "roster::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "roster::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
