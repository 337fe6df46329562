//! Logging macros.
//!
//! With the `logging` feature these forward to the `log` facade; without it
//! they compile to nothing while still type-checking their arguments.

#[cfg(feature = "logging")]
macro_rules! engine_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! engine_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}
