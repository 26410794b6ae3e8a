//! Timestamped console logging.
//!
//! Messages go to standard error so reports written to standard output stay clean.
//! Per-station sweep events are only printed when `WINGBOX_LOG_EVENTS` is set.

#[doc(hidden)]
pub use chrono;

/// Environment variable enabling [`event!`](crate::event) output.
pub const EVENTS_ENV: &str = "WINGBOX_LOG_EVENTS";

/// Log a progress message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!("\x1b[32m[INFO] [{}]\x1b[0m {}", $crate::logger::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// Log a recoverable problem, such as a violated design limit.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("\x1b[35m[WARN] [{}]\x1b[0m {}", $crate::logger::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// Log a failure.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("\x1b[31m[ERROR][{}]\x1b[0m {}", $crate::logger::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// Log a fine-grained event when `WINGBOX_LOG_EVENTS` is set.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var_os($crate::logger::EVENTS_ENV).is_some() {
            eprintln!("\x1b[36m[EVENT][{}]\x1b[0m {}", $crate::logger::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}
