//! Colored console logging used throughout the session core and the headless driver.
//!
//! All macros prefix the message with a level tag and a UTC wall-clock stamp. The stamp
//! is purely cosmetic; the core never reads wall-clock time for its own logic.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("\x1b[31m[ERROR][{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// Logs and panics. Reserved for logic defects, never for user-reachable states.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!("\x1b[1;31m[FATAL][{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! score {
    ($($arg:tt)*) => {
        println!("\x1b[1;34m[SCORE][{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// High-frequency tracing (placements, evaluations, ring activations).
/// Only printed when `LOG_CALC_RUSH_EVENTS` is set.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("LOG_CALC_RUSH_EVENTS").is_ok() {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}
