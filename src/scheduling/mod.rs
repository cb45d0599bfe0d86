//! Cooperative, tick-driven scheduling shared by the session and the scenery rings.

mod event_queue;


pub use event_queue::{EventHandle, EventQueue};
