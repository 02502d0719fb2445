//! # winbridge
//!
//! A cross-platform abstraction over native operating-system windowing.
//!
//! winbridge creates top-level windows, pumps the host's event queue, and
//! re-exposes window and input events through a uniform callback model. The
//! application links against one abstract [`Window`] contract and gets the
//! same behavior whether the backend is the Win32 message queue, the AppKit
//! run loop, or the in-process headless queue used on other targets and in
//! tests.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use winbridge::{
//!     create_window, FrameLimiter, WindowBounds, WindowConfig, WindowEvents,
//!     WindowStyles,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut events = WindowEvents::default();
//!     events.on_resize = Some(Box::new(|_user, width, height| {
//!         println!("resized to {width}x{height}");
//!     }));
//!
//!     let mut window = create_window(
//!         "My Window",
//!         WindowBounds::default(),
//!         WindowStyles::DEFAULT,
//!         WindowConfig::default(),
//!         Some(events),
//!     )?;
//!
//!     let mut limiter = FrameLimiter::new(60);
//!     while !window.should_close() {
//!         limiter.start_frame();
//!         window.poll_events();
//!         // ... render against window.get_native_handle() ...
//!         limiter.end_frame();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Event delivery
//!
//! `poll_events` synchronously drains every native notification queued since
//! the previous call and invokes the registered callbacks in arrival order.
//! Callbacks that are not registered are no-ops, never errors. With the
//! `limit-events` feature (on by default), side-effect-free events such as
//! resize and mouse move are delivered at most once per poll cycle.
//!
//! ## Threading
//!
//! Windows are single-threaded and cooperative: create, poll, and destroy a
//! window on the same thread. Multiple windows may coexist on that thread
//! with fully disjoint state.

pub mod config;
pub mod cursor;
pub mod error;
pub mod events;
pub mod frame_limiter;
pub mod input;
pub mod platform;
pub mod window;

pub use config::{WindowBounds, WindowConfig, WindowStyles};
pub use cursor::CursorMode;
pub use error::{WindowError, WindowResult};
pub use events::{EventKind, UserData, WindowEvents};
pub use frame_limiter::FrameLimiter;
pub use input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};
pub use window::{apply_window_events, create_shared_window, create_window, Window};
