//! Event probe demo
//!
//! Opens a window, logs every event the backend reports, and paces the poll
//! loop at 60 fps. Pressing Escape closes the window.

use std::time::Instant;

use winbridge::{
    create_window, CursorMode, FrameLimiter, KeyCode, UserData, WindowBounds, WindowConfig,
    WindowEvents, WindowStyles,
};

/// Counters shared with the callbacks through the user-data pointer.
#[derive(Default)]
struct ProbeStats {
    events: u64,
    escape_pressed: bool,
}

/// Recover the counters from the user-data pointer. Deliveries that arrive
/// before the pointer is installed carry no counters.
fn stats(user_data: UserData) -> Option<&'static mut ProbeStats> {
    if user_data.is_null() {
        return None;
    }
    Some(unsafe { &mut *(user_data as *mut ProbeStats) })
}

fn count_event(user_data: UserData) {
    if let Some(stats) = stats(user_data) {
        stats.events += 1;
    }
}

fn build_events() -> WindowEvents {
    let mut events = WindowEvents::default();
    events.on_close = Some(Box::new(|user_data| {
        count_event(user_data);
        log::info!("close requested");
        true
    }));
    events.on_resize = Some(Box::new(|user_data, width, height| {
        count_event(user_data);
        log::info!("resized to {width}x{height}");
    }));
    events.on_move = Some(Box::new(|user_data, x, y| {
        count_event(user_data);
        log::info!("moved to ({x}, {y})");
    }));
    events.on_focus = Some(Box::new(|user_data, focused| {
        count_event(user_data);
        log::info!("focus: {focused}");
    }));
    events.on_mouse_enter = Some(Box::new(|user_data| {
        count_event(user_data);
        log::info!("mouse entered");
    }));
    events.on_mouse_leave = Some(Box::new(|user_data| {
        count_event(user_data);
        log::info!("mouse left");
    }));
    events.on_mouse_down = Some(Box::new(|user_data, position, button| {
        count_event(user_data);
        log::info!("{button:?} down at ({}, {})", position.x, position.y);
    }));
    events.on_mouse_wheel = Some(Box::new(|user_data, _position, offset| {
        count_event(user_data);
        log::info!("wheel ({}, {})", offset.x, offset.y);
    }));
    events.on_key_down = Some(Box::new(|user_data, code, modifiers, repeat| {
        if let Some(stats) = stats(user_data) {
            stats.events += 1;
            if code == KeyCode::Escape {
                stats.escape_pressed = true;
            }
        }
        log::info!("key down: {} [{modifiers:?}] repeat={repeat}", code.name());
    }));
    events.on_key_typed = Some(Box::new(|user_data, character, _modifiers| {
        count_event(user_data);
        log::info!("typed: {character:?}");
    }));
    events
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Creating window...");

    let mut probe_stats = Box::new(ProbeStats::default());
    let mut window = create_window(
        "winbridge event probe",
        WindowBounds::default(),
        WindowStyles::DEFAULT,
        WindowConfig::default(),
        Some(build_events()),
    )?;
    window.set_user_data(&mut *probe_stats as *mut ProbeStats as UserData);
    window.set_cursor_mode(CursorMode::Normal);
    window.set_limit_events(true);

    log::info!("Window created, entering poll loop");
    let mut limiter = FrameLimiter::new(60);
    let started = Instant::now();
    let mut frames: u64 = 0;

    while !window.should_close() {
        limiter.start_frame();
        window.poll_events();
        if probe_stats.escape_pressed {
            window.set_should_close(true);
        }
        frames += 1;
        limiter.end_frame();
    }

    log::info!(
        "closing after {frames} frames, {} events in {:.1}s",
        probe_stats.events,
        started.elapsed().as_secs_f32()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_ignores_uninstalled_pointer() {
        assert!(stats(std::ptr::null_mut()).is_none());
        // Counting against a missing pointer is a no-op, not a crash.
        count_event(std::ptr::null_mut());
    }

    #[test]
    fn test_stats_recovers_installed_pointer() {
        let mut probe = ProbeStats::default();
        let user_data = &mut probe as *mut ProbeStats as UserData;
        count_event(user_data);
        count_event(user_data);
        assert_eq!(probe.events, 2);
    }
}
