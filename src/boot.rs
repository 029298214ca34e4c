use std::cell::{Cell, RefCell};

use gloo::events::EventListener;

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
    static LOAD_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Runs `action` once the window has finished loading, or right away when the
/// document is already complete. Later calls are ignored.
pub(crate) fn run_when_loaded(action: fn()) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let complete = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        start_once(action);
        return;
    }
    let listener = EventListener::once(&window, "load", move |_event| {
        gloo::console::log!("window loaded");
        start_once(action);
    });
    LOAD_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}

fn start_once(action: fn()) {
    let already_started = STARTED.with(|flag| flag.replace(true));
    if already_started {
        return;
    }
    action();
}
