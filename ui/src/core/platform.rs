//! Platform helpers for detached futures and browser window access.

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(future);
}

/// Registers a window resize listener. The callback leaks for the lifetime
/// of the session, which matches the page-long listener in the browser.
#[cfg(target_arch = "wasm32")]
pub fn on_window_resize(mut callback: impl FnMut() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    if let Some(window) = web_sys::window() {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| callback());
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_window_resize(_callback: impl FnMut() + 'static) {}
