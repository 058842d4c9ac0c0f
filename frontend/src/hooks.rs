use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// Window `scroll` listener, detached again when dropped.
pub struct ScrollListener {
    window: Window,
    closure: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Run `on_scroll` on every window scroll event. `None` without a window.
    pub fn attach(on_scroll: impl Fn(&Window) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = {
            let window = window.clone();
            Closure::wrap(Box::new(move || on_scroll(&window)) as Box<dyn Fn()>)
        };
        if let Err(err) =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            web_sys::console::error_2(&"failed to attach scroll listener".into(), &err);
        }
        Some(Self {
            window,
            closure,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref())
        {
            web_sys::console::error_2(&"failed to detach scroll listener".into(), &err);
        }
    }
}

/// Whether the window is scrolled further than `threshold` pixels.
///
/// The scroll listener is removed when the calling component unmounts.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let listener = ScrollListener::attach(move |window| {
                scrolled.set(window.scroll_y().unwrap_or(0.0) > threshold);
            });
            move || drop(listener)
        });
    }

    *scrolled
}

/// Percentage of the scrollable height already passed, in `[0, 100]`.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport: f64) -> f64 {
    let scrollable = document_height - viewport;
    if scrollable > 0.0 {
        (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Reading progress of the current document, updated on scroll.
#[hook]
pub fn use_reading_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let listener = ScrollListener::attach(move |window| {
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                let document_height = window
                    .document()
                    .and_then(|doc| doc.document_element())
                    .map(|root| f64::from(root.scroll_height()))
                    .unwrap_or(0.0);
                let scroll_top = window.scroll_y().unwrap_or(0.0);
                progress.set(scroll_progress(scroll_top, document_height, viewport));
            });
            move || drop(listener)
        });
    }

    *progress
}

/// Smooth-scroll the window back to the top.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
