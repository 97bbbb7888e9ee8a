// Scroll-driven presentation: viewport tracking for the reveal animation and
// the decorative parallax offsets in the hero.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_BASE_DELAY_SECS: f64 = 0.3;
const REVEAL_STAGGER_SECS: f64 = 0.2;
const PARALLAX_RANGE_PX: f64 = 50.0;

/// Tracks whether `node` intersects the viewport, with `amount` as the
/// observer threshold. The observer stays attached for the component's whole
/// life, so an element that scrolls fully out flips back to `false` and its
/// entrance replays when it comes back in.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, amount)| {
                let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                            in_view.set(entry.is_intersecting());
                        }
                    }
                }) as Box<dyn FnMut(js_sys::Array)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(*amount));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();
                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (node, amount),
        );
    }
    *in_view
}

/// Vertical drift for the two hero blobs, recomputed on every scroll and
/// resize from the tracked container's position.
#[hook]
pub fn use_parallax(node: NodeRef) -> (f64, f64) {
    let offsets = use_state(|| (0.0, 0.0));
    {
        let offsets = offsets.clone();
        use_effect_with_deps(
            move |node| {
                let window = web_sys::window().unwrap();
                let node = node.clone();
                let listener_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(element) = node.cast::<Element>() {
                        let viewport = listener_window
                            .inner_height()
                            .ok()
                            .and_then(|value| value.as_f64())
                            .unwrap_or(0.0);
                        let rect = element.get_bounding_client_rect();
                        let progress = scroll_progress(rect.top(), rect.height(), viewport);
                        offsets.set(parallax_offsets(progress));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "resize",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial position, before any scroll happens.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            node,
        );
    }
    *offsets
}

/// How far the container has moved through the viewport, 0.0 when its top
/// reaches the viewport bottom and 1.0 when its bottom passes the viewport
/// top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let total = viewport_height + height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / total).clamp(0.0, 1.0)
}

/// Blob offsets in px for a given progress: the first drifts up to -50, the
/// second down to +50.
pub fn parallax_offsets(progress: f64) -> (f64, f64) {
    (-PARALLAX_RANGE_PX * progress, PARALLAX_RANGE_PX * progress)
}

/// Entrance delay for the nth child of a reveal group.
pub fn stagger_delay_secs(index: usize) -> f64 {
    REVEAL_BASE_DELAY_SECS + REVEAL_STAGGER_SECS * index as f64
}

/// Inline style carrying the staggered entrance delay.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.1}s", stagger_delay_secs(index))
}

/// Class pair toggling a reveal group between its hidden and visible state.
pub fn reveal_class(visible: bool) -> Classes {
    classes!("reveal", visible.then(|| "visible"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scroll_progress_range() {
        // Container top at the viewport bottom: nothing entered yet.
        assert!(close(scroll_progress(800.0, 2000.0, 800.0), 0.0));
        // Container bottom at the viewport top: fully passed.
        assert!(close(scroll_progress(-2000.0, 2000.0, 800.0), 1.0));
        // Halfway through.
        assert!(close(scroll_progress(-600.0, 2000.0, 800.0), 0.5));
    }

    #[test]
    fn test_scroll_progress_clamps() {
        assert!(close(scroll_progress(5000.0, 2000.0, 800.0), 0.0));
        assert!(close(scroll_progress(-9000.0, 2000.0, 800.0), 1.0));
        assert!(close(scroll_progress(0.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn test_parallax_offsets_are_linear_and_opposed() {
        assert_eq!(parallax_offsets(0.0), (0.0, 0.0));
        let (up, down) = parallax_offsets(1.0);
        assert!(close(up, -50.0));
        assert!(close(down, 50.0));
        let (up, down) = parallax_offsets(0.5);
        assert!(close(up, -25.0));
        assert!(close(down, 25.0));
    }

    #[test]
    fn test_stagger_delays() {
        assert!(close(stagger_delay_secs(0), 0.3));
        assert!(close(stagger_delay_secs(1), 0.5));
        assert!(close(stagger_delay_secs(4), 1.1));
        assert_eq!(stagger_style(3), "animation-delay: 0.9s");
    }

    #[test]
    fn test_reveal_class_states() {
        assert_eq!(reveal_class(false).to_string(), "reveal");
        assert_eq!(reveal_class(true).to_string(), "reveal visible");
    }

    #[test]
    fn test_reveal_follows_intersection_sequence() {
        // Scrolling in, out and back in again: the state always mirrors the
        // latest observation, never latches.
        let mut visible = false;
        for (observed, expected) in [(true, true), (false, false), (true, true)] {
            visible = observed;
            assert_eq!(reveal_class(visible).contains("visible"), expected);
        }
    }
}
