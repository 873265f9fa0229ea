//! Thin wrappers over the browser APIs the page behaviours need.
//! Every helper no-ops (or returns a neutral value) when a target is missing.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::interactions::anchor::{self, AnchorAction, TargetGeometry};
use crate::interactions::environment::Environment;

pub fn detect_environment() -> Environment {
    let Some(window) = window() else {
        return Environment::default();
    };
    let navigator = window.navigator();

    let touch = Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || navigator.max_touch_points() > 0;
    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    // NetworkInformation is not in stable web-sys, so read it reflectively.
    let effective_connection = Reflect::get(&navigator, &JsValue::from_str("connection"))
        .ok()
        .filter(|connection| connection.is_object())
        .and_then(|connection| Reflect::get(&connection, &JsValue::from_str("effectiveType")).ok())
        .and_then(|effective| effective.as_string());
    let intersection_observer =
        Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);

    Environment {
        touch,
        prefers_reduced_motion,
        effective_connection,
        intersection_observer,
    }
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn apply_body_classes(environment: &Environment) {
    if let Some(body) = body() {
        for class in environment.body_classes() {
            let _ = body.class_list().add_1(class);
        }
    }
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn nav_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".navigation").ok().flatten())
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0)
}

fn target_geometry(id: &str) -> Option<TargetGeometry> {
    let window = window()?;
    let target = window.document()?.get_element_by_id(id)?;
    Some(TargetGeometry {
        rect_top: target.get_bounding_client_rect().top(),
        page_y_offset: window.page_y_offset().unwrap_or(0.0),
        nav_height: nav_height(),
    })
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_hash() -> Option<String> {
    window()
        .and_then(|w| w.location().hash().ok())
        .filter(|hash| !hash.is_empty())
}

fn navigate(url: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_href(url) {
            warn!("Navigation to {} failed: {:?}", url, err);
        }
    }
}

/// Scrolls to an in-page anchor, or sends subpages to the home page with the fragment.
pub fn follow_anchor(href: &str) -> AnchorAction {
    let target = anchor::fragment_id(href).and_then(target_geometry);
    let action = anchor::plan(href, target, &current_path());
    match &action {
        AnchorAction::ScrollTo(top) => smooth_scroll_to(*top),
        AnchorAction::Redirect(url) => navigate(url),
        AnchorAction::Ignore | AnchorAction::Stay => {}
    }
    debug!("Anchor {} -> {:?}", href, action);
    action
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Runs `callback` once on the next animation frame.
pub fn request_frame<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        warn!("requestAnimationFrame failed: {:?}", err);
    }
}

type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule_frame(handle: &FrameHandle) {
    if let (Some(window), Some(callback)) = (window(), handle.borrow().as_ref()) {
        if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            warn!("requestAnimationFrame failed: {:?}", err);
        }
    }
}

/// Calls `step` now and then once per animation frame for as long as it returns true.
pub fn animate_frames<F>(mut step: F)
where
    F: FnMut() -> bool + 'static,
{
    if !step() {
        return;
    }
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    let scheduled = handle.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if step() {
            schedule_frame(&scheduled);
        } else {
            // Breaks the self-reference so the closure is freed.
            scheduled.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    schedule_frame(&handle);
}

/// Live `IntersectionObserver`; disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports `isIntersecting` for `target` every time it crosses `threshold`.
pub fn observe_visibility<F>(
    target: &Element,
    threshold: f64,
    root_margin: &str,
    mut on_change: F,
) -> Option<VisibilityObserver>
where
    F: FnMut(bool) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some(VisibilityObserver {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}
