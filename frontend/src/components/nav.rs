use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::interactions::anchor;
use crate::interactions::scroll::{FrameGate, MobileMenu, NavState};
use crate::Route;

pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#packages", "Packages"),
    ("#tools", "Tools"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

/// Delay before a mobile link closes the overlay, so the tap registers visually.
const MOBILE_LINK_DELAY_MS: u32 = 150;

/// Click handler for in-page anchors (`.nav-link`, `.hero-cta`, `.footer-link`).
pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if anchor::fragment_id(href).is_some() {
            e.prevent_default();
            dom::follow_anchor(href);
        }
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let view = {
        let mode = config.nav_mode;
        use_state_eq(move || NavState::new(mode, dom::scroll_y()).view())
    };
    let menu = use_state_eq(MobileMenu::default);

    // Scroll tracking: one frame callback per burst of scroll events.
    {
        let view = view.clone();
        use_effect_with_deps(
            move |mode| {
                let nav_state = Rc::new(RefCell::new(NavState::new(*mode, dom::scroll_y())));
                let gate = Rc::new(RefCell::new(FrameGate::default()));

                let on_scroll = Closure::<dyn Fn()>::new(move || {
                    if !gate.borrow_mut().try_schedule() {
                        return;
                    }
                    let nav_state = nav_state.clone();
                    let gate = gate.clone();
                    let view = view.clone();
                    dom::request_frame(move || {
                        let next = nav_state.borrow_mut().sample(dom::scroll_y());
                        view.set(next);
                        gate.borrow_mut().release();
                    });
                });

                let window = web_sys::window();
                if let Some(window) = &window {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if let Err(err) = window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                            &options,
                        )
                    {
                        warn!("Could not listen for scroll: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            config.nav_mode,
        );
    }

    {
        use_effect_with_deps(
            |menu| {
                dom::set_body_overflow(menu.body_overflow());
                || ()
            },
            *menu,
        );
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && menu.is_open() {
                menu.set(menu.closed());
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MobileMenu::default());
        })
    };

    let close_on_backdrop = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == e.current_target() {
                menu.set(MobileMenu::default());
            }
        })
    };

    let mobile_link_click = |href: &'static str| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            if anchor::fragment_id(href).is_some() {
                e.prevent_default();
            }
            let menu = menu.clone();
            Timeout::new(MOBILE_LINK_DELAY_MS, move || {
                menu.set(MobileMenu::default());
                dom::follow_anchor(href);
            })
            .forget();
        })
    };

    html! {
        <>
            <nav
                class={classes!("navigation", view.scrolled.then_some("scrolled"), view.hidden.then_some("hidden"))}
                aria-label="Main navigation"
            >
                <div class="nav-container">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"EVA"}
                    </Link<Route>>
                    <ul class="nav-menu">
                        { for SECTION_LINKS.iter().map(|&(href, label)| html! {
                            <li>
                                <a class="nav-link" href={href} onclick={anchor_click(href)}>{label}</a>
                            </li>
                        }) }
                    </ul>
                    <button
                        class={classes!("hamburger-btn", menu.is_open().then_some("active"))}
                        aria-label="Toggle menu"
                        aria-controls="mobile-nav"
                        aria-expanded={menu.aria_expanded()}
                        onclick={toggle_menu}
                    >
                        <span class="hamburger-line"></span>
                        <span class="hamburger-line"></span>
                        <span class="hamburger-line"></span>
                    </button>
                </div>
            </nav>
            <div
                id="mobile-nav"
                class={classes!("mobile-nav-overlay", menu.is_open().then_some("active"))}
                aria-hidden={menu.aria_hidden()}
                onclick={close_on_backdrop}
            >
                <div class="mobile-nav-content">
                    <button class="mobile-nav-close" aria-label="Close menu" onclick={close_menu}>
                        {"×"}
                    </button>
                    <ul class="mobile-nav-links">
                        { for SECTION_LINKS.iter().map(|&(href, label)| html! {
                            <li>
                                <a class="mobile-nav-link" href={href} onclick={mobile_link_click(href)}>{label}</a>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .navigation {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: rgba(26, 39, 71, 0.92);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .navigation.scrolled {
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15);
                }
                .navigation.hidden {
                    transform: translateY(-100%);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.5rem;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: #fff;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #e63946;
                }
                .hamburger-btn {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger-line {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease;
                }
                .mobile-nav-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease;
                    z-index: 1100;
                }
                .mobile-nav-overlay.active {
                    opacity: 1;
                    visibility: visible;
                }
                .mobile-nav-content {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 75%;
                    max-width: 320px;
                    height: 100%;
                    background: #1a2747;
                    padding: 2rem;
                }
                .mobile-nav-close {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .mobile-nav-links {
                    list-style: none;
                    padding: 0;
                }
                .mobile-nav-link {
                    display: block;
                    color: #fff;
                    padding: 1rem 0;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .nav-menu {
                        display: none;
                    }
                    .hamburger-btn {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}
