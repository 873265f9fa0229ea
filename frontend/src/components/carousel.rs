use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::{Event, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::interactions::carousel::{tick_interval_ms, CarouselState, TOOL_ITEM_WIDTH};
use crate::interactions::environment::Environment;

const TOOLS: &[&str] = &[
    "Google Workspace",
    "Microsoft 365",
    "Slack",
    "Notion",
    "Asana",
    "Trello",
    "Calendly",
    "Zoom",
    "HubSpot",
    "Canva",
];

pub enum CarouselAction {
    Advance,
    Resize(f64),
    Hover(bool),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Resize(width) => {
                next.resize(width);
                debug!(
                    "Carousel shows {} of {} tools from index {}",
                    next.visible_count(),
                    TOOLS.len(),
                    next.index()
                );
            }
            CarouselAction::Hover(hovering) => {
                next.set_hovering(hovering);
            }
        }
        next.into()
    }
}

fn measured_width(node: &NodeRef) -> Option<f64> {
    node.cast::<HtmlElement>()
        .map(|element| f64::from(element.offset_width()))
}

#[function_component(ToolsCarousel)]
pub fn tools_carousel() -> Html {
    let environment = use_context::<Environment>().unwrap_or_default();
    let viewport_ref = use_node_ref();
    let carousel = use_reducer(|| CarouselState::new(TOOLS.len(), TOOL_ITEM_WIDTH, 0.0));

    // Measure once mounted; the window is recomputed on every resize after that.
    {
        let carousel = carousel.clone();
        let viewport_ref = viewport_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(width) = measured_width(&viewport_ref) {
                    carousel.dispatch(CarouselAction::Resize(width));
                }
                || ()
            },
            (),
        );
    }

    {
        let carousel = carousel.clone();
        let viewport_ref = viewport_ref.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(width) = measured_width(&viewport_ref) {
                carousel.dispatch(CarouselAction::Resize(width));
            }
        });
    }

    // Restart the timer whenever the hover state flips; dropping the old Interval cancels it.
    {
        let hovering = carousel.is_hovering();
        let carousel = carousel.clone();
        let touch = environment.touch;
        use_effect_with_deps(
            move |hovering| {
                let period = tick_interval_ms(touch, *hovering);
                debug!("Carousel ticking every {}ms", period);
                let interval = Interval::new(period, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            hovering,
        );
    }

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Hover(true)))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Hover(false)))
    };

    html! {
        <div class="tools-carousel" ref={viewport_ref} onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="tools-track" id="toolsTrack" style={format!("transform: {};", carousel.transform())}>
                { for TOOLS.iter().map(|tool| html! {
                    <div class="tool-item">
                        <span class="tool-badge">{*tool}</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .tools-carousel {
                    overflow: hidden;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .tools-track {
                    display: flex;
                    gap: 2rem;
                    transition: transform 0.5s ease;
                }
                .tool-item {
                    min-width: 120px;
                    flex-shrink: 0;
                    text-align: center;
                }
                .tool-badge {
                    display: inline-block;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: #f1f3f8;
                    color: #1a2747;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
