use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::Element;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::interactions::counter::{parse_target, CounterAnimation, MetricsLatch};

struct Metric {
    /// Raw `data-target` value; `None` renders without the attribute.
    target: Option<&'static str>,
    initial: &'static str,
    suffix: &'static str,
    label: &'static str,
}

const METRICS: &[Metric] = &[
    Metric {
        target: Some("150"),
        initial: "0",
        suffix: "+",
        label: "Executives supported",
    },
    Metric {
        target: Some("12"),
        initial: "0",
        suffix: "",
        label: "Years of experience",
    },
    Metric {
        target: Some("98"),
        initial: "0",
        suffix: "%",
        label: "Client retention",
    },
    Metric {
        target: None,
        initial: "24/7",
        suffix: "",
        label: "Availability across time zones",
    },
];

/// The metrics panel. Counters run once, the first time the panel scrolls into view.
#[function_component(Metrics)]
pub fn metrics() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let section_ref = use_node_ref();
    let values = use_state(|| vec![None::<u64>; METRICS.len()]);

    {
        let section_ref = section_ref.clone();
        let values = values.clone();
        let threshold = config.metrics_threshold;
        let root_margin = config.metrics_root_margin;
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(MetricsLatch::default()));
                let observer = section_ref.cast::<Element>().and_then(|section| {
                    dom::observe_visibility(&section, threshold, root_margin, move |visible| {
                        debug!(
                            "Metrics panel intersecting: {} (already counted: {})",
                            visible,
                            latch.borrow().has_run()
                        );
                        if latch.borrow_mut().fire(visible) {
                            start_counters(values.clone());
                        }
                    })
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section class="metrics" id="results" ref={section_ref}>
            <div class="metrics-grid">
                { for METRICS.iter().zip(values.iter()).map(|(metric, value)| {
                    let shown = value.map(|v| v.to_string()).unwrap_or_else(|| metric.initial.to_string());
                    html! {
                        <div class="metric">
                            <span class="metric-number" data-target={metric.target.map(AttrValue::from)}>{shown}</span>
                            <span class="metric-suffix">{metric.suffix}</span>
                            <p class="metric-label">{metric.label}</p>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .metrics {
                    background: #1a2747;
                    color: #fff;
                    padding: 4rem 2rem;
                }
                .metrics-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .metric-number, .metric-suffix {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #e63946;
                }
                .metric-label {
                    margin-top: 0.5rem;
                    opacity: 0.85;
                }
                "#}
            </style>
        </section>
    }
}

fn start_counters(values: UseStateHandle<Vec<Option<u64>>>) {
    let mut animations: Vec<Option<CounterAnimation>> = METRICS
        .iter()
        .map(|metric| parse_target(metric.target).map(CounterAnimation::new))
        .collect();
    info!(
        "Starting metrics animation for {} counters",
        animations.iter().flatten().count()
    );

    let mut current = vec![None::<u64>; METRICS.len()];
    dom::animate_frames(move || {
        let mut running = false;
        for (slot, animation) in current.iter_mut().zip(animations.iter_mut()) {
            if let Some(animation) = animation.as_mut().filter(|a| !a.is_done()) {
                let frame = animation.step();
                *slot = Some(frame.value);
                running |= !frame.done;
            }
        }
        values.set(current.clone());
        running
    });
}
