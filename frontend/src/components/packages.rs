use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::interactions::anchor::AnchorAction;
use crate::interactions::contact::package_from_title;

/// Gives the smooth scroll time to settle before touching the form.
const PREFILL_DELAY_MS: u32 = 500;

struct Package {
    title: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PACKAGES: &[Package] = &[
    Package {
        title: "Essential Support",
        price: "$600 / month",
        features: &[
            "20 hours per month",
            "Inbox and calendar management",
            "Weekly check-in call",
        ],
        featured: false,
    },
    Package {
        title: "Executive Partnership",
        price: "$1,400 / month",
        features: &[
            "50 hours per month",
            "Travel and event coordination",
            "Meeting preparation and minutes",
            "Same-day turnaround",
        ],
        featured: true,
    },
    Package {
        title: "Enterprise Suite",
        price: "Custom",
        features: &[
            "Dedicated hours for your leadership team",
            "Project and vendor management",
            "Process documentation",
        ],
        featured: false,
    },
];

#[derive(Properties, PartialEq)]
pub struct PackagesProps {
    /// Receives the contact form option matching the chosen card.
    pub on_select: Callback<AttrValue>,
}

#[function_component(Packages)]
pub fn packages(props: &PackagesProps) -> Html {
    let choose = |title: &'static str| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            // Off the home page this redirects to /#contact instead.
            if let AnchorAction::ScrollTo(_) = dom::follow_anchor("#contact") {
                let on_select = on_select.clone();
                spawn_local(async move {
                    TimeoutFuture::new(PREFILL_DELAY_MS).await;
                    on_select.emit(AttrValue::from(package_from_title(title)));
                });
            }
        })
    };

    html! {
        <div class="packages-container">
            <h2 class="section-title">{"Packages"}</h2>
            <div class="packages-grid">
                { for PACKAGES.iter().map(|package| html! {
                    <div class={classes!("package-card", package.featured.then_some("featured"))}>
                        <h3 class="package-title">{package.title}</h3>
                        <p class="package-price">{package.price}</p>
                        <ul class="package-features">
                            { for package.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                        <button class="package-cta" onclick={choose(package.title)}>
                            {"Get Started"}
                        </button>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .packages-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .package-card {
                    border: 1px solid rgba(26, 39, 71, 0.12);
                    border-radius: 12px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }
                .package-card.featured {
                    border-color: #e63946;
                    box-shadow: 0 12px 30px rgba(230, 57, 70, 0.15);
                }
                .package-price {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1a2747;
                }
                .package-features {
                    flex: 1;
                    padding-left: 1.2rem;
                }
                .package-cta {
                    padding: 0.8rem 1.2rem;
                    border: none;
                    border-radius: 6px;
                    background: #1a2747;
                    color: #fff;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
