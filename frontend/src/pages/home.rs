use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::{
    carousel::ToolsCarousel, contact::ContactForm, faq::Faq, metrics::Metrics, nav::anchor_click,
    packages::Packages, section::FadeSection,
};
use crate::dom;
use crate::interactions::contact::PackagePick;

const SERVICES: &[(&str, &str)] = &[
    (
        "Calendar & Inbox",
        "Meetings scheduled across time zones, an inbox triaged twice a day and nothing important left unanswered.",
    ),
    (
        "Travel Planning",
        "Flights, hotels, ground transport and a single itinerary that updates itself when plans change.",
    ),
    (
        "Meeting Support",
        "Agendas drafted, pre-reads collected, minutes taken and follow-ups chased until they are done.",
    ),
    (
        "Operations",
        "Vendor coordination, invoices, CRM hygiene and the small processes that keep a company running.",
    ),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "I got ten hours of my week back in the first month. I can't imagine running the company without her now.",
        "Founder, fintech startup",
    ),
    (
        "Board packs, investor travel and a chaotic calendar, all handled calmly and ahead of time.",
        "CEO, logistics group",
    ),
    (
        "The most reliable person on our extended team. Things simply get done.",
        "Managing Director, consultancy",
    ),
];

impl Reducible for PackagePick {
    type Action = AttrValue;

    fn reduce(self: Rc<Self>, package: AttrValue) -> Rc<Self> {
        self.then(package.as_str()).into()
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let package_pick = use_reducer(PackagePick::default);

    // Arriving from a subpage as /#section: scroll once the sections exist.
    {
        use_effect_with_deps(
            |_| {
                if let Some(hash) = dom::current_hash() {
                    info!("Opening home page at {}", hash);
                    dom::follow_anchor(&hash);
                }
                || ()
            },
            (),
        );
    }

    let on_package_select = {
        let package_pick = package_pick.clone();
        Callback::from(move |package: AttrValue| package_pick.dispatch(package))
    };

    html! {
        <main class="home">
            <FadeSection id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Your Executive Virtual Assistant"}</h1>
                    <p class="hero-subtitle">
                        {"Reliable, discreet support for leaders who would rather spend their hours on the work only they can do."}
                    </p>
                    <div class="hero-actions">
                        <a class="hero-cta" href="#contact" onclick={anchor_click("#contact")}>
                            {"Book a Discovery Call"}
                        </a>
                        <a class="hero-cta secondary" href="#packages" onclick={anchor_click("#packages")}>
                            {"View Packages"}
                        </a>
                    </div>
                </div>
            </FadeSection>

            <FadeSection id="services" class="services">
                <h2 class="section-title">{"How I Help"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|&(title, body)| html! {
                        <div class="service-card">
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    }) }
                </div>
            </FadeSection>

            <Metrics />

            <FadeSection id="tools" class="tools">
                <h2 class="section-title">{"Tools I Work With"}</h2>
                <ToolsCarousel />
            </FadeSection>

            <FadeSection id="packages" class="packages">
                <Packages on_select={on_package_select} />
            </FadeSection>

            <FadeSection id="testimonials" class="testimonials">
                <h2 class="section-title">{"What Clients Say"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|&(quote, author)| html! {
                        <blockquote class="testimonial-card">
                            <p>{quote}</p>
                            <cite>{author}</cite>
                        </blockquote>
                    }) }
                </div>
            </FadeSection>

            <FadeSection id="faq" class="faq">
                <Faq />
            </FadeSection>

            <FadeSection id="contact" class="contact">
                <ContactForm pick={(*package_pick).clone()} />
            </FadeSection>

            <style>
                {r#"
                .home section {
                    padding: 5rem 2rem;
                }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(135deg, #1a2747 0%, #2c3e6b 100%);
                    color: #fff;
                }
                .hero-title {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 0.9rem 1.6rem;
                    border-radius: 6px;
                    background: #e63946;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hero-cta.secondary {
                    background: transparent;
                    border: 1px solid #fff;
                }
                .section-title {
                    text-align: center;
                    font-size: 2.2rem;
                    color: #1a2747;
                    margin-bottom: 2.5rem;
                }
                .services-grid, .testimonials-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .service-card, .testimonial-card {
                    padding: 2rem;
                    border-radius: 12px;
                    background: #f7f8fc;
                    margin: 0;
                }
                .testimonial-card cite {
                    display: block;
                    margin-top: 1rem;
                    font-style: normal;
                    font-weight: 600;
                    color: #e63946;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.2rem;
                    }
                    .home section {
                        padding: 3.5rem 1.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
