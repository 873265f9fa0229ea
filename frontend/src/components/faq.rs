use std::rc::Rc;

use log::debug;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::interactions::accordion::{is_activation_key, AccordionState};

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "What does an executive virtual assistant actually do?",
        "Calendar and inbox management, travel planning, meeting preparation, vendor follow-ups and the recurring admin that eats into your week. You keep the decisions, I keep everything moving.",
    ),
    (
        "How quickly do you respond?",
        "Messages sent during your business hours get a reply within the hour. Anything sent overnight is handled first thing the next working day, and every contact form enquiry is answered within 24 hours.",
    ),
    (
        "Which tools do you work with?",
        "Google Workspace, Microsoft 365, Slack, Notion, Asana, Trello, Calendly, Zoom and most CRMs. If your team uses something else, I will learn it.",
    ),
    (
        "How is confidential information handled?",
        "Every engagement starts with a signed NDA. Credentials are shared through a password manager and access is removed the day an engagement ends.",
    ),
    (
        "Can I change packages later?",
        "Yes. Packages can be upgraded or scaled back at the end of any billing month with no penalty.",
    ),
];

impl Reducible for AccordionState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(index);
        debug!("FAQ entry {} toggled, {} open", index, next.open_count());
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    // Enter and Space go through the same toggle callback as a click.
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("active"))}>
            <div
                class="faq-question"
                role="button"
                tabindex="0"
                aria-expanded={if props.is_open { "true" } else { "false" }}
                {onclick}
                {onkeydown}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </div>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let mode = config.accordion_mode;
    let accordion = use_reducer(move || AccordionState::new(mode));

    html! {
        <div class="faq-container">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, &(question, answer))| {
                    let accordion_handle = accordion.clone();
                    html! {
                        <FaqItem
                            question={question}
                            answer={answer}
                            is_open={accordion.is_open(index)}
                            on_toggle={Callback::from(move |_| accordion_handle.dispatch(index))}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(26, 39, 71, 0.15);
                }
                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    font-weight: 600;
                    cursor: pointer;
                }
                .faq-question:focus-visible {
                    outline: 2px solid #e63946;
                    outline-offset: 4px;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </div>
    }
}
