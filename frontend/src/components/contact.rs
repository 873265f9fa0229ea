use gloo_net::http::Request;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::interactions::contact::{
    submit_contact, ContactFields, ContactPayload, ContactTransport, FormHost, Notice,
    PackagePick, SubmitControl, SubmitError, SubmitOutcome,
};

const SUBMIT_LABEL: &str = "Send Message";

/// Posts the form as JSON to the form-handling service.
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactTransport for FetchTransport {
    async fn post(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}

/// The rendered form as seen by the submission flow.
#[derive(Clone)]
struct DomFormHost {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    company: NodeRef,
    package: NodeRef,
    message: NodeRef,
    website: NodeRef,
    pending: UseStateHandle<bool>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

impl FormHost for DomFormHost {
    fn fields(&self) -> ContactFields {
        ContactFields {
            name: input_value(&self.name),
            email: input_value(&self.email),
            company: input_value(&self.company),
            package: self
                .package
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default(),
            message: self
                .message
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default(),
            website: input_value(&self.website),
        }
    }

    fn set_pending(&self, pending: bool) {
        self.pending.set(pending);
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_to_top(&self) {
        dom::smooth_scroll_to(0.0);
    }

    fn notify(&self, notice: Notice) {
        dom::alert(&notice.message());
    }

    fn fallback_email(&self) -> String {
        config::FALLBACK_EMAIL.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Latest package chosen from a package card.
    #[prop_or_default]
    pub pick: PackagePick,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let pending = use_state(|| false);
    let form = use_node_ref();
    let name = use_node_ref();
    let email = use_node_ref();
    let company = use_node_ref();
    let package = use_node_ref();
    let message = use_node_ref();
    let website = use_node_ref();
    let host = DomFormHost {
        form,
        name,
        email,
        company,
        package,
        message,
        website,
        pending: pending.clone(),
    };

    {
        let package_ref = host.package.clone();
        use_effect_with_deps(
            move |pick: &PackagePick| {
                if let (Some(value), Some(select)) =
                    (pick.package(), package_ref.cast::<HtmlSelectElement>())
                {
                    debug!("Pre-selecting package {}", value);
                    select.set_value(value);
                }
                || ()
            },
            props.pick.clone(),
        );
    }

    let onsubmit = {
        let host = host.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let host = host.clone();
            spawn_local(async move {
                let transport = FetchTransport::new(config::get_form_endpoint());
                match submit_contact(&host, &transport).await {
                    SubmitOutcome::Failed(err) => warn!("Contact form left unsent: {err}"),
                    outcome => debug!("Contact submission finished: {:?}", outcome),
                }
            });
        })
    };

    let mut control = SubmitControl::new(SUBMIT_LABEL);
    control.set_pending(*pending);

    html! {
        <div class="contact-container">
            <h2 class="section-title">{"Let's Work Together"}</h2>
            <p class="section-subtitle">
                {"Tell me a little about your week and I'll get back to you within 24 hours."}
            </p>
            <form id="contactForm" class="contact-form" ref={host.form.clone()} {onsubmit}>
                <div class="form-row">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" name="name" required={true} ref={host.name.clone()} />
                </div>
                <div class="form-row">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" name="email" required={true} ref={host.email.clone()} />
                </div>
                <div class="form-row">
                    <label for="company">{"Company"}</label>
                    <input type="text" id="company" name="company" ref={host.company.clone()} />
                </div>
                <div class="form-row">
                    <label for="package">{"Package"}</label>
                    <select id="package" name="package" ref={host.package.clone()}>
                        <option value="">{"Select a package"}</option>
                        <option value="essential">{"Essential Support"}</option>
                        <option value="executive">{"Executive Partnership"}</option>
                        <option value="enterprise">{"Enterprise Suite"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" name="message" rows="5" required={true} ref={host.message.clone()} />
                </div>
                <div class="form-honeypot" aria-hidden="true">
                    <label for="website">{"Website"}</label>
                    <input type="text" id="website" name="website" tabindex="-1" autocomplete="off" ref={host.website.clone()} />
                </div>
                <button type="submit" class="form-submit-btn" disabled={control.is_disabled()}>
                    {control.label()}
                </button>
            </form>
            <style>
                {r#"
                .contact-form {
                    max-width: 640px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-row {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .form-row input, .form-row select, .form-row textarea {
                    padding: 0.75rem;
                    border: 1px solid #ccd2e0;
                    border-radius: 6px;
                    font: inherit;
                }
                .form-honeypot {
                    position: absolute;
                    left: -9999px;
                }
                .form-submit-btn {
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 6px;
                    background: #e63946;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .form-submit-btn:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </div>
    }
}
