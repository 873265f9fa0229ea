use yew::prelude::*;

use crate::components::nav::anchor_click;
use crate::components::section::FadeSection;
use crate::config;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <main class="legal-page">
            <FadeSection id="privacy" class="legal">
                <h1>{"Privacy Policy"}</h1>
                <p>{"Last updated: October 2026"}</p>

                <h2>{"What I collect"}</h2>
                <p>
                    {"The contact form sends your name, email address, company, chosen package and message to a third-party form service, which forwards them to me by email. Nothing else is collected, and this site sets no cookies and keeps no local storage."}
                </p>

                <h2>{"How it is used"}</h2>
                <p>
                    {"Your details are used only to reply to your enquiry and, if we work together, to deliver the agreed services. They are never sold or shared for marketing."}
                </p>

                <h2>{"Retention"}</h2>
                <p>
                    {"Enquiries that do not lead to an engagement are deleted after twelve months."}
                </p>

                <h2>{"Contact"}</h2>
                <p>
                    {"Questions about your data can be sent to "}
                    <a href={format!("mailto:{}", config::FALLBACK_EMAIL)}>{config::FALLBACK_EMAIL}</a>
                    {" or through the "}
                    <a class="nav-link" href="#contact" onclick={anchor_click("#contact")}>{"contact form"}</a>
                    {"."}
                </p>
            </FadeSection>
            <style>
                {r#"
                .legal-page {
                    padding: 7rem 2rem 4rem;
                }
                .legal {
                    max-width: 760px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .legal h2 {
                    margin-top: 2rem;
                    color: #1a2747;
                }
                "#}
            </style>
        </main>
    }
}
