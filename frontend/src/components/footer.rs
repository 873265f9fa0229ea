use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::{anchor_click, SECTION_LINKS};
use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"EVA"}</span>
                    <p>{"Executive virtual assistance for founders and busy leaders."}</p>
                </div>
                <ul class="footer-links">
                    { for SECTION_LINKS.iter().map(|&(href, label)| html! {
                        <li><a class="footer-link" href={href} onclick={anchor_click(href)}>{label}</a></li>
                    }) }
                    <li>
                        <Link<Route> to={Route::Privacy} classes="footer-link">
                            {"Privacy"}
                        </Link<Route>>
                    </li>
                </ul>
                <a class="footer-email" href={format!("mailto:{}", config::FALLBACK_EMAIL)}>
                    {config::FALLBACK_EMAIL}
                </a>
            </div>
            <style>
                {r#"
                .footer {
                    background: #111a30;
                    color: rgba(255, 255, 255, 0.8);
                    padding: 3rem 2rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-link, .footer-email {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-link:hover, .footer-email:hover {
                    color: #e63946;
                }
                "#}
            </style>
        </footer>
    }
}
