use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::interactions::environment::Environment;
use crate::interactions::reveal::{Reveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct FadeSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A page `<section>` that fades in the first time it scrolls into view.
#[function_component(FadeSection)]
pub fn fade_section(props: &FadeSectionProps) -> Html {
    let environment = use_context::<Environment>().unwrap_or_default();
    let animated = environment.animate_reveals();
    let section_ref = use_node_ref();
    let reveal = use_state_eq(move || Reveal::new(animated));

    {
        let section_ref = section_ref.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |animated| {
                let observer = if *animated {
                    let reveal = reveal.clone();
                    let mut latch = Reveal::new(true);
                    section_ref.cast::<Element>().and_then(|section| {
                        dom::observe_visibility(
                            &section,
                            REVEAL_THRESHOLD,
                            REVEAL_ROOT_MARGIN,
                            move |visible| {
                                if latch.observe(visible) {
                                    debug!("Revealing section");
                                    reveal.set(latch);
                                }
                            },
                        )
                    })
                } else {
                    None
                };
                // Nothing will ever reveal an unobserved section, so show it now.
                if observer.is_none() && !reveal.is_revealed() {
                    reveal.set(Reveal::new(false));
                }
                move || drop(observer)
            },
            animated,
        );
    }

    html! {
        <section
            id={props.id.clone()}
            class={props.class.clone()}
            style={reveal.style()}
            ref={section_ref}
        >
            { for props.children.iter() }
        </section>
    }
}
