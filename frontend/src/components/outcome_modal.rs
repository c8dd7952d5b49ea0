use yew::prelude::*;

use crate::components::social_icons::SOCIAL_LINKS;
use crate::config;
use crate::state::Verdict;

/// Where a click inside the modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Panel,
}

/// Only a click on the backdrop closes the modal.
pub fn route_click(origin: ClickOrigin, on_close: &Callback<()>) {
    match origin {
        ClickOrigin::Backdrop => on_close.emit(()),
        ClickOrigin::Panel => {}
    }
}

#[derive(Properties, PartialEq)]
pub struct OutcomeModalProps {
    pub verdict: Verdict,
    pub hint: String,
    pub on_close: Callback<()>,
}

#[function_component(OutcomeModal)]
pub fn outcome_modal(props: &OutcomeModalProps) -> Html {
    let OutcomeModalProps { verdict, hint, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| {
            route_click(ClickOrigin::Backdrop, &on_close);
        })
    };

    // Clicks inside the panel must not reach the overlay.
    let keep_open = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            route_click(ClickOrigin::Panel, &on_close);
        })
    };

    let content = match verdict {
        Verdict::Correct => html! {
            <>
                <h3 class="outcome-title">{"🎉 Welcome to the Inner Circle!"}</h3>
                <p class="outcome-text">
                    {"Join our WhatsApp group to get updates on Illuminate!"}
                </p>
                <a
                    href={config::INVITE_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="outcome-cta"
                >
                    {"Join us for Illuminate"}
                </a>
            </>
        },
        Verdict::Incorrect => html! {
            <>
                <h3 class="outcome-title incorrect">{config::INCORRECT_HEADING}</h3>
                <p class="outcome-hint">{hint.clone()}</p>
            </>
        },
    };

    html! {
        <div class="outcome-overlay" onclick={close}>
            <div class="outcome-panel" onclick={keep_open}>
                {content}
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            title={link.label}
                        >
                            { link.icon.render() }
                        </a>
                    }) }
                </div>
            </div>
        </div>
    }
}
