use yew::prelude::*;
use web_sys::{window, HtmlInputElement};
use gloo_timers::callback::Timeout;
use log::info;

use crate::components::outcome_modal::OutcomeModal;
use crate::config;
use crate::state::{Action, LandingState, Phase, Task};

fn schedule(state: &UseReducerHandle<LandingState>, task: Task) -> Timeout {
    let state = state.clone();
    let Task { delay_ms, action } = task;
    Timeout::new(delay_ms, move || state.dispatch(action))
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let state = use_reducer(LandingState::default);

    // Runs once on mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title("Illuminate");
                    }
                }
                info!("Landing page mounted");
                || info!("Landing page torn down")
            },
            (),
        );
    }

    // Intro chain: one pending timeout at a time, dropped (and so cleared)
    // whenever the state moves on or the page goes away.
    {
        let state = state.clone();
        let deps = state.intro_timer_key();
        use_effect_with_deps(
            move |_| {
                let timeout = state.next_intro_task().map(|task| schedule(&state, task));
                move || drop(timeout)
            },
            deps,
        );
    }

    // Hint toast auto-hide, restarted by every new hint.
    {
        let state = state.clone();
        let deps = state.hint_timer_key();
        use_effect_with_deps(
            move |_| {
                let timeout = state.next_hint_task().map(|task| schedule(&state, task));
                move || drop(timeout)
            },
            deps,
        );
    }

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(Action::SetAnswer(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(Action::Submit);
        })
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(Action::CloseOutcome);
        })
    };

    let headline_class = classes!("intro-headline", state.riddle_visible.then(|| "lifted"));

    html! {
        <div class="landing-page">
            <style>{STYLES}</style>
            <div class={headline_class}>
                { for config::HEADLINE_WORDS.iter().enumerate().map(|(index, word)| html! {
                    <span
                        key={*word}
                        class={classes!("intro-word", state.is_headline_word_revealed(index).then(|| "revealed"))}
                    >
                        {*word}
                    </span>
                }) }
            </div>

            if state.riddle_visible {
                { riddle_panel(&state.answer, oninput, onsubmit) }
            }

            if let Phase::Outcome(verdict) = state.phase() {
                <OutcomeModal verdict={verdict} hint={state.hint.clone()} on_close={on_close} />
            }

            if state.toast_visible() {
                <p class="hint-toast">{state.hint.clone()}</p>
            }
        </div>
    }
}

fn riddle_panel(answer: &str, oninput: Callback<InputEvent>, onsubmit: Callback<SubmitEvent>) -> Html {
    html! {
        <div class="riddle-panel">
            <div class="riddle-header">
                <h2>{"💡 The Riddle"}</h2>
                <p class="riddle-verse">
                    { for config::RIDDLE_VERSE.iter().map(|line| html! { <>{*line}<br/></> }) }
                </p>
            </div>

            <div class="riddle-clues">
                { for config::RIDDLE_CLUES.iter().map(|clue| html! {
                    <p>{format!("🧩 {}", clue)}</p>
                }) }
            </div>

            <form class="riddle-form" {onsubmit}>
                <input
                    type="text"
                    class="riddle-input"
                    value={answer.to_string()}
                    {oninput}
                    placeholder="Enter your answer..."
                />
                <button type="submit" class="riddle-submit">{"Submit"}</button>
            </form>
        </div>
    }
}

const STYLES: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #111827;
        color: #fff;
        padding: 1rem;
        overflow: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    @keyframes wordIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes riddleIn {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes popIn {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes glow {
        0%, 100% { box-shadow: 0 0 0px purple; }
        50% { box-shadow: 0 0 20px purple; }
    }
    .intro-headline {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        align-items: center;
        min-height: 50vh;
        transition: transform 0.5s ease-out;
    }
    .intro-headline.lifted {
        transform: translateY(-50px);
    }
    .intro-word {
        font-size: 2.25rem;
        font-weight: 800;
        margin: 0 0.25rem;
        opacity: 0;
        color: transparent;
        background: linear-gradient(to right, #c084fc, #db2777);
        -webkit-background-clip: text;
        background-clip: text;
    }
    .intro-word.revealed {
        animation: wordIn 0.5s ease-out forwards;
    }
    @media (min-width: 768px) {
        .intro-word { font-size: 3.75rem; }
    }
    .riddle-panel {
        max-width: 28rem;
        margin: 2rem auto 0;
        padding: 1.5rem;
        border-radius: 0.5rem;
        border: 1px solid #a855f7;
        background: rgba(0, 0, 0, 0.3);
        backdrop-filter: blur(4px);
        animation: riddleIn 0.5s ease-out;
    }
    .riddle-header {
        text-align: center;
        margin-bottom: 2rem;
        animation: glow 2s infinite;
    }
    .riddle-header h2 {
        color: #c084fc;
        font-size: 1.25rem;
    }
    .riddle-verse {
        color: #d1d5db;
    }
    .riddle-clues p {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .riddle-form {
        margin-top: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .riddle-input {
        padding: 0.75rem;
        border-radius: 0.25rem;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid #a855f7;
        color: #fff;
    }
    .riddle-input:focus {
        outline: none;
        border-color: #c084fc;
        box-shadow: 0 0 15px purple;
    }
    .riddle-submit, .outcome-cta {
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        background: linear-gradient(to right, #9333ea, #db2777);
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .riddle-submit:hover {
        transform: scale(1.02);
    }
    .riddle-submit:active {
        transform: scale(0.98);
    }
    .outcome-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.8);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        animation: fadeIn 0.3s ease-out;
    }
    .outcome-panel {
        background: #1f2937;
        padding: 2rem;
        border-radius: 0.75rem;
        max-width: 28rem;
        width: 100%;
        border: 1px solid #a855f7;
        animation: popIn 0.3s ease-out;
    }
    .outcome-title {
        text-align: center;
        color: #c084fc;
        font-size: 1.5rem;
    }
    .outcome-title.incorrect {
        color: #f87171;
        font-size: 1.125rem;
    }
    .outcome-text, .outcome-hint {
        text-align: center;
        color: #d1d5db;
        white-space: pre-line;
    }
    .outcome-cta {
        display: block;
        margin-top: 1.5rem;
        text-align: center;
        text-decoration: none;
    }
    .social-links {
        display: flex;
        justify-content: space-around;
        margin-top: 1rem;
    }
    .social-link {
        display: flex;
        padding: 1rem;
        border-radius: 0.5rem;
        background: #374151;
        transition: background 0.2s;
    }
    .social-link:hover {
        background: #4b5563;
    }
    .social-icon {
        width: 1.5rem;
        height: 1.5rem;
    }
    .social-icon.instagram { color: #f472b6; }
    .social-icon.linkedin { color: #3b82f6; }
    .social-icon.x { color: #60a5fa; }
    .hint-toast {
        position: fixed;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        background: rgba(239, 68, 68, 0.8);
        color: #fff;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        white-space: pre-line;
        z-index: 20;
        animation: fadeIn 0.3s ease-out;
    }
"#;
