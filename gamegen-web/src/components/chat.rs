//! # Generation Chat
//!
//! Message log, simulated progress steps and the prompt form. All three read
//! the same [`GenerationSession`] signal owned by the page.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use shared::progress::{run_progress, ProgressConfig, StepStatus};
use shared::session::GenerationSession;

use super::icons::{Icon, IconKind};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{
    CONNECT_FIRST_TITLE, CONNECT_HINT, DISCONNECTED_PLACEHOLDER, PROMPT_PLACEHOLDER,
};
use crate::utils::dom;

#[component]
pub fn ChatLog(session: RwSignal<GenerationSession>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let chat_end: NodeRef<html::Div> = NodeRef::new();
    let messages = Memo::new(move |_| session.with(|s| s.messages().to_vec()));

    // Keep the newest message in view
    Effect::new(move || {
        messages.track();
        if let Some(end) = chat_end.get() {
            dom::scroll_into_view_smooth(&end);
        }
    });

    view! {
        <div class="chat-log">
            {move || {
                (!wallet_ctx.is_connected()).then(|| view! { <div class="chat-hint">{CONNECT_HINT}</div> })
            }}
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|message| {
                        let row = if message.is_user() { "message-row user" } else { "message-row system" };
                        view! {
                            <div class=row>
                                <div class="message-bubble">{message.text().to_string()}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <ProgressSteps session=session/>
            <div node_ref=chat_end></div>
        </div>
    }
}

/// Steps up to the current one; the current step spins, earlier ones are filled.
#[component]
fn ProgressSteps(session: RwSignal<GenerationSession>) -> impl IntoView {
    let steps = Memo::new(move |_| session.with(|s| s.visible_steps()));

    view! {
        <div class="progress-steps">
            {move || {
                steps
                    .get()
                    .into_iter()
                    .map(|step| {
                        let marker = match step.status {
                            StepStatus::InProgress => {
                                view! { <Icon kind=IconKind::Loader class="icon-sm spin"/> }.into_any()
                            }
                            StepStatus::Completed => view! { <div class="step-done"></div> }.into_any(),
                        };
                        view! {
                            <div class="progress-step">
                                {marker}
                                <span>{step.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
pub fn PromptForm(session: RwSignal<GenerationSession>, config: ProgressConfig) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = StoredValue::new(config);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let connection = wallet_ctx.connection.get_untracked();
        let mut next = session.get_untracked();
        match next.submit(&connection) {
            Ok(()) => {
                session.set(next);
                start_simulation(session, config.get_value());
            }
            Err(reason) => log::debug!("Prompt not submitted: {}", reason),
        }
    };

    let can_edit = move || wallet_ctx.connection.with(|c| session.with(|s| s.can_edit(c)));
    let can_submit = move || wallet_ctx.connection.with(|c| session.with(|s| s.can_submit(c)));
    let hint = move || if wallet_ctx.is_connected() { "" } else { CONNECT_FIRST_TITLE };

    view! {
        <form class="prompt-form" on:submit=on_submit>
            <input
                type="text"
                class="prompt-input"
                prop:value=move || session.with(|s| s.draft().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.set_draft(value));
                }
                placeholder=move || {
                    if wallet_ctx.is_connected() { PROMPT_PLACEHOLDER } else { DISCONNECTED_PLACEHOLDER }
                }
                disabled=move || !can_edit()
                title=hint
            />
            <button type="submit" class="btn-primary" disabled=move || !can_submit() title=hint>
                <Icon kind=IconKind::Message class="icon-sm"/>
                <span>"Generate"</span>
            </button>
        </form>
    }
}

/// Run the fake pipeline for an accepted prompt. There is no handle to stop it.
fn start_simulation(session: RwSignal<GenerationSession>, config: ProgressConfig) {
    leptos::task::spawn_local(async move {
        run_progress(&config, gloo_timers::future::sleep, move |_| {
            session.update(|s| {
                s.advance_progress();
            });
        })
        .await;
        log::info!("Generation simulation reached its last step");
    });
}
