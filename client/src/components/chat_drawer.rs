//! Slide-in conversation drawer for the assistant.

use leptos::prelude::*;

use crate::state::chat::{ASSISTANT_NAME, ChatState, REPLY_DELAY, Sender};
use crate::state::ui::{Mode, UiState};

/// Drawer with message history, an input row, and the current mode.
///
/// The drawer is always mounted; the open flag only toggles visibility, so
/// closing it never clears the transcript.
#[component]
pub fn ChatDrawer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let open = move || ui.with(|u| u.chat_open);
    let close = move |_| ui.update(UiState::close_chat);

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let mode = ui.with_untracked(|u| u.mode);
        let Some(reply_mode) = chat.try_update(|c| c.send(&text, mode)).flatten() else {
            return;
        };
        input.set(String::new());
        schedule_reply(chat, reply_mode);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-drawer" class:chat-drawer--open=open aria-hidden=move || (!open()).to_string()>
            <div class="chat-drawer__backdrop" on:click=close></div>

            <div class="chat-drawer__panel">
                <div class="chat-drawer__header">
                    <div class="chat-drawer__heading">
                        <div class="chat-drawer__kicker">"Conversation"</div>
                        <div class="chat-drawer__name">{ASSISTANT_NAME}</div>
                    </div>
                    <button class="btn" on:click=close>
                        "Close"
                    </button>
                </div>

                <div class="chat-drawer__body">
                    <div class="chat-drawer__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|c| {
                                c.messages
                                    .iter()
                                    .map(|msg| view! { <ChatBubble from=msg.from text=msg.text.clone()/> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </div>

                    <div class="chat-drawer__composer">
                        <div class="chat-drawer__input-row">
                            <input
                                class="chat-drawer__input"
                                type="text"
                                placeholder="Message Bobby…"
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <button class="btn btn--primary chat-drawer__send" on:click=move |_| do_send()>
                                "Send"
                            </button>
                        </div>
                        <div class="chat-drawer__mode">
                            "Mode: "
                            <span class="chat-drawer__mode-value">{move || ui.with(|u| u.mode.label())}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChatBubble(from: Sender, text: String) -> impl IntoView {
    let is_user = from == Sender::User;

    view! {
        <div class="chat-bubble" class:chat-bubble--user=is_user>
            <div class="chat-bubble__body">
                <div class="chat-bubble__author">{from.label()}</div>
                <div class="chat-bubble__text">{text}</div>
            </div>
        </div>
    }
}

/// Append the canned reply for `mode` after [`REPLY_DELAY`].
///
/// Fire-and-forget: the timer is never cancelled. If the page is torn down
/// first the signal is gone and the update is dropped.
fn schedule_reply(chat: RwSignal<ChatState>, mode: Mode) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(REPLY_DELAY.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            let _ = chat.try_update(|c| c.push_reply(mode));
        })
        .forget();
        log::debug!("assistant reply scheduled in {millis}ms ({})", mode.label());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, mode, REPLY_DELAY);
    }
}
