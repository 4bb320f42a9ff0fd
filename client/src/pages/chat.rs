//! Chat page: conversation with the listing agent.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatState` decides every transition; this page performs the effects it
//! asks for: the `POST /chat` call, speech capture and playback, scrolling and
//! focus. Voice support is detected once after mount so server and client
//! render the same markup during hydration.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::rc::Rc;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::spawn_on_page;
use crate::components::chat_message::ChatMessageBubble;
use crate::components::recommendation_panel::RecommendationPanel;
use crate::config::ClientConfig;
use crate::state::chat::{ChatState, ListenCommand};
use crate::util::time::now_iso;
use crate::util::voice::{NoopVoice, VoiceCapability, VoiceEvent};

/// Pause between receiving a transcript and sending it, so the recognized
/// text is visible in the input first.
pub const TRANSCRIPT_SETTLE_MS: u32 = 500;

/// True when a request that was in flight on the previous run has resolved.
fn turn_finished(was_loading: Option<bool>, loading: bool) -> bool {
    was_loading == Some(true) && !loading
}

/// The mounted input, or `None` once the page has been torn down.
#[cfg(any(test, feature = "hydrate"))]
fn live_input(input_ref: NodeRef<leptos::html::Input>) -> Option<leptos::web_sys::HtmlInputElement> {
    input_ref.try_get_untracked().flatten()
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let chat = RwSignal::new(ChatState::default());
    let voice = StoredValue::new_local(Rc::new(NoopVoice) as Rc<dyn VoiceCapability>);
    #[cfg(feature = "hydrate")]
    let page = StoredValue::new(Owner::current().unwrap_or_default());

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Runs once, client-side only.
    Effect::new(move || {
        let detected = crate::util::voice::detect();
        let (can_listen, can_speak) = (detected.can_listen(), detected.can_speak());
        voice.set_value(detected);
        chat.update(|c| c.set_voice_support(can_listen, can_speak));
    });

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let _ = voice.try_with_value(|v| {
            v.stop_listening();
            v.cancel_speech();
        });
    });

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_loading()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // The input is re-enabled by a render effect that has not run yet when
    // the phase flips, so focus waits for the next frame.
    Effect::new(move |was_loading: Option<bool>| {
        let loading = chat.with(ChatState::is_loading);
        if turn_finished(was_loading, loading) {
            #[cfg(feature = "hydrate")]
            request_animation_frame(move || {
                if let Some(el) = live_input(input_ref) {
                    let _ = el.focus();
                }
            });
        }
        loading
    });

    let send = move || {
        let mut outgoing = None;
        chat.update(|c| outgoing = c.submit(&now_iso()));
        let Some(outgoing) = outgoing else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            voice.with_value(|v| v.stop_listening());
            let config = config.get_value();
            spawn_on_page(page, async move {
                let result =
                    crate::net::api::send_chat_message(&config, &outgoing.text, outgoing.session_id.as_deref()).await;
                let now = now_iso();
                let mut spoken = None;
                chat.update(|c| {
                    spoken = match result {
                        Ok(response) => c.receive_reply(response, &now),
                        Err(e) => c.receive_failure(&e, &now),
                    };
                });
                if let Some(text) = spoken {
                    voice.with_value(|v| v.speak(&text));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (outgoing, config);
        }
    };

    let on_voice_event = move |event: VoiceEvent| {
        let finished = event.ends_capture();
        match event {
            VoiceEvent::Transcript(text) => {
                let mut auto_submit = false;
                chat.update(|c| auto_submit = c.receive_transcript(&text));
                if auto_submit {
                    #[cfg(feature = "hydrate")]
                    spawn_on_page(page, async move {
                        gloo_timers::future::TimeoutFuture::new(TRANSCRIPT_SETTLE_MS).await;
                        send();
                    });
                }
            }
            VoiceEvent::Error(reason) => {
                leptos::logging::warn!("speech recognition error: {reason}");
                chat.update(ChatState::listening_stopped);
            }
            VoiceEvent::End => chat.update(ChatState::listening_stopped),
        }
        // The recognizer is still dispatching this event; release it afterwards.
        #[cfg(feature = "hydrate")]
        {
            if finished {
                spawn_on_page(page, async move {
                    voice.with_value(|v| v.stop_listening());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = finished;
    };

    let on_toggle_listening = move |_| {
        let mut command = ListenCommand::Ignore;
        chat.update(|c| command = c.toggle_listening());
        match command {
            ListenCommand::Start => voice.with_value(|v| v.start_listening(Rc::new(on_voice_event))),
            ListenCommand::Stop => voice.with_value(|v| v.stop_listening()),
            ListenCommand::Ignore => {}
        }
    };

    let on_toggle_voice_output = move |_| {
        let mut enabled = false;
        chat.update(|c| enabled = c.toggle_voice_output());
        if !enabled {
            voice.with_value(|v| v.cancel_speech());
        }
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Clear the conversation?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }
        let mut cleared = false;
        chat.update(|c| cleared = c.clear());
        if cleared {
            voice.with_value(|v| v.cancel_speech());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let loading = move || chat.with(ChatState::is_loading);
    let listening = move || chat.with(ChatState::is_listening);

    view! {
        <div class="chat-container" class:chat-container--error=move || chat.with(|c| c.error.is_some())>
            <div class="chat-header">
                <div class="chat-header__title">
                    <h2>"Chat with Leasa"</h2>
                    <p>"Your AI Real Estate Agent"</p>
                </div>
                <div class="chat-header__actions">
                    <Show when=move || chat.with(|c| c.can_speak)>
                        <button
                            type="button"
                            class="chat-voice-output"
                            class:chat-voice-output--on=move || chat.with(|c| c.voice_output)
                            title="Read replies aloud"
                            on:click=on_toggle_voice_output
                        >
                            {move || if chat.with(|c| c.voice_output) { "Voice on" } else { "Voice off" }}
                        </button>
                    </Show>
                    <button
                        type="button"
                        class="chat-clear"
                        on:click=on_clear
                        disabled=move || chat.with(|c| c.is_loading() || c.messages.is_empty())
                    >
                        "Clear"
                    </button>
                </div>
            </div>

            <div class="chat-messages" node_ref=messages_ref>
                <Show
                    when=move || chat.with(|c| !c.messages.is_empty())
                    fallback=|| {
                        view! {
                            <div class="welcome-message">
                                <h3>"Welcome to Leasa!"</h3>
                                <p>
                                    "I'm your AI real estate agent. How can I help you find your perfect property today?"
                                </p>
                            </div>
                        }
                    }
                >
                    <For
                        each=move || chat.with(|c| c.messages.clone())
                        key=|message| message.id.clone()
                        children=|message| view! { <ChatMessageBubble message=message /> }
                    />
                </Show>
                {move || loading().then(|| view! { <div class="message agent-message message--pending">"Thinking..."</div> })}
            </div>

            <form class="chat-input-form" on:submit=on_submit>
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder=move || if listening() { "Listening..." } else { "Type your message here..." }
                    disabled=loading
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                />
                <Show when=move || chat.with(|c| c.can_listen)>
                    <button
                        type="button"
                        class="chat-mic"
                        class:chat-mic--active=listening
                        title=move || if listening() { "Stop listening" } else { "Speak your message" }
                        disabled=loading
                        on:click=on_toggle_listening
                    >
                        {move || if listening() { "Stop" } else { "Mic" }}
                    </button>
                </Show>
                <button type="submit" disabled=move || !chat.with(ChatState::can_submit)>
                    {move || if loading() { "Sending..." } else { "Send" }}
                </button>
            </form>

            <RecommendationPanel recommendations=Signal::derive(move || chat.with(|c| c.recommendations.clone())) />
        </div>
    }
}
