use badgehunter_core::{AdviceMode, Conversation};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::chat_bubble::ChatBubble;

#[derive(Properties, PartialEq, Clone)]
pub struct AssistantPageProps {
    pub conversation: Conversation,
    pub mode: AdviceMode,
    pub pending: bool,
    pub on_send: Callback<String>,
    pub on_toggle_mode: Callback<()>,
}

#[function_component(AssistantPage)]
pub fn assistant_page(props: &AssistantPageProps) -> Html {
    let draft = use_state(String::new);

    let send = {
        let draft = draft.clone();
        let cb = props.on_send.clone();
        let pending = props.pending;
        Callback::from(move |()| {
            if pending || draft.trim().is_empty() {
                return;
            }
            cb.emit((*draft).clone());
            draft.set(String::new());
        })
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };
    let on_click_send = Callback::from(move |_| send.emit(()));
    let toggle_mode = {
        let cb = props.on_toggle_mode.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let deep = props.mode.is_deep();
    let (mode_label, mode_title, placeholder, typing) = if deep {
        (
            "Deep Think",
            "Using Deep Reasoning Model",
            "Ask a complex question about strategies...",
            "Thinking deeply...",
        )
    } else {
        (
            "Fast Mode",
            "Using Fast Model",
            "Ask a quick question...",
            "Typing...",
        )
    };

    let bubbles = props
        .conversation
        .messages()
        .iter()
        .map(|message| html! { <ChatBubble message={message.clone()} /> });
    let typing_indicator = if props.pending {
        html! { <div class="chat-typing" aria-live="polite">{ typing }</div> }
    } else {
        Html::default()
    };

    html! {
        <div class="assistant glass-panel">
            <header class="assistant-head">
                <h2>{ "Badge Assistant" }</h2>
                <button id="mode-toggle" type="button" title={mode_title}
                    class={classes!("mode-toggle", deep.then_some("mode-toggle-deep"))}
                    aria-pressed={deep.to_string()} onclick={toggle_mode}>
                    { mode_label }
                </button>
            </header>
            <div class="chat-log" role="log" aria-live="polite">
                { for bubbles }
                { typing_indicator }
            </div>
            <div class="chat-input">
                <label for="chat-input" class="sr-only">{ "Message" }</label>
                <input id="chat-input" type="text" {placeholder} value={(*draft).clone()}
                    oninput={on_input} onkeydown={on_keydown} disabled={props.pending} />
                <button id="chat-send" type="button" aria-label="Send"
                    disabled={props.pending || draft.trim().is_empty()} onclick={on_click_send}>
                    { "➤" }
                </button>
            </div>
            <p class="chat-disclaimer">
                { "Assistant may make mistakes. Check official docs for critical info." }
            </p>
        </div>
    }
}
