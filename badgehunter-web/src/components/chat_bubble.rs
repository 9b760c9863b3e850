use badgehunter_core::{ChatMessage, ChatRole};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: ChatMessage,
}

#[function_component(ChatBubble)]
pub fn chat_bubble(p: &Props) -> Html {
    let message = &p.message;
    let from_user = message.role == ChatRole::User;
    let row = classes!(
        "chat-row",
        if from_user { "chat-row-user" } else { "chat-row-assistant" }
    );
    let avatar = match (from_user, message.deep) {
        (true, _) => "👤",
        (false, true) => "🧠",
        (false, false) => "🤖",
    };
    let bubble = classes!(
        "chat-bubble",
        if from_user { "chat-bubble-user" } else { "chat-bubble-assistant" },
        message.deep.then_some("chat-bubble-deep"),
    );

    html! {
        <div class={row}>
            <span class="chat-avatar" aria-hidden="true">{ avatar }</span>
            <div class={bubble}>{ message.text.clone() }</div>
        </div>
    }
}
