//! One entry of the chat conversation log.
//!
//! Agent replies are rendered as Markdown; user and system messages are shown
//! as plain text.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::state::chat::{ChatMessage, ChatRole};
use crate::util::time::clock_label;

#[component]
pub fn ChatMessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let is_system = message.role == ChatRole::System;
    let time = clock_label(&message.timestamp);

    let body = if message.role == ChatRole::Agent {
        let rendered = render_markdown_html(&message.content);
        view! { <div class="message-content message-content--markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <div class="message-content">{message.content}</div> }.into_any()
    };

    view! {
        <div
            class="message"
            class:user-message=is_user
            class:agent-message=!is_user
            class:system-message=is_system
        >
            {body}
            <div class="message-timestamp">{time}</div>
        </div>
    }
}

/// Render an agent reply to HTML for `inner_html`.
///
/// Raw HTML is dropped, and link or image targets with a scheme other than
/// `http`, `https` or `mailto` are replaced so they cannot run script.
pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH).filter_map(
        |event| match event {
            Event::Html(_) | Event::InlineHtml(_) => None,
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
                link_type,
                dest_url: neutralize_destination(dest_url),
                title,
                id,
            })),
            Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
                link_type,
                dest_url: neutralize_destination(dest_url),
                title,
                id,
            })),
            other => Some(other),
        },
    );

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn neutralize_destination(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&url) { url } else { CowStr::Borrowed("#") }
}

/// Relative targets and `http`, `https`, `mailto` pass; any other scheme fails.
pub(crate) fn is_safe_destination(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme.
    let normalized: String =
        url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_control()).collect::<String>().to_ascii_lowercase();
    let scheme_end = normalized.find(':');
    let path_start = normalized.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(slash)) if slash < colon => true,
        (Some(_), _) => ["http:", "https:", "mailto:"].iter().any(|scheme| normalized.starts_with(scheme)),
    }
}
