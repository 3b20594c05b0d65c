use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::{AttrValue, Html};

/// Displays a temporary toast message at the bottom of the page for 3 seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking notice. Used for failures the user has to acknowledge.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            gloo_console::error!("alert failed:", message.to_string());
        }
    }
}

/// Blocking yes/no question. No window means no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

const LINK_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

fn allowed_destination(dest: &str) -> bool {
    let dest = dest.trim().to_ascii_lowercase();
    LINK_SCHEMES.iter().any(|scheme| dest.starts_with(scheme))
}

/// Markdown to an HTML string. Raw HTML is rendered as plain text, and links
/// or images pointing anywhere but http(s)/mailto keep only their text.
pub fn markdown_html(text: &str) -> String {
    // One entry per open link/image: whether its tags were dropped.
    let mut dropped: Vec<bool> = Vec::new();
    let parser = Parser::new(text).filter_map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::Start(Tag::Link { ref dest_url, .. })
        | Event::Start(Tag::Image { ref dest_url, .. }) => {
            let drop = !allowed_destination(dest_url);
            dropped.push(drop);
            (!drop).then_some(event)
        }
        Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
            let drop = dropped.pop().unwrap_or(false);
            (!drop).then_some(event)
        }
        other => Some(other),
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn render_markdown(text: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_html(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_link_keeps_only_its_text() {
        let out = markdown_html("[영향 분석 원문](javascript:alert(document.cookie))");
        assert!(!out.contains("javascript"));
        assert!(!out.contains("<a"));
        assert!(out.contains("영향 분석 원문"));
    }

    #[test]
    fn script_scheme_is_case_insensitive() {
        let out = markdown_html("[x](JavaScript:alert(1)) and <vbscript:msgbox>");
        assert!(!out.contains("href"));
        assert!(!out.contains("JavaScript"));
    }

    #[test]
    fn data_image_becomes_alt_text() {
        let out = markdown_html("![도표](data:image/svg+xml;base64,PHN2Zz4=)");
        assert!(!out.contains("<img"));
        assert!(!out.contains("data:"));
        assert!(out.contains("도표"));
    }

    #[test]
    fn web_and_mail_links_survive() {
        let out = markdown_html(
            "[법제처](https://www.law.go.kr) ![logo](http://example.com/a.png) [담당](mailto:safety@example.com)",
        );
        assert!(out.contains(r#"<a href="https://www.law.go.kr">법제처</a>"#));
        assert!(out.contains(r#"<img src="http://example.com/a.png" alt="logo" />"#));
        assert!(out.contains(r#"href="mailto:safety@example.com""#));
    }

    #[test]
    fn raw_html_is_escaped() {
        let out = markdown_html("<script>alert(1)</script>\n\n**굵게**");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("<strong>굵게</strong>"));
    }
}
