use common::resource::{ConfirmPrompt, Feedback, Notice, NoticeLevel};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Toasts for notices and the native confirm dialog for deletions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFeedback;

impl Feedback for BrowserFeedback {
    fn notify(&mut self, notice: Notice) {
        show_toast(&notice);
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
        let message = format!("{}\n\n{}", prompt.title, prompt.text);
        web_sys::window()
            .and_then(|window| window.confirm_with_message(&message).ok())
            .unwrap_or(false)
    }
}

/// Fixed-position notice at the bottom of the page, removed after three
/// seconds.
pub fn show_toast(notice: &Notice) {
    let background = match notice.level {
        NoticeLevel::Success => "rgba(46, 125, 50, 0.92)",
        NoticeLevel::Error => "rgba(198, 40, 40, 0.92)",
        NoticeLevel::Info => "rgba(0, 0, 0, 0.8)",
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    let title = document.create_element("strong").ok();
    let text = document.create_element("div").ok();
    if let (Some(title), Some(text)) = (title, text) {
        title.set_text_content(Some(&notice.title));
        text.set_text_content(Some(&notice.text));
        toast.append_child(&title).ok();
        toast.append_child(&text).ok();
    }

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
