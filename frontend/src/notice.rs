//! 短暂通知（Toast）

use leptos::prelude::*;

/// 通知上下文：消息内容, 是否出错
#[derive(Clone, Copy)]
pub struct NoticeContext {
    notice: RwSignal<Option<(String, bool)>>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notice: RwSignal::new(None),
        }
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.notice.set(Some((msg.into(), true)));
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.notice.set(Some((msg.into(), false)));
    }
}

pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

/// 通知提示框，3 秒后自动清除
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_notice();
    let notice = ctx.notice;

    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(move || notice.set(None), std::time::Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notice.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                }>
                    <span>{move || notice.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
