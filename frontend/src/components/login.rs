use crate::auth::{LoginStep, login, use_auth, verify_otp};
use crate::config::use_config;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页面
///
/// 登录成功后只更新认证状态，跳转由路由服务完成（登录后目标地址或面板）。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (otp, set_otp) = signal(String::new());
    let (awaiting_otp, set_awaiting_otp) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_loading = move || !auth.ready.get();

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            {
                let config = config.clone();
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    if email.get().is_empty() || (!awaiting_otp.get() && password.get().is_empty()) {
                        set_error_msg.set(Some("请填写所有字段".to_string()));
                        return;
                    }

                    set_is_submitting.set(true);
                    set_error_msg.set(None);

                    let config = config.clone();
                    spawn_local(async move {
                        let result = if awaiting_otp.get_untracked() {
                            verify_otp(auth, &config, email.get_untracked(), otp.get_untracked())
                                .await
                                .map(|_| LoginStep::SignedIn)
                        } else {
                            login(auth, &config, email.get_untracked(), password.get_untracked()).await
                        };

                        match result {
                            Ok(LoginStep::SignedIn) => {}
                            Ok(LoginStep::OtpRequired) => set_awaiting_otp.set(true),
                            Err(e) => {
                                log::warn!("[Login] {e}");
                                set_error_msg.set(Some("登录失败，请检查邮箱和密码".to_string()));
                            }
                        }
                        set_is_submitting.set(false);
                    });
                };

                view! {
                    <div class="hero min-h-screen bg-base-200">
                        <div class="hero-content flex-col w-full max-w-md">
                            <div class="text-center mb-4">
                                <h1 class="text-3xl font-bold">"Workdeck"</h1>
                                <p class="text-base-content/70">
                                    {move || if awaiting_otp.get() {
                                        "请输入发送到邮箱的验证码"
                                    } else {
                                        "登录以访问你的工作区"
                                    }}
                                </p>
                            </div>

                            <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                                <form class="card-body" on:submit=on_submit>
                                    <Show when=move || error_msg.get().is_some()>
                                        <div role="alert" class="alert alert-error text-sm py-2">
                                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                                        </div>
                                    </Show>

                                    <div class="form-control">
                                        <label class="label" for="email">
                                            <span class="label-text">"邮箱"</span>
                                        </label>
                                        <input
                                            id="email"
                                            type="email"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                            prop:disabled=move || awaiting_otp.get()
                                            class="input input-bordered"
                                            required
                                        />
                                    </div>

                                    <Show
                                        when=move || awaiting_otp.get()
                                        fallback=move || view! {
                                            <div class="form-control">
                                                <label class="label" for="password">
                                                    <span class="label-text">"密码"</span>
                                                </label>
                                                <input
                                                    id="password"
                                                    type="password"
                                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                                    prop:value=password
                                                    class="input input-bordered"
                                                    required
                                                />
                                            </div>
                                        }
                                    >
                                        <div class="form-control">
                                            <label class="label" for="otp">
                                                <span class="label-text">"验证码"</span>
                                            </label>
                                            <input
                                                id="otp"
                                                type="text"
                                                inputmode="numeric"
                                                on:input=move |ev| set_otp.set(event_target_value(&ev))
                                                prop:value=otp
                                                class="input input-bordered font-mono"
                                                required
                                            />
                                        </div>
                                    </Show>

                                    <div class="form-control mt-6">
                                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                            {move || if is_submitting.get() {
                                                view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                            } else if awaiting_otp.get() {
                                                "验证".into_any()
                                            } else {
                                                "登录".into_any()
                                            }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                }
            }
        </Show>
    }
}
