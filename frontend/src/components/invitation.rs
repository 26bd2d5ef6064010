use crate::auth::{load_workspaces, select_workspace, use_auth};
use crate::config::use_config;
use crate::notice::use_notice;
use crate::session::browser_positions;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use workdeck::route::{DASHBOARD_PATH, INVITATION_PARAM, LOGIN_PATH, workspace_dashboard_path};
use workdeck_shared::protocol::AcceptInvitationRequest;

/// 接受邀请页面
///
/// 未登录也可访问：未登录时引导登录，并记下本页地址以便登录后回来。
#[component]
pub fn InvitationPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();
    let notice = use_notice();

    let invitation = Memo::new(move |_| {
        router
            .location()
            .with(|loc| loc.query_param(INVITATION_PARAM))
    });
    let is_authenticated = move || auth.state.with(|s| s.auth.has_session());
    let (accepting, set_accepting) = signal(false);

    let on_sign_in = {
        let nav = config.nav.clone();
        move |_| {
            let here = router.location().with_untracked(|loc| loc.full_path());
            browser_positions(&nav).save_redirect_marker(&here);
            router.navigate(LOGIN_PATH);
        }
    };
    let on_sign_in = StoredValue::new(on_sign_in);

    let on_accept = move |_| {
        let Some(invitation) = invitation.get_untracked() else {
            return;
        };
        let config = config.clone();
        set_accepting.set(true);
        spawn_local(async move {
            match auth
                .api(&config)
                .send(&AcceptInvitationRequest { invitation })
                .await
            {
                Ok(workspace) => {
                    if let Err(e) = load_workspaces(auth, &config).await {
                        log::warn!("[Invitation] failed to reload workspaces: {e}");
                    }
                    notice.success(format!("已加入 {}", workspace.name));
                    let target = workspace_dashboard_path(&workspace.id);
                    select_workspace(auth, &config, workspace);
                    router.replace(&target);
                }
                Err(e) => {
                    notice.error(format!("接受邀请失败: {}", e));
                    set_accepting.set(false);
                }
            }
        });
    };
    let on_accept = StoredValue::new(on_accept);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-3xl font-bold">"工作区邀请"</h1>
                    <Show
                        when=move || invitation.get().is_some()
                        fallback=move || view! {
                            <p>"邀请链接无效。"</p>
                            <button class="btn" on:click=move |_| router.navigate(DASHBOARD_PATH)>"返回面板"</button>
                        }
                    >
                        <Show
                            when=move || auth.ready.get()
                            fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
                        >
                            <Show
                                when=is_authenticated
                                fallback={
                                    move || view! {
                                        <p>"登录后即可接受邀请。"</p>
                                        <button class="btn btn-primary" on:click=on_sign_in.get_value()>"登录"</button>
                                    }
                                }
                            >
                                <button
                                    class="btn btn-primary"
                                    disabled=move || accepting.get()
                                    on:click=on_accept.get_value()
                                >
                                    "接受邀请"
                                </button>
                            </Show>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
