use crate::auth::{load_workspaces, select_workspace, use_auth};
use crate::components::navbar::AppNavbar;
use crate::config::use_config;
use crate::notice::use_notice;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use workdeck::route::workspace_dashboard_path;

/// 个人面板：工作区列表
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();
    let notice = use_notice();

    let (loading, set_loading) = signal(false);

    let load = {
        let config = config.clone();
        move || {
            let config = config.clone();
            set_loading.set(true);
            spawn_local(async move {
                if let Err(e) = load_workspaces(auth, &config).await {
                    notice.error(format!("加载工作区失败: {}", e));
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new({
        let load = load.clone();
        move |_| {
            if !auth.state.with_untracked(|s| s.workspace.loaded) {
                load();
            }
        }
    });

    let workspaces = move || auth.state.with(|s| s.workspace.workspaces.clone());
    let current_id = move || auth.state.with(|s| s.workspace.current_id().map(str::to_string));

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                <AppNavbar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h3 class="card-title">"我的工作区"</h3>
                            <button
                                on:click=move |_| load()
                                disabled=move || loading.get()
                                class="btn btn-ghost btn-sm"
                            >
                                "刷新"
                            </button>
                        </div>

                        <Show when=move || loading.get()>
                            <span class="loading loading-spinner loading-md"></span>
                        </Show>
                        <Show when=move || !loading.get() && workspaces().is_empty()>
                            <p class="text-base-content/50">"还没有可访问的工作区。"</p>
                        </Show>

                        <ul class="menu bg-base-100 w-full">
                            <For
                                each=workspaces
                                key=|ws| ws.id.clone()
                                children={
                                    let config = config.clone();
                                    move |ws| {
                                        let id = ws.id.clone();
                                        let is_current = {
                                            let id = id.clone();
                                            move || current_id().as_deref() == Some(id.as_str())
                                        };
                                        let config = config.clone();
                                        let name = ws.name.clone();
                                        let private = ws.visibility.is_private();
                                        let on_select = move |_| {
                                            select_workspace(auth, &config, ws.clone());
                                            router.navigate(&workspace_dashboard_path(&id));
                                        };
                                        view! {
                                            <li>
                                                <a on:click=on_select class:active=is_current>
                                                    {name}
                                                    <span class="badge badge-ghost badge-sm">
                                                        {if private { "私有" } else { "公开" }}
                                                    </span>
                                                </a>
                                            </li>
                                        }
                                    }
                                }
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
