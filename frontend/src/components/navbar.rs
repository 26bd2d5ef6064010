use crate::auth::{logout, use_auth};
use crate::config::use_config;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use workdeck::route::{DASHBOARD_PATH, LOGIN_PATH};

/// 受保护页面共用的顶栏：回到面板、当前用户、退出登录
#[component]
pub fn AppNavbar() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();

    // 先清状态再跳转，守卫不会把当前页记为登录后返回地址
    let on_logout = move |_| {
        logout(auth, &config);
        router.replace(LOGIN_PATH);
    };

    let user_name = move || {
        auth.state
            .with(|s| s.auth.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to=DASHBOARD_PATH class="btn btn-ghost text-xl">"Workdeck"</Link>
                <span class="badge badge-neutral hidden md:inline-flex">{user_name}</span>
            </div>
            <div class="flex-none gap-2">
                <button on:click=on_logout class="btn btn-outline btn-error">"退出登录"</button>
            </div>
        </div>
    }
}
