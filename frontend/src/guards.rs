//! 路由守卫组件
//!
//! 把核心库的守卫求值挂到位置与状态信号上：
//! 求值结果为跳转时交给路由服务，为渲染时才挂载子组件。

use leptos::prelude::*;
use workdeck::{GuardDecision, authenticated_route, team_route};

use crate::auth::use_auth;
use crate::config::use_config;
use crate::notice::use_notice;
use crate::session::browser_positions;
use crate::web::router::use_router;

#[component]
fn PageSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 需要登录的路由
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let positions = browser_positions(&use_config().nav);
    let (decision, set_decision) = signal(GuardDecision::Pending);

    Effect::new(move |_| {
        let next = if auth.ready.get() {
            let location = router.location().get();
            auth.state
                .with(|state| authenticated_route(&state.auth, &location, &positions))
        } else {
            GuardDecision::Pending
        };

        if let GuardDecision::Redirect { redirect, .. } = &next {
            router.follow(redirect);
        }
        set_decision.set(next);
    });

    view! {
        <Show when=move || decision.get().is_render() fallback=|| view! { <PageSpinner /> }>
            {children()}
        </Show>
    }
}

/// 团队路由：工作区 ID 必须合法、存在且为公开工作区
#[component]
pub fn TeamRoute(workspace_id: String, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notice = use_notice();
    let (decision, set_decision) = signal(GuardDecision::Pending);

    Effect::new(move |_| {
        let next = auth
            .state
            .with(|state| team_route(&workspace_id, &state.workspace));

        if let GuardDecision::Redirect { redirect, reason } = &next {
            if let Some(msg) = reason.notice() {
                notice.error(msg);
            }
            router.follow(redirect);
        }
        set_decision.set(next);
    });

    view! {
        <Show when=move || decision.get().is_render() fallback=|| view! { <PageSpinner /> }>
            {children()}
        </Show>
    }
}
