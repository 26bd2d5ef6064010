//! Workdeck 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（位置信号、导航、登录后去向）
//! - `auth`: 应用状态容器与认证流程
//! - `session`: 把恢复控制器挂到位置与状态信号上
//! - `guards`: 路由守卫组件
//! - `components`: 页面组件

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod invitation;
    pub mod login;
    pub mod navbar;
    pub mod workspace;
}
mod config;
mod guards;
pub mod logger;
mod notice;
mod session;

use crate::auth::{AuthContext, init_auth, use_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::invitation::InvitationPage;
use crate::components::login::LoginPage;
use crate::components::workspace::{TeamPage, WorkspacePage, WorkspaceSection};
use crate::config::{ClientConfig, use_config};
use crate::guards::ProtectedRoute;
use crate::notice::{NoticeContext, Toast};

use leptos::prelude::*;
use workdeck::AppRoute;

// 原生 Web API 封装模块
// 直接基于 web_sys，不引入 gloo-* 系列 crate。
pub(crate) mod web {
    pub mod router;
    mod storage;

    pub use storage::{LocalStorage, SessionStorage};
}

use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，需要登录的页面包在守卫里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Invitation => view! { <InvitationPage /> }.into_any(),
        AppRoute::Root | AppRoute::Dashboard => view! {
            <ProtectedRoute>
                <DashboardPage />
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::WorkspaceDashboard(id) => view! {
            <ProtectedRoute>
                <WorkspacePage workspace_id=id.clone() section=WorkspaceSection::Dashboard />
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::WorkspaceTasks(id) => view! {
            <ProtectedRoute>
                <WorkspacePage workspace_id=id.clone() section=WorkspaceSection::Tasks />
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::Team(id) => view! {
            <ProtectedRoute>
                <TeamPage workspace_id=id.clone() />
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 恢复控制器需要路由上下文，因此挂在 Router 内部
#[component]
fn Restoration() -> impl IntoView {
    session::install_restoration(use_auth(), use_router(), use_config().nav);
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 运行时配置
    let config = ClientConfig::from_document();
    provide_context(config.clone());

    // 2. 应用状态与通知
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(NoticeContext::new());

    // 3. 通过会话 Cookie 恢复登录状态
    init_auth(auth_ctx, config.clone());

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated nav=config.nav>
            <Restoration />
            <RouterOutlet matcher=route_matcher />
            <Toast />
        </Router>
    }
}
