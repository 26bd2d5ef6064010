use crate::auth::use_auth;
use crate::components::navbar::AppNavbar;
use crate::guards::TeamRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use workdeck::AppRoute;
use workdeck::route::DASHBOARD_PATH;

/// 工作区内的页面分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSection {
    Dashboard,
    Tasks,
    Team,
}

/// 工作区页面外壳：标题 + 分区导航
///
/// 当前工作区由恢复控制器按路径同步，这里只读取。
#[component]
pub fn WorkspacePage(workspace_id: String, section: WorkspaceSection) -> impl IntoView {
    let auth = use_auth();

    let id = workspace_id.clone();
    let workspace = move || auth.state.with(|s| s.workspace.find(&id).cloned());

    let tab = move |target: WorkspaceSection, route: AppRoute, label: &'static str| {
        let class = if target == section { "tab tab-active" } else { "tab" };
        view! { <Link to=route.to_path() class=class>{label}</Link> }
    };

    let heading = {
        let workspace = workspace.clone();
        move || workspace().map(|ws| ws.name).unwrap_or_else(|| "…".to_string())
    };
    let is_public = move || workspace().map(|ws| ws.allows_team()).unwrap_or(false);

    let overview_route = AppRoute::WorkspaceDashboard(workspace_id.clone());
    let tasks_route = AppRoute::WorkspaceTasks(workspace_id.clone());
    let team_route = AppRoute::Team(workspace_id);

    let body = match section {
        WorkspaceSection::Dashboard => view! {
            <p class="text-base-content/70">"工作区概览"</p>
        }
        .into_any(),
        WorkspaceSection::Tasks => view! {
            <p class="text-base-content/70">"任务列表"</p>
        }
        .into_any(),
        WorkspaceSection::Team => view! {
            <p class="text-base-content/70">"团队成员"</p>
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <AppNavbar />
                <div class="flex items-center gap-4">
                    <Link to=DASHBOARD_PATH class="btn btn-ghost btn-sm">"← 面板"</Link>
                    <h1 class="text-2xl font-bold">{heading}</h1>
                </div>
                <div role="tablist" class="tabs tabs-bordered">
                    {tab(WorkspaceSection::Dashboard, overview_route, "概览")}
                    {tab(WorkspaceSection::Tasks, tasks_route, "任务")}
                    <Show when=is_public>
                        {tab(WorkspaceSection::Team, team_route.clone(), "团队")}
                    </Show>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">{body}</div>
                </div>
            </div>
        </div>
    }
}

/// 团队页面：先经过团队守卫
#[component]
pub fn TeamPage(workspace_id: String) -> impl IntoView {
    let page_id = workspace_id.clone();

    view! {
        <TeamRoute workspace_id=workspace_id>
            <WorkspacePage workspace_id=page_id.clone() section=WorkspaceSection::Team />
        </TeamRoute>
    }
}
