//! 认证模块
//!
//! 管理全局应用状态（认证 + 工作区），与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::session::browser_positions;
use leptos::prelude::*;
use leptos::task::spawn_local;
use workdeck::{AppState, AuthState};
use workdeck_shared::protocol::{
    CurrentUserRequest, ListWorkspacesRequest, LoginRequest, LogoutRequest, VerifyOtpRequest,
};
use workdeck_shared::{AuthSession, Workspace};

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 应用状态（只读）
    pub state: ReadSignal<AppState>,
    /// 设置应用状态（写入）
    pub set_state: WriteSignal<AppState>,
    /// 启动时的会话检查是否完成
    pub ready: ReadSignal<bool>,
    set_ready: WriteSignal<bool>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AppState::init());
        let (ready, set_ready) = signal(false);
        Self {
            state,
            set_state,
            ready,
            set_ready,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.auth.is_authenticated))
    }

    /// 以当前 token 构造 API 客户端
    pub fn api(&self, config: &ClientConfig) -> ApiClient {
        let token = self.state.with_untracked(|s| s.auth.token.clone());
        ApiClient::new(&config.api_base, token)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    SignedIn,
    OtpRequired,
}

/// 初始化认证状态
///
/// 通过会话 Cookie 询问服务器当前用户，完成后才标记就绪，
/// 在此之前守卫和恢复控制器都不做判断。
pub fn init_auth(ctx: AuthContext, config: ClientConfig) {
    spawn_local(async move {
        match ctx.api(&config).send(&CurrentUserRequest).await {
            Ok(user) => {
                ctx.set_state.update(|state| {
                    state.auth = AuthState {
                        is_authenticated: true,
                        user: Some(user),
                        token: None,
                    };
                });
                if let Err(e) = load_workspaces(ctx, &config).await {
                    log::warn!("[Auth] failed to load workspaces: {e}");
                }
            }
            Err(e) => log::debug!("[Auth] no active session: {e}"),
        }
        ctx.set_ready.set(true);
    });
}

/// 登录
///
/// 成功后只更新状态，离开登录页由路由服务处理。
pub async fn login(
    ctx: AuthContext,
    config: &ClientConfig,
    email: String,
    password: String,
) -> Result<LoginStep, ApiError> {
    let res = ctx
        .api(config)
        .send(&LoginRequest { email, password })
        .await?;

    match res.session {
        Some(session) if !res.requires_otp => {
            establish(ctx, config, session).await;
            Ok(LoginStep::SignedIn)
        }
        _ => Ok(LoginStep::OtpRequired),
    }
}

/// 提交 OTP 完成登录
pub async fn verify_otp(
    ctx: AuthContext,
    config: &ClientConfig,
    email: String,
    otp: String,
) -> Result<(), ApiError> {
    let session = ctx
        .api(config)
        .send(&VerifyOtpRequest { email, otp })
        .await?;
    establish(ctx, config, session).await;
    Ok(())
}

async fn establish(ctx: AuthContext, config: &ClientConfig, session: AuthSession) {
    ctx.set_state.update(|state| state.login_succeeded(session));
    if let Err(e) = load_workspaces(ctx, config).await {
        log::warn!("[Auth] failed to load workspaces: {e}");
    }
}

/// 加载工作区列表
pub async fn load_workspaces(ctx: AuthContext, config: &ClientConfig) -> Result<(), ApiError> {
    match ctx.api(config).send(&ListWorkspacesRequest).await {
        Ok(list) => {
            ctx.set_state.update(|state| state.set_workspaces(list));
            Ok(())
        }
        Err(e) if e.is_unauthorized() => {
            // 会话已失效
            ctx.set_state.update(|state| state.reset());
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// 用户主动选择工作区
pub fn select_workspace(ctx: AuthContext, config: &ClientConfig, workspace: Workspace) {
    browser_positions(&config.nav).save_workspace_ref(&workspace);
    ctx.set_state
        .update(|state| state.set_current_workspace(workspace));
}

/// 注销并清除状态
///
/// 调用方应在同一事件中随即跳转到登录页，否则守卫会把当前页记为登录后返回地址。
pub fn logout(ctx: AuthContext, config: &ClientConfig) {
    let api = ctx.api(config);
    spawn_local(async move {
        if let Err(e) = api.send(&LogoutRequest).await {
            log::warn!("[Auth] logout request failed: {e}");
        }
    });

    ctx.set_state.update(|state| state.logout());
    // 持久化位置由恢复控制器的清理分支处理
}
