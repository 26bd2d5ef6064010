//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 当前位置以 `Location` 信号暴露，守卫与恢复控制器都订阅它。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use workdeck::{AppRoute, Location, NavConfig, Redirect, post_login_destination};

use crate::session::browser_positions;

/// 获取当前浏览器位置
fn current_location() -> Location {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            Location::new(
                location.pathname().unwrap_or_else(|_| "/".to_string()),
                location.search().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前位置（只读信号）
    location: ReadSignal<Location>,
    set_location: WriteSignal<Location>,
    /// 当前路由，只在路径变化时更新
    route: Memo<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    nav: StoredValue<NavConfig>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, nav: NavConfig) -> Self {
        let (location, set_location) = signal(current_location());
        let route = Memo::new(move |_| location.with(|loc| AppRoute::from_path(&loc.pathname)));

        Self {
            location,
            set_location,
            route,
            is_authenticated,
            nav: StoredValue::new(nav),
        }
    }

    pub fn location(&self) -> ReadSignal<Location> {
        self.location
    }

    pub fn current_route(&self) -> Memo<AppRoute> {
        self.route
    }

    /// 推入新历史记录
    pub fn navigate(&self, path: &str) {
        self.go(Location::parse(path), true);
    }

    /// 替换当前历史记录
    pub fn replace(&self, path: &str) {
        self.go(Location::parse(path), false);
    }

    /// 执行守卫或恢复控制器给出的跳转
    pub fn follow(&self, redirect: &Redirect) {
        self.go(Location::parse(&redirect.to), !redirect.replace);
    }

    /// **核心方法：导航**
    ///
    /// 已认证用户访问登录页时改去登录后目标地址，其余守卫由页面组件负责。
    fn go(&self, target: Location, use_push: bool) {
        let target = self.divert_if_authenticated(target);

        if self.location.with_untracked(|current| *current == target) {
            return;
        }

        let path = target.full_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_location.set(target);
    }

    fn divert_if_authenticated(&self, target: Location) -> Location {
        let route = AppRoute::from_path(&target.pathname);
        if route.should_redirect_when_authenticated() && self.is_authenticated.get_untracked() {
            let destination = self.post_login_destination();
            log::info!("[Router] Already authenticated. Redirecting to {destination}.");
            Location::parse(&destination)
        } else {
            target
        }
    }

    fn post_login_destination(&self) -> String {
        let positions = browser_positions(&self.nav.get_value());
        post_login_destination(&positions)
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = current_location();
            let diverted = router.divert_if_authenticated(target.clone());
            if diverted != target {
                replace_history_state(&diverted.full_path());
            }
            router.set_location.set(diverted);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登出后的重定向由受保护路由的守卫处理（需要记录返回地址）。
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                log::info!("[Router] Auth state changed: logged in, leaving login page.");
                let destination = router.post_login_destination();
                router.go(Location::parse(&destination), false);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, nav: NavConfig) -> RouterService {
    let router = RouterService::new(is_authenticated, nav);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    nav: NavConfig,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, nav);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，拦截点击改走路由服务
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
