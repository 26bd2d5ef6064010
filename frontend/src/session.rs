//! 会话恢复接线
//!
//! 恢复控制器订阅 `{location, auth, workspace}`，
//! 每次变化都对最新快照求值，再把状态指令和跳转交还给状态容器与路由服务。

use leptos::prelude::*;
use workdeck::route::LOGIN_PATH;
use workdeck::{Arrival, NavConfig, PositionStore, RestorationController, SystemClock};

use crate::auth::AuthContext;
use crate::web::router::RouterService;
use crate::web::{LocalStorage, SessionStorage};

pub type BrowserPositions = PositionStore<LocalStorage, SessionStorage, SystemClock>;

pub fn browser_positions(nav: &NavConfig) -> BrowserPositions {
    PositionStore::new(LocalStorage, SessionStorage, SystemClock, nav.clone())
}

/// 安装恢复控制器
pub fn install_restoration(auth: AuthContext, router: RouterService, nav: NavConfig) {
    let positions = browser_positions(&nav);

    // 返回值记录本次登录后是否已在登录页以外求值过；登出后重新计为进入
    Effect::new(move |entered: Option<bool>| {
        // 启动检查完成前认证状态不可信，清理分支会误删记录
        if !auth.ready.get() {
            return false;
        }

        let arrival = if entered.unwrap_or(false) {
            Arrival::Navigation
        } else {
            Arrival::Entry
        };
        let location = router.location().get();
        let (reaction, authenticated) = auth.state.with(|state| {
            let reaction =
                RestorationController::new(&positions).react(&state.snapshot(&location), arrival);
            (reaction, state.auth.is_authenticated)
        });

        if let Some(command) = reaction.command {
            log::debug!("[Restore] applying {command:?}");
            auth.set_state.update(|state| state.apply(command));
        }
        if let Some(redirect) = reaction.redirect {
            router.follow(&redirect);
        }
        authenticated && location.pathname != LOGIN_PATH
    });
}
