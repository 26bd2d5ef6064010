//! 前端运行时配置
//!
//! 从页面 `<meta>` 标签读取，缺省时使用默认值：
//! - `workdeck-api`: REST API 根地址
//! - `workdeck-nav`: `NavConfig` 的 JSON 覆盖（可只写部分字段）

use leptos::prelude::*;
use workdeck::NavConfig;

const DEFAULT_API_BASE: &str = "/api";
const META_API_BASE: &str = "workdeck-api";
const META_NAV: &str = "workdeck-nav";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub nav: NavConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            nav: NavConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_document() -> Self {
        let mut config = Self::default();

        if let Some(api_base) = meta_content(META_API_BASE) {
            config.api_base = api_base;
        }

        if let Some(raw) = meta_content(META_NAV) {
            match serde_json::from_str::<NavConfig>(&raw) {
                Ok(nav) => config.nav = nav,
                Err(e) => log::warn!("[Config] ignoring malformed {META_NAV}: {e}"),
            }
        }

        config
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    element
        .get_attribute("content")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 从 Context 获取配置
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig should be provided")
}
