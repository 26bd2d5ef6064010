//! 浏览器存储封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `KeyValueStore`：
//! - `LocalStorage`: 跨刷新、跨标签页
//! - `SessionStorage`: 仅当前标签页会话

use workdeck::storage::{KeyValueStore, StorageError, StorageResult};

/// LocalStorage 封装
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

/// SessionStorage 封装
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        get_item(Self::storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        set_item(Self::storage(), key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        remove_item(Self::storage(), key)
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        get_item(Self::storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        set_item(Self::storage(), key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        remove_item(Self::storage(), key)
    }
}

fn get_item(storage: Option<web_sys::Storage>, key: &str) -> StorageResult<Option<String>> {
    storage
        .ok_or(StorageError::Unavailable)?
        .get_item(key)
        .map_err(|_| StorageError::Unavailable)
}

fn set_item(storage: Option<web_sys::Storage>, key: &str, value: &str) -> StorageResult<()> {
    // 超出配额时浏览器抛出 QuotaExceededError
    storage
        .ok_or(StorageError::Unavailable)?
        .set_item(key, value)
        .map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
}

fn remove_item(storage: Option<web_sys::Storage>, key: &str) -> StorageResult<()> {
    storage
        .ok_or(StorageError::Unavailable)?
        .remove_item(key)
        .map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
}
