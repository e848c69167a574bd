
#[cfg(debug_assertions)]
pub fn get_base_path() -> &'static str {
    "/"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> &'static str {
    "/xingchuan-course-web/"  // static hosting path, keep in sync with Trunk.toml
}

/// Id of the element the app renders into. See index.html.
pub const MOUNT_POINT_ID: &str = "root";

/// Assistant WeChat id shown on the last booking step.
pub const SUPPORT_WECHAT: &str = "ytdjzxx";

pub const COPY_TOAST_MS: u32 = 2_000;

pub const PRICE_GROUP: u32 = 199;
pub const PRICE_PRIVATE: u32 = 499;
