/// 缓存键模块
pub mod user_keys;

pub use user_keys::user_key;
