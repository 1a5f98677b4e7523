/// 缓存数据模型
pub mod user;

pub use user::CachedUser;
