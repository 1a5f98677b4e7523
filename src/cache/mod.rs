// 用户记录缓存
// 键、数据结构和读写操作

pub mod keys;
pub mod models;
pub mod operations;

pub use models::user::CachedUser;
pub use operations::user::{CacheError, RedisUserCache, UserCache};
