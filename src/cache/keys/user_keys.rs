/// 用户记录缓存键前缀
const USER_INFO_PREFIX: &str = "user:info:";

/// 生成用户记录缓存键
pub fn user_key(user_id: &str) -> String {
    format!("{}{}", USER_INFO_PREFIX, user_id)
}
