use serde::{Deserialize, Serialize};

use crate::rpc::messages::{User, UserToken};

/// 用户缓存数据模型
///
/// `token` holds the session token issued at login, or the raw `Authorization`
/// header of the lookup that populated the entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CachedUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub token: String,
}

impl CachedUser {
    pub fn from_lookup(user: &User, authorization: &str) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            token: authorization.to_string(),
        }
    }
}

impl From<UserToken> for CachedUser {
    fn from(login: UserToken) -> Self {
        Self {
            id: login.id,
            name: login.name,
            token: login.token,
        }
    }
}
