use serde::{Deserialize, Serialize};

use crate::cache::CachedUser;
use crate::rpc::messages::{User, UserLogin, UserRegister, UserUpdate};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "ID", alias = "id", default)]
    pub id: String,
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Password", alias = "password", default)]
    pub password: String,
}

impl From<CreateUserRequest> for UserRegister {
    fn from(req: CreateUserRequest) -> Self {
        UserRegister {
            id: req.id,
            name: req.name,
            password: req.password,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Password", alias = "password", default)]
    pub password: String,
}

impl From<LoginRequest> for UserLogin {
    fn from(req: LoginRequest) -> Self {
        UserLogin {
            name: req.name,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `PUT /users/{id}`; `ID` is the identifier the user is renamed to.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "ID", alias = "id", default)]
    pub id: String,
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
}

impl UpdateUserRequest {
    pub fn into_update(self, current_id: String) -> UserUpdate {
        UserUpdate {
            id: current_id,
            name: self.name,
            newid: self.id,
        }
    }
}

/// Public view of a user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            name: user.name,
        }
    }
}

impl From<CachedUser> for UserView {
    fn from(user: CachedUser) -> Self {
        UserView {
            id: user.id,
            name: user.name,
        }
    }
}

/// Mutation result carrying the affected user.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl UserResponse {
    pub fn new(status: &str, user: User) -> Self {
        UserResponse {
            status: status.to_string(),
            id: user.id,
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
}
