//! In-memory stand-ins for the backend user service and the user cache.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tonic::Status;
use tower::ServiceExt;
use user_gateway::{
    AppState,
    cache::{CacheError, CachedUser, UserCache},
    middleware, routes,
    rpc::{
        UserService,
        messages::{User, UserLogin, UserRegister, UserToken, UserUpdate},
    },
};

#[derive(Default)]
pub struct FakeUserService {
    users: Mutex<Vec<User>>,
    passwords: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl FakeUserService {
    pub fn with_user(self, id: &str, name: &str, password: &str) -> Self {
        self.users.lock().unwrap().push(User {
            id: id.to_string(),
            name: name.to_string(),
        });
        self.passwords
            .lock()
            .unwrap()
            .insert(name.to_string(), password.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserService for FakeUserService {
    async fn list_users(&self) -> Result<Vec<User>, Status> {
        self.record_call();
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, request: UserRegister) -> Result<User, Status> {
        self.record_call();
        if request.id.is_empty() {
            return Err(Status::invalid_argument("id is required"));
        }
        if self.user(&request.id).is_some() {
            return Err(Status::already_exists(format!("user {} exists", request.id)));
        }
        let user = User {
            id: request.id,
            name: request.name,
        };
        self.users.lock().unwrap().push(user.clone());
        self.passwords
            .lock()
            .unwrap()
            .insert(user.name.clone(), request.password);
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User, Status> {
        self.record_call();
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.user(id)
            .ok_or_else(|| Status::not_found(format!("user {} not found", id)))
    }

    async fn delete_user(&self, id: &str) -> Result<(), Status> {
        self.record_call();
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(Status::not_found(format!("user {} not found", id)));
        }
        Ok(())
    }

    async fn update_user(&self, request: UserUpdate) -> Result<User, Status> {
        self.record_call();
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == request.id)
            .ok_or_else(|| Status::internal(format!("user {} not found", request.id)))?;
        user.id = request.newid;
        user.name = request.name;
        Ok(user.clone())
    }

    async fn verify_credentials(&self, request: UserLogin) -> Result<UserToken, Status> {
        self.record_call();
        let valid = self
            .passwords
            .lock()
            .unwrap()
            .get(&request.name)
            .is_some_and(|p| *p == request.password);
        if !valid {
            return Err(Status::unauthenticated("invalid credentials"));
        }
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == request.name)
            .cloned()
            .ok_or_else(|| Status::unauthenticated("invalid credentials"))?;
        Ok(UserToken {
            token: format!("token-{}", user.id),
            id: user.id,
            name: user.name,
        })
    }
}

#[derive(Default)]
pub struct MemoryUserCache {
    entries: Mutex<HashMap<String, String>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryUserCache {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn insert(&self, user: CachedUser) {
        let json = serde_json::to_string(&user).unwrap();
        self.entries.lock().unwrap().insert(user.id, json);
    }

    pub fn insert_raw(&self, id: &str, raw: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(id.to_string(), raw.to_string());
    }

    pub fn stored(&self, id: &str) -> Option<CachedUser> {
        self.entries
            .lock()
            .unwrap()
            .get(id)
            .map(|json| serde_json::from_str(json).unwrap())
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn unavailable() -> CacheError {
    CacheError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "connection refused",
    )))
}

#[async_trait]
impl UserCache for MemoryUserCache {
    async fn get_user(&self, user_id: &str) -> Result<Option<CachedUser>, CacheError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(unavailable());
        }
        match self.entries.lock().unwrap().get(user_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn set_user(&self, user: &CachedUser) -> Result<(), CacheError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(unavailable());
        }
        self.insert(user.clone());
        Ok(())
    }
}

pub fn app(users: Arc<FakeUserService>, cache: Arc<MemoryUserCache>) -> Router {
    app_at("", users, cache)
}

/// Router as served in production, wrapped in the 5xx logging middleware.
pub fn logged_app(users: Arc<FakeUserService>, cache: Arc<MemoryUserCache>) -> Router {
    routes::create_router("")
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(AppState::new(users, cache))
}

pub fn app_at(base_uri: &str, users: Arc<FakeUserService>, cache: Arc<MemoryUserCache>) -> Router {
    routes::create_router(base_uri).with_state(AppState::new(users, cache))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
