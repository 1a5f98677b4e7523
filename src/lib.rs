use std::sync::Arc;

use cache::UserCache;
use rpc::UserService;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod rpc;
pub mod utils;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub cache: Arc<dyn UserCache>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserService>, cache: Arc<dyn UserCache>) -> Self {
        Self { users, cache }
    }
}
