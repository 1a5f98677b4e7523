//! Client side of the backend `model.UserService` gRPC contract.

pub mod client;
pub mod messages;
pub mod service;

pub use client::UserServiceClient;
pub use service::{GrpcUserService, UserService};
