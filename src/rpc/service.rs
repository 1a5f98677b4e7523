use async_trait::async_trait;
use tonic::Status;

use super::client::UserServiceClient;
use super::messages::{Empty, Id, User, UserLogin, UserRegister, UserToken, UserUpdate};

/// Operations the gateway needs from the backend user service.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, Status>;

    async fn create_user(&self, request: UserRegister) -> Result<User, Status>;

    async fn get_user(&self, id: &str) -> Result<User, Status>;

    async fn delete_user(&self, id: &str) -> Result<(), Status>;

    async fn update_user(&self, request: UserUpdate) -> Result<User, Status>;

    async fn verify_credentials(&self, request: UserLogin) -> Result<UserToken, Status>;
}

#[derive(Debug, Clone)]
pub struct GrpcUserService {
    client: UserServiceClient,
}

impl GrpcUserService {
    pub fn new(client: UserServiceClient) -> Self {
        Self { client }
    }

    pub fn connect_lazy(url: &str) -> Result<Self, tonic::transport::Error> {
        Ok(Self::new(UserServiceClient::connect_lazy(url)?))
    }

    // tonic clients take `&mut self`; clones share the underlying channel
    fn client(&self) -> UserServiceClient {
        self.client.clone()
    }
}

#[async_trait]
impl UserService for GrpcUserService {
    async fn list_users(&self) -> Result<Vec<User>, Status> {
        let list = self.client().get_user_list(Empty {}).await?;
        Ok(list.list)
    }

    async fn create_user(&self, request: UserRegister) -> Result<User, Status> {
        self.client().create_user(request).await
    }

    async fn get_user(&self, id: &str) -> Result<User, Status> {
        self.client()
            .get_user_by_id(Id { id: id.to_string() })
            .await
    }

    async fn delete_user(&self, id: &str) -> Result<(), Status> {
        self.client()
            .delete_user(Id { id: id.to_string() })
            .await?;
        Ok(())
    }

    async fn update_user(&self, request: UserUpdate) -> Result<User, Status> {
        self.client().update_user(request).await
    }

    async fn verify_credentials(&self, request: UserLogin) -> Result<UserToken, Status> {
        self.client().verify_user_credentials(request).await
    }
}
