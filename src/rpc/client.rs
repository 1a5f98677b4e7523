use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{GrpcMethod, Status};
use tonic_prost::ProstCodec;

use super::messages::{Empty, Id, User, UserList, UserLogin, UserRegister, UserToken, UserUpdate};

const SERVICE: &str = "model.UserService";

/// Unary client for `model.UserService`.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl UserServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    /// Builds a client whose channel dials on first use.
    pub fn connect_lazy(url: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_string())?.connect_lazy();
        Ok(Self::new(channel))
    }

    pub async fn get_user_list(&mut self, request: Empty) -> Result<UserList, Status> {
        self.unary(
            "getUserList",
            "/model.UserService/getUserList",
            request,
        )
        .await
    }

    pub async fn create_user(&mut self, request: UserRegister) -> Result<User, Status> {
        self.unary("createUser", "/model.UserService/createUser", request)
            .await
    }

    pub async fn get_user_by_id(&mut self, request: Id) -> Result<User, Status> {
        self.unary("getUserByID", "/model.UserService/getUserByID", request)
            .await
    }

    pub async fn delete_user(&mut self, request: Id) -> Result<Empty, Status> {
        self.unary("deleteUser", "/model.UserService/deleteUser", request)
            .await
    }

    pub async fn update_user(&mut self, request: UserUpdate) -> Result<User, Status> {
        self.unary("updateUser", "/model.UserService/updateUser", request)
            .await
    }

    pub async fn verify_user_credentials(
        &mut self,
        request: UserLogin,
    ) -> Result<UserToken, Status> {
        self.unary(
            "verifyUserCredentials",
            "/model.UserService/verifyUserCredentials",
            request,
        )
        .await
    }

    async fn unary<Req, Resp>(
        &mut self,
        method: &'static str,
        path: &'static str,
        request: Req,
    ) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner
            .ready()
            .await
            .map_err(|e| Status::unavailable(format!("user service not ready: {}", e)))?;

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let mut request = tonic::Request::new(request);
        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE, method));

        let response = self
            .inner
            .unary(request, PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response.into_inner())
    }
}
