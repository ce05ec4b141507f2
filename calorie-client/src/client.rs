use async_trait::async_trait;
use calorie_model::{CalorieRequest, CalorieResult};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("{0}")]
    ValidationError(String),
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct ErrorDetail {
    detail: String,
}

#[derive(Deserialize)]
struct Welcome {
    message: String,
}

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn welcome(&self) -> Result<String>;
    async fn calculate_calories(&self, request: &CalorieRequest) -> Result<CalorieResult>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status == StatusCode::BAD_REQUEST {
        let body: ErrorDetail = resp.json().await.map_err(|_| Error::ResponseError)?;
        Err(Error::ValidationError(body.detail))
    } else if status.is_client_error() {
        Err(Error::RequestError)
    } else if status.is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(resp)
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn welcome(&self) -> Result<String> {
        let resp = self
            .client
            .get(format!("{}/", self.url))
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        check_status(resp)
            .await?
            .json::<Welcome>()
            .await
            .map(|welcome| welcome.message)
            .map_err(|_| Error::ResponseError)
    }

    async fn calculate_calories(&self, request: &CalorieRequest) -> Result<CalorieResult> {
        let resp = self
            .client
            .post(format!("{}/calculate-calories", self.url))
            .json(request)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}
