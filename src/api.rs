//! REST client for the AgriTech backend.
//!
//! Thin wrappers over `reqwest`: one method per endpoint, bearer-token auth
//! on everything except login/register, non-2xx responses mapped to
//! `ApiError::Status`.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::protocol::{ChatMessage, ChatSummary, FileRef, Profile, Session};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not logged in")]
    Unauthenticated,
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ProfileUpdate<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    farm_name: Option<&'a str>,
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnalysisResponse {
    analysis: String,
}

/// Join a base URL and a relative path with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        Ok(req.bearer_auth(token))
    }

    async fn check(req: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> ApiResult<T> {
        Ok(Self::check(req).await?.json::<T>().await?)
    }

    async fn send_empty(req: RequestBuilder) -> ApiResult<()> {
        Self::check(req).await?;
        Ok(())
    }

    // ---- auth ----

    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<Session> {
        debug!(%email, "login");
        let req = self
            .client
            .post(self.url("auth/login"))
            .json(&Credentials { email, password });
        let resp: LoginResponse = Self::send_json(req).await?;
        self.token = Some(resp.token.clone());
        Ok(Session {
            token: resp.token,
            email: email.to_string(),
            user_id: resp.user_id,
        })
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        debug!(%email, "register");
        let req = self.client.post(self.url("auth/register")).json(&Registration {
            name,
            email,
            password,
        });
        Self::send_empty(req).await
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    // ---- profile ----

    pub async fn profile(&self) -> ApiResult<Profile> {
        let req = self.authed(self.client.get(self.url("profile")))?;
        Self::send_json(req).await
    }

    pub async fn update_profile(&self, name: &str, farm_name: Option<&str>) -> ApiResult<Profile> {
        let req = self.authed(
            self.client
                .put(self.url("profile"))
                .json(&ProfileUpdate { name, farm_name }),
        )?;
        Self::send_json(req).await
    }

    // ---- chats ----

    pub async fn chats(&self) -> ApiResult<Vec<ChatSummary>> {
        let req = self.authed(self.client.get(self.url("chats")))?;
        Self::send_json(req).await
    }

    pub async fn create_chat(&self, title: &str) -> ApiResult<ChatSummary> {
        let req = self.authed(self.client.post(self.url("chats")).json(&TitleBody { title }))?;
        Self::send_json(req).await
    }

    pub async fn rename_chat(&self, id: &str, title: &str) -> ApiResult<ChatSummary> {
        let req = self.authed(
            self.client
                .put(self.url(&format!("chats/{}", id)))
                .json(&TitleBody { title }),
        )?;
        Self::send_json(req).await
    }

    pub async fn delete_chat(&self, id: &str) -> ApiResult<()> {
        let req = self.authed(self.client.delete(self.url(&format!("chats/{}", id))))?;
        Self::send_empty(req).await
    }

    pub async fn messages(&self, chat_id: &str) -> ApiResult<Vec<ChatMessage>> {
        let req = self.authed(self.client.get(self.url(&format!("chats/{}/messages", chat_id))))?;
        Self::send_json(req).await
    }

    /// Store a message; the response holds it plus any assistant reply.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> ApiResult<Vec<ChatMessage>> {
        let req = self.authed(
            self.client
                .post(self.url(&format!("chats/{}/messages", chat_id)))
                .json(&TextBody { text }),
        )?;
        Self::send_json(req).await
    }

    pub async fn analyze(&self, chat_id: &str, text: &str) -> ApiResult<String> {
        let req = self.authed(
            self.client
                .post(self.url(&format!("chats/{}/analyze", chat_id)))
                .json(&TextBody { text }),
        )?;
        let resp: AnalysisResponse = Self::send_json(req).await?;
        Ok(resp.analysis)
    }

    // ---- files ----

    pub async fn files(&self) -> ApiResult<Vec<FileRef>> {
        let req = self.authed(self.client.get(self.url("files")))?;
        Self::send_json(req).await
    }

    pub async fn upload_file(&self, path: &Path) -> ApiResult<FileRef> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let bytes = tokio::fs::read(path).await?;
        debug!(%file_name, size = bytes.len(), "uploading file");

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let req = self.authed(self.client.post(self.url("files")).multipart(form))?;
        Self::send_json(req).await
    }

    pub async fn rename_file(&self, id: &str, name: &str) -> ApiResult<FileRef> {
        let req = self.authed(
            self.client
                .put(self.url(&format!("files/{}", id)))
                .json(&NameBody { name }),
        )?;
        Self::send_json(req).await
    }

    pub async fn delete_file(&self, id: &str) -> ApiResult<()> {
        let req = self.authed(self.client.delete(self.url(&format!("files/{}", id))))?;
        Self::send_empty(req).await
    }
}
