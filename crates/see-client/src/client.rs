use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{multipart, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use see_core::api::{
    ApiErrorBody, DomainListResponse, FileDeleteResponse, FilePayload, FileUploadResponse,
    TextShareRequest, TextShareResponse, UrlShortenRequest, UrlShortenResponse,
};

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{codes, ClientResult, SeeError};

/// HTTP client for the S.EE API.
///
/// One instance owns one configuration. Every call gets a fresh timeout
/// window and reports failures through [`SeeError`]; validation failures
/// are raised before any request leaves the client.
pub struct SeeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SeeClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SeeError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = api_key.into();
    }

    /// An empty string keeps the current base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        if let Some(base_url) = normalize_base_url(base_url.into()) {
            self.config.base_url = base_url;
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// Creates a shortened URL.
    ///
    /// The target must parse as an absolute URL; anything else fails with
    /// `INVALID_URL` before a request is issued, indistinguishable from
    /// the server rejecting it.
    pub async fn shorten_url(
        &self,
        request: &UrlShortenRequest,
    ) -> ClientResult<UrlShortenResponse> {
        if reqwest::Url::parse(&request.target_url).is_err() {
            return Err(SeeError::api(codes::INVALID_URL, "Invalid target URL"));
        }
        self.request_json(Method::POST, "/api/v1/shorten", Some(request))
            .await
    }

    /// Lists the domains available for URL shortening.
    pub async fn list_url_domains(&self) -> ClientResult<DomainListResponse> {
        self.request_json::<(), _>(Method::GET, "/api/v1/domains", None)
            .await
    }

    /// Creates a text share. Content and title must both be non-empty.
    pub async fn share_text(&self, request: &TextShareRequest) -> ClientResult<TextShareResponse> {
        if request.content.is_empty() {
            return Err(SeeError::api(codes::INVALID_CONTENT, "Content cannot be empty"));
        }
        if request.title.is_empty() {
            return Err(SeeError::api(codes::INVALID_TITLE, "Title cannot be empty"));
        }
        self.request_json(Method::POST, "/api/v1/text", Some(request))
            .await
    }

    /// Lists the domains available for text sharing.
    pub async fn list_text_domains(&self) -> ClientResult<DomainListResponse> {
        self.request_json::<(), _>(Method::GET, "/api/v1/text/domains", None)
            .await
    }

    /// Uploads one file as multipart form data under the `file` field.
    /// Size and type policy is server-side.
    pub async fn upload_file(&self, file: FilePayload) -> ClientResult<FileUploadResponse> {
        let FilePayload {
            filename,
            mime_type,
            bytes,
        } = file;
        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| SeeError::Network(format!("invalid mime type {mime_type}: {e}")))?;
        let form = multipart::Form::new().part("file", part);
        self.request_multipart(Method::POST, "/api/v1/file/upload", form)
            .await
    }

    /// Deletes an uploaded file by its opaque hash.
    pub async fn delete_file(&self, hash: &str) -> ClientResult<FileDeleteResponse> {
        let path = format!("/api/v1/file/delete/{hash}");
        self.request_json::<(), _>(Method::GET, &path, None).await
    }

    /// Lists the domains available for file sharing.
    pub async fn list_file_domains(&self) -> ClientResult<DomainListResponse> {
        self.request_json::<(), _>(Method::GET, "/api/v1/file/domains", None)
            .await
    }

    async fn request_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.base_request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(path, builder).await
    }

    /// Multipart requests leave the content type to the transport so it
    /// carries the boundary.
    async fn request_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: multipart::Form,
    ) -> ClientResult<T> {
        let builder = self.base_request(method, path).multipart(form);
        self.execute(path, builder).await
    }

    fn base_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.config.base_url, path))
            .timeout(self.config.timeout)
            .header(AUTHORIZATION, self.config.api_key.as_str())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "request completed");
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| SeeError::Network(format!("invalid response body: {e}")))
        } else {
            Err(read_error_body(status, response).await)
        }
    }
}

/// Normalizes a failed response into the `Api` variant. An unparseable
/// body still yields the sentinel code.
async fn read_error_body(status: StatusCode, response: reqwest::Response) -> SeeError {
    let body: ApiErrorBody = response.json().await.unwrap_or_default();
    SeeError::Api {
        code: body.code.unwrap_or_else(|| codes::API_ERROR.to_string()),
        message: body
            .message
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
    }
}
