use std::num::NonZeroU16;

use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    auth::AuthManager,
    definitions::{responses::B2AuthData, shared::B2Endpoint},
    error::{B2Error, B2RequestError},
    util::retry_strategy::ExecutorBackoff,
};

const AUTHORIZE_URL: &str = "https://api.backblazeb2.com/b2api/v3/b2_authorize_account";

/// The authorized HTTP choke point: every call to the B2 API, and every
/// download, funnels through here so header injection, response
/// classification, retry and re-authorization happen exactly once.
#[derive(Clone, Debug)]
pub(crate) struct RequestExecutor {
    client: Client,
    auth: AuthManager,
    backoff: ExecutorBackoff,
    user_agent: String,
}

impl RequestExecutor {
    pub fn new(client: Client, auth: AuthManager, backoff: ExecutorBackoff, user_agent: String) -> Self {
        Self {
            client,
            auth,
            backoff,
            user_agent,
        }
    }

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Authorized, retried, JSON-in/JSON-out call against a `B2Endpoint`.
    #[instrument(skip(self, configure), fields(endpoint = %endpoint))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: B2Endpoint,
        configure: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, B2Error> {
        let response = self
            .call_raw(method, endpoint, configure)
            .await?
            .text()
            .await
            .map_err(B2Error::RequestSendError)?;

        serde_json::from_str(&response).map_err(B2Error::JsonParseError)
    }

    /// Same as [`Self::call`] but returns the raw response, for callers that
    /// need headers or a byte stream (file downloads) rather than JSON.
    #[instrument(skip(self, configure), fields(endpoint = %endpoint))]
    pub async fn call_raw(
        &self,
        method: Method,
        endpoint: B2Endpoint,
        configure: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, B2Error> {
        let mut attempt = 0u32;

        loop {
            let (data, generation) = self.auth.snapshot();
            let url = format!("{}/b2api/v3/{}", data.api_info.storage_api.api_url, endpoint);

            let request = configure(
                self.client
                    .request(method.clone(), url)
                    .header("Authorization", &data.authorization_token)
                    .header("User-Agent", &self.user_agent),
            );

            let response = request.send().await;

            match classify_response(response).await {
                Ok(response) => return Ok(response),
                Err(err) => match self.handle_failure(err, generation, &mut attempt).await? {
                    Some(err) => return Err(err),
                    None => continue,
                },
            }
        }
    }

    /// Authorized, retried call against the account's download URL rather
    /// than its API URL, for endpoints the Download API serves from the
    /// download host (`b2_download_file_by_id`) while still using the
    /// `/b2api/{ver}/<endpoint>` path shape `call_raw` uses.
    #[instrument(skip(self, configure), fields(endpoint = %endpoint))]
    pub async fn call_download(
        &self,
        method: Method,
        endpoint: B2Endpoint,
        configure: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, B2Error> {
        let mut attempt = 0u32;

        loop {
            let (data, generation) = self.auth.snapshot();
            let url = format!(
                "{}/b2api/v3/{}",
                data.api_info.storage_api.download_url, endpoint
            );

            let request = configure(
                self.client
                    .request(method.clone(), url)
                    .header("Authorization", &data.authorization_token)
                    .header("User-Agent", &self.user_agent),
            );

            let response = request.send().await;

            match classify_response(response).await {
                Ok(response) => return Ok(response),
                Err(err) => match self.handle_failure(err, generation, &mut attempt).await? {
                    Some(err) => return Err(err),
                    None => continue,
                },
            }
        }
    }

    /// Authorized, retried GET against the account's download URL, for
    /// `b2_download_file_by_name`'s `bucket/file` path shape, which doesn't
    /// go through `/b2api/v3/<endpoint>`.
    #[instrument(skip(self, configure))]
    pub async fn download_by_name(
        &self,
        bucket_name: &str,
        file_name: &str,
        configure: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, B2Error> {
        let mut attempt = 0u32;

        loop {
            let (data, generation) = self.auth.snapshot();
            let url = format!(
                "{}/file/{}/{}",
                data.api_info.storage_api.download_url, bucket_name, file_name
            );

            let request = configure(
                self.client
                    .get(url)
                    .header("Authorization", &data.authorization_token)
                    .header("User-Agent", &self.user_agent),
            );

            let response = request.send().await;

            match classify_response(response).await {
                Ok(response) => return Ok(response),
                Err(err) => match self.handle_failure(err, generation, &mut attempt).await? {
                    Some(err) => return Err(err),
                    None => continue,
                },
            }
        }
    }

    /// Sends an already-built request (an upload-URL POST carrying its own
    /// lease token) and classifies the response, without retrying. Single
    /// and multi-part upload routines keep their own retry policy; this
    /// only centralizes classification.
    pub async fn send_once(&self, request: RequestBuilder) -> Result<Response, B2Error> {
        classify_response(request.send().await).await
    }

    /// Re-authorizes via `b2_authorize_account`, unless single-flight
    /// coalescing decided someone else already did.
    async fn handle_failure(
        &self,
        err: B2Error,
        generation: u64,
        attempt: &mut u32,
    ) -> Result<Option<B2Error>, B2Error> {
        if Self::is_token_expiry(&err) {
            if *attempt >= self.backoff.max_retries {
                let request_error = err
                    .request_error()
                    .cloned()
                    .expect("token-expiry error always carries a request_error");
                return Ok(Some(B2Error::ExpiredCredentials(request_error)));
            }

            debug!(attempt = *attempt, "re-authorizing after token expiry");
            self.auth.reauthorize_after(generation, self.authorize()).await?;
            *attempt += 1;
            return Ok(None);
        }

        if *attempt < self.backoff.max_retries && Self::is_retryable(&err) {
            let delay = self.backoff.delay(*attempt);
            warn!(attempt = *attempt, ?delay, "retrying after {err}");
            tokio::time::sleep(delay).await;
            *attempt += 1;
            return Ok(None);
        }

        Ok(Some(err))
    }

    async fn authorize(&self) -> Result<B2AuthData, B2Error> {
        bootstrap_authorize(
            &self.client,
            &self.auth.key_id(),
            &self.auth.application_key(),
            &self.user_agent,
        )
        .await
    }

    fn is_token_expiry(err: &B2Error) -> bool {
        matches!(
            err,
            B2Error::UnauthorizedRequest(e) | B2Error::ExpiredCredentials(e) if e.is_token_expiry()
        )
    }

    fn is_retryable(err: &B2Error) -> bool {
        matches!(
            err,
            B2Error::RequestTimeout(_)
                | B2Error::TooManyRequests(_)
                | B2Error::InternalServerError(_)
                | B2Error::ServiceUnavailable(_)
                | B2Error::RequestSendError(_)
        )
    }

}

async fn classify_response(response: Result<Response, reqwest::Error>) -> Result<Response, B2Error> {
    let response = response.map_err(B2Error::RequestSendError)?;
    let status = response.status().as_u16();

    if status < 400 {
        return Ok(response);
    }

    let bytes = response.bytes().await.map_err(B2Error::RequestSendError)?;

    let request_error: B2RequestError = serde_json::from_slice(&bytes).unwrap_or_else(|_| B2RequestError {
        status: NonZeroU16::new(status).expect("B2 never returns status 0"),
        code: String::new(),
        message: Some(String::from_utf8_lossy(&bytes).into_owned()),
    });

    Err(request_error.classify())
}

/// Performs the one authorize call that doesn't need an existing
/// [`RequestExecutor`] to go through — used both to bootstrap
/// [`crate::simple_client::B2SimpleClient::new`] and by
/// [`RequestExecutor::authorize`] for re-authorization.
pub(crate) async fn bootstrap_authorize(
    client: &Client,
    key_id: &str,
    application_key: &str,
    user_agent: &str,
) -> Result<B2AuthData, B2Error> {
    let token = format!(
        "Basic {}",
        general_purpose::STANDARD_NO_PAD.encode(format!("{}:{}", key_id, application_key))
    );

    let response = client
        .get(AUTHORIZE_URL)
        .header("Authorization", token)
        .header("User-Agent", user_agent)
        .send()
        .await;

    let response = classify_response(response).await?;
    let text = response.text().await.map_err(B2Error::RequestSendError)?;

    serde_json::from_str(&text).map_err(B2Error::JsonParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_retryable_matches_classification_table() {
        let retryable = |status: u16, code: &str| {
            RequestExecutor::is_retryable(&B2RequestError {
                status: NonZeroU16::new(status).unwrap(),
                code: code.to_string(),
                message: None,
            }.classify())
        };

        assert!(retryable(408, ""));
        assert!(retryable(429, ""));
        assert!(retryable(500, ""));
        assert!(retryable(503, ""));
        assert!(!retryable(400, "bad_request"));
        assert!(!retryable(403, ""));
    }

    #[test]
    fn is_token_expiry_only_fires_on_known_codes() {
        let expiry = |code: &str| {
            RequestExecutor::is_token_expiry(&B2RequestError {
                status: NonZeroU16::new(401).unwrap(),
                code: code.to_string(),
                message: None,
            }.classify())
        };

        assert!(expiry("bad_auth_token"));
        assert!(expiry("expired_auth_token"));
        assert!(!expiry("unauthorized"));
    }
}
