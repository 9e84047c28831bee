use core::fmt;
use std::{error::Error, num::NonZeroU16};

use serde::{Deserialize, Serialize};

use crate::definitions::shared::B2KeyCapability;

/// The sealed set of error kinds callers can discriminate on.
///
/// Server-side conditions are tagged with the B2 `{status, code, message}`
/// payload that produced them ([`B2RequestError`]). Kinds that the request
/// executor or an upload's own retry loop already exhausted their retry
/// budget on surface here as the *first* error encountered, never an
/// aggregate.
#[derive(Debug)]
pub enum B2Error {
    JsonParseError(serde_json::Error),
    RequestSendError(reqwest::Error),
    MissingCapability(B2KeyCapability),
    InvalidHeaders(IntoHeaderMapError),

    /// Terminal: the request itself was malformed.
    BadRequest(B2RequestError),
    /// Terminal: the application key does not authorize this call.
    Forbidden(B2RequestError),
    /// Terminal: account-level usage cap was hit.
    UsageCapExceeded(B2RequestError),
    /// Terminal: download cap was hit.
    DownloadCapExceeded(B2RequestError),
    /// Terminal: Range header could not be satisfied.
    RangeNotSatisfiable(B2RequestError),
    /// Terminal: persistent authorization failure (not a token-expiry retry).
    UnauthorizedRequest(B2RequestError),
    /// Retried and still failing after token refresh was exhausted.
    ExpiredCredentials(B2RequestError),
    /// Retried and still timing out after the retry budget was spent.
    RequestTimeout(B2RequestError),
    /// Retried and still rate-limited after the retry budget was spent.
    TooManyRequests(B2RequestError),
    /// Retried and still 500 after the retry budget was spent.
    InternalServerError(B2RequestError),
    /// Retried and still 503 after the retry budget was spent.
    ServiceUnavailable(B2RequestError),
    /// Anything not covered by the classification table.
    UnknownServerError(B2RequestError),
}

impl Error for B2Error {}

impl fmt::Display for B2Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "B2 request encountered an error, ")?;

        match self {
            Self::JsonParseError(err) => write!(f, "Failed to parse JSON: {}", err),
            Self::RequestSendError(err) => write!(f, "Failed to send request: {}", err),
            Self::MissingCapability(capability) => {
                write!(f, "Client is missing capability: {}", capability)
            }
            Self::InvalidHeaders(err) => write!(f, "Invalid headers passed: {}", err),
            Self::BadRequest(err) => write!(f, "Bad request: {}", err),
            Self::Forbidden(err) => write!(f, "Forbidden: {}", err),
            Self::UsageCapExceeded(err) => write!(f, "Usage cap exceeded: {}", err),
            Self::DownloadCapExceeded(err) => write!(f, "Download cap exceeded: {}", err),
            Self::RangeNotSatisfiable(err) => write!(f, "Range not satisfiable: {}", err),
            Self::UnauthorizedRequest(err) => write!(f, "Unauthorized: {}", err),
            Self::ExpiredCredentials(err) => write!(f, "Credentials expired: {}", err),
            Self::RequestTimeout(err) => write!(f, "Request timed out: {}", err),
            Self::TooManyRequests(err) => write!(f, "Too many requests: {}", err),
            Self::InternalServerError(err) => write!(f, "Internal server error: {}", err),
            Self::ServiceUnavailable(err) => write!(f, "Service unavailable: {}", err),
            Self::UnknownServerError(err) => write!(f, "Unknown server error: {}", err),
        }
    }
}

impl B2Error {
    /// Returns the request-level detail, if this error carries one.
    pub fn request_error(&self) -> Option<&B2RequestError> {
        match self {
            Self::BadRequest(e)
            | Self::Forbidden(e)
            | Self::UsageCapExceeded(e)
            | Self::DownloadCapExceeded(e)
            | Self::RangeNotSatisfiable(e)
            | Self::UnauthorizedRequest(e)
            | Self::ExpiredCredentials(e)
            | Self::RequestTimeout(e)
            | Self::TooManyRequests(e)
            | Self::InternalServerError(e)
            | Self::ServiceUnavailable(e)
            | Self::UnknownServerError(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the upload-URL lease that produced this error should be
    /// dropped rather than returned to its pool.
    pub fn invalidates_lease(&self) -> bool {
        match self {
            Self::ServiceUnavailable(_) | Self::RequestSendError(_) => true,
            Self::UnauthorizedRequest(e) | Self::ExpiredCredentials(e) => {
                matches!(e.code.as_str(), "bad_auth_token" | "expired_auth_token")
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub enum IntoHeaderMapError {
    InvalidObject,
    SerializationFailed(serde_json::Error),
    InvalidHeaderName(String),
    InvalidHeaderValue(String),
}

impl Error for IntoHeaderMapError {}

impl fmt::Display for IntoHeaderMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidObject => write!(
                f,
                "Object that implemented `IntoHeaderMap` does not serialize into an object."
            ),
            Self::SerializationFailed(err) => write!(f, "Failed to serialize object: {}", err),
            Self::InvalidHeaderName(name) => write!(f, "[{}] is not a valid header name.", name),
            Self::InvalidHeaderValue(value) => {
                write!(f, "[{}] is not a valid header value.", value)
            }
        }
    }
}

impl From<IntoHeaderMapError> for B2Error {
    fn from(error: IntoHeaderMapError) -> Self {
        B2Error::InvalidHeaders(error)
    }
}

/// The `{status, code, message}` payload B2 returns on a non-200 response.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct B2RequestError {
    pub status: NonZeroU16,
    pub code: String,
    pub message: Option<String>,
}

impl B2RequestError {
    /// Classifies a received `{status, code}` pair into the error kind it
    /// represents. Does not decide retries — callers that still have retry
    /// budget left should retry first and only classify the final,
    /// budget-exhausted attempt.
    pub fn classify(self) -> B2Error {
        match self.code.as_str() {
            "bad_request" => return B2Error::BadRequest(self),
            "unauthorized" => return B2Error::UnauthorizedRequest(self),
            "bad_auth_token" | "expired_auth_token" => return B2Error::ExpiredCredentials(self),
            "download_cap_exceeded" => return B2Error::DownloadCapExceeded(self),
            _ => {}
        }

        match self.status.get() {
            400 => B2Error::BadRequest(self),
            403 => B2Error::Forbidden(self),
            408 => B2Error::RequestTimeout(self),
            416 => B2Error::RangeNotSatisfiable(self),
            429 => B2Error::TooManyRequests(self),
            500 => B2Error::InternalServerError(self),
            503 => B2Error::ServiceUnavailable(self),
            _ => B2Error::UnknownServerError(self),
        }
    }

    pub fn is_token_expiry(&self) -> bool {
        matches!(self.code.as_str(), "bad_auth_token" | "expired_auth_token")
    }

    /// Whether the executor's retry loop should retry this response at all
    /// (token-expiry is handled separately via re-authorization).
    pub fn is_retryable(&self) -> bool {
        matches!(self.status.get(), 408 | 429 | 500 | 503)
    }
}

impl fmt::Display for B2RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).expect("Valid format"))
    }
}

impl Error for B2RequestError {}
