use reqwest::{Method, RequestBuilder};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

use crate::{
    auth::AuthManager,
    definitions::{
        bodies::{
            B2CopyFileBody, B2CopyPartBody, B2CreateBucketBody, B2CreateKeyBody,
            B2DeleteFileVersionBody, B2FinishLargeFileBody, B2GetDownloadAuthorizationBody,
            B2ListBucketsBody, B2StartLargeFileUploadBody, B2UpdateBucketBody,
            B2UpdateFileLegalHoldBodyResponse, B2UpdateFileRetentionBody,
        },
        headers::{B2UploadFileHeaders, B2UploadPartHeaders},
        query_params::{
            B2DownloadFileQueryParameters, B2ListFileNamesQueryParameters,
            B2ListFileVersionsQueryParameters, B2ListKeysParameters, B2ListPartsQueryParameters,
            B2ListUnfinishedLargeFilesQueryParameters,
        },
        responses::{
            B2AuthData, B2BucketNotificationRulesResponseBody, B2CancelLargeFileResponse,
            B2DeleteFileVersionResponse, B2FilePart, B2GetDownloadAuthorizationBodyResponse,
            B2GetUploadPartUrlResponse, B2GetUploadUrlResponse, B2ListBucketsResponse,
            B2ListFileVersionsResponse, B2ListFilesResponse, B2ListKeysResponse,
            B2ListPartsResponse, B2ListUnfinishedLargeFilesResponse, B2UpdateFileRetentionResponse,
        },
        shared::{
            B2AppKey, B2Bucket, B2DownloadFileContent, B2Endpoint, B2File, B2FileDownloadDetails,
            B2KeyCapability,
        },
    },
    error::B2Error,
    executor::{bootstrap_authorize, RequestExecutor},
    util::{retry_strategy::ExecutorBackoff, B2FileStream, IntoHeaderMap},
};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'`');

const USER_AGENT: &str = concat!("backblaze-b2-client-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct B2SimpleClient {
    executor: RequestExecutor,
}

impl B2SimpleClient {
    pub async fn new<S: AsRef<str>, K: AsRef<str>>(
        key_id: S,
        application_key: K,
    ) -> Result<B2SimpleClient, B2Error> {
        let client = reqwest::Client::new();
        let key_id: Arc<str> = Arc::from(key_id.as_ref());
        let application_key: Arc<str> = Arc::from(application_key.as_ref());

        let auth_data = bootstrap_authorize(&client, &key_id, &application_key, USER_AGENT).await?;
        let auth = AuthManager::new(auth_data, key_id, application_key);
        let executor = RequestExecutor::new(client, auth, ExecutorBackoff::default(), USER_AGENT.to_string());

        Ok(B2SimpleClient { executor })
    }

    pub fn auth_data(&self) -> B2AuthData {
        self.executor.auth().snapshot().0
    }

    /// Builds a client around already-known auth data, skipping the network
    /// round trip `new` makes to get one. Exists for tests elsewhere in the
    /// crate that need a `B2SimpleClient` to hand to something without
    /// actually authorizing against B2.
    #[cfg(test)]
    pub(crate) fn stub(auth_data: B2AuthData) -> Self {
        let client = reqwest::Client::new();
        let key_id: Arc<str> = Arc::from("test-key-id");
        let application_key: Arc<str> = Arc::from("test-application-key");
        let auth = AuthManager::new(auth_data, key_id, application_key);
        let executor = RequestExecutor::new(client, auth, ExecutorBackoff::default(), USER_AGENT.to_string());

        B2SimpleClient { executor }
    }

    pub async fn authorize_account<S: AsRef<str>, K: AsRef<str>>(
        &self,
        key_id: S,
        application_key: K,
    ) -> Result<B2AuthData, B2Error> {
        let fresh = bootstrap_authorize(
            self.executor.http(),
            key_id.as_ref(),
            application_key.as_ref(),
            USER_AGENT,
        )
        .await?;

        self.executor.auth().force_set(fresh.clone()).await;

        Ok(fresh)
    }

    /// [b2_cancel_large_file](https://www.backblaze.com/apidocs/b2-cancel-large-file)
    pub async fn cancel_large_file(
        &self,
        file_id: String,
    ) -> Result<B2CancelLargeFileResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2CancelLargeFile, |r| {
                r.json(&json!({ "fileId": file_id }))
            })
            .await
    }

    /// [b2_copy_file](https://www.backblaze.com/apidocs/b2-copy-file)
    pub async fn copy_file(&self, body: B2CopyFileBody) -> Result<B2File, B2Error> {
        let mut needed_capabilities = vec![B2KeyCapability::WriteFiles];

        if body.file_retention.is_some() {
            needed_capabilities.push(B2KeyCapability::WriteFileRetentions);
        }

        if body.legal_hold.is_some() {
            needed_capabilities.push(B2KeyCapability::WriteFileLegalHolds);
        }

        self.has_capabilities(&needed_capabilities)?;

        self.executor
            .call(Method::POST, B2Endpoint::B2CopyFile, |r| r.json(&body))
            .await
    }

    /// [b2_copy_part](https://www.backblaze.com/apidocs/b2-copy-part)
    pub async fn copy_part(&self, request_body: B2CopyPartBody) -> Result<B2FilePart, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2CopyPart, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_create_bucket](https://www.backblaze.com/apidocs/b2-create-bucket)
    pub async fn create_bucket(&self, body: B2CreateBucketBody) -> Result<B2Bucket, B2Error> {
        let mut needed_capabilities = vec![B2KeyCapability::WriteBuckets];

        if let Some(file_lock_enabled) = body.file_lock_enabled {
            if file_lock_enabled {
                needed_capabilities.push(B2KeyCapability::WriteBucketRetentions);
            }
        }

        if body.default_server_side_encryption.is_some() {
            needed_capabilities.push(B2KeyCapability::WriteBucketEncryption);
        }

        self.has_capabilities(&needed_capabilities)?;

        self.executor
            .call(Method::POST, B2Endpoint::B2CreateBucket, |r| r.json(&body))
            .await
    }

    /// [b2_create_key](https://www.backblaze.com/apidocs/b2-create-key)
    pub async fn create_key(&self, request_body: B2CreateKeyBody) -> Result<B2AppKey, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteKeys])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2CreateKey, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_delete_bucket](https://www.backblaze.com/apidocs/b2-delete-bucket)
    pub async fn delete_bucket(
        &self,
        account_id: String,
        bucket_id: String,
    ) -> Result<B2Bucket, B2Error> {
        self.has_capabilities(&[B2KeyCapability::DeleteBuckets])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2DeleteBucket, |r| {
                r.json(&json!({ "accountId": account_id, "bucketId": bucket_id }))
            })
            .await
    }

    /// [b2_delete_file_version](https://www.backblaze.com/apidocs/b2-delete-file-version)
    pub async fn delete_file_version(
        &self,
        request_body: B2DeleteFileVersionBody,
    ) -> Result<B2DeleteFileVersionResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::DeleteFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2DeleteFileVersion, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_delete_key](https://www.backblaze.com/apidocs/b2-delete-key)
    pub async fn delete_key(&self, application_key_id: String) -> Result<B2AppKey, B2Error> {
        self.executor
            .call(Method::GET, B2Endpoint::B2DeleteKey, |r| {
                r.json(&json!({ "applicationKeyId": application_key_id }))
            })
            .await
    }

    /// [b2_download_file_by_id](https://www.backblaze.com/apidocs/b2-download-file-by-id)
    pub async fn download_file_by_id(
        &self,
        file_id: String,
        request_query_params: Option<B2DownloadFileQueryParameters>,
    ) -> Result<B2DownloadFileContent, B2Error> {
        let response = self
            .executor
            .call_download(Method::GET, B2Endpoint::B2DownloadFileById, |r| {
                r.query(&[("fileId", &file_id)]).query(&request_query_params)
            })
            .await?;

        B2SimpleClient::parse_file_response(response)
    }

    /// [b2_download_file_by_name](https://www.backblaze.com/apidocs/b2-download-file-by-name)
    pub async fn download_file_by_name(
        &self,
        bucket_name: String,
        file_name: String,
        request_query_params: Option<B2DownloadFileQueryParameters>,
    ) -> Result<B2DownloadFileContent, B2Error> {
        let response = self
            .executor
            .download_by_name(&bucket_name, &file_name, |r| {
                r.query(&request_query_params)
            })
            .await?;

        B2SimpleClient::parse_file_response(response)
    }

    /// [b2_finish_large_file](https://www.backblaze.com/apidocs/b2-finish-large-file)
    pub async fn finish_large_file(
        &self,
        request_body: B2FinishLargeFileBody,
    ) -> Result<B2File, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2FinishLargeFile, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_get_bucket_notification_rules](https://www.backblaze.com/apidocs/b2-get-bucket-notification-rules)
    pub async fn get_bucket_notification_rules(
        &self,
        bucket_id: String,
    ) -> Result<B2BucketNotificationRulesResponseBody, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ReadBucketNotifications])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2GetBucketNotificationRules, |r| {
                r.query(&[("bucketId", &bucket_id)])
            })
            .await
    }

    /// [b2_get_download_authorization](https://www.backblaze.com/apidocs/b2-get-download-authorization)
    pub async fn get_download_authorization(
        &self,
        request_body: B2GetDownloadAuthorizationBody,
    ) -> Result<B2GetDownloadAuthorizationBodyResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ShareFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2GetDownloadAuthorization, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_get_file_info](https://www.backblaze.com/apidocs/b2-get-file-info)
    pub async fn get_file_info(&self, file_id: String) -> Result<B2File, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ReadFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2GetFileInfo, |r| {
                r.query(&[("fileId", &file_id)])
            })
            .await
    }

    /// [b2_get_upload_part_url](https://www.backblaze.com/apidocs/b2-get-upload-part-url)
    pub async fn get_upload_part_url(
        &self,
        file_id: String,
    ) -> Result<B2GetUploadPartUrlResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2GetUploadPartUrl, |r| {
                r.query(&[("fileId", &file_id)])
            })
            .await
    }

    /// [b2_get_upload_url](https://www.backblaze.com/apidocs/b2-get-upload-url)
    pub async fn get_upload_url(
        &self,
        bucket_id: String,
    ) -> Result<B2GetUploadUrlResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2GetUploadUrl, |r| {
                r.query(&[("bucketId", &bucket_id)])
            })
            .await
    }

    /// [b2_hide_file](https://www.backblaze.com/apidocs/b2-hide-file)
    pub async fn hide_file(&self, bucket_id: String, file_name: String) -> Result<B2File, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2HideFile, |r| {
                r.json(&json!({ "bucketId": bucket_id, "fileName": file_name }))
            })
            .await
    }

    /// [b2_list_buckets](https://www.backblaze.com/apidocs/b2-list-buckets)
    pub async fn list_buckets(
        &self,
        request_body: B2ListBucketsBody,
    ) -> Result<B2ListBucketsResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ListBuckets])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2ListBuckets, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_list_file_names](https://www.backblaze.com/apidocs/b2-list-file-names)
    pub async fn list_file_names(
        &self,
        request_body: B2ListFileNamesQueryParameters,
    ) -> Result<B2ListFilesResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ListFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2ListFileNames, |r| {
                r.query(&request_body)
            })
            .await
    }

    /// [b2_list_file_versions](https://www.backblaze.com/apidocs/b2-list-file-versions)
    pub async fn list_file_versions(
        &self,
        request_body: B2ListFileVersionsQueryParameters,
    ) -> Result<B2ListFileVersionsResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ListFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2ListFileVersions, |r| {
                r.query(&request_body)
            })
            .await
    }

    /// [b2_list_keys](https://www.backblaze.com/apidocs/b2-list-keys)
    pub async fn list_keys(
        &self,
        request_body: B2ListKeysParameters,
    ) -> Result<B2ListKeysResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ListKeys])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2ListKeys, |r| {
                r.query(&request_body)
            })
            .await
    }

    /// [b2_list_parts](https://www.backblaze.com/apidocs/b2-list-parts)
    pub async fn list_parts(
        &self,
        request_body: B2ListPartsQueryParameters,
    ) -> Result<B2ListPartsResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2ListParts, |r| {
                r.query(&request_body)
            })
            .await
    }

    /// [b2_list_unfinished_large_files](https://www.backblaze.com/apidocs/b2-list-unfinished-large-files)
    pub async fn list_unfinished_large_files(
        &self,
        request_body: B2ListUnfinishedLargeFilesQueryParameters,
    ) -> Result<B2ListUnfinishedLargeFilesResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::ListFiles])?;

        self.executor
            .call(Method::GET, B2Endpoint::B2ListUnfinishedLargeFiles, |r| {
                r.query(&request_body)
            })
            .await
    }

    /// [b2_set_bucket_notification_rules](https://www.backblaze.com/apidocs/b2-set-bucket-notification-rules)
    pub async fn set_bucket_notification_rules(
        &self,
        request_body: B2BucketNotificationRulesResponseBody,
    ) -> Result<B2BucketNotificationRulesResponseBody, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteBucketNotifications])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2SetBucketNotificationRules, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_start_large_file](https://www.backblaze.com/apidocs/b2-start-large-file)
    pub async fn start_large_file(
        &self,
        request_body: B2StartLargeFileUploadBody,
    ) -> Result<B2File, B2Error> {
        self.executor
            .call(Method::POST, B2Endpoint::B2StartLargeFile, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_update_bucket](https://www.backblaze.com/apidocs/b2-update-bucket)
    pub async fn update_bucket(
        &self,
        request_body: B2UpdateBucketBody,
    ) -> Result<B2Bucket, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteBuckets])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2UpdateBucket, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_update_file_legal_hold](https://www.backblaze.com/apidocs/b2-update-file-legal-hold)
    pub async fn update_file_legal_hold(
        &self,
        request_body: B2UpdateFileLegalHoldBodyResponse,
    ) -> Result<B2UpdateFileLegalHoldBodyResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFileLegalHolds])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2UpdateFileLegalHold, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_update_file_retention](https://www.backblaze.com/apidocs/b2-update-file-retention)
    pub async fn update_file_retention(
        &self,
        request_body: B2UpdateFileRetentionBody,
    ) -> Result<B2UpdateFileRetentionResponse, B2Error> {
        self.has_capabilities(&[B2KeyCapability::WriteFileRetentions])?;

        self.executor
            .call(Method::POST, B2Endpoint::B2UpdateFileRetention, |r| {
                r.json(&request_body)
            })
            .await
    }

    /// [b2_upload_file](https://www.backblaze.com/apidocs/b2-upload-file). Unlike the other
    /// calls, an upload POST carries its own lease token rather than the
    /// account's authorization token, and isn't retried here — the caller
    /// (the upload engine) owns that retry policy.
    pub async fn upload_file<S: AsRef<str>, F: Into<reqwest::Body>>(
        &self,
        file: F,
        upload_url: S,
        request_headers: B2UploadFileHeaders,
        file_info: Option<HashMap<S, impl AsRef<str>>>,
    ) -> Result<B2File, B2Error> {
        let file_info = match file_info {
            Some(map) => map,
            None => HashMap::new(),
        };

        let file_info: HashMap<_, _> = file_info
            .iter()
            .map(|(key, value)| {
                let key_ref = key.as_ref();
                (
                    format!("X-Bz-Info-{key_ref}"),
                    utf8_percent_encode(value.as_ref(), ENCODE_SET).to_string(),
                )
            })
            .collect();

        let mut request_headers = request_headers;

        request_headers.file_name =
            utf8_percent_encode(&request_headers.file_name, ENCODE_SET).to_string();

        let request: RequestBuilder = self
            .executor
            .http()
            .request(Method::POST, upload_url.as_ref())
            .headers(request_headers.into_header_map()?)
            .headers(hash_map_to_headers(file_info))
            .body(file);

        let response = self.executor.send_once(request).await?;

        B2SimpleClient::parse_json_response(response).await
    }

    /// []()
    pub async fn upload_part<F: Into<reqwest::Body>>(
        &self,
        request_headers: B2UploadPartHeaders,
        part: F,
        upload_url: String,
    ) -> Result<B2FilePart, B2Error> {
        let request = self
            .executor
            .http()
            .request(Method::POST, upload_url)
            .headers(request_headers.into_header_map()?)
            .body(part);

        let response = self.executor.send_once(request).await?;

        B2SimpleClient::parse_json_response(response).await
    }

    pub fn get_authorization_token(&self) -> String {
        self.executor.auth().token()
    }

    pub fn has_capability(&self, capability: &B2KeyCapability) -> bool {
        self.executor
            .auth()
            .snapshot()
            .0
            .api_info
            .storage_api
            .capabilities
            .contains(capability)
    }

    pub fn has_capabilities(&self, capabilities: &[B2KeyCapability]) -> Result<(), B2Error> {
        for capability in capabilities {
            if !self.has_capability(capability) {
                return Err(B2Error::MissingCapability(capability.clone()));
            }
        }

        Ok(())
    }

    async fn parse_json_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, B2Error> {
        let text = response.text().await.map_err(B2Error::RequestSendError)?;

        serde_json::from_str(&text).map_err(B2Error::JsonParseError)
    }

    fn parse_file_response(response: reqwest::Response) -> Result<B2DownloadFileContent, B2Error> {
        let mut headers = header_map_to_hashmap(response.headers());
        let file_name = headers.remove("x-bz-file-name").expect("should exist");
        let file_name = urlencoding::decode(&file_name.replace("+", " "))
            .expect("valid")
            .to_string();

        let sha1 = headers.remove("x-bz-content-sha1").expect("should exist");

        let mut file_details = B2FileDownloadDetails {
            file_id: headers.remove("x-bz-file-id").expect("should exist"),
            file_name,
            content_length: headers
                .remove("content-length")
                .expect("should exist")
                .parse()
                .expect("valid number"),
            content_type: headers.remove("content-type").expect("should exist"),
            content_sha1: if sha1 != "none" { Some(sha1) } else { None },
            upload_timestamp: headers
                .remove("x-bz-upload-timestamp")
                .expect("should exist")
                .parse()
                .expect("valid number"),
            file_info: None,
        };

        let mut temp_file_info: HashMap<String, String> = HashMap::new();
        let keys: Vec<String> = headers.keys().map(|e| e.clone()).collect();

        for key in keys {
            if key.starts_with("x-bz-info-") {
                let value = headers.remove(&key).expect("key exists");
                let value = urlencoding::decode(&value.replace("+", " "))
                    .expect("valid")
                    .to_string();
                temp_file_info.insert(key.replace("x-bz-info-", ""), value);
            }
        }

        if temp_file_info.len() > 0 {
            file_details.file_info = Some(temp_file_info)
        }

        let body = response.bytes_stream();

        Ok(B2DownloadFileContent {
            file: B2FileStream::new(body, file_details.content_length as usize),
            file_details,
            remaining_headers: headers,
        })
    }
}

#[inline]
fn hash_map_to_headers<S: AsRef<str>>(
    map: HashMap<S, impl AsRef<str>>,
) -> reqwest::header::HeaderMap {
    use reqwest::header::{HeaderName, HeaderValue};
    use std::str::FromStr;

    map.iter()
        .map(|(name, value)| {
            (
                HeaderName::from_str(name.as_ref()),
                HeaderValue::from_str(value.as_ref()),
            )
        })
        .filter_map(|(key, value)| match (key, value) {
            (Ok(key), Ok(value)) if !value.is_empty() => Some((key, value)),
            _ => None,
        })
        .collect()
}

#[inline]
fn header_map_to_hashmap(map: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut header_hashmap = HashMap::new();

    for (k, v) in map {
        let k = k.as_str().to_owned();
        let v = String::from_utf8_lossy(v.as_bytes()).into_owned();
        header_hashmap.insert(k, v);
    }

    header_hashmap
}
