use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::{error::B2Error, simple_client::B2SimpleClient};

/// One upload-URL/token pair handed out by [`UploadUrlPool::acquire`]. Good
/// for exactly one upload attempt — B2 invalidates it on certain errors
/// (`bad_auth_token`/`expired_auth_token`, or a 503 from that specific
/// storage pod), so callers must report back via `release`.
#[derive(Debug, Clone)]
pub(crate) struct UploadLease {
    pub upload_url: String,
    pub authorization_token: String,
}

#[derive(Debug, Clone)]
enum PoolScope {
    Bucket(String),
    LargeFile(String),
}

/// A pool of upload-URL leases scoped to either one bucket (single-part
/// uploads, `b2_get_upload_url`) or one large file (part uploads,
/// `b2_get_upload_part_url`). Leases are minted lazily and reused across
/// calls to `acquire`/`release` rather than minted fresh per part the way
/// the original upload routine did.
#[derive(Debug)]
pub(crate) struct UploadUrlPool {
    client: Arc<B2SimpleClient>,
    scope: PoolScope,
    free: Mutex<VecDeque<UploadLease>>,
}

impl UploadUrlPool {
    pub fn for_bucket(client: Arc<B2SimpleClient>, bucket_id: String) -> Self {
        Self {
            client,
            scope: PoolScope::Bucket(bucket_id),
            free: Mutex::new(VecDeque::new()),
        }
    }

    pub fn for_large_file(client: Arc<B2SimpleClient>, file_id: String) -> Self {
        Self {
            client,
            scope: PoolScope::LargeFile(file_id),
            free: Mutex::new(VecDeque::new()),
        }
    }

    /// Hands out a lease from the free set, minting a fresh one if the pool
    /// is empty.
    pub async fn acquire(&self) -> Result<UploadLease, B2Error> {
        if let Some(lease) = self.free.lock().await.pop_front() {
            return Ok(lease);
        }

        self.mint().await
    }

    /// Returns a lease to the pool, or drops it if the caller observed an
    /// error that invalidates it (`B2Error::invalidates_lease`).
    pub async fn release(&self, lease: UploadLease, valid: bool) {
        if valid {
            self.free.lock().await.push_back(lease);
        }
    }

    async fn mint(&self) -> Result<UploadLease, B2Error> {
        match &self.scope {
            PoolScope::Bucket(bucket_id) => {
                let response = self.client.get_upload_url(bucket_id.clone()).await?;

                Ok(UploadLease {
                    upload_url: response.upload_url,
                    authorization_token: response.authorization_token,
                })
            }
            PoolScope::LargeFile(file_id) => {
                let response = self.client.get_upload_part_url(file_id.clone()).await?;

                Ok(UploadLease {
                    upload_url: response.upload_url,
                    authorization_token: response.authorization_token,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use super::*;
    use crate::definitions::responses::{
        B2AuthData, B2AuthDataApiInfo, B2AuthDataApiInfoType, B2AuthDataStorageApiInfo,
    };

    fn test_pool() -> UploadUrlPool {
        let storage_api = B2AuthDataStorageApiInfo {
            absolute_minimum_part_size: NonZeroU64::new(5 * 1024 * 1024).unwrap(),
            api_url: "https://api.example.invalid".into(),
            bucket_id: None,
            bucket_name: None,
            capabilities: vec![],
            download_url: "https://download.example.invalid".into(),
            info_type: B2AuthDataApiInfoType::StorageApi,
            name_prefix: None,
            recommended_part_size: NonZeroU64::new(100 * 1024 * 1024).unwrap(),
            s3_api_url: "https://s3.example.invalid".into(),
        };

        let auth_data = B2AuthData {
            account_id: "test-account".into(),
            api_info: B2AuthDataApiInfo { storage_api },
            authorization_token: "token".into(),
            application_key_expiration_timestamp: None,
        };

        let client = Arc::new(B2SimpleClient::stub(auth_data));

        UploadUrlPool::for_bucket(client, "bucket-id".into())
    }

    fn test_lease() -> UploadLease {
        UploadLease {
            upload_url: "https://example.invalid/upload".into(),
            authorization_token: "token".into(),
        }
    }

    #[tokio::test]
    async fn released_invalid_lease_is_dropped_not_requeued() {
        let pool = test_pool();

        pool.release(test_lease(), false).await;

        assert!(pool.free.lock().await.is_empty());
    }

    #[tokio::test]
    async fn released_valid_lease_is_requeued_and_reused() {
        let pool = test_pool();

        pool.release(test_lease(), true).await;
        assert_eq!(pool.free.lock().await.len(), 1);

        let reacquired = pool.acquire().await.expect("pool has a free lease");
        assert_eq!(reacquired.upload_url, test_lease().upload_url);
        assert!(pool.free.lock().await.is_empty());
    }
}
