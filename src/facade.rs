//! A thin, opinionated surface over [`crate::client::B2Client`] for callers
//! who want buckets and files as handles rather than bare strings threaded
//! through every call. Built atop `B2Client`/`B2SimpleClient` exactly as they
//! already are; nothing here talks to the network on its own.

use std::{collections::VecDeque, num::NonZeroU16, sync::Arc};

use crate::{
    client::B2Client,
    definitions::{
        bodies::B2ListBucketsBody,
        query_params::B2ListFileNamesQueryParameters,
        shared::{B2DownloadFileContent, B2File},
    },
    error::{B2Error, B2RequestError},
    tasks::{
        shared::ByteSource,
        upload::{error::FileUploadError, FileUploadOptions},
    },
    util::WriteLockArc,
};

/// Authorizes an account and returns a [`Client`] handle, same as
/// constructing a [`B2Client`] directly.
pub async fn authorize(key_id: String, application_key: String) -> Result<Client, B2Error> {
    Ok(Client {
        inner: Arc::new(B2Client::new(key_id, application_key).await?),
    })
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<B2Client>,
}

impl Client {
    /// Returns a handle to the given bucket. Doesn't verify the bucket
    /// exists — that only happens once an operation against it is made.
    pub fn bucket(&self, bucket: impl Into<BucketRef>) -> Bucket {
        let (id, name) = match bucket.into() {
            BucketRef::Id(id) => (Some(id), None),
            BucketRef::Name(name) => (None, Some(name)),
        };

        Bucket {
            client: self.inner.clone(),
            id: WriteLockArc::new(id),
            name,
        }
    }

    pub fn inner(&self) -> Arc<B2Client> {
        self.inner.clone()
    }
}

/// Either half of a bucket's identity, whichever the caller already has.
/// A bare string is always a bucket id, matching `b2_list_file_names` and
/// friends, which all key off it; use [`BucketRef::Name`] to look a bucket
/// up by name instead.
pub enum BucketRef {
    Id(String),
    Name(String),
}

impl From<String> for BucketRef {
    fn from(value: String) -> Self {
        BucketRef::Id(value)
    }
}

impl From<&str> for BucketRef {
    fn from(value: &str) -> Self {
        BucketRef::Id(value.to_string())
    }
}

#[derive(Clone)]
pub struct Bucket {
    client: Arc<B2Client>,
    id: WriteLockArc<Option<String>>,
    name: Option<String>,
}

impl Bucket {
    /// Resolves and caches this handle's bucket id. `b2_list_buckets`
    /// filtered by name is the only way the native API offers to go from a
    /// name to an id, so this costs one request the first time a handle
    /// constructed from a name is used and is free afterward.
    async fn resolve_bucket_id(&self) -> Result<String, B2Error> {
        if let Some(id) = (*self.id).clone() {
            return Ok(id);
        }

        let name = self
            .name
            .clone()
            .expect("Bucket has neither an id nor a name");

        let account_id = self.client.basic_client().auth_data().account_id;

        let body = B2ListBucketsBody::builder()
            .account_id(account_id)
            .bucket_name(Some(name.clone()))
            .build();

        let response = self.client.basic_client().list_buckets(body).await?;

        let found = response
            .buckets
            .into_iter()
            .next()
            .ok_or_else(|| {
                B2Error::BadRequest(B2RequestError {
                    status: NonZeroU16::new(404).expect("404 is nonzero"),
                    code: "bucket_not_present".into(),
                    message: Some(format!("no bucket named {}", name)),
                })
            })?;

        self.id.set(Some(found.bucket_id.clone())).await;

        Ok(found.bucket_id)
    }

    /// Returns a handle to a file in this bucket. The file's id isn't
    /// resolved until something asks for it (`stat`, `read_stream`).
    pub fn file(&self, file_name: impl Into<String>) -> FileHandle {
        FileHandle {
            bucket: self.clone(),
            file_name: file_name.into(),
            file_id: WriteLockArc::new(None),
        }
    }

    /// Uploads `source` under `file_name` and waits for it to finish.
    pub async fn upload(
        &self,
        file_name: impl Into<String>,
        source: ByteSource,
        options: Option<FileUploadOptions>,
    ) -> Result<B2File, FileUploadError> {
        let bucket_id = self.resolve_bucket_id().await?;

        let upload = self
            .client
            .create_upload(source, file_name.into(), bucket_id, None, options)
            .await;

        upload.start().await
    }

    /// A lazy, non-restartable listing of the files in this bucket,
    /// optionally restricted to a name prefix. Pages are fetched from
    /// `b2_list_file_names` as the listing is consumed; nothing is
    /// buffered up front.
    pub fn files(&self, prefix: Option<String>) -> FileListing {
        FileListing {
            bucket: self.clone(),
            prefix,
            next_file_name: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }
}

pub struct FileHandle {
    bucket: Bucket,
    file_name: String,
    file_id: WriteLockArc<Option<String>>,
}

impl FileHandle {
    /// Resolves and caches this handle's file id. `b2_list_file_names`
    /// starting at this handle's name is the only way the native API
    /// offers to go from a name to an id, so this costs one request the
    /// first time a handle is used and is free afterward.
    async fn resolve_file_id(&self) -> Result<String, B2Error> {
        if let Some(id) = (*self.file_id).clone() {
            return Ok(id);
        }

        let bucket_id = self.bucket.resolve_bucket_id().await?;

        let params = B2ListFileNamesQueryParameters::builder()
            .bucket_id(bucket_id.clone())
            .start_file_name(Some(self.file_name.clone()))
            .max_file_count(std::num::NonZeroU32::new(1))
            .build();

        let response = self
            .bucket
            .client
            .basic_client()
            .list_file_names(params)
            .await?;

        let found = response
            .files
            .into_iter()
            .find(|file| file.file_name == self.file_name)
            .ok_or_else(|| {
                B2Error::BadRequest(B2RequestError {
                    status: NonZeroU16::new(404).expect("404 is nonzero"),
                    code: "file_not_present".into(),
                    message: Some(format!(
                        "no file named {} in bucket {}",
                        self.file_name, bucket_id
                    )),
                })
            })?;

        self.file_id.set(Some(found.file_id.clone())).await;

        Ok(found.file_id)
    }

    pub async fn stat(&self) -> Result<B2File, B2Error> {
        let file_id = self.resolve_file_id().await?;
        self.bucket.client.basic_client().get_file_info(file_id).await
    }

    /// Starts a streaming upload into this handle's name, returning once
    /// the upload finishes.
    pub async fn write_stream(
        &self,
        source: ByteSource,
        options: Option<FileUploadOptions>,
    ) -> Result<B2File, FileUploadError> {
        let bucket_id = self.bucket.resolve_bucket_id().await?;

        let upload = self
            .bucket
            .client
            .create_upload(source, self.file_name.clone(), bucket_id, None, options)
            .await;

        let file = upload.start().await?;
        self.file_id.set(Some(file.file_id.clone())).await;

        Ok(file)
    }

    /// Opens this file for streaming download.
    pub async fn read_stream(&self) -> Result<B2DownloadFileContent, B2Error> {
        let file_id = self.resolve_file_id().await?;
        self.bucket
            .client
            .basic_client()
            .download_file_by_id(file_id, None)
            .await
    }
}

/// A finite, non-restartable sequence over a bucket's files. Once
/// exhausted (or dropped), it can't be rewound — a fresh [`Bucket::files`]
/// call starts a new listing from the beginning.
pub struct FileListing {
    bucket: Bucket,
    prefix: Option<String>,
    next_file_name: Option<String>,
    buffer: VecDeque<B2File>,
    exhausted: bool,
}

impl FileListing {
    pub async fn next(&mut self) -> Option<Result<B2File, B2Error>> {
        if let Some(file) = self.buffer.pop_front() {
            return Some(Ok(file));
        }

        if self.exhausted {
            return None;
        }

        let bucket_id = match self.bucket.resolve_bucket_id().await {
            Ok(id) => id,
            Err(err) => {
                self.exhausted = true;
                return Some(Err(err));
            }
        };

        let params = B2ListFileNamesQueryParameters::builder()
            .bucket_id(bucket_id)
            .start_file_name(self.next_file_name.clone())
            .prefix(self.prefix.clone())
            .build();

        let response = match self.bucket.client.basic_client().list_file_names(params).await {
            Ok(response) => response,
            Err(err) => {
                self.exhausted = true;
                return Some(Err(err));
            }
        };

        self.next_file_name = response.next_file_name;
        self.exhausted = self.next_file_name.is_none();
        self.buffer.extend(response.files);

        self.buffer.pop_front().map(Ok)
    }
}
