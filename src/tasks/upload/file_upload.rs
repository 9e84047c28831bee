use std::{
    collections::HashMap,
    convert::Infallible,
    ops::Deref,
    sync::Arc,
    time::Instant,
};

use async_stream::{stream, try_stream};
use bytes::Bytes;
use sha1_smol::Sha1;
use tokio::{
    io::AsyncReadExt,
    sync::{
        mpsc::{self, Receiver, Sender},
        Mutex, RwLock, Semaphore,
    },
    time::sleep,
};
use tracing::{debug, info, instrument};

use crate::{
    definitions::{
        bodies::{B2FinishLargeFileBody, B2StartLargeFileUploadBody},
        headers::{B2UploadFileHeaders, B2UploadPartHeaders},
        shared::B2File,
    },
    hashing::{hashing_stream, PartBuffer, HEX_DIGITS_AT_END},
    simple_client::B2SimpleClient,
    throttle::Throttle,
    upload_pool::UploadUrlPool,
    util::{write_lock_arc::WriteLockArc, B2Callback, IsValid, SizeUnit},
};

use crate::tasks::shared::{ByteSource, FileNetworkStats, FileStatus};

use super::{
    error::FileUploadError, upload_details::UploadFileDetails, FileUploadOptions,
    LargeFileLoadStrategy,
};

/// Whether a part-upload error invalidates the lease it was sent on.
/// Unlike [`crate::error::B2Error::invalidates_lease`] (used by the
/// single-part path), this keys purely on HTTP status — a part upload's
/// lease is bad on any 401 or 503, not just ones carrying a specific B2
/// error code.
fn part_upload_invalidates_lease(err: &crate::error::B2Error) -> bool {
    match err.request_error() {
        Some(e) => matches!(e.status.get(), 401 | 503),
        None => true,
    }
}

/// Validates the `X-Bz-Info-*` custom header map: at most 10 entries, each
/// key restricted to the characters B2 allows in a header name.
fn validate_file_info(info: &HashMap<String, String>) -> Result<(), crate::util::InvalidValue> {
    if info.len() > 10 {
        return Err(crate::util::InvalidValue {
            object_name: "FileUpload".into(),
            value_name: "optional_info".into(),
            value_as_string: info.len().to_string(),
            expected: "at most 10 entries".into(),
        });
    }

    for key in info.keys() {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(crate::util::InvalidValue {
                object_name: "FileUpload".into(),
                value_name: "optional_info key".into(),
                value_as_string: key.clone(),
                expected: "characters matching X-Bz-Info-[A-Za-z0-9-_]+".into(),
            });
        }
    }

    Ok(())
}

pub struct FileUpload {
    id: u64,
    client: Arc<B2SimpleClient>,
    details: UploadFileDetails,
    status: WriteLockArc<FileStatus>,
    source: Mutex<Option<ByteSource>>,
    stats: Arc<FileNetworkStats>,
    large_file_id: Arc<RwLock<Option<String>>>,
    completion_callbacks: Arc<RwLock<Vec<B2Callback<()>>>>,
    abort_channel: (WriteLockArc<Sender<()>>, WriteLockArc<Receiver<()>>),
}

impl FileUpload {
    pub fn new(
        source: ByteSource,
        file_name: String,
        bucket_id: String,
        optional_info: Option<HashMap<String, String>>,
        options: FileUploadOptions,
        client: Arc<B2SimpleClient>,
    ) -> Arc<Self> {
        let (tx, rx) = mpsc::channel::<()>(1);
        let declared_len = source.len();

        Arc::new(Self {
            id: rand::random(),
            client,
            details: UploadFileDetails {
                file_size: declared_len.unwrap_or(0),
                file_name,
                bucket_id,
                optional_info,
                options: Arc::new(options),
            },
            large_file_id: Arc::new(RwLock::new(None)),
            status: WriteLockArc::new(FileStatus::Pending),
            source: Mutex::new(Some(source)),
            stats: Arc::new(FileNetworkStats::new(declared_len.unwrap_or(0) as f64)),
            completion_callbacks: Arc::new(RwLock::new(vec![])),
            abort_channel: (WriteLockArc::new(tx), WriteLockArc::new(rx)),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn stats(&self) -> &FileNetworkStats {
        &self.stats
    }

    pub fn status(&self) -> FileStatus {
        (*self.status).clone()
    }

    /// Returns true when the file has finished or has been aborted.
    pub fn has_stopped(&self) -> bool {
        *self.status == FileStatus::Finished || *self.status == FileStatus::Aborted
    }

    /// Whether it was started or not, will only start if status is [`Pending`](FileStatus::Pending).
    ///
    /// A `Bytes` source is cheap to replay, so the whole upload is retried
    /// per [`FileUploadOptions::retry_strategy`] on failure. A `Stream`
    /// source that fails partway through can't be rewound, so it only gets
    /// one attempt here; its resilience lives at the request level instead
    /// — a lease going bad or a transient 503/408 is retried per part (or
    /// per upload attempt for the single-part path).
    #[instrument(skip(self), fields(id = self.id))]
    pub async fn start(&self) -> Result<B2File, FileUploadError> {
        if *self.status != FileStatus::Pending {
            return Err(FileUploadError::AlreadyStarted);
        }

        self.details.options.is_valid()?;

        if let Some(ref info) = self.details.optional_info {
            validate_file_info(info)?;
        }

        let source = {
            let mut guard = self.source.lock().await;
            guard.take().ok_or(FileUploadError::AlreadyStarted)?
        };

        self.status.set(FileStatus::Working).await;

        let result = match source {
            ByteSource::Bytes(bytes) => self.upload_bytes_with_retry(bytes).await,
            stream @ ByteSource::Stream(..) => self.upload(stream).await,
        };

        let mut status = self.status.lock_write().await;
        if *status == FileStatus::Working {
            *status = FileStatus::Finished;
        }
        drop(status);

        self.call_finish_callbacks().await;

        if *self.status == FileStatus::Aborted {
            return Err(FileUploadError::Aborted);
        }

        result
    }

    async fn upload_bytes_with_retry(&self, bytes: Bytes) -> Result<B2File, FileUploadError> {
        let retry_count = self.details.options.retry_strategy.count();
        let abort_receiver = self.abort_channel.1.clone();
        let mut attempt = 1u32;

        loop {
            let result = self.upload(ByteSource::Bytes(bytes.clone())).await;

            if *self.status == FileStatus::Aborted {
                return Err(FileUploadError::Aborted);
            }

            if result.is_ok() || attempt as u64 > retry_count.get() {
                return result;
            }

            let wait = self.details.options.retry_strategy.wait(attempt as u64);
            let mut receiver_lock = abort_receiver.lock_write().await;

            let mut status = self.status.lock_write().await;
            if *status == FileStatus::Working {
                *status = FileStatus::Retrying;
            }
            drop(status);

            debug!(attempt, ?wait, "retrying whole upload");

            tokio::select! {
                _ = sleep(wait) => {},
                _ = receiver_lock.recv() => return Err(FileUploadError::Aborted),
            };

            drop(receiver_lock);

            let mut status = self.status.lock_write().await;
            if *status == FileStatus::Retrying {
                *status = FileStatus::Working;
            }
            drop(status);

            attempt += 1;
        }
    }

    /// Will abort ongoing upload if status is [`Working`](FileStatus::Working) or [`Retrying`](FileStatus::Retrying), does nothing otherwise.
    pub async fn abort(&self) {
        if *self.status != FileStatus::Working && *self.status != FileStatus::Retrying {
            return;
        }

        self.status.set(FileStatus::Aborted).await;

        let sender = &self.abort_channel.0;
        sender.send(()).await.ok();

        self.cancel_large_file().await;
    }

    pub async fn add_finish_callback(&self, callback: B2Callback<()>) {
        let mut callbacks = self.completion_callbacks.write().await;
        callbacks.push(callback);
    }

    /// Decides single-part vs multi-part and dispatches. A declared length
    /// at or under the resolved part size always goes single-part; an
    /// undeclared length, or a declared one over the part size, goes
    /// multi-part — multi-part never needs a known total up front, since it
    /// just keeps sealing and uploading parts until the source runs dry,
    /// and reverts to single-part itself if the source turns out to fit in
    /// one part after all.
    async fn upload(&self, source: ByteSource) -> Result<B2File, FileUploadError> {
        let len = source.len();
        let file_strat = self.resolve_load_strategy(len.unwrap_or(0)).await?;

        match len {
            Some(len) if len <= file_strat.part_size => self.upload_small_file(source).await,
            _ => self.upload_large_file(source, file_strat).await,
        }
    }

    async fn resolve_load_strategy(
        &self,
        file_size: u64,
    ) -> Result<super::options::ConstantLargeFileLoadStrategy, FileUploadError> {
        let mut strategy = match &self.details.options.file_load_strategy {
            LargeFileLoadStrategy::Constant(strat) => strat.clone(),
            LargeFileLoadStrategy::Dynamic(strat) => strat.get_load_strategy(file_size),
        };

        strategy.is_valid()?;

        // The effective part size defaults to the account's recommended
        // size; an explicit smaller override is clamped up to the
        // account's minimum rather than rejected.
        let storage_api = self.client.auth_data().api_info.storage_api;
        let minimum = storage_api.absolute_minimum_part_size.get();
        let recommended = storage_api.recommended_part_size.get();

        if strategy.part_size == SizeUnit::MEBIBYTE * 5 {
            strategy.part_size = recommended;
        }

        if strategy.part_size < minimum {
            strategy.part_size = minimum;
        }

        Ok(strategy)
    }

    /// Single-part upload. `source.len()` is already known to
    /// be `Some` and under the cutoff here, since [`Self::upload`] is the
    /// only caller. A `Bytes` source is buffered and hashed up front, same
    /// as a plain upload always was; a `Stream` source is hashed on the fly
    /// through [`hashing_stream`] in deferred-hash mode, trading a precomputed
    /// digest for never buffering the whole payload in memory. A `Stream`
    /// with no declared length can't fill in `Content-Length` up front, so
    /// it's rejected rather than routed here.
    async fn upload_small_file(&self, source: ByteSource) -> Result<B2File, FileUploadError> {
        let pool = UploadUrlPool::for_bucket(self.client.clone(), self.details.bucket_id.clone());
        let uploaded = self.stats.clone();
        let status = self.status.clone();
        let throttle = self.new_throttle();
        let chunk_size = (SizeUnit::KIBIBYTE * 80) as usize;
        self.start_timer().await;

        let (body, content_sha1, content_length) = match source {
            ByteSource::Bytes(bytes) => {
                let digest = Sha1::from(&bytes).digest().to_string();
                let len = bytes.len() as u64;

                let stream = stream! {
                    let mut offset = 0;
                    while offset < bytes.len() {
                        if *status == FileStatus::Aborted {
                            break;
                        }

                        let end = (offset + chunk_size).min(bytes.len());
                        let chunk = bytes.slice(offset..end);
                        offset = end;

                        if let Some(ref throttle) = throttle {
                            let mut throttle = throttle.lock().await;
                            throttle.advance_by(chunk.len() as u64).await;
                        }

                        uploaded.add_done_bytes(chunk.len() as u64).await;
                        yield Ok::<Bytes, std::io::Error>(chunk);
                    }
                };

                (reqwest::Body::wrap_stream(stream), digest, len)
            }
            ByteSource::Stream(reader, Some(len)) => {
                let hashed = hashing_stream(reader, chunk_size, true);

                let stream = try_stream! {
                    for await chunk in hashed {
                        let chunk = chunk?;

                        if *status == FileStatus::Aborted {
                            break;
                        }

                        if let Some(ref throttle) = throttle {
                            let mut throttle = throttle.lock().await;
                            throttle.advance_by(chunk.len() as u64).await;
                        }

                        uploaded.add_done_bytes(chunk.len() as u64).await;
                        yield chunk;
                    }
                };

                // hashing_stream appends the 40 hex digit digest after the
                // last payload byte, so Content-Length covers both.
                (
                    reqwest::Body::wrap_stream(stream),
                    HEX_DIGITS_AT_END.to_string(),
                    len + 40,
                )
            }
            ByteSource::Stream(_, None) => return Err(FileUploadError::UnknownStreamLength),
        };

        let lease = pool.acquire().await?;

        let b2_upload_headers = B2UploadFileHeaders::builder()
            .authorization(lease.authorization_token.clone())
            .file_name(urlencoding::encode(&self.details.file_name).into_owned())
            .content_type(self.details.options.options.content_type.clone())
            .content_length(content_length)
            .content_sha1(content_sha1)
            .build();

        let b2_upload_headers = self
            .details
            .options
            .options
            .clone()
            .apply_file_upload(b2_upload_headers);

        let result = self
            .client
            .upload_file(
                body,
                lease.upload_url.clone(),
                b2_upload_headers,
                self.details.optional_info.clone(),
            )
            .await;

        match result {
            Ok(file) => {
                pool.release(lease, true).await;
                Ok(file)
            }
            Err(err) => {
                let valid = !err.invalidates_lease();
                pool.release(lease, valid).await;
                Err(err.into())
            }
        }
    }

    /// Multi-part upload. Reads the source sequentially into [`PartBuffer`]s,
    /// sealing and handing each off to a bounded pool of concurrent part
    /// uploads as soon as it fills; the SHA1 digest array is built in
    /// part-number order as each buffer seals, independent of which upload
    /// finishes first.
    ///
    /// `b2_start_large_file` isn't called until the first part is known to
    /// actually be full with more data behind it: an unknown-length source
    /// that turns out to fit in one part reverts to the single-part path
    /// using the bytes already collected, rather than running a whole
    /// start/part/finish sequence for one part.
    async fn upload_large_file(
        &self,
        source: ByteSource,
        strategy: super::options::ConstantLargeFileLoadStrategy,
    ) -> Result<B2File, FileUploadError> {
        self.start_timer().await;

        let (mut reader, _) = source.into_reader();
        let part_size = strategy.part_size as usize;
        let mut read_buf = vec![0u8; (SizeUnit::KIBIBYTE * 160) as usize];
        // Bytes a previous read pulled in but didn't fit in that part; carried
        // over so `push`'s overflow split never drops a byte at a part boundary.
        let mut carry: Vec<u8> = Vec::new();
        let mut source_exhausted = false;

        let mut first_part = PartBuffer::with_capacity(part_size);

        while !first_part.is_full() && !source_exhausted {
            let read = reader.read(&mut read_buf).await?;

            if read == 0 {
                source_exhausted = true;
                break;
            }

            let leftover = first_part.push(&read_buf[..read]);
            if !leftover.is_empty() {
                carry = leftover.to_vec();
            }
        }

        // The buffer can land exactly on `part_size` with nothing behind it
        // (the exact-boundary case stays single-part); a carry already
        // proves there's a second part, so only peek when there isn't one.
        if !source_exhausted && first_part.is_full() && carry.is_empty() {
            let read = reader.read(&mut read_buf).await?;

            if read == 0 {
                source_exhausted = true;
            } else {
                carry = read_buf[..read].to_vec();
            }
        }

        if source_exhausted {
            let (bytes, _) = first_part.seal();
            return self.upload_small_file(ByteSource::Bytes(bytes)).await;
        }

        let start_large_upload_body = B2StartLargeFileUploadBody::builder()
            .bucket_id(self.details.bucket_id.clone())
            .file_name(self.details.file_name.clone())
            .content_type("b2/x-auto".into())
            .file_info(self.details.optional_info.clone())
            .build();

        let start_large_upload_body = self
            .details
            .options
            .options
            .clone()
            .apply_large_file_upload(start_large_upload_body);

        let start_large_file_response = self
            .client
            .start_large_file(start_large_upload_body)
            .await?;

        let file_id = start_large_file_response.file_id.clone();
        info!(file_id, "started large file");

        {
            let mut large_file = self.large_file_id.write().await;
            *large_file = Some(file_id.clone());
        }

        let pool = Arc::new(UploadUrlPool::for_large_file(self.client.clone(), file_id.clone()));
        let semaphore = Arc::new(Semaphore::new(self.details.options.max_parallel_parts.max(1) as usize));

        let mut part_number: u16 = 1;
        let mut sha1s: Vec<String> = Vec::new();
        let mut handles = Vec::new();
        let mut pending_first = Some(first_part);

        loop {
            if *self.status == FileStatus::Aborted {
                break;
            }

            let mut part = pending_first
                .take()
                .unwrap_or_else(|| PartBuffer::with_capacity(part_size));

            if !carry.is_empty() {
                let leftover = part.push(&carry);
                carry = leftover.to_vec();
            }

            while !part.is_full() && !source_exhausted {
                let read = reader.read(&mut read_buf).await?;

                if read == 0 {
                    source_exhausted = true;
                    break;
                }

                let leftover = part.push(&read_buf[..read]);
                if !leftover.is_empty() {
                    carry = leftover.to_vec();
                }
            }

            if part.len() == 0 {
                break;
            }

            let (bytes, digest) = part.seal();
            sha1s.push(digest.clone());

            let permit = semaphore.clone().acquire_owned().await.expect("semaphore not closed");
            let client = self.client.clone();
            let pool = pool.clone();
            let stats = self.stats.clone();
            let status = self.status.clone();
            let throttle = self.new_throttle();
            let options = self.details.options.clone();
            let pn = part_number;

            let handle = tokio::spawn(async move {
                let _permit = permit;
                FileUpload::part_upload(client, pool, pn, bytes, digest, stats, status, throttle, options).await
            });

            handles.push(handle);
            part_number += 1;
        }

        for handle in handles {
            match handle.await {
                Ok(res) => res?,
                Err(join_err) if join_err.is_cancelled() => continue,
                Err(join_err) => panic!("part upload task panicked: {join_err:#?}"),
            }
        }

        Ok(self
            .client
            .finish_large_file(B2FinishLargeFileBody {
                file_id: file_id.clone(),
                part_sha1_array: sha1s,
            })
            .await?)
    }

    /// Per-part retry policy: a lease-invalidating error
    /// drops the lease and re-acquires; a 408 backs off without jitter
    /// (per the classification note, it's already the client's own slow
    /// upload that triggered it); a 503 re-acquires after a short pause;
    /// anything else is terminal.
    #[instrument(skip_all, fields(part_number))]
    async fn part_upload(
        client: Arc<B2SimpleClient>,
        pool: Arc<UploadUrlPool>,
        part_number: u16,
        bytes: Bytes,
        sha1: String,
        stats: Arc<FileNetworkStats>,
        status: WriteLockArc<FileStatus>,
        throttle: Option<Arc<Mutex<Throttle<u64>>>>,
        options: Arc<FileUploadOptions>,
    ) -> Result<(), FileUploadError> {
        let backoff = crate::util::retry_strategy::ExecutorBackoff::default();
        let mut attempt = 0u32;
        let mut lease = pool.acquire().await?;

        loop {
            if *status == FileStatus::Aborted {
                return Ok(());
            }

            let upload_part_headers = B2UploadPartHeaders::builder()
                .authorization(lease.authorization_token.clone())
                .part_number(part_number)
                .content_length(bytes.len() as u64)
                .content_sha1(sha1.clone())
                .build();

            let upload_part_headers = options
                .options
                .clone()
                .apply_file_part_upload(upload_part_headers);

            let chunk_size = (SizeUnit::KIBIBYTE * 160) as usize;
            let body = bytes.clone();
            let stats_task = stats.clone();
            let status_task = status.clone();
            let throttle_task = throttle.clone();

            let stream = stream! {
                let mut offset = 0;
                while offset < body.len() {
                    if *status_task == FileStatus::Aborted {
                        break;
                    }

                    let end = (offset + chunk_size).min(body.len());
                    let chunk = body.slice(offset..end);
                    offset = end;

                    if let Some(ref throttle) = throttle_task {
                        let mut throttle = throttle.lock().await;
                        throttle.advance_by(chunk.len() as u64).await;
                    }

                    stats_task.add_done_bytes(chunk.len() as u64).await;
                    yield Ok::<_, Infallible>(chunk);
                }
            };

            let result = client
                .upload_part(
                    upload_part_headers,
                    reqwest::Body::wrap_stream(stream),
                    lease.upload_url.clone(),
                )
                .await;

            match result {
                Ok(_) => {
                    pool.release(lease, true).await;
                    return Ok(());
                }
                Err(err) => {
                    let lease_ok = !part_upload_invalidates_lease(&err);
                    pool.release(lease, lease_ok).await;

                    let retryable = matches!(
                        err,
                        crate::error::B2Error::ServiceUnavailable(_)
                            | crate::error::B2Error::RequestTimeout(_)
                            | crate::error::B2Error::UnauthorizedRequest(_)
                            | crate::error::B2Error::ExpiredCredentials(_)
                    );

                    if !retryable || attempt >= backoff.max_retries {
                        return Err(err.into());
                    }

                    let delay = if matches!(err, crate::error::B2Error::RequestTimeout(_)) {
                        backoff.delay_no_jitter(attempt)
                    } else {
                        backoff.delay(attempt)
                    };

                    debug!(attempt, part_number, ?delay, "retrying part upload after {err}");
                    sleep(delay).await;
                    attempt += 1;
                    lease = pool.acquire().await?;
                }
            }
        }
    }

    fn new_throttle(&self) -> Option<Arc<Mutex<Throttle<u64>>>> {
        self.details
            .options
            .speed_throttle
            .clone()
            .map(|t| Arc::new(Mutex::new(t)))
    }

    async fn start_timer(&self) {
        self.stats.start_time.set(Instant::now()).await;
    }

    async fn cancel_large_file(&self) {
        let large_file = self.large_file_id.read().await;

        if let Some(id) = large_file.deref() {
            self.client.cancel_large_file(id.clone()).await.ok();
        }
    }

    async fn call_finish_callbacks(&self) {
        let callbacks = self.completion_callbacks.read().await;

        for callback in callbacks.deref() {
            match callback {
                B2Callback::Fn(fun) => fun(()),
                B2Callback::AsyncFn(fun) => fun(()).await,
            }
        }
    }
}
