use std::{
    fmt::Display,
    pin::Pin,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use bytes::Bytes;
use tokio::io::AsyncRead;

use crate::util::{write_lock_arc::WriteLockArc, RollingTimeSeries, SizeUnit};

/// What's being uploaded, tagged by how its length is known rather than
/// probed at runtime. `Bytes` always has a known length and a cheap,
/// repeatable read (used for retries and part-splitting). `Stream` may or
/// may not declare its length up front; an undeclared length routes past
/// the single-part cutoff into the multi-part path, since the streaming
/// part-sealing loop never needs a known total up front.
pub enum ByteSource {
    Bytes(Bytes),
    Stream(Pin<Box<dyn AsyncRead + Send>>, Option<u64>),
}

impl ByteSource {
    pub fn len(&self) -> Option<u64> {
        match self {
            Self::Bytes(bytes) => Some(bytes.len() as u64),
            Self::Stream(_, len) => *len,
        }
    }

    /// Normalizes either variant into a sequential reader, so the upload
    /// engine's part-collection loop doesn't need to special-case `Bytes`.
    pub(crate) fn into_reader(self) -> (Pin<Box<dyn AsyncRead + Send>>, Option<u64>) {
        match self {
            Self::Bytes(bytes) => {
                let len = bytes.len() as u64;
                (Box::pin(std::io::Cursor::new(bytes)), Some(len))
            }
            Self::Stream(reader, len) => (reader, len),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrentFileNetworkStats {
    /// Bytes per seconds
    pub bps: SizeUnit,
    /// Estimated finished time in seconds
    pub eta: Duration,
    /// Completion Percentage
    pub percentage: f64,
    /// Uploaded bytes so far
    pub done: SizeUnit,
    /// Total bytes to upload
    pub total: SizeUnit,
    /// Elapsed time
    pub elapsed: Duration,
}

impl CurrentFileNetworkStats {}

impl Display for CurrentFileNetworkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) =>  f.write_fmt(format_args!(
                "Speed: {:.precision$}PS | ETA: {:.precision$?} | Progress: {:.precision$}/{:.precision$} ({:.precision$}%) | Elapsed: {:.precision$?}",
                self.bps, self.eta, self.done, self.total, self.percentage * 100.0, self.elapsed, precision = precision
            )),
            None =>  f.write_fmt(format_args!(
                "Speed: {}PS | ETA: {:?} | Progress: {}/{}({}) | Elapsed: {:?}",
                self.bps, self.eta, self.done, self.total, self.percentage, self.elapsed
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Pending,
    Working,
    Finished,
    Retrying,
    Aborted,
}

#[derive(Debug)]
pub struct FileNetworkStats {
    pub(super) done: Arc<AtomicU64>,
    pub(super) speed_buffer: WriteLockArc<RollingTimeSeries<u64, 5000>>,
    pub(super) total: f64,
    pub(super) start_time: WriteLockArc<Instant>,
}

impl FileNetworkStats {
    pub(super) fn new(total: f64) -> Self {
        Self {
            total,
            done: Arc::new(AtomicU64::new(0)),
            speed_buffer: WriteLockArc::new(RollingTimeSeries::new(Duration::from_secs(10))),
            start_time: WriteLockArc::new(Instant::now()),
        }
    }

    /// Returns estimated download/upload speed in bytes per second
    pub fn bytes_per_second(&self) -> f64 {
        self.inner_bytes_per_second()
    }

    /// Returns estimated finish time in seconds
    pub fn estimated_time(&self) -> f64 {
        let done = self.done.load(Ordering::Relaxed) as f64;

        self.inner_estimated_time(done)
    }

    /// Returns current percentage
    pub fn percentage(&self) -> f64 {
        let done = self.done.load(Ordering::Relaxed) as f64;

        done / self.total
    }

    /// Returns file stats at this point of time
    pub fn current_stats(&self) -> CurrentFileNetworkStats {
        let done = self.done.load(Ordering::Relaxed) as f64;

        CurrentFileNetworkStats {
            bps: self.inner_bytes_per_second().into(),
            eta: Duration::from_secs_f64(self.inner_estimated_time(done).max(0.0)),
            percentage: done / self.total,
            done: done.into(),
            total: self.total.into(),
            elapsed: self.start_time.elapsed(),
        }
    }

    pub(super) async fn add_done_bytes(&self, bytes: u64) {
        self.done.fetch_add(bytes, Ordering::Relaxed);
        let mut buffer = self.speed_buffer.lock_write().await;
        buffer.add_value(bytes);
    }

    fn inner_bytes_per_second(&self) -> f64 {
        let dps = self.speed_buffer.get_valid_points();
        let mut total = 0.0;
        let oldest_time = dps
            .iter()
            .map(|dp| {
                total += dp.data as f64;
                dp.time.elapsed()
            })
            .max();

        match oldest_time {
            Some(dur) => total / dur.as_secs_f64(),
            None => 0.0,
        }
    }

    fn inner_estimated_time(&self, done: f64) -> f64 {
        let mut bytes_per_sec = self.inner_bytes_per_second();

        if bytes_per_sec == 0.0 {
            bytes_per_sec = 1.0;
        }

        (self.total - done) / bytes_per_sec
    }
}
