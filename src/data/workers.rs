//! Simulated background work
//!
//! Encoding runs one blocking task per file; subtitle download runs beside
//! the buffering step of playback. Workers share nothing and are all joined
//! before the call returns.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::error::Result;

/// Encodes a batch of files in parallel
#[derive(Debug, Clone)]
pub struct VideoEncoder {
    files: Vec<String>,
    delay: Duration,
}

impl VideoEncoder {
    /// Create an encoder for `files`, each taking `delay`
    pub fn new<I, S>(files: I, delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            delay,
        }
    }

    /// Create an encoder using the configured delay
    pub fn from_config<I, S>(files: I, config: &AppConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(files, config.encode_delay)
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Encode every file and wait for all of them
    ///
    /// Returns the file names in input order.
    pub async fn start_encoding(&self) -> Result<Vec<String>> {
        let handles: Vec<JoinHandle<String>> = self
            .files
            .iter()
            .cloned()
            .map(|file| {
                let delay = self.delay;
                tokio::task::spawn_blocking(move || encode_file(file, delay))
            })
            .collect();

        let mut encoded = Vec::with_capacity(handles.len());
        for handle in handles {
            encoded.push(handle.await?);
        }

        tracing::info!(files = encoded.len(), "All encoding tasks completed");
        Ok(encoded)
    }
}

fn encode_file(file: String, delay: Duration) -> String {
    tracing::info!(file = %file, "Started encoding");
    std::thread::sleep(delay);
    tracing::info!(file = %file, "Finished encoding");
    file
}

/// Steps of a simulated playback start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Video buffering started
    Buffering,
    /// Video is playing
    Playing,
    /// Subtitles for the file are available
    SubtitlesDownloaded(String),
    /// Every task finished
    Done,
}

/// Downloads subtitles while the video buffers
#[derive(Debug, Clone)]
pub struct SubtitleDownloader {
    file_name: String,
    download_delay: Duration,
    buffering_delay: Duration,
}

impl SubtitleDownloader {
    pub fn new(file_name: impl Into<String>, download_delay: Duration, buffering_delay: Duration) -> Self {
        Self {
            file_name: file_name.into(),
            download_delay,
            buffering_delay,
        }
    }

    /// Create a downloader using the configured delays
    pub fn from_config(file_name: impl Into<String>, config: &AppConfig) -> Self {
        Self::new(file_name, config.subtitle_delay, config.buffering_delay)
    }

    /// Run the download next to buffering and return the event timeline
    pub async fn simulate_stream(&self) -> Result<Vec<StreamEvent>> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let download_tx = tx.clone();
        let file_name = self.file_name.clone();
        let download_delay = self.download_delay;
        let download = tokio::spawn(async move {
            tracing::info!(file = %file_name, "Downloading subtitles");
            tokio::time::sleep(download_delay).await;
            tracing::info!(file = %file_name, "Subtitles downloaded");
            let _ = download_tx.send(StreamEvent::SubtitlesDownloaded(file_name));
        });

        let _ = tx.send(StreamEvent::Buffering);
        tracing::info!(file = %self.file_name, "Video buffering");
        tokio::time::sleep(self.buffering_delay).await;
        let _ = tx.send(StreamEvent::Playing);
        tracing::info!(file = %self.file_name, "Video is now playing");

        download.await?;
        let _ = tx.send(StreamEvent::Done);
        tracing::info!("All stream tasks done");
        drop(tx);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        Ok(events)
    }
}
