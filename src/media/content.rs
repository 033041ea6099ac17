//! Playable content
//!
//! Movies and series share an ID, a title and an optional stream key; they
//! differ only in how playback is started. `Content` is a closed enum and
//! [`Content::play`] dispatches on the variant.

use std::fmt;

use crate::error::{Error, Result};

/// Fields common to every kind of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentInfo {
    /// Catalog ID
    pub content_id: u64,
    /// Display title
    pub title: String,
    /// Key required to start a stream
    stream_key: Option<String>,
}

/// A playable catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Single feature
    Movie(ContentInfo),
    /// Episodic show
    Series(ContentInfo),
}

/// Result of a play request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Movie playback started
    Started,
    /// Series episode resumed
    Resumed { episode: u32 },
    /// No stream key assigned yet
    MissingStreamKey { title: String },
    /// Episode number was zero or negative
    InvalidEpisode { title: String },
}

impl PlayOutcome {
    /// Whether playback actually began
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayOutcome::Started | PlayOutcome::Resumed { .. })
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayOutcome::Started => write!(f, "Starting Film..."),
            PlayOutcome::Resumed { episode } => write!(f, "Resuming S01E{:02}...", episode),
            PlayOutcome::MissingStreamKey { title } => {
                write!(f, "Cannot play '{}': stream key not set", title)
            }
            PlayOutcome::InvalidEpisode { title } => {
                write!(f, "Invalid episode number for '{}'", title)
            }
        }
    }
}

impl ContentInfo {
    fn new(content_id: u64, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::invalid("title must be a non-empty string"));
        }

        Ok(Self {
            content_id,
            title,
            stream_key: None,
        })
    }
}

impl Content {
    /// Create a movie
    pub fn movie(content_id: u64, title: impl Into<String>) -> Result<Self> {
        ContentInfo::new(content_id, title).map(Content::Movie)
    }

    /// Create a series
    pub fn series(content_id: u64, title: impl Into<String>) -> Result<Self> {
        ContentInfo::new(content_id, title).map(Content::Series)
    }

    pub fn info(&self) -> &ContentInfo {
        match self {
            Content::Movie(info) | Content::Series(info) => info,
        }
    }

    fn info_mut(&mut self) -> &mut ContentInfo {
        match self {
            Content::Movie(info) | Content::Series(info) => info,
        }
    }

    pub fn content_id(&self) -> u64 {
        self.info().content_id
    }

    pub fn title(&self) -> &str {
        &self.info().title
    }

    /// Assign the stream key
    ///
    /// Blank keys are rejected and the previous key is kept.
    pub fn set_stream_key(&mut self, key: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::invalid("stream key must be a non-empty string"));
        }

        self.info_mut().stream_key = Some(key);
        Ok(())
    }

    /// Get the stream key
    pub fn stream_key(&self) -> Result<&str> {
        self.info()
            .stream_key
            .as_deref()
            .ok_or_else(|| Error::StreamKeyNotAssigned {
                title: self.title().to_string(),
            })
    }

    pub fn has_stream_key(&self) -> bool {
        self.info().stream_key.is_some()
    }

    /// Start playback
    ///
    /// Movies ignore `episode`. Series default to episode 1 and report
    /// `InvalidEpisode` for non-positive numbers before looking at the key.
    pub fn play(&self, episode: Option<i64>) -> PlayOutcome {
        let outcome = match self {
            Content::Movie(info) => match info.stream_key {
                Some(_) => PlayOutcome::Started,
                None => PlayOutcome::MissingStreamKey {
                    title: info.title.clone(),
                },
            },
            Content::Series(info) => {
                let episode = episode.unwrap_or(1);
                match u32::try_from(episode) {
                    Ok(episode) if episode >= 1 => match info.stream_key {
                        Some(_) => PlayOutcome::Resumed { episode },
                        None => PlayOutcome::MissingStreamKey {
                            title: info.title.clone(),
                        },
                    },
                    _ => PlayOutcome::InvalidEpisode {
                        title: info.title.clone(),
                    },
                }
            }
        };

        tracing::debug!(
            content_id = self.content_id(),
            title = %self.title(),
            outcome = %outcome,
            "Play requested"
        );

        outcome
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Content::Movie(_) => "Movie",
            Content::Series(_) => "Series",
        };
        write!(f, "{}(id={}, title='{}')", kind, self.content_id(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_initialization() {
        let movie = Content::movie(1, "Demo").unwrap();
        assert_eq!(movie.content_id(), 1);
        assert_eq!(movie.title(), "Demo");
        assert!(!movie.has_stream_key());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(Content::movie(1, "").unwrap_err().is_invalid_argument());
        assert!(Content::series(2, "   ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_set_and_get_stream_key() {
        let mut content = Content::movie(2, "Test").unwrap();
        content.set_stream_key("key123").unwrap();
        assert_eq!(content.stream_key().unwrap(), "key123");
    }

    #[test]
    fn test_get_stream_key_without_setting() {
        let content = Content::series(3, "NoKey").unwrap();
        let err = content.stream_key().unwrap_err();
        assert_eq!(err.to_string(), "Stream key for 'NoKey' not assigned");
    }

    #[test]
    fn test_set_invalid_stream_key_keeps_previous() {
        let mut content = Content::movie(4, "InvalidKey").unwrap();
        assert!(content.set_stream_key("").unwrap_err().is_invalid_argument());
        assert!(!content.has_stream_key());

        content.set_stream_key("good").unwrap();
        assert!(content.set_stream_key(" ").is_err());
        assert_eq!(content.stream_key().unwrap(), "good");
    }

    #[test]
    fn test_display() {
        let movie = Content::movie(101, "Tenet").unwrap();
        let series = Content::series(201, "Stranger Things").unwrap();
        assert_eq!(movie.to_string(), "Movie(id=101, title='Tenet')");
        assert_eq!(series.to_string(), "Series(id=201, title='Stranger Things')");
    }

    #[test]
    fn test_movie_play() {
        let mut movie = Content::movie(102, "Inception").unwrap();

        let outcome = movie.play(None);
        assert_eq!(
            outcome.to_string(),
            "Cannot play 'Inception': stream key not set"
        );
        assert!(!outcome.is_playing());

        movie.set_stream_key("abc").unwrap();
        assert_eq!(movie.play(None), PlayOutcome::Started);
        // Episode has no meaning for a movie
        assert_eq!(movie.play(Some(-3)), PlayOutcome::Started);
        assert_eq!(movie.play(None).to_string(), "Starting Film...");
    }

    #[test]
    fn test_series_play() {
        let mut series = Content::series(201, "Stranger Things").unwrap();
        assert!(matches!(
            series.play(Some(2)),
            PlayOutcome::MissingStreamKey { .. }
        ));

        series.set_stream_key("serieskey456").unwrap();
        assert_eq!(series.play(None), PlayOutcome::Resumed { episode: 1 });
        assert_eq!(series.play(Some(2)).to_string(), "Resuming S01E02...");
        assert_eq!(series.play(Some(12)).to_string(), "Resuming S01E12...");
    }

    #[test]
    fn test_series_episode_validation() {
        let series = Content::series(202, "DemoSeries").unwrap();

        for episode in [0, -5, i64::MIN, i64::MAX] {
            let outcome = series.play(Some(episode));
            assert_eq!(
                outcome,
                PlayOutcome::InvalidEpisode {
                    title: "DemoSeries".into()
                }
            );
            assert_eq!(
                outcome.to_string(),
                "Invalid episode number for 'DemoSeries'"
            );
        }
    }
}
