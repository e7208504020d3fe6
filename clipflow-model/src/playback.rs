//! Client-side playback state types.
//!
//! These model the per-user, per-video playback position kept by the player
//! without server round-trips, plus the player settings record and the
//! quality tiers used for rendition selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion fraction above which a stored position restarts from zero.
///
/// Positions beyond this fraction are treated as "finished": the stored time
/// is reset to 0 so the next watch starts from the beginning.
pub const RESTART_THRESHOLD: f64 = 0.9;

/// Last-known playback position for one (user, video) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProgress {
    pub video_id: Uuid,
    /// Stored playback offset in seconds
    pub current_time: f64,
    /// Total runtime in seconds
    pub duration: f64,
    /// Derived: `floor(current_time / duration * 100)`
    pub percentage: u8,
    pub last_played_at: DateTime<Utc>,
}

impl VideoProgress {
    /// Record a progress tick, applying the near-completion restart rule.
    pub fn record(video_id: Uuid, current_time: f64, duration: f64) -> Self {
        let stored = if duration > 0.0 && current_time / duration > RESTART_THRESHOLD {
            0.0
        } else {
            current_time
        };
        let percentage = if duration > 0.0 {
            ((stored / duration) * 100.0).floor().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            video_id,
            current_time: stored,
            duration,
            percentage,
            last_played_at: Utc::now(),
        }
    }

    /// Whether resuming mid-video makes sense for this record.
    pub fn is_resumable(&self) -> bool {
        self.current_time > 0.0
    }
}

/// Available source renditions, highest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "1080p")]
    Q1080,
    #[serde(rename = "720p")]
    Q720,
    #[serde(rename = "480p")]
    Q480,
    #[serde(rename = "360p")]
    Q360,
}

impl VideoQuality {
    /// Fixed ladder searched during rendition selection, best first.
    pub const LADDER: [VideoQuality; 4] = [
        VideoQuality::Q1080,
        VideoQuality::Q720,
        VideoQuality::Q480,
        VideoQuality::Q360,
    ];

    /// Position in the ladder; lower is better quality.
    pub fn rank(self) -> usize {
        Self::LADDER
            .iter()
            .position(|q| *q == self)
            .unwrap_or(Self::LADDER.len())
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VideoQuality::Q1080 => "1080p",
            VideoQuality::Q720 => "720p",
            VideoQuality::Q480 => "480p",
            VideoQuality::Q360 => "360p",
        };
        write!(f, "{label}")
    }
}

/// Requested quality: a fixed tier, or `auto` resolved from network hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityPreference {
    #[serde(rename = "auto")]
    Auto,
    #[serde(untagged)]
    Fixed(VideoQuality),
}

/// Network connection effective type as reported by the client runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkEffectiveType {
    #[serde(rename = "4g")]
    FourG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "2g")]
    TwoG,
}

impl NetworkEffectiveType {
    /// Target tier used when the requested quality is `auto`.
    pub fn target_quality(self) -> VideoQuality {
        match self {
            NetworkEffectiveType::FourG => VideoQuality::Q1080,
            NetworkEffectiveType::ThreeG => VideoQuality::Q480,
            NetworkEffectiveType::TwoG => VideoQuality::Q360,
        }
    }
}

/// Per-user player settings record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Output volume in `0.0..=1.0`
    pub volume: f32,
    pub playback_rate: f32,
    pub quality: QualityPreference,
    pub autoplay: bool,
    pub captions_enabled: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
            quality: QualityPreference::Auto,
            autoplay: true,
            captions_enabled: false,
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettingsUpdate {
    pub volume: Option<f32>,
    pub playback_rate: Option<f32>,
    pub quality: Option<QualityPreference>,
    pub autoplay: Option<bool>,
    pub captions_enabled: Option<bool>,
}

impl PlayerSettings {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: PlayerSettingsUpdate) {
        if let Some(volume) = update.volume {
            self.volume = volume.clamp(0.0, 1.0);
        }
        if let Some(rate) = update.playback_rate {
            self.playback_rate = rate;
        }
        if let Some(quality) = update.quality {
            self.quality = quality;
        }
        if let Some(autoplay) = update.autoplay {
            self.autoplay = autoplay;
        }
        if let Some(captions) = update.captions_enabled {
            self.captions_enabled = captions;
        }
    }
}
