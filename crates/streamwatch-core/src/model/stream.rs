// ── Stream domain type ──

use serde::Serialize;

use streamwatch_api::types::StreamRecord;

/// What kind of source the backend is consuming for a stream.
///
/// The backend writes `camera` / `video_file` / `image_folder`; the
/// short `video` / `folder` spellings are accepted as well. Anything
/// else maps to [`Unknown`](Self::Unknown) rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceType {
    Camera,
    Video,
    Folder,
    Unknown,
}

impl SourceType {
    /// Parse a wire spelling. `None` (field absent) also maps to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("camera") => Self::Camera,
            Some("video" | "video_file") => Self::Video,
            Some("folder" | "image_folder") => Self::Folder,
            _ => Self::Unknown,
        }
    }

    /// Infer the type the same way the backend does when a stream is
    /// created: a bare number is a camera index, a video-file suffix is
    /// a video, anything else is an image folder.
    pub fn infer(source: &str) -> Self {
        if !source.is_empty() && source.chars().all(|c| c.is_ascii_digit()) {
            Self::Camera
        } else if [".mp4", ".avi", ".mov"]
            .iter()
            .any(|ext| source.to_ascii_lowercase().ends_with(ext))
        {
            Self::Video
        } else {
            Self::Folder
        }
    }
}

/// A configured video stream as the backend reports it.
///
/// Fields are refreshed wholesale on every successful poll; there are
/// no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    /// Opaque, unique, assigned by the backend.
    pub id: String,
    pub name: String,
    /// Camera index, file path, or folder path — always a string.
    pub source: String,
    pub source_type: SourceType,
    /// Attached analysis models. Plain strings: the backend owns the
    /// vocabulary and unknown names must not break the view.
    pub models: Vec<String>,
    /// Whether the backend is currently consuming the source.
    pub active: bool,
    /// Monotonically non-decreasing.
    pub frame_count: u64,
    /// Seconds since processing started, absent while inactive.
    pub uptime_secs: Option<f64>,
}

impl From<StreamRecord> for Stream {
    fn from(rec: StreamRecord) -> Self {
        // Same fallback name the backend uses for anonymous streams.
        let name = rec.name.unwrap_or_else(|| {
            let short: String = rec.id.chars().take(8).collect();
            format!("Stream-{short}")
        });

        Self {
            name,
            source: rec.source.unwrap_or_default(),
            source_type: SourceType::parse(rec.source_type.as_deref()),
            models: rec.models,
            active: rec.active,
            frame_count: rec.frame_count,
            uptime_secs: rec.uptime,
            id: rec.id,
        }
    }
}
