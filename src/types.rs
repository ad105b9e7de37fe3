use anyhow::{Context, Result};
use serde::Deserialize;

/// A single 2D landmark with detector confidence
#[derive(Debug, Clone, Copy, Default)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

impl Keypoint {
    /// Converts a flat [x, y, confidence, x, y, confidence, ...] array into
    /// typed points. An incomplete trailing triple is dropped.
    pub fn from_flat(flat: &[f32]) -> Vec<Keypoint> {
        flat.chunks_exact(3)
            .map(|c| Keypoint { x: c[0], y: c[1], confidence: c[2] })
            .collect()
    }
}

/// One detected person's landmark sets. Either array may be absent.
#[derive(Debug, Clone, Default)]
pub struct PersonLandmarks {
    pub pose: Option<Vec<Keypoint>>,
    pub face: Option<Vec<Keypoint>>,
}

/// Input to a classification call: one frame of detected people.
/// Read-only, produced by an upstream detector, consumed once per call.
#[derive(Debug, Clone, Default)]
pub struct LandmarkFrame {
    pub people: Vec<PersonLandmarks>,
}

impl LandmarkFrame {
    pub fn first_person(&self) -> Option<&PersonLandmarks> {
        self.people.first()
    }

    /// Parses an OpenPose-style JSON export. Accepts either a single frame
    /// object or a list of frames (the first frame is taken).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let input: RawInput =
            serde_json::from_str(raw).context("Failed to parse pose keypoint JSON")?;
        let frame = match input {
            RawInput::Batch(frames) => frames.into_iter().next().unwrap_or_default(),
            RawInput::Single(frame) => frame,
        };
        Ok(frame.into())
    }
}

// Wire shapes. OpenPose writes "pose_keypoints_2d"/"face_keypoints_2d";
// the aliases keep both spellings valid.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawPerson {
    #[serde(default, alias = "pose_keypoints_2d")]
    pose_keypoints: Option<Vec<f32>>,
    #[serde(default, alias = "face_keypoints_2d")]
    face_keypoints: Option<Vec<f32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawFrame {
    #[serde(default)]
    people: Vec<RawPerson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Batch(Vec<RawFrame>),
    Single(RawFrame),
}

impl From<RawFrame> for LandmarkFrame {
    fn from(raw: RawFrame) -> Self {
        let people = raw
            .people
            .into_iter()
            .map(|p| PersonLandmarks {
                pose: p.pose_keypoints.map(|v| Keypoint::from_flat(&v)),
                face: p.face_keypoints.map(|v| Keypoint::from_flat(&v)),
            })
            .collect();
        LandmarkFrame { people }
    }
}

/// Outcome of a direction classification. Label and code always travel
/// together; both failure kinds map to code -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Forward,
    Left,
    Right,
    MissingKeypoints,
    AngleTooSmall,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Forward => "forward",
            Classification::Left => "left",
            Classification::Right => "right",
            Classification::MissingKeypoints => "missing keypoints",
            Classification::AngleTooSmall => "angle too small",
        }
    }

    /// 0 = forward, 1 = left, 2 = right, -1 = failure/indeterminate.
    pub fn code(&self) -> i32 {
        match self {
            Classification::Forward => 0,
            Classification::Left => 1,
            Classification::Right => 2,
            Classification::MissingKeypoints | Classification::AngleTooSmall => -1,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
