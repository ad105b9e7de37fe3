use crate::face_direction::extract_face_points;
use crate::pipeline::DirectionPipeline;
use crate::types::{Classification, LandmarkFrame, PersonLandmarks};

// COCO-like body layout. These indices are a fixed contract with the
// upstream detector and must not be reinterpreted.
const NOSE: usize = 0;
const LEFT_SHOULDER: usize = 5;
const RIGHT_SHOULDER: usize = 6;

/// Minimum pose points: everything up to the right shoulder (flat length 21).
pub const MIN_POSE_POINTS: usize = 7;

const FORWARD_X_RATIO: f32 = 0.3;
const LEVEL_Y_RATIO: f32 = 0.2;
const Y_MARGIN_RATIO: f32 = 0.4;
const ASSIST_SYMMETRY_THRESHOLD: f32 = 0.15;
// Shoulder spread in pixels below which a profile view is too ambiguous to call.
const MIN_SHOULDER_SPREAD: f32 = 20.0;

// =========================================================================
// Strategy B: Body Pose (Shoulders + Nose) with Face Assist
// =========================================================================
pub struct BodyDirectionPipeline;

impl DirectionPipeline for BodyDirectionPipeline {
    fn name(&self) -> String {
        "Body Direction (Shoulders + Face Assist)".to_string()
    }

    fn classify(&self, frame: &LandmarkFrame) -> Classification {
        classify_body_direction(frame)
    }
}

enum FaceAssist {
    Forward,
    NotForward,
    Degenerate,
}

// Reduced symmetry check: eye and mouth midpoints only, no jaw/eyebrow.
// None when there is no face data to assist with.
fn face_symmetry_assist(person: &PersonLandmarks) -> Option<FaceAssist> {
    let face = person.face.as_deref()?;
    let pts = extract_face_points(face)?;

    let eye_mid = (pts.left_eye + pts.right_eye) / 2.0;
    let eye_span = (pts.left_eye - pts.right_eye).abs();
    let mouth_mid = (pts.left_mouth + pts.right_mouth) / 2.0;
    let mouth_span = (pts.left_mouth - pts.right_mouth).abs();

    if eye_span == 0.0 || mouth_span == 0.0 {
        return Some(FaceAssist::Degenerate);
    }

    let eye_ratio = (pts.nose - eye_mid).abs() / eye_span;
    let mouth_ratio = (pts.nose - mouth_mid).abs() / mouth_span;

    if eye_ratio < ASSIST_SYMMETRY_THRESHOLD && mouth_ratio < ASSIST_SYMMETRY_THRESHOLD {
        Some(FaceAssist::Forward)
    } else {
        Some(FaceAssist::NotForward)
    }
}

pub fn classify_body_direction(frame: &LandmarkFrame) -> Classification {
    let Some(person) = frame.first_person() else {
        return Classification::MissingKeypoints;
    };
    let Some(pose) = person.pose.as_deref() else {
        return Classification::MissingKeypoints;
    };
    if pose.len() < MIN_POSE_POINTS {
        return Classification::MissingKeypoints;
    }

    let nose = pose[NOSE];
    let left_shoulder = pose[LEFT_SHOULDER];
    let right_shoulder = pose[RIGHT_SHOULDER];

    let shoulder_center_x = (left_shoulder.x + right_shoulder.x) / 2.0;
    let nose_offset = nose.x - shoulder_center_x;
    let shoulder_dx = (left_shoulder.x - right_shoulder.x).abs();
    let shoulder_dy = (left_shoulder.y - right_shoulder.y).abs();

    // Primary: nose centered between level shoulders.
    let forward_x_threshold = FORWARD_X_RATIO * shoulder_dx;
    // +1 keeps the margin non-zero when the shoulders are perfectly level.
    let y_margin = Y_MARGIN_RATIO * (shoulder_dy + 1.0);
    let shoulders_level = shoulder_dy < LEVEL_Y_RATIO * shoulder_dx;
    let min_shoulder_y = left_shoulder.y.min(right_shoulder.y);
    let max_shoulder_y = left_shoulder.y.max(right_shoulder.y);
    let nose_between =
        nose.y >= min_shoulder_y - y_margin && nose.y <= max_shoulder_y + y_margin;

    if nose_offset.abs() <= forward_x_threshold && shoulders_level && nose_between {
        return Classification::Forward;
    }

    // Secondary: a symmetric face can still call forward when the shoulders
    // did not.
    match face_symmetry_assist(person) {
        Some(FaceAssist::Forward) => return Classification::Forward,
        Some(FaceAssist::Degenerate) => return Classification::MissingKeypoints,
        Some(FaceAssist::NotForward) | None => {}
    }

    // Tertiary: need real shoulder spread before trusting left/right.
    if shoulder_dx < MIN_SHOULDER_SPREAD {
        return Classification::AngleTooSmall;
    }

    // Visibility proxies: the shoulder further from the nose is the one the
    // subject turned away from.
    let right_visibility = (right_shoulder.x - nose.x).abs();
    let left_visibility = (left_shoulder.x - nose.x).abs();

    if nose_offset > 0.0 && right_visibility > left_visibility {
        Classification::Right
    } else if nose_offset < 0.0 && left_visibility > right_visibility {
        Classification::Left
    } else if right_shoulder.x > left_shoulder.x {
        Classification::Right
    } else {
        Classification::Left
    }
}
