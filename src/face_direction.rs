use crate::pipeline::DirectionPipeline;
use crate::types::{Classification, Keypoint, LandmarkFrame};

// Empirical thresholds, chosen by inspection of example frames.
const SYMMETRY_THRESHOLD: f32 = 0.15;
const ALIGNMENT_THRESHOLD: f32 = 0.12;
const NOSE_OFFSET_THRESHOLD: f32 = 0.18;

/// Point count of the full 68-point face model.
pub const FULL_FACE_POINTS: usize = 68;
/// Minimum face points for the degraded extraction (flat length 12).
pub const MIN_FACE_POINTS: usize = 4;

// =========================================================================
// Strategy A: Face Geometry
// Forward when the nose sits centered between mirrored feature pairs.
// =========================================================================
pub struct FaceDirectionPipeline;

impl DirectionPipeline for FaceDirectionPipeline {
    fn name(&self) -> String {
        "Face Direction (Landmark Geometry)".to_string()
    }

    fn classify(&self, frame: &LandmarkFrame) -> Classification {
        classify_face_direction(frame)
    }
}

/// The x coordinates the classifier works from. Left/right name the camera's
/// perspective, not the subject's.
pub(crate) struct FacePoints {
    pub(crate) left_eye: f32,
    pub(crate) right_eye: f32,
    pub(crate) nose: f32,
    pub(crate) left_mouth: f32,
    pub(crate) right_mouth: f32,
    pub(crate) left_jaw: f32,
    pub(crate) right_jaw: f32,
    pub(crate) left_brow: f32,
    pub(crate) right_brow: f32,
}

fn mean_x(points: &[Keypoint]) -> f32 {
    points.iter().map(|p| p.x).sum::<f32>() / points.len() as f32
}

/// None when the array is too short for even the degraded point set.
pub(crate) fn extract_face_points(face: &[Keypoint]) -> Option<FacePoints> {
    if face.len() >= FULL_FACE_POINTS {
        Some(FacePoints {
            left_eye: mean_x(&face[36..42]),
            right_eye: mean_x(&face[42..48]),
            nose: face[30].x,
            left_mouth: face[48].x,
            right_mouth: face[54].x,
            left_jaw: face[0].x,
            right_jaw: face[16].x,
            left_brow: mean_x(&face[17..22]),
            right_brow: mean_x(&face[22..27]),
        })
    } else if face.len() >= MIN_FACE_POINTS {
        // Smaller face models: the first four points stand in for
        // left eye / right eye / nose / mouth. Eye points substitute for the
        // jaw, eyebrow and right-mouth slots. A crude approximation, kept on
        // purpose so short arrays still classify.
        let left_eye = face[0].x;
        let right_eye = face[1].x;
        Some(FacePoints {
            left_eye,
            right_eye,
            nose: face[2].x,
            left_mouth: face[3].x,
            right_mouth: right_eye,
            left_jaw: left_eye,
            right_jaw: right_eye,
            left_brow: left_eye,
            right_brow: right_eye,
        })
    } else {
        None
    }
}

pub fn classify_face_direction(frame: &LandmarkFrame) -> Classification {
    let Some(person) = frame.first_person() else {
        return Classification::MissingKeypoints;
    };
    let Some(face) = person.face.as_deref() else {
        return Classification::MissingKeypoints;
    };
    let Some(pts) = extract_face_points(face) else {
        return Classification::MissingKeypoints;
    };

    let pairs = [
        (pts.left_eye, pts.right_eye),
        (pts.left_mouth, pts.right_mouth),
        (pts.left_jaw, pts.right_jaw),
        (pts.left_brow, pts.right_brow),
    ];

    let mut midpoints = [0.0f32; 4];
    let mut spans = [0.0f32; 4];
    for (i, (left, right)) in pairs.iter().enumerate() {
        midpoints[i] = (left + right) / 2.0;
        spans[i] = (left - right).abs();
        // The ratios below divide by this span.
        if spans[i] == 0.0 {
            return Classification::MissingKeypoints;
        }
    }

    let face_center = midpoints.iter().sum::<f32>() / 4.0;
    let avg_span = spans.iter().sum::<f32>() / 4.0;

    // Symmetry: how far the nose sits from each feature midpoint.
    // Alignment: how far each midpoint sits from the overall face center.
    let avg_symmetry = midpoints
        .iter()
        .zip(&spans)
        .map(|(mid, span)| (pts.nose - mid).abs() / span)
        .sum::<f32>()
        / 4.0;
    let avg_alignment = midpoints
        .iter()
        .zip(&spans)
        .map(|(mid, span)| (mid - face_center).abs() / span)
        .sum::<f32>()
        / 4.0;

    let nose_offset = pts.nose - face_center;
    let nose_offset_ratio = nose_offset.abs() / avg_span;

    if avg_symmetry < SYMMETRY_THRESHOLD
        && avg_alignment < ALIGNMENT_THRESHOLD
        && nose_offset_ratio < NOSE_OFFSET_THRESHOLD
    {
        return Classification::Forward;
    }

    // Positive offset: the nose sits toward the right edge of the image.
    if nose_offset > 0.0 {
        Classification::Right
    } else {
        Classification::Left
    }
}
