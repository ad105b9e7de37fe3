use anyhow::{Context, Result};
use pose_direction::body_direction::MIN_POSE_POINTS;
use pose_direction::face_direction::{FULL_FACE_POINTS, MIN_FACE_POINTS};
use pose_direction::types::LandmarkFrame;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: inspect_frame <openpose.json>")?;
    let raw =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let frame = LandmarkFrame::from_json_str(&raw)?;

    println!("People: {}", frame.people.len());
    for (i, person) in frame.people.iter().enumerate() {
        println!("#{}:", i);
        match &person.pose {
            Some(pose) => {
                let status = if pose.len() >= MIN_POSE_POINTS {
                    "usable"
                } else {
                    "too short"
                };
                println!("  pose: {} points ({})", pose.len(), status);
            }
            None => println!("  pose: absent"),
        }
        match &person.face {
            Some(face) => {
                let mode = if face.len() >= FULL_FACE_POINTS {
                    "full 68-point extraction"
                } else if face.len() >= MIN_FACE_POINTS {
                    "degraded extraction"
                } else {
                    "too short"
                };
                println!("  face: {} points ({})", face.len(), mode);
            }
            None => println!("  face: absent"),
        }
    }

    Ok(())
}
