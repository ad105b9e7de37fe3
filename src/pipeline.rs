use crate::types::{Classification, LandmarkFrame};

pub trait DirectionPipeline {
    fn name(&self) -> String;

    /// Total over any frame: malformed or insufficient input comes back as
    /// the MissingKeypoints sentinel, never an error.
    fn classify(&self, frame: &LandmarkFrame) -> Classification;

    /// Change token handed back to a caching host graph. NaN never compares
    /// equal to itself, so the node is re-evaluated on every tick.
    fn change_token(&self) -> f64 {
        f64::NAN
    }
}
