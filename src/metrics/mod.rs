//! Summary statistics for vtsim.

pub mod confidence;

pub use confidence::{mean, sample_std_dev, student_t_interval, t_half_width, ConfidenceInterval};
