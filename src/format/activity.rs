// Segment classes for the 0-5 activity meters

pub const SEGMENT_CLASS: &str = "activity-segment";
pub const INACTIVE_SEGMENT_CLASS: &str = "activity-segment inactive-segment";
pub const MAX_SCORE: u32 = 5;

/// How many segments a score lights up. Negative and NaN scores light none,
/// fractional scores round up, and the result never exceeds `segment_count`.
pub fn activation_count(score: f64, segment_count: usize) -> usize {
    if score.is_nan() || score <= 0.0 {
        return 0;
    }
    let wanted = score.ceil();
    if wanted >= segment_count as f64 {
        segment_count
    } else {
        wanted as usize
    }
}

/// Colour variant for the active segment at `index`. Low scores paint every
/// lit segment the same; from 3 up each segment keeps its own shade.
pub fn active_variant(score: f64, index: usize) -> usize {
    if score <= 1.0 {
        1
    } else if score <= 2.0 {
        2
    } else {
        index + 1
    }
}

pub fn active_segment_class(score: f64, index: usize) -> String {
    format!("{} active-segment-{}", INACTIVE_SEGMENT_CLASS, active_variant(score, index))
}

/// Final class list of every segment in a container after rendering `score`.
pub fn segment_classes(score: f64, segment_count: usize) -> Vec<String> {
    let active = activation_count(score, segment_count);
    (0..segment_count)
        .map(|index| {
            if index < active {
                active_segment_class(score, index)
            } else {
                INACTIVE_SEGMENT_CLASS.to_string()
            }
        })
        .collect()
}

pub fn score_label(score: f64) -> String {
    format!("{}/{}", score, MAX_SCORE)
}
