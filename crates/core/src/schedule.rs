//! Beat scheduling: split a runtime into contiguous, timestamped beats.

use tracing::trace;

use crate::{
    error::{Result, ShortSparkError},
    format::format_timestamp,
    types::Beat,
};

/// Upper bound on beats for any runtime, whatever the bucket table says.
pub const MAX_BEATS: usize = 6;

/// Monotonic table of runtime bucket (inclusive upper bound) -> beat count.
#[derive(Debug, Clone, Copy)]
pub struct BeatBuckets(pub &'static [(u32, usize)]);

pub const SCRIPT_BEATS: BeatBuckets = BeatBuckets(&[(20, 3), (35, 4), (50, 5), (u32::MAX, 6)]);

pub const VISUAL_BEATS: BeatBuckets = BeatBuckets(&[(25, 4), (45, 5), (u32::MAX, 6)]);

impl BeatBuckets {
    pub fn beat_count(&self, duration: u32) -> usize {
        self.0
            .iter()
            .find(|(max_duration, _)| duration <= *max_duration)
            .map_or(MAX_BEATS, |&(_, beats)| beats)
            .min(MAX_BEATS)
    }
}

/// Split `[0, duration)` into `beat_count` contiguous beats. When the split is
/// uneven the first `duration % beat_count` beats get one extra second.
pub fn schedule(duration: u32, beat_count: usize) -> Result<Vec<Beat>> {
    if duration == 0 {
        return Err(ShortSparkError::InvalidBrief {
            reason: "duration must be a positive number of seconds".to_string(),
        });
    }
    // Every beat needs at least one second or timestamps stop being strictly increasing.
    if beat_count == 0 || beat_count > duration as usize {
        return Err(ShortSparkError::InvalidSchedule {
            duration,
            beat_count,
        });
    }

    let count = beat_count as u32;
    let base = duration / count;
    let remainder = duration % count;

    let mut start = 0;
    let beats: Vec<Beat> = (0..count)
        .map(|i| {
            let len = base + u32::from(i < remainder);
            let beat = Beat {
                timestamp: format_timestamp(start),
                index: i as usize,
                start_seconds: start,
                end_seconds: start + len,
            };
            start += len;
            beat
        })
        .collect();

    trace!(duration, beat_count, "scheduled beats");
    Ok(beats)
}

/// Same as [`schedule`] for a runtime that has not been through the brief
/// normalizer. Rejects non-finite and non-positive values instead of clamping.
pub fn schedule_secs(duration: f64, beat_count: usize) -> Result<Vec<Beat>> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ShortSparkError::InvalidBrief {
            reason: format!("duration must be positive and finite (got {duration})"),
        });
    }
    let seconds = duration.round().min(f64::from(u32::MAX)) as u32;
    schedule(seconds, beat_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(beats: &[Beat]) -> Vec<u32> {
        beats.iter().map(Beat::len_seconds).collect()
    }

    #[test]
    fn test_even_split() {
        let beats = schedule(15, 3).unwrap();
        assert_eq!(lengths(&beats), vec![5, 5, 5]);
        assert_eq!(beats[2].end_seconds, 15);
    }

    #[test]
    fn test_remainder_goes_to_early_beats() {
        let beats = schedule(55, 6).unwrap();
        assert_eq!(lengths(&beats), vec![10, 9, 9, 9, 9, 9]);

        let beats = schedule(59, 6).unwrap();
        assert_eq!(lengths(&beats), vec![10, 10, 10, 10, 10, 9]);
    }

    #[test]
    fn test_timestamps_and_indexes() {
        let beats = schedule(55, 6).unwrap();
        let stamps: Vec<&str> = beats.iter().map(|b| b.timestamp.as_str()).collect();
        assert_eq!(
            stamps,
            vec!["00:00", "00:10", "00:19", "00:28", "00:37", "00:46"]
        );
        for (i, beat) in beats.iter().enumerate() {
            assert_eq!(beat.index, i);
        }
    }

    #[test]
    fn test_beats_are_contiguous() {
        let beats = schedule(47, 5).unwrap();
        assert_eq!(beats[0].start_seconds, 0);
        for pair in beats.windows(2) {
            assert_eq!(pair[0].end_seconds, pair[1].start_seconds);
        }
        assert_eq!(beats.last().unwrap().end_seconds, 47);
    }

    #[test]
    fn test_single_beat_covers_everything() {
        let beats = schedule(30, 1).unwrap();
        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].start_seconds, 0);
        assert_eq!(beats[0].end_seconds, 30);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            schedule(0, 3),
            Err(ShortSparkError::InvalidBrief { .. })
        ));
        assert!(matches!(
            schedule(30, 0),
            Err(ShortSparkError::InvalidSchedule { beat_count: 0, .. })
        ));
        assert!(matches!(
            schedule(3, 4),
            Err(ShortSparkError::InvalidSchedule {
                duration: 3,
                beat_count: 4,
            })
        ));
    }

    #[test]
    fn test_schedule_secs_rejects_non_finite() {
        assert!(matches!(
            schedule_secs(f64::NAN, 3),
            Err(ShortSparkError::InvalidBrief { .. })
        ));
        assert!(matches!(
            schedule_secs(f64::INFINITY, 3),
            Err(ShortSparkError::InvalidBrief { .. })
        ));
        assert!(matches!(
            schedule_secs(-10.0, 3),
            Err(ShortSparkError::InvalidBrief { .. })
        ));
        let beats = schedule_secs(29.6, 3).unwrap();
        assert_eq!(beats.last().unwrap().end_seconds, 30);
    }

    #[test]
    fn test_bucket_tables() {
        assert_eq!(SCRIPT_BEATS.beat_count(15), 3);
        assert_eq!(SCRIPT_BEATS.beat_count(20), 3);
        assert_eq!(SCRIPT_BEATS.beat_count(21), 4);
        assert_eq!(SCRIPT_BEATS.beat_count(50), 5);
        assert_eq!(SCRIPT_BEATS.beat_count(60), 6);

        assert_eq!(VISUAL_BEATS.beat_count(15), 4);
        assert_eq!(VISUAL_BEATS.beat_count(45), 5);
        assert_eq!(VISUAL_BEATS.beat_count(60), 6);
    }

    #[test]
    fn test_bucket_tables_are_monotonic() {
        for table in [SCRIPT_BEATS, VISUAL_BEATS] {
            let counts: Vec<usize> = (15..=60).map(|d| table.beat_count(d)).collect();
            assert!(counts.windows(2).all(|w| w[0] <= w[1]));
            assert!(counts.iter().all(|&c| (1..=MAX_BEATS).contains(&c)));
        }
    }
}
