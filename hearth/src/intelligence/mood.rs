use crate::models::MoodRecord;

use super::types::MoodSeries;

pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Turn stored mood records into a chart series, one point per record.
///
/// Records must already be in ascending timestamp order; no sorting,
/// smoothing or resampling happens here.
pub fn aggregate(records: &[MoodRecord]) -> MoodSeries {
    let (labels, scores) = records
        .iter()
        .map(|record| {
            (
                record.created_at.format(DATE_LABEL_FORMAT).to_string(),
                record.positive - record.negative,
            )
        })
        .unzip();

    MoodSeries { labels, scores }
}
