//! Commit timeline: calendar-month bucketing and validation.
//!
//! Consumes an already-parsed commit history and produces the contiguous
//! ascending month sequence the progression builder expects. A month with no
//! commits between two active months still appears, with `commits = 0`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use skillscan_core::errors::ProgressionError;
use skillscan_core::types::collections::FxHashMap;
use skillscan_core::types::{CommitRecord, TimelinePeriod};

/// Files listed per period, ranked by touch count.
const TOP_FILES_PER_PERIOD: usize = 5;

/// Format a date as a `YYYY-MM` month label.
pub fn month_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parse a `YYYY-MM` label to the first day of that month.
pub fn parse_month(label: &str) -> Result<NaiveDate, ProgressionError> {
    let bad = || ProgressionError::BadPeriodLabel {
        label: label.to_string(),
    };
    if !label.is_ascii() || label.len() != 7 || label.as_bytes()[4] != b'-' {
        return Err(bad());
    }
    let year: i32 = label[..4].parse().map_err(|_| bad())?;
    let month: u32 = label[5..].parse().map_err(|_| bad())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(bad)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // day 1 of a valid month always exists
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Bucket commits into a contiguous ascending month sequence.
pub fn build_timeline(commits: &[CommitRecord]) -> Vec<TimelinePeriod> {
    if commits.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&CommitRecord> = commits.iter().collect();
    ordered.sort_by_key(|c| c.date);

    struct Bucket<'a> {
        commits: u32,
        authors: std::collections::BTreeSet<&'a str>,
        messages: Vec<String>,
        file_touches: BTreeMap<&'a str, u32>,
        languages: BTreeMap<String, u32>,
    }

    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    for commit in &ordered {
        let key = commit.date.with_day(1).unwrap_or(commit.date);
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            commits: 0,
            authors: Default::default(),
            messages: Vec::new(),
            file_touches: BTreeMap::new(),
            languages: BTreeMap::new(),
        });
        bucket.commits += 1;
        bucket.authors.insert(commit.author.as_str());
        bucket.messages.push(commit.message.clone());
        for file in &commit.files {
            *bucket.file_touches.entry(file.as_str()).or_insert(0) += 1;
        }
        for (lang, count) in &commit.languages {
            *bucket.languages.entry(lang.clone()).or_insert(0) += count;
        }
    }

    // buckets is non-empty here
    let first = *buckets.keys().next().unwrap_or(&ordered[0].date);
    let last = *buckets.keys().next_back().unwrap_or(&ordered[0].date);

    let mut timeline = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        let label = month_label(cursor);
        match buckets.remove(&cursor) {
            Some(bucket) => {
                let mut ranked: Vec<(&str, u32)> = bucket.file_touches.into_iter().collect();
                ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                timeline.push(TimelinePeriod {
                    month: label,
                    commits: bucket.commits,
                    contributors: bucket.authors.len() as u32,
                    messages: bucket.messages,
                    top_files: ranked
                        .into_iter()
                        .take(TOP_FILES_PER_PERIOD)
                        .map(|(f, _)| f.to_string())
                        .collect(),
                    languages: bucket.languages,
                });
            }
            None => timeline.push(TimelinePeriod::empty(label)),
        }
        cursor = next_month(cursor);
    }

    timeline
}

/// Map each file to the `YYYY-MM` month of the commit that last touched it.
pub fn file_last_touched(commits: &[CommitRecord]) -> FxHashMap<String, String> {
    let mut latest: FxHashMap<String, NaiveDate> = FxHashMap::default();
    for commit in commits {
        for file in &commit.files {
            let entry = latest.entry(file.clone()).or_insert(commit.date);
            if commit.date > *entry {
                *entry = commit.date;
            }
        }
    }
    latest
        .into_iter()
        .map(|(file, date)| (file, month_label(date)))
        .collect()
}

/// Validate a timeline before a progression build: every label parseable,
/// months strictly ascending. Rejecting here keeps a partially ordered
/// progression from ever being emitted.
pub fn validate(timeline: &[TimelinePeriod]) -> Result<(), ProgressionError> {
    let mut previous: Option<(NaiveDate, &str)> = None;
    for period in timeline {
        let date = parse_month(&period.month)?;
        if let Some((prev_date, prev_label)) = previous {
            if date <= prev_date {
                return Err(ProgressionError::UnorderedTimeline {
                    previous: prev_label.to_string(),
                    current: period.month.clone(),
                });
            }
        }
        previous = Some((date, &period.month));
    }
    Ok(())
}
