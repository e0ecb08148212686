//! Record table loading.
//!
//! Parses the CSV-equivalent input table (`Date, Platform, PostType,
//! AgeGroup, Likes`) into typed [`Record`]s. Records are immutable after
//! load; every downstream pipeline borrows the same slice.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One social-media post observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Post date, lexicographically sortable (e.g. `"3/1"`).
    pub date: String,
    /// Platform name.
    pub platform: String,
    /// Post type (video, image, ...).
    pub post_type: String,
    /// Audience age group.
    pub age_group: String,
    /// Like count.
    pub likes: u32,
}

/// Raw CSV row before the like count is validated.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Platform")]
    platform: String,
    #[serde(rename = "PostType")]
    post_type: String,
    #[serde(rename = "AgeGroup")]
    age_group: String,
    #[serde(rename = "Likes")]
    likes: String,
}

/// Load records from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, the CSV is
/// malformed, or a `Likes` cell is not a non-negative integer.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let reader = csv::Reader::from_path(path)?;
    collect_records(reader)
}

/// Load records from any reader producing CSV text with a header row.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or a `Likes` cell is invalid.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>> {
    let reader = csv::Reader::from_reader(input);
    collect_records(reader)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = row?;
        let likes = raw
            .likes
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidLikes {
                value: raw.likes.clone(),
                row: i + 1,
            })?;
        records.push(Record {
            date: raw.date,
            platform: raw.platform,
            post_type: raw.post_type,
            age_group: raw.age_group,
            likes,
        });
    }
    Ok(records)
}
