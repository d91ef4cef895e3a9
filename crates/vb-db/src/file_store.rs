//! Legacy line-oriented vouch storage.
//!
//! One vouch per line:
//!
//! ```text
//! UserID:<id> | <YYYY-MM-DD HH:MM:SS> | Stars:<n> | Message:"<text>"
//! ```
//!
//! Reading is tolerant: a missing file is an empty dataset and any line
//! that does not parse is skipped without aborting the rest.

use crate::{DbError, Result as DbErrorResult};

use vb_core::Vouch;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use log::debug;
use vb_core::ErrorLocation;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MIN_SEGMENTS: usize = 4;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Parse every stored vouch, oldest first. Malformed lines are skipped
    /// silently; a missing file yields an empty vec.
    pub fn read_all(&self) -> DbErrorResult<Vec<Vouch>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| DbError::FileStore {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::caller(),
        })?;

        let mut vouches = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Some(vouch) => vouches.push(vouch),
                None => debug!("skipping malformed vouch line: {line}"),
            }
        }

        Ok(vouches)
    }

    /// Append one vouch in the legacy line format.
    pub fn append(&self, vouch: &Vouch) -> DbErrorResult<()> {
        let line = format!(
            "UserID:{} | {} | Stars:{} | Message:\"{}\"\n",
            vouch.user_id,
            vouch.created_at.format(TIMESTAMP_FORMAT),
            vouch.stars,
            vouch.message
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| DbError::FileStore {
                path: self.path.clone(),
                source: e,
                location: ErrorLocation::caller(),
            })?;

        file.write_all(line.as_bytes()).map_err(|e| DbError::FileStore {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::caller(),
        })?;

        Ok(())
    }
}

fn parse_line(line: &str) -> Option<Vouch> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < MIN_SEGMENTS {
        return None;
    }

    let user_id = parts[0].replace("UserID:", "").trim().to_string();
    if user_id.is_empty() {
        return None;
    }

    let created_at = NaiveDateTime::parse_from_str(parts[1].trim(), TIMESTAMP_FORMAT)
        .ok()?
        .and_utc();

    let stars: i64 = parts[2].replace("Stars:", "").trim().parse().ok()?;

    let message = parts[3]
        .replace("Message:", "")
        .trim()
        .trim_matches('"')
        .to_string();

    Some(Vouch {
        id: uuid::Uuid::new_v4(),
        user_id,
        stars,
        message,
        created_at,
    })
}
