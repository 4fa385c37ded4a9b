//! Journal file discovery.
//!
//! Filenames follow `Journal.<session-timestamp>.<sequence>.log`, where the
//! session timestamp identifies one continuous run of the game and the
//! zero-padded sequence number counts rotations within it. Only the files of
//! the newest session are considered active; older sessions are never read.

use std::path::Path;

use crate::error::JournalError;

/// Parse a journal filename into (session timestamp, sequence number).
///
/// Returns `None` for anything that is not exactly
/// `Journal.<digits>.<digits>.log`.
pub fn parse_journal_filename(name: &str) -> Option<(u64, u32)> {
    let rest = name.strip_prefix("Journal.")?;
    let rest = rest.strip_suffix(".log")?;
    let (session, sequence) = rest.split_once('.')?;
    if session.is_empty() || sequence.is_empty() {
        return None;
    }
    if !session.bytes().all(|b| b.is_ascii_digit()) || !sequence.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((session.parse().ok()?, sequence.parse().ok()?))
}

/// List the active journal files in `dir`, oldest first.
///
/// The active set is every file belonging to the maximum session timestamp
/// found. Ordering is lexicographic on the filename, which is chronological
/// because the sequence number is zero-padded; an mtime sort would misorder
/// rotations that share a modification time under fast writes.
///
/// A missing directory or one with no matching files yields an empty vec.
pub fn locate_active_files(dir: &Path) -> Result<Vec<String>, JournalError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(JournalError::io(dir, e)),
    };

    let mut journals: Vec<(String, u64)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| JournalError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some((session, _)) = parse_journal_filename(name) {
            journals.push((name.to_string(), session));
        }
    }

    let Some(max_session) = journals.iter().map(|(_, session)| *session).max() else {
        return Ok(Vec::new());
    };

    let mut active: Vec<String> = journals
        .into_iter()
        .filter(|(_, session)| *session == max_session)
        .map(|(name, _)| name)
        .collect();
    active.sort();
    Ok(active)
}
