use super::atomic::write_atomic;
use super::entry::DropEntry;
use crate::error::QueueError;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const ENTRY_EXTENSION: &str = "json";
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Append-only outbox of [`DropEntry`] records.
///
/// Writers only ever `enqueue`. `drain` and `ack` belong to the consumer on the
/// other side of the process boundary.
pub trait DropQueue: Send + Sync {
    /// Durably store `entry`; returns the name it was stored under.
    fn enqueue(&self, entry: &DropEntry) -> Result<String, QueueError>;

    /// Completed entries in approximate creation order.
    fn drain(&self) -> Result<Vec<DrainedEntry>, QueueError>;

    /// Remove a consumed entry.
    fn ack(&self, name: &str) -> Result<(), QueueError>;
}

/// An entry read back by a consumer. Undecodable files are surfaced, not skipped.
#[derive(Debug)]
pub struct DrainedEntry {
    pub name: String,
    pub entry: Result<DropEntry, serde_json::Error>,
}

/// One file per entry in a single directory.
///
/// Names are `{unix-millis}-{6 base36 chars}.json`. Two writers landing on the
/// same millisecond and suffix would overwrite each other; that residual risk
/// is accepted rather than re-checked.
#[derive(Debug, Clone)]
pub struct DirectoryQueue {
    dir: PathBuf,
}

impl DirectoryQueue {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

pub(crate) fn entry_filename(unix_millis: u128, rng: &mut impl Rng) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())]))
        .collect();
    format!("{unix_millis}-{suffix}.{ENTRY_EXTENSION}")
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}

impl DropQueue for DirectoryQueue {
    fn enqueue(&self, entry: &DropEntry) -> Result<String, QueueError> {
        let filename = entry_filename(unix_millis(), &mut rand::rng());
        let path = self.dir.join(&filename);
        let payload = serde_json::to_vec_pretty(entry)?;

        write_atomic(&path, &payload).map_err(|source| QueueError::Write {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(
            kind = entry.request.kind(),
            "queued {filename} in {}",
            self.dir.display()
        );
        Ok(filename)
    }

    fn drain(&self) -> Result<Vec<DrainedEntry>, QueueError> {
        let read_error = |source| QueueError::Read {
            path: self.dir.display().to_string(),
            source,
        };

        let listing = match std::fs::read_dir(&self.dir) {
            Ok(listing) => listing,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(read_error(error)),
        };

        let mut names = Vec::new();
        for dir_entry in listing {
            let path = dir_entry.map_err(read_error)?.path();
            // Staging files end in `.tmp` and are never surfaced.
            if path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort_unstable();

        let mut drained = Vec::with_capacity(names.len());
        for name in names {
            let path = self.dir.join(&name);
            let raw = match std::fs::read(&path) {
                Ok(raw) => raw,
                // Acked by a concurrent consumer between listing and reading.
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(QueueError::Read {
                        path: path.display().to_string(),
                        source,
                    });
                }
            };
            drained.push(DrainedEntry {
                entry: serde_json::from_slice(&raw),
                name,
            });
        }
        Ok(drained)
    }

    fn ack(&self, name: &str) -> Result<(), QueueError> {
        let path = self.dir.join(name);
        std::fs::remove_file(&path).map_err(|source| QueueError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}
