use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Which radix sort produced a pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    Integer,
    Alphabetical,
}

/// Snapshot of one distribution pass of a radix sort
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    pub sort: SortKind,
    pub pass: usize,             // 0-based pass number
    pub key: u64,                // place value (integer) or char position from the right (alphabetical)
    pub bucket_sizes: Vec<usize>, // bucket occupancy right after distribution
}

impl Display for PassRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PassRecord {{ sort: {:?}, pass: {}, key: {}, bucket_sizes: {:?} }}",
            self.sort, self.pass, self.key, self.bucket_sizes,
        )
    }
}

/// Ordered record of every pass a sort performed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLog {
    pub(crate) entries: Vec<PassRecord>,
}

impl SortLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record a pass
    pub(crate) fn log(&mut self, sort: SortKind, key: u64, bucket_sizes: Vec<usize>) {
        // --- Negative-space assertion: a log only ever describes one sort ---
        if let Some(first) = self.entries.first() {
            debug_assert_eq!(first.sort, sort, "A sort log must not mix sort kinds");
        }

        let before = self.entries.len();
        self.entries.push(PassRecord {
            sort,
            pass: before,
            key,
            bucket_sizes,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        debug_assert_eq!(self.entries.len(), before + 1, "Log must grow by exactly one entry");
    }

    pub fn entries(&self) -> &[PassRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write each pass as one JSON object per line.
pub fn write_ndjson<W: Write>(log: &SortLog, mut writer: W) -> io::Result<()> {
    for entry in &log.entries {
        serde_json::to_writer(&mut writer, entry)?;
        writeln!(writer)?;
    }
    writer.flush()
}
