use rand::Rng;
use std::io::Write;
use tracing::{debug, info};

use crate::core::prelude::*;
use crate::domain::prelude::*;

/// Log progress every this many records.
const PROGRESS_INTERVAL: u64 = 10_000;

/// An endless stream of records drawn from `generator`.
///
/// Callers bound it with `take`; records are produced lazily, one at a time.
///
pub fn stream_records<R: Rng>(
    generator: &mut RecordGenerator<R>,
) -> impl Iterator<Item = Record> + '_ {
    std::iter::repeat_with(move || generator.generate_record())
}

/// Writes `record` as one compact JSON line.
///
pub fn serialize_and_emit<W: Write>(record: &Record, out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Writes `count` records, one JSON object per line, followed by a single
/// blank line, then flushes `out`.
///
/// # Arguments
///
/// * `generator` - The generator to draw records from.
/// * `count` - How many records to emit.
/// * `out` - Destination, usually a locked and buffered stdout.
///
pub fn write_batch<R: Rng, W: Write>(
    generator: &mut RecordGenerator<R>,
    count: u64,
    out: &mut W,
) -> Result<()> {
    info!(count, "generating records");

    let limit = usize::try_from(count).unwrap_or(usize::MAX);
    let mut written = 0u64;
    for record in stream_records(generator).take(limit) {
        serialize_and_emit(&record, out)?;
        written += 1;
        if written % PROGRESS_INTERVAL == 0 {
            debug!(written, "records emitted");
        }
    }

    out.write_all(b"\n")?;
    out.flush()?;

    info!(written, "batch complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn generator() -> RecordGenerator {
        RecordGenerator::new(StdRng::seed_from_u64(11), &Settings::default()).unwrap()
    }

    #[test]
    fn test_emit_writes_one_line() {
        let record = generator().generate_record();
        let mut out = Vec::new();
        serialize_and_emit(&record, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);

        let parsed: Record = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_batch_of_three() {
        let mut out = Vec::new();
        write_batch(&mut generator(), 3, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.split('\n').collect();
        // three records, the blank line, and the empty tail after its newline
        assert_eq!(lines.len(), 5);
        for line in &lines[..3] {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_empty_batch_is_a_blank_line() {
        let mut out = Vec::new();
        write_batch(&mut generator(), 0, &mut out).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_stream_is_lazy_and_unbounded() {
        let mut generator = generator();
        assert_eq!(stream_records(&mut generator).take(25).count(), 25);
    }
}
