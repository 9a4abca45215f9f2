use crate::model::Slot;
use crate::offset::{format_offset, parse_offset};
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de créneaux depuis CSV: header `start,duration` (`hh:mm[:ss]`).
/// Les colonnes supplémentaires sont ignorées.
pub fn import_slots_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Slot>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let start = rec.get(0).context("missing start")?;
        let duration = rec.get(1).context("missing duration")?;
        let slot = parse_offset(start)
            .and_then(|start| Slot::new(start, parse_offset(duration)?))
            .with_context(|| format!("invalid slot on row {}", line + 1))?;
        out.push(slot);
    }
    Ok(out)
}

/// Export CSV: header `start,duration,start_min,duration_min`.
pub fn export_slots_csv<P: AsRef<Path>>(path: P, slots: &[Slot]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["start", "duration", "start_min", "duration_min"])?;
    let mut start_min = itoa::Buffer::new();
    let mut duration_min = itoa::Buffer::new();
    for s in slots {
        let start = format_offset(s.start());
        let duration = format_offset(s.duration());
        w.write_record([
            start.as_str(),
            duration.as_str(),
            start_min.format(s.start().num_minutes()),
            duration_min.format(s.duration().num_minutes()),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Import JSON: tableau de `{ "start": "hh:mm:ss", "duration": "hh:mm:ss" }`.
pub fn import_slots_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Slot>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let slots = serde_json::from_slice(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(slots)
}

/// Export JSON (jolie mise en forme)
pub fn export_slots_json<P: AsRef<Path>>(path: P, slots: &[Slot]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(slots)?;
    fs::write(path, s).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
