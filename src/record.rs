//! Building the per-mod output record.

use std::path::Path;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::descriptor::Descriptor;

/// Every record is stamped with the descriptor family it came from.
pub const MODLOADER: &str = "fabric";

/// One mod's entry in the aggregate output.
///
/// The field order is fixed for readability: run-scoped identity and
/// registry placeholders first, then the descriptor's own fields
/// verbatim, then what was derived from the file on disk.
pub type ModRecord = Map<String, Value>;

/// Assemble the output record for one archive.
///
/// `file_path` must already be absolute; `icon_path` is omitted from
/// the record when no icon was extracted. The registry placeholder
/// fields stay empty until an external lookup fills them in.
pub fn build_record(
    descriptor: &Descriptor,
    file_path: &Path,
    enabled: bool,
    icon_path: Option<&Path>,
) -> ModRecord {
    let mut record = ModRecord::new();

    // unique_id is stable for this run only; a fresh scan regenerates it.
    record.insert(
        "unique_id".into(),
        Value::String(Uuid::new_v4().to_string()),
    );
    record.insert("curseforge_project_id".into(), Value::String(String::new()));
    record.insert("curseforge_slug".into(), Value::String(String::new()));
    record.insert("modrinth_project_id".into(), Value::String(String::new()));

    for (key, value) in descriptor.fields() {
        record.insert(key.clone(), value.clone());
    }

    record.insert("enabled".into(), Value::Bool(enabled));
    record.insert(
        "file_path".into(),
        Value::String(file_path.display().to_string()),
    );
    if let Some(icon) = icon_path {
        record.insert(
            "icon_path".into(),
            Value::String(icon.display().to_string()),
        );
    }
    record.insert("modloader".into(), Value::String(MODLOADER.into()));

    record
}
