//! End-to-end pipeline tests over fixture archives.
//!
//! Fixture jars are written with the `zip` crate so both STORED and
//! DEFLATE entries exercise the hand-rolled reader. Record order in
//! the output follows directory listing order and is not guaranteed,
//! so assertions index records by mod id.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use modlister::{Workspace, scan_mods};

fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

struct Run {
    _tmp: TempDir,
    mods_dir: PathBuf,
    workspace_root: PathBuf,
}

impl Run {
    fn setup() -> Self {
        let tmp = TempDir::new().unwrap();
        let mods_dir = tmp.path().join("mods");
        std::fs::create_dir(&mods_dir).unwrap();
        let workspace_root = tmp.path().join("mod_temp_data");
        Self {
            _tmp: tmp,
            mods_dir,
            workspace_root,
        }
    }

    async fn scan(&self) -> Vec<serde_json::Map<String, Value>> {
        let workspace = Workspace::create(&self.workspace_root).await.unwrap();
        let records = scan_mods(&self.mods_dir, &workspace).await.unwrap();
        workspace.write_records(&records).await.unwrap();
        records
    }

    fn written_records(&self) -> Vec<Value> {
        let data = std::fs::read_to_string(self.workspace_root.join("mod_data.json")).unwrap();
        match serde_json::from_str(&data).unwrap() {
            Value::Array(records) => records,
            other => panic!("expected array output, got {other}"),
        }
    }
}

fn find<'a>(
    records: &'a [serde_json::Map<String, Value>],
    id: &str,
) -> &'a serde_json::Map<String, Value> {
    records
        .iter()
        .find(|r| r.get("id").and_then(Value::as_str) == Some(id))
        .unwrap_or_else(|| panic!("no record with id {id}"))
}

#[tokio::test]
async fn enabled_mod_without_icon() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("mod-a.jar"),
        &[("fabric.mod.json", br#"{"id":"mod-a","version":"1.2"}"#)],
    );

    let records = run.scan().await;
    assert_eq!(records.len(), 1);

    let record = find(&records, "mod-a");
    assert_eq!(record["version"], "1.2");
    assert_eq!(record["enabled"], true);
    assert_eq!(record["modloader"], "fabric");
    assert!(!record.contains_key("icon_path"));

    let file_path = Path::new(record["file_path"].as_str().unwrap());
    assert!(file_path.is_absolute());
    assert!(file_path.ends_with("mod-a.jar"));
}

#[tokio::test]
async fn disabled_mod_with_backslash_icon_path() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("mod-b.jar.disabled"),
        &[
            (
                "fabric.mod.json",
                br#"{"id":"mod-b","icon":"assets\\icon.png"}"#,
            ),
            ("assets/icon.png", b"\x89PNG fake image bytes"),
        ],
    );

    let records = run.scan().await;
    let record = find(&records, "mod-b");
    assert_eq!(record["enabled"], false);

    let icon_path = PathBuf::from(record["icon_path"].as_str().unwrap());
    assert!(icon_path.is_absolute());
    assert_eq!(icon_path.file_name().unwrap(), "mod-b.png");
    assert_eq!(
        std::fs::read(&icon_path).unwrap(),
        b"\x89PNG fake image bytes"
    );
}

#[tokio::test]
async fn forward_slash_icon_resolves_the_same() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("mod-c.jar"),
        &[
            ("fabric.mod.json", br#"{"id":"mod-c","icon":"assets/icon.png"}"#),
            ("assets/icon.png", b"icon"),
        ],
    );

    let records = run.scan().await;
    let record = find(&records, "mod-c");
    let icon_path = PathBuf::from(record["icon_path"].as_str().unwrap());
    assert_eq!(icon_path.file_name().unwrap(), "mod-c.png");
}

#[tokio::test]
async fn declared_icon_missing_from_archive() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("mod-d.jar"),
        &[("fabric.mod.json", br#"{"id":"mod-d","icon":"gone.png"}"#)],
    );

    let records = run.scan().await;
    let record = find(&records, "mod-d");
    assert!(!record.contains_key("icon_path"));
}

#[tokio::test]
async fn corrupt_jar_is_skipped() {
    let run = Run::setup();
    std::fs::write(run.mods_dir.join("broken.jar"), b"definitely not a zip").unwrap();
    std::fs::write(run.mods_dir.join("empty.jar"), b"").unwrap();
    write_jar(
        &run.mods_dir.join("good.jar"),
        &[("fabric.mod.json", br#"{"id":"good"}"#)],
    );

    let records = run.scan().await;
    assert_eq!(records.len(), 1);
    find(&records, "good");
}

#[tokio::test]
async fn jar_without_descriptor_is_excluded() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("library.jar"),
        &[("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n")],
    );

    let records = run.scan().await;
    assert!(records.is_empty());
    assert_eq!(run.written_records().len(), 0);
}

#[tokio::test]
async fn descriptor_without_id_is_excluded() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("anonymous.jar"),
        &[("fabric.mod.json", br#"{"name":"who am i"}"#)],
    );
    write_jar(
        &run.mods_dir.join("named.jar"),
        &[("fabric.mod.json", br#"{"id":"named"}"#)],
    );

    let records = run.scan().await;
    assert_eq!(records.len(), 1);
    find(&records, "named");
}

#[tokio::test]
async fn malformed_descriptor_is_excluded() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("garbled.jar"),
        &[("fabric.mod.json", b"{\"id\": ")],
    );

    let records = run.scan().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_suffix_files_are_not_scanned() {
    let run = Run::setup();
    std::fs::write(run.mods_dir.join("notes.txt"), b"hello").unwrap();
    write_jar(
        &run.mods_dir.join("shadowed.zip"),
        &[("fabric.mod.json", br#"{"id":"zip-mod"}"#)],
    );

    let records = run.scan().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn empty_directory_writes_empty_list() {
    let run = Run::setup();
    run.scan().await;
    assert_eq!(run.written_records(), Vec::<Value>::new());
}

#[tokio::test]
async fn descriptor_fields_round_trip_verbatim() {
    let run = Run::setup();
    let descriptor = serde_json::json!({
        "schemaVersion": 1,
        "id": "deep",
        "version": "0.3.1+build.7",
        "authors": [{"name": "someone", "contact": {"homepage": "https://example.com"}}],
        "contact": {"issues": "https://example.com/issues"},
        "depends": {"fabricloader": ">=0.15", "minecraft": "~1.21"},
        "custom": {"anything": [true, null, 3.5, {"k": "v"}]}
    });
    write_jar(
        &run.mods_dir.join("deep.jar"),
        &[("fabric.mod.json", descriptor.to_string().as_bytes())],
    );

    let records = run.scan().await;
    let record = find(&records, "deep");

    for (key, value) in descriptor.as_object().unwrap() {
        assert_eq!(&record[key], value, "field {key} did not round-trip");
    }
}

#[tokio::test]
async fn rescan_overwrites_icons_and_output() {
    let run = Run::setup();
    write_jar(
        &run.mods_dir.join("mod-e.jar"),
        &[
            ("fabric.mod.json", br#"{"id":"mod-e","icon":"icon.png"}"#),
            ("icon.png", b"v1"),
        ],
    );

    let first = run.scan().await;
    let second = run.scan().await;

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0]["unique_id"], second[0]["unique_id"]);

    // Same icon file both times, not a duplicate.
    let icons: Vec<_> = std::fs::read_dir(&run.workspace_root)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".png"))
        .collect();
    assert_eq!(icons, ["mod-e.png"]);

    // The output file holds the second run's record set.
    let written = run.written_records();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0]["unique_id"], second[0]["unique_id"]);
}

#[tokio::test]
async fn scan_fails_on_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let workspace = Workspace::create(tmp.path().join("out")).await.unwrap();

    let missing = tmp.path().join("no-such-dir");
    assert!(scan_mods(&missing, &workspace).await.is_err());
}
