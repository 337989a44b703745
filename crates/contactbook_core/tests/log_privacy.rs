use contactbook_core::config::UserPrefs;
use contactbook_core::{LogicService, StorageManager};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::Path;
use std::sync::{Mutex, Once};

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = format!("{} {}", record.level(), record.args());
        CAPTURED.lock().unwrap().push(line);
    }

    fn flush(&self) {}
}

fn install_logger() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn captured_lines() -> Vec<String> {
    CAPTURED.lock().unwrap().clone()
}

fn write_address_book(dir: &Path, content: &str) -> StorageManager {
    let prefs = UserPrefs::default().resolved_against(dir);
    std::fs::create_dir_all(dir.join("data")).unwrap();
    std::fs::write(&prefs.address_book_file_path, content).unwrap();
    StorageManager::from_prefs(&prefs, dir.join("preferences.json"))
}

#[test]
fn rejected_data_files_are_logged_without_record_content() {
    install_logger();
    let dir = tempfile::tempdir().unwrap();

    // Wrong JSON type: serde's own message quotes the value.
    let storage = write_address_book(
        dir.path(),
        r#"{"persons":[{"name":"Alice Pauline","phone":94351253,"email":"alice@example.com","category":"PARTICIPANT"}]}"#,
    );
    let service = LogicService::load(storage);
    assert!(service.model().address_book().is_empty());

    // Well-formed JSON with an illegal field value.
    let storage = write_address_book(
        dir.path(),
        r#"{"persons":[{"name":"R@chel Wong","phone":"87654321","email":"rachel@example.com","category":"STAFF"}]}"#,
    );
    let service = LogicService::load(storage);
    assert!(service.model().address_book().is_empty());

    let lines = captured_lines();
    let fallbacks: Vec<&String> = lines
        .iter()
        .filter(|line| line.contains("event=model_load") && line.contains("status=fallback"))
        .collect();
    assert_eq!(fallbacks.len(), 2, "captured: {lines:?}");
    assert!(fallbacks
        .iter()
        .all(|line| line.starts_with(Level::Warn.as_str())
            && line.contains("error_code=data_loading")));

    for secret in ["94351253", "Alice", "R@chel", "87654321", "rachel@example.com"] {
        assert!(
            lines.iter().all(|line| !line.contains(secret)),
            "`{secret}` found in logs: {lines:?}"
        );
    }
}
