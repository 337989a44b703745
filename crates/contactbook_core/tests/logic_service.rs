use contactbook_core::config::UserPrefs;
use contactbook_core::repo::{AddressBookStorage, EventBookStorage, UserPrefsStorage};
use contactbook_core::{
    AddressBook, CommandError, EventBook, LogicError, LogicService, Model, RepoError, RepoResult,
    StorageManager,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};

fn storage_in(dir: &Path) -> StorageManager {
    let prefs = UserPrefs::default().resolved_against(dir);
    StorageManager::from_prefs(&prefs, dir.join("preferences.json"))
}

fn empty_service(dir: &Path) -> LogicService<StorageManager> {
    LogicService::new(
        Model::new(AddressBook::new(), EventBook::new()),
        storage_in(dir),
    )
}

#[test]
fn first_start_loads_sample_data_without_writing_files() {
    let dir = tempfile::tempdir().unwrap();
    let service = LogicService::load(storage_in(dir.path()));

    assert!(!service.model().address_book().is_empty());
    assert!(!service.model().event_book().is_empty());
    assert!(!dir.path().join("data/addressbook.json").exists());
}

#[test]
fn mutations_persist_and_reload_in_order() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut service = empty_service(dir.path());
        service
            .execute("add n/Alex Yeoh p/87438807 e/alex@example.com c/PARTICIPANT r/Vegan")
            .unwrap();
        service
            .execute("add n/Roy B p/92624417 e/roy@example.com c/sponsor")
            .unwrap();
        service.execute("group 1 4").unwrap();
        service
            .execute("addevent n/Final Pitches c/Judging d/2024-03-03")
            .unwrap();
    }

    let reloaded = LogicService::load(storage_in(dir.path()));
    let persons = reloaded.model().address_book().items();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0].name().as_str(), "Alex Yeoh");
    assert_eq!(persons[0].comment().as_str(), "Vegan");
    assert_eq!(persons[0].group_number(), 4);
    assert_eq!(persons[1].group_number(), -1);
    assert_eq!(reloaded.model().event_book().len(), 1);
}

#[test]
fn read_only_commands_do_not_create_data_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = empty_service(dir.path());

    service.execute("list").unwrap();
    service.execute("findevent pitch").unwrap();

    assert!(!dir.path().join("data/addressbook.json").exists());
    assert!(!dir.path().join("data/eventbook.json").exists());
}

#[test]
fn undo_and_redo_are_persisted_too() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = empty_service(dir.path());
    service
        .execute("add n/Alex Yeoh p/87438807 e/alex@example.com c/PARTICIPANT")
        .unwrap();

    let undone = service.execute("undo").unwrap();
    assert!(undone.feedback.starts_with("Changes reverted"));
    let on_disk = LogicService::load(storage_in(dir.path()));
    assert!(on_disk.model().address_book().is_empty());

    service.execute("redo").unwrap();
    let on_disk = LogicService::load(storage_in(dir.path()));
    assert_eq!(on_disk.model().address_book().len(), 1);
}

#[test]
fn clear_then_undo_restores_both_books() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = LogicService::load(storage_in(dir.path()));
    let persons = service.model().address_book().len();
    let events = service.model().event_book().len();

    service.execute("clear").unwrap();
    assert!(service.model().address_book().is_empty());
    assert!(service.model().event_book().is_empty());

    service.execute("undo").unwrap();
    assert_eq!(service.model().address_book().len(), persons);
    assert_eq!(service.model().event_book().len(), events);
}

#[test]
fn rejected_commands_surface_typed_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = empty_service(dir.path());

    let err = service.execute("delete 1").unwrap_err();
    assert!(matches!(
        err,
        LogicError::Command(CommandError::InvalidPersonIndex)
    ));

    let err = service.execute("add n/Al p/12 e/al@example.com c/STAFF").unwrap_err();
    assert!(matches!(err, LogicError::Parse(_)));
    assert!(err.to_string().starts_with("Phone numbers"));

    let err = service.execute("undo").unwrap_err();
    assert_eq!(err.to_string(), "No more commands to undo!");
}

#[test]
fn staff_cannot_be_grouped_through_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = empty_service(dir.path());
    service
        .execute("add n/David Li p/91031282 e/lidavid@example.com c/STAFF")
        .unwrap();

    let err = service.execute("group 1 2").unwrap_err();
    assert!(matches!(err, LogicError::Command(CommandError::Person(_))));
    assert_eq!(service.model().history().len(), 1);
}

#[test]
fn malformed_data_file_starts_with_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("addressbook.json"), "{ not json").unwrap();

    let service = LogicService::load(storage_in(dir.path()));

    assert!(service.model().address_book().is_empty());
    assert!(!service.model().event_book().is_empty());
}

/// Storage that accepts reads and fails event book saves, plus address book
/// saves when `fail_address_book` is set.
struct FlakyStorage {
    path: PathBuf,
    fail_address_book: bool,
    address_book_saves: Cell<usize>,
    failed_saves: Cell<usize>,
}

impl FlakyStorage {
    fn new(fail_address_book: bool) -> Self {
        Self {
            path: PathBuf::from("/read-only/book.json"),
            fail_address_book,
            address_book_saves: Cell::new(0),
            failed_saves: Cell::new(0),
        }
    }

    fn failure(&self) -> RepoError {
        self.failed_saves.set(self.failed_saves.get() + 1);
        RepoError::Io {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

impl AddressBookStorage for FlakyStorage {
    fn address_book_path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> RepoResult<Option<AddressBook>> {
        Ok(Some(AddressBook::new()))
    }

    fn save_address_book(&self, _book: &AddressBook) -> RepoResult<()> {
        if self.fail_address_book {
            return Err(self.failure());
        }
        self.address_book_saves.set(self.address_book_saves.get() + 1);
        Ok(())
    }
}

impl EventBookStorage for FlakyStorage {
    fn event_book_path(&self) -> &Path {
        &self.path
    }

    fn read_event_book(&self) -> RepoResult<Option<EventBook>> {
        Ok(Some(EventBook::new()))
    }

    fn save_event_book(&self, _book: &EventBook) -> RepoResult<()> {
        Err(self.failure())
    }
}

impl UserPrefsStorage for FlakyStorage {
    fn user_prefs_path(&self) -> &Path {
        &self.path
    }

    fn read_user_prefs(&self) -> RepoResult<Option<UserPrefs>> {
        Ok(None)
    }

    fn save_user_prefs(&self, _prefs: &UserPrefs) -> RepoResult<()> {
        Err(self.failure())
    }
}

#[test]
fn save_failure_is_reported_after_the_change_applies() {
    let mut service = LogicService::load(FlakyStorage::new(true));

    let err = service
        .execute("add n/Alex Yeoh p/87438807 e/alex@example.com c/PARTICIPANT")
        .unwrap_err();

    assert!(matches!(err, LogicError::Storage(_)));
    assert!(err.to_string().starts_with("Could not save data to file: "));
    assert_eq!(service.model().address_book().len(), 1);
    assert_eq!(service.storage().failed_saves.get(), 1);
}

#[test]
fn event_book_failure_after_address_book_save_is_reported() {
    let mut service = LogicService::load(FlakyStorage::new(false));

    let err = service
        .execute("add n/Alex Yeoh p/87438807 e/alex@example.com c/PARTICIPANT")
        .unwrap_err();

    assert!(matches!(err, LogicError::Storage(_)));
    assert_eq!(service.storage().address_book_saves.get(), 1);
    assert_eq!(service.storage().failed_saves.get(), 1);
    assert!(service.model().can_undo());

    // The model stays authoritative: a later command retries both files.
    let _ = service.execute("undo");
    assert_eq!(service.storage().address_book_saves.get(), 2);
    assert!(service.model().address_book().is_empty());
}
