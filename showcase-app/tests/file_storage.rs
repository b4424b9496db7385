use showcase_app::application::{sample_ideas, IdeaStore};
use showcase_app::domain::{IdeaSubmission, SocialPlatform, Socials, Theme};
use showcase_app::infrastructure::storage::{FileStorage, KeyValueStore, IDEAS_KEY};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> IdeaStore<FileStorage> {
    let storage = FileStorage::open(dir.path()).expect("should open file storage");
    IdeaStore::initialize(storage)
}

#[test]
fn ideas_survive_a_restart() {
    let dir = TempDir::new().expect("should create temp dir");

    let mut store = open_store(&dir);
    let submission = IdeaSubmission::new("EcoLearn", "Jamie Chen", "Green lessons", "education, tech")
        .with_logo(Some("data:image/png;base64,iVBORw0KGgo=".to_string()))
        .with_socials(
            Socials::default().with(SocialPlatform::X, Some("https://x.com/ecolearn".to_string())),
        );
    let created = store.create(submission).expect("should create idea");
    store.upvote(created.id).expect("should upvote");
    let before = store.list().to_vec();
    drop(store);

    let reopened = open_store(&dir);
    assert_eq!(reopened.list(), before.as_slice());
    assert_eq!(reopened.get_by_id(created.id).map(|i| i.upvotes), Some(1));
}

#[test]
fn missing_files_start_empty_with_dark_theme() {
    let dir = TempDir::new().expect("should create temp dir");
    let store = open_store(&dir);

    assert!(store.list().is_empty());
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = TempDir::new().expect("should create temp dir");
    std::fs::write(dir.path().join(format!("{IDEAS_KEY}.json")), "[{\"id\": oops")
        .expect("should write corrupt payload");

    let mut store = open_store(&dir);
    assert!(store.list().is_empty());

    let created = store
        .create(IdeaSubmission::new("Fresh", "Founder", "Starts over", "new"))
        .expect("should create idea");
    assert_eq!(created.id, 1);
}

#[test]
fn seeding_and_theme_are_written_to_disk() {
    let dir = TempDir::new().expect("should create temp dir");

    let mut store = open_store(&dir);
    store.seed_if_empty(sample_ideas()).expect("should seed");
    store.set_theme(Theme::Light).expect("should store theme");

    let storage = FileStorage::open(dir.path()).expect("should reopen storage");
    let payload = storage
        .get(IDEAS_KEY)
        .expect("should read ideas")
        .expect("ideas should be stored");
    assert!(payload.contains("\"startupName\":\"MealMatch\""));

    let reopened = IdeaStore::initialize(storage);
    assert_eq!(reopened.list().len(), 3);
    assert_eq!(reopened.theme(), Theme::Light);
}

#[test]
fn interrupted_write_keeps_previous_collection() {
    let dir = TempDir::new().expect("should create temp dir");

    let mut store = open_store(&dir);
    store
        .create(IdeaSubmission::new("Survivor", "Founder", "Kept on disk", "resilience"))
        .expect("should create idea");
    drop(store);

    // A crash between writing the temp file and renaming it leaves a partial temp file behind.
    let tmp = dir.path().join(format!("{IDEAS_KEY}.json.tmp"));
    std::fs::write(&tmp, "[{\"id\": 2, \"startupN").expect("should write partial temp file");

    let mut store = open_store(&dir);
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].startup_name, "Survivor");

    store
        .create(IdeaSubmission::new("Second", "Founder", "After restart", "more"))
        .expect("should create idea");
    assert!(!tmp.exists());
    assert_eq!(open_store(&dir).list().len(), 2);
}

#[test]
fn set_replaces_value_without_leaving_temp_files() {
    let dir = TempDir::new().expect("should create temp dir");
    let mut storage = FileStorage::open(dir.path()).expect("should open file storage");

    storage.set("darkMode", "enabled").expect("should write flag");
    storage.set("darkMode", "disabled").expect("should overwrite flag");

    assert_eq!(
        storage.get("darkMode").expect("should read flag").as_deref(),
        Some("disabled")
    );
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("should list data dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
