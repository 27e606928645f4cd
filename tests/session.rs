//! End-to-end session tests on a temporary vault

use std::fs;

use tempfile::TempDir;
use wikinote::{Document, Editor, Error, FlowEvent, FlowState, Session, Settings, VaultStore};

fn vault() -> (TempDir, Session<VaultStore>) {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load(temp.path()).unwrap();
    let session = Session::new(VaultStore::new(temp.path()), settings);
    (temp, session)
}

#[test]
fn toggle_rewrites_file_and_alternates() {
    let (temp, mut session) = vault();
    let path = temp.path().join("todo.md");
    let original = "# Reading\n- [ ] [[Alpha]]\n- [x] [[Beta]] finished\n- plain text\n";
    fs::write(&path, original).unwrap();

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(session.toggle_embedding_notes(&mut doc).unwrap(), 2);
    assert!(doc.save().unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Reading\n- [ ] ![[Alpha]]\n- [x] ![[Beta]] finished\n- plain text\n"
    );

    let mut doc = Document::open(&path).unwrap();
    session.toggle_embedding_notes(&mut doc).unwrap();
    doc.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert!(session.embed_enabled());
}

#[test]
fn toggle_without_links_leaves_file_alone() {
    let (temp, mut session) = vault();
    let path = temp.path().join("plain.md");
    fs::write(&path, "nothing to see\n").unwrap();

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(session.toggle_embedding_notes(&mut doc).unwrap(), 0);
    assert!(!doc.save().unwrap());
    // The flag still flips
    assert!(!session.embed_enabled());
}

#[test]
fn create_note_from_selection() {
    let (temp, mut session) = vault();
    let mut doc = Document::new("inbox.md", "My Note\nBody text");
    doc.select_all();

    let mut flow = session.create_file(&doc).unwrap();
    assert_eq!(flow.handle(FlowEvent::KeyPressed, session.store_mut()).unwrap(), FlowState::Ready);
    let path = flow.confirm(session.store_mut()).unwrap();

    assert_eq!(path, temp.path().join("Research").join("My Note.md"));
    assert_eq!(fs::read_to_string(path).unwrap(), "My Note\nBody text");
}

#[test]
fn second_note_with_same_title_collides() {
    let (temp, mut session) = vault();
    let mut doc = Document::new("inbox.md", "Dup\nfirst");
    doc.select_all();
    session.create_file(&doc).unwrap().confirm(session.store_mut()).unwrap();

    doc.set_value("Dup\nsecond".to_string());
    doc.select_all();
    let mut flow = session.create_file(&doc).unwrap();
    assert_eq!(flow.handle(FlowEvent::KeyPressed, session.store_mut()).unwrap(), FlowState::Collision);
    assert!(matches!(flow.confirm(session.store_mut()), Err(Error::Refused("File already exists."))));

    let content = fs::read_to_string(temp.path().join("Research/Dup.md")).unwrap();
    assert_eq!(content, "Dup\nfirst");
}

#[test]
fn invalid_title_creates_nothing() {
    let (temp, mut session) = vault();
    let mut doc = Document::new("inbox.md", "Bad/Name\nbody");
    doc.select_all();

    let mut flow = session.create_file(&doc).unwrap();
    assert_eq!(flow.state(), FlowState::Invalid);
    assert_eq!(flow.handle(FlowEvent::Submit, session.store_mut()).unwrap(), FlowState::Invalid);
    assert!(!temp.path().join("Research").exists());
}

#[test]
fn settings_persist_between_sessions() {
    let (temp, mut session) = vault();
    assert_eq!(session.settings().my_setting, "default");

    session.settings_mut().my_setting = "changed".to_string();
    session.settings().save(temp.path()).unwrap();

    let reloaded = Settings::load(temp.path()).unwrap();
    assert_eq!(reloaded.my_setting, "changed");
}
