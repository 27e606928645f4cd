//! Title validation command module

use std::path::Path;

use wikinote::flow::{evaluate, FlowState};
use wikinote::{candidate_path, is_valid_file_name, NoteStore, VaultStore};

pub fn run(vault: &Path, name: &str, json: bool) -> wikinote::Result<()> {
    let store = VaultStore::new(vault);
    let state = evaluate(name, |path| store.exists(path));
    let path = candidate_path(name);

    if json {
        let output = serde_json::json!({
            "name": name,
            "valid": is_valid_file_name(name.trim()),
            "path": path,
            "exists": state == FlowState::Collision,
            "message": state.banner(),
        });
        println!("{}", output);
        return Ok(());
    }

    match state.banner() {
        Some(message) => println!("{}: {}", path, message),
        None => println!("{}: ok", path),
    }
    Ok(())
}
