//! Embed toggle command module

use std::path::Path;

use wikinote::{util, Document, Session, Settings, VaultStore};

pub fn run(vault: &Path, file: &str, unembed: bool, json: bool) -> wikinote::Result<()> {
    let mut session = Session::new(VaultStore::new(vault), Settings::load(vault)?);
    session.set_embed_enabled(!unembed);

    let mut doc = Document::open(file)?;
    let embedded = session.embed_enabled();
    let changed = session.toggle_embedding_notes(&mut doc)?;

    // Only touch the file when a line actually changed
    let written = doc.save()?;
    let path = util::display_path(Path::new(file));

    if json {
        let output = serde_json::json!({
            "file": path,
            "embedded": embedded,
            "changed": changed,
            "written": written,
            "embedEnabled": session.embed_enabled(),
        });
        println!("{}", output);
    } else {
        let action = if embedded { "Embedded" } else { "Unembedded" };
        eprintln!("{} {} link(s)", action, changed);
        println!("{}", path);
    }

    Ok(())
}
