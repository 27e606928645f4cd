//! Research note creation command module

use std::io::{self, Read};
use std::path::Path;

use wikinote::{util, Document, FlowEvent, Session, Settings, VaultStore};

pub fn run(
    vault: &Path,
    selection: Option<String>,
    title: Option<String>,
    json: bool,
) -> wikinote::Result<()> {
    let mut session = Session::new(VaultStore::new(vault), Settings::load(vault)?);

    let mut doc = Document::new("selection", read_selection(selection)?);
    doc.select_all();

    let mut flow = session.create_file(&doc)?;

    // A title override is an edit of the title field; otherwise the first
    // line is checked as typed
    let event = match title {
        Some(title) => FlowEvent::InputChanged(title),
        None => FlowEvent::KeyPressed,
    };
    flow.handle(event, session.store_mut())?;

    let note_path = flow.confirm(session.store_mut())?;
    let display = util::display_path(&note_path);

    if json {
        let output = serde_json::json!({
            "path": display,
            "relative": flow.candidate_path(),
        });
        println!("{}", output);
    } else {
        // Output full path for shell pipeline compatibility
        println!("{}", display);
    }

    Ok(())
}

/// Read the selection from argument or stdin.
/// - Some("-") -> read from stdin
/// - Some(text) -> use the text directly
/// - None -> read from stdin
fn read_selection(selection: Option<String>) -> io::Result<String> {
    match selection {
        Some(arg) if arg == "-" => read_from_stdin(),
        Some(text) => Ok(text),
        None => read_from_stdin(),
    }
}

/// Read all content from stdin, empty if no data
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    match io::stdin().read_to_string(&mut buffer) {
        Ok(_) => Ok(buffer),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(String::new()),
        Err(e) => Err(e),
    }
}
