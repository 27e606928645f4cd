use std::path::Path;

use wikinote::{util, Settings};

pub fn run(vault: &Path, value: Option<String>, json: bool) -> wikinote::Result<()> {
    let mut settings = Settings::load(vault)?;

    if let Some(value) = value {
        settings.my_setting = value;
        settings.save(vault)?;
        eprintln!("Saved {}", util::display_path(&Settings::path_for(vault)));
    }

    if json {
        println!("{}", serde_json::to_string(&settings)?);
    } else {
        println!("{}", settings.my_setting);
    }
    Ok(())
}
