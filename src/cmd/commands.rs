use wikinote::CommandId;

pub fn run(json: bool) -> wikinote::Result<()> {
    if json {
        let commands: Vec<_> = CommandId::ALL
            .iter()
            .map(|cmd| serde_json::json!({ "id": cmd.id(), "name": cmd.name() }))
            .collect();
        println!("{}", serde_json::Value::from(commands));
        return Ok(());
    }

    for cmd in CommandId::ALL {
        println!("{:<24} {}", cmd.id(), cmd.name());
    }
    Ok(())
}
