use serde_json::Value;

/// Commandes acceptées par le serveur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step,
    State,
    Solve,
}

pub fn parse_json(msg: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(msg)
}

/// Reconnaît `"Step"` comme `{"Step": ...}` (idem pour `State` et `Solve`).
pub fn parse_command(json: &Value) -> Option<Command> {
    let name = match json {
        Value::String(s) => s.as_str(),
        Value::Object(map) if map.len() == 1 => map.keys().next()?.as_str(),
        _ => return None,
    };
    match name {
        "Step" => Some(Command::Step),
        "State" => Some(Command::State),
        "Solve" => Some(Command::Solve),
        _ => None,
    }
}
