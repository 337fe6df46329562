#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init,
    Reset,
    Board,
    /// Diagram rows and side to move
    Position(String),
    /// Optional origin square text
    Moves(Option<String>),
    Move(String),
    /// Optional depth text
    Ai(Option<String>),
    Undo,
    Status,
    SetOption { name: String, value: Option<String> },
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let rest = || parts[1..].join(" ");
    let arg = || parts.get(1).map(|v| (*v).to_string());

    let cmd = match parts[0] {
        "init" => Command::Init,
        "reset" | "new" => Command::Reset,
        "board" | "d" => Command::Board,
        "position" => Command::Position(rest()),
        "moves" => Command::Moves(arg()),
        "move" => Command::Move(rest()),
        "ai" | "go" => Command::Ai(arg()),
        "undo" => Command::Undo,
        "status" => Command::Status,
        "setoption" => parse_setoption(&parts[1..]),
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// `setoption name <words...> [value <words...>]`
fn parse_setoption(parts: &[&str]) -> Command {
    let name_start = usize::from(parts.first() == Some(&"name"));
    let value_at = parts.iter().position(|p| *p == "value");
    let name_end = value_at.unwrap_or(parts.len());
    let name = parts[name_start..name_end.max(name_start)].join(" ");
    let value = value_at.map(|i| parts[i + 1..].join(" ")).filter(|v| !v.is_empty());
    Command::SetOption { name, value }
}
