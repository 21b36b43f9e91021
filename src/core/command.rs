use crate::utils::error::{Result, WaitlistError};

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddFront,
    AddEnd,
    Remove,
    Print,
    Exit,
}

impl Command {
    /// Menu order; position + 1 is the number the user types.
    pub const ALL: [Command; 5] = [
        Command::AddFront,
        Command::AddEnd,
        Command::Remove,
        Command::Print,
        Command::Exit,
    ];

    pub fn parse(choice: &str) -> Result<Self> {
        match choice {
            "1" => Ok(Command::AddFront),
            "2" => Ok(Command::AddEnd),
            "3" => Ok(Command::Remove),
            "4" => Ok(Command::Print),
            "5" => Ok(Command::Exit),
            other => Err(WaitlistError::InvalidOption {
                choice: other.to_string(),
            }),
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Command::AddFront => "Add customer to front",
            Command::AddEnd => "Add customer to end",
            Command::Remove => "Remove customer by name",
            Command::Print => "Print waitlist",
            Command::Exit => "Exit",
        }
    }
}
