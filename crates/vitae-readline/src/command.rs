use std::str::FromStr;

use vitae_core::user::{DraftField, Identity};

/// Every command word, used for completion and hints.
pub const COMMANDS: &[&str] = &[
    "login", "logout", "show", "edit", "set", "save", "cancel", "photo", "close", "help", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(Identity),
    Logout,
    Show,
    Edit,
    Set(DraftField, String),
    Save,
    Cancel,
    /// Opens the image editor; with a path, also submits that file.
    Photo(Option<String>),
    Close,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "login" => rest
                .parse::<i64>()
                .map(|id| Command::Login(Identity(id)))
                .map_err(|_| "usage: login <id>".to_string()),
            "logout" => Ok(Command::Logout),
            "show" => Ok(Command::Show),
            "edit" => Ok(Command::Edit),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = field
                    .parse::<DraftField>()
                    .map_err(|_| format!("unknown field '{}'", field))?;
                Ok(Command::Set(field, value.trim().to_string()))
            }
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "photo" => Ok(Command::Photo(
                Some(rest.to_string()).filter(|path| !path.is_empty()),
            )),
            "close" => Ok(Command::Close),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

pub const HELP: &str = "\
login <id>            sign in as the given user
logout                sign out
show                  print the profile
edit                  enter edit mode
set <field> <value>   change a form field (name, email, title, institution, background, bio)
save                  submit the form
cancel                leave edit mode without saving
photo [path]          open the photo editor, optionally uploading a file
close                 close the photo editor
quit                  exit";
