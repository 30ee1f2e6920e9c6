mod command;
mod display;
mod shell;

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::time::timeout;

use vitae_application::{ProfileController, ProfileDependencies, ProfileMessage, ProfileState};
use vitae_core::config::ViewConfig;
use vitae_core::session::SessionStatus;
use vitae_core::user::{Identity, UserRecordService};
use vitae_infrastructure::image_editor::expand_path;
use vitae_infrastructure::logging::init_tracing;
use vitae_infrastructure::{
    ConfigService, FileImageEditor, HttpUserRecordService, WatchSessionProvider,
};

use crate::command::{COMMANDS, Command, HELP};
use crate::display::print_screen;
use crate::shell::{TerminalNavigator, TerminalNotifier};

/// How long to wait for a backend reply when no timeout is configured.
const DEFAULT_REQUEST_WAIT: Duration = Duration::from_secs(30);
/// How long to wait for follow-up messages once nothing is in flight.
const QUIET_PERIOD: Duration = Duration::from_millis(100);

/// CLI helper for rustyline that completes command words.
#[derive(Clone)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((word, rest)) if COMMANDS.contains(&word) => {
                Owned(format!("{} {}", word.bright_cyan(), rest))
            }
            None if COMMANDS.contains(&line) => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }

        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// Everything the REPL keeps between commands.
struct App {
    deps: ProfileDependencies,
    session: Arc<WatchSessionProvider>,
    image_editor: Arc<FileImageEditor>,
    navigator: Arc<TerminalNavigator>,
    settings: ViewConfig,
    request_wait: Duration,
    /// `None` while the login page is showing.
    profile: Option<ProfileController>,
}

impl App {
    /// Mounts a fresh profile view and waits for it to load.
    async fn open_profile(&mut self) {
        let mut controller = ProfileController::new(self.deps.clone(), self.settings.clone());
        controller.mount();
        self.profile = Some(controller);
        self.settle(self.request_wait).await;
    }

    /// Handles queued messages until the controller goes quiet, then follows
    /// any redirect it asked for.
    async fn settle(&mut self, first_wait: Duration) {
        if let Some(controller) = self.profile.as_mut() {
            let mut wait = first_wait;
            while let Ok(Some(name)) = timeout(wait, controller.step()).await {
                tracing::debug!("[REPL] handled {}", name);
                wait = if matches!(controller.state(), ProfileState::Loading { .. }) {
                    self.request_wait
                } else {
                    QUIET_PERIOD
                };
            }
        }

        if let Some(route) = self.navigator.take_route() {
            println!("{}", format!("-> {}", route).bright_black());
            if route == self.settings.login_route {
                self.image_editor.dismiss();
                self.profile = None;
                println!("{}", "Faça login com 'login <id>'.".bright_black());
            }
        }
    }

    fn show(&self) {
        if let Some(controller) = &self.profile {
            print_screen(&controller.render());
        }
    }

    /// Runs one command. Returns `false` when the REPL should exit.
    async fn run(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Help => println!("{}", HELP.bright_black()),
            Command::Login(identity) => self.login(identity).await,
            Command::Logout => {
                self.session.set_unauthenticated();
                self.settle(QUIET_PERIOD).await;
            }
            other => {
                if self.profile.is_none() {
                    println!("{}", "Not signed in. Use 'login <id>'.".red());
                } else {
                    self.profile_command(other).await;
                }
            }
        }
        true
    }

    async fn login(&mut self, identity: Identity) {
        self.session.set_authenticated(identity);
        if self.profile.is_none() {
            self.open_profile().await;
        } else {
            self.settle(self.request_wait).await;
        }
        self.show();
    }

    async fn profile_command(&mut self, command: Command) {
        let Some(controller) = self.profile.as_mut() else {
            return;
        };

        match command {
            Command::Show => {}
            Command::Edit => controller.handle(ProfileMessage::StartEdit),
            Command::Set(field, value) => {
                if !controller.state().is_editing() {
                    println!("{}", "Not editing. Use 'edit' first.".red());
                    return;
                }
                controller.handle(ProfileMessage::FieldChanged(field, value));
            }
            Command::Save => {
                controller.handle(ProfileMessage::Save);
                self.settle(self.request_wait).await;
            }
            Command::Cancel => controller.handle(ProfileMessage::Cancel),
            Command::Photo(path) => {
                if !controller.state().is_image_editor_open() {
                    controller.handle(ProfileMessage::OpenImageEditor);
                }
                if let Some(path) = path {
                    match self.image_editor.submit(expand_path(&path)).await {
                        Ok(_) => self.settle(QUIET_PERIOD).await,
                        Err(e) => {
                            eprintln!("{}", format!("Upload failed: {}", e).red());
                            return;
                        }
                    }
                }
            }
            Command::Close => {
                self.image_editor.dismiss();
                controller.handle(ProfileMessage::DismissImageEditor);
            }
            Command::Login(_) | Command::Logout | Command::Help | Command::Quit => {}
        }
        self.show();
    }
}

fn initial_status() -> SessionStatus {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .map(|id| SessionStatus::Authenticated(Identity(id)))
        .unwrap_or(SessionStatus::Unauthenticated)
}

/// Terminal host for the profile view.
///
/// Reads the config file, wires the HTTP record service and the file-based
/// image editor into a [`ProfileController`], and drives it from a rustyline
/// prompt. An optional first argument signs in as that user id.
#[tokio::main]
async fn main() -> Result<()> {
    // ===== Backend Initialization =====
    let config = ConfigService::new().get_config()?;
    init_tracing(&config.logging)?;

    let records: Arc<dyn UserRecordService> =
        Arc::new(HttpUserRecordService::from_config(&config.service));
    let session = Arc::new(WatchSessionProvider::with_status(initial_status()));
    let image_editor = Arc::new(FileImageEditor::new(records.clone()));
    let navigator = Arc::new(TerminalNavigator::default());

    let deps = ProfileDependencies {
        session: session.clone(),
        records,
        image_editor: image_editor.clone(),
        navigator: navigator.clone(),
        notifier: Arc::new(TerminalNotifier),
    };

    let mut app = App {
        deps,
        session,
        image_editor,
        navigator,
        settings: config.view.clone(),
        request_wait: config.service.timeout().unwrap_or(DEFAULT_REQUEST_WAIT),
        profile: None,
    };

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== Vitae ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Backend: {}", config.service.record_url()).bright_black()
    );
    println!("{}", "Type 'help' for commands, or 'quit' to exit.".bright_black());
    println!();

    app.open_profile().await;
    app.show();

    // ===== Main REPL Loop =====
    loop {
        let prompt = if app.profile.is_some() { "perfil> " } else { "login> " };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed.parse::<Command>() {
                    Ok(command) => {
                        if !app.run(command).await {
                            println!("{}", "Goodbye!".bright_green());
                            break;
                        }
                    }
                    Err(message) => println!("{}", message.red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
