//! Profile controller
//!
//! Owns a [`ProfileView`] and runs the effects it requests against the
//! collaborator ports. Record requests run as spawned tasks whose results come
//! back through the controller's message channel, so the view stays
//! interactive while they are pending. Nothing cancels a request once issued.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use vitae_core::avatar::{AvatarCompletion, ImageEditor};
use vitae_core::config::ViewConfig;
use vitae_core::session::SessionProvider;
use vitae_core::shell::{Navigator, Notifier};
use vitae_core::user::UserRecordService;

use super::effects::Effect;
use super::messages::ProfileMessage;
use super::render::ProfileScreen;
use super::state::ProfileState;
use super::update::ProfileView;

/// Collaborators the profile view depends on.
#[derive(Clone)]
pub struct ProfileDependencies {
    pub session: Arc<dyn SessionProvider>,
    pub records: Arc<dyn UserRecordService>,
    pub image_editor: Arc<dyn ImageEditor>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

/// Runs a [`ProfileView`] against its collaborators.
///
/// Must be used from within a tokio runtime.
pub struct ProfileController {
    view: ProfileView,
    deps: ProfileDependencies,
    sender: mpsc::UnboundedSender<ProfileMessage>,
    receiver: mpsc::UnboundedReceiver<ProfileMessage>,
    session_watch: Option<JoinHandle<()>>,
}

impl ProfileController {
    pub fn new(deps: ProfileDependencies, settings: ViewConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            view: ProfileView::new(settings),
            deps,
            sender,
            receiver,
            session_watch: None,
        }
    }

    /// Binds the view to the session provider.
    ///
    /// The current status is handled immediately; later changes arrive as
    /// messages.
    pub fn mount(&mut self) {
        if self.session_watch.is_some() {
            return;
        }

        let mut receiver = self.deps.session.subscribe();
        let current = *receiver.borrow_and_update();
        self.handle(ProfileMessage::SessionChanged(current));

        let sender = self.sender.clone();
        self.session_watch = Some(tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let status = *receiver.borrow_and_update();
                if sender.send(ProfileMessage::SessionChanged(status)).is_err() {
                    break;
                }
            }
        }));
    }

    /// Applies a message and runs the resulting effects.
    pub fn handle(&mut self, message: ProfileMessage) {
        for effect in self.view.update(message) {
            self.execute(effect);
        }
    }

    /// Waits for the next message from a collaborator and handles it.
    ///
    /// Returns the handled message's name, or `None` once every sender is
    /// gone.
    pub async fn step(&mut self) -> Option<&'static str> {
        let message = self.receiver.recv().await?;
        let name = message.name();
        self.handle(message);
        Some(name)
    }

    /// Handles every message already queued, without waiting.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.handle(message);
            handled += 1;
        }
        handled
    }

    pub fn state(&self) -> &ProfileState {
        self.view.state()
    }

    pub fn render(&self) -> ProfileScreen {
        self.view.render()
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::FetchRecord(identity) => {
                tracing::debug!("[ProfileController] Fetching record for user {}", identity);
                let records = self.deps.records.clone();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = records.fetch_record(identity).await;
                    let _ = sender.send(ProfileMessage::RecordLoaded { identity, result });
                });
            }
            Effect::UpdateRecord { identity, draft } => {
                tracing::debug!("[ProfileController] Saving record for user {}", identity);
                let records = self.deps.records.clone();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = records.update_record(identity, &draft).await;
                    let _ = sender.send(ProfileMessage::SaveFinished { draft, result });
                });
            }
            Effect::Redirect(route) => {
                tracing::info!("[ProfileController] Redirecting to {}", route);
                self.deps.navigator.redirect(&route);
            }
            Effect::Alert(message) => self.deps.notifier.alert(&message),
            Effect::OpenImageEditor(identity) => {
                let sender = self.sender.clone();
                let completion = AvatarCompletion::new(move |image| {
                    let _ = sender.send(ProfileMessage::ImageEdited(image));
                });
                self.deps.image_editor.open(identity, completion);
            }
        }
    }
}

impl Drop for ProfileController {
    fn drop(&mut self) {
        if let Some(handle) = self.session_watch.take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for ProfileController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileController")
            .field("state", &self.view.state().name())
            .field("mounted", &self.session_watch.is_some())
            .finish()
    }
}
