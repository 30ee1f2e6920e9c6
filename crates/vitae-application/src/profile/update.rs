//! Profile view update handlers
//!
//! Handles all ProfileMessage variants, updates state accordingly and returns
//! the effects the controller must carry out.

use vitae_core::VitaeError;
use vitae_core::avatar::EncodedImage;
use vitae_core::config::ViewConfig;
use vitae_core::session::SessionStatus;
use vitae_core::user::{DraftField, EditDraft, Identity, UserRecord};

use super::effects::Effect;
use super::messages::ProfileMessage;
use super::state::{LoadedProfile, ProfileState};

/// The profile page: state plus presentation settings.
#[derive(Debug, Clone)]
pub struct ProfileView {
    state: ProfileState,
    settings: ViewConfig,
}

impl ProfileView {
    pub fn new(settings: ViewConfig) -> Self {
        Self {
            state: ProfileState::Resolving,
            settings,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn settings(&self) -> &ViewConfig {
        &self.settings
    }

    /// Applies a message and returns the effects to run, in order.
    pub fn update(&mut self, message: ProfileMessage) -> Vec<Effect> {
        let name = message.name();
        let before = self.state.name();

        // The unauthenticated state is terminal: the view has navigated away.
        if matches!(self.state, ProfileState::Unauthenticated) {
            tracing::debug!("[ProfileView] Ignoring {} after redirect", name);
            return Vec::new();
        }

        let effects = match message {
            ProfileMessage::SessionChanged(status) => self.handle_session_changed(status),
            ProfileMessage::RecordLoaded { identity, result } => {
                self.handle_record_loaded(identity, result)
            }
            ProfileMessage::SaveFinished { draft, result } => {
                self.handle_save_finished(draft, result)
            }
            ProfileMessage::ImageEdited(image) => self.handle_image_edited(image),
            ProfileMessage::StartEdit => self.handle_start_edit(),
            ProfileMessage::FieldChanged(field, value) => self.handle_field_changed(field, value),
            ProfileMessage::Save => self.handle_save(),
            ProfileMessage::Cancel => self.handle_cancel(),
            ProfileMessage::OpenImageEditor => self.handle_open_image_editor(),
            ProfileMessage::DismissImageEditor => self.handle_dismiss_image_editor(),
        };

        tracing::debug!(
            "[ProfileView] {}: {} -> {} ({} effects)",
            name,
            before,
            self.state.name(),
            effects.len()
        );
        effects
    }

    fn handle_session_changed(&mut self, status: SessionStatus) -> Vec<Effect> {
        match status {
            SessionStatus::Resolving => Vec::new(),
            SessionStatus::Unauthenticated => {
                self.state = ProfileState::Unauthenticated;
                vec![Effect::Redirect(self.settings.login_route.clone())]
            }
            SessionStatus::Authenticated(identity) => {
                if self.state.identity() == Some(identity) {
                    return Vec::new();
                }
                self.state = ProfileState::Loading { identity };
                vec![Effect::FetchRecord(identity)]
            }
        }
    }

    // Responses are applied whatever the current state; in-flight fetches are
    // never cancelled.
    fn handle_record_loaded(
        &mut self,
        identity: Identity,
        result: Result<UserRecord, VitaeError>,
    ) -> Vec<Effect> {
        match result {
            Ok(record) => {
                tracing::info!("[ProfileView] Loaded record for user {}", record.id);
                self.state = ProfileState::Viewing(LoadedProfile::new(record));
            }
            Err(e) => {
                tracing::error!("[ProfileView] Failed to load user {}: {}", identity, e);
                self.state = ProfileState::NotFound { identity };
            }
        }
        Vec::new()
    }

    fn handle_save_finished(
        &mut self,
        draft: EditDraft,
        result: Result<(), VitaeError>,
    ) -> Vec<Effect> {
        match result {
            Ok(()) => {
                let state = std::mem::take(&mut self.state);
                self.state = match state {
                    ProfileState::Viewing(mut loaded) | ProfileState::Editing(mut loaded, _) => {
                        draft.apply_to(&mut loaded.record);
                        tracing::info!("[ProfileView] Saved profile of user {}", loaded.identity());
                        ProfileState::Viewing(loaded)
                    }
                    other => other,
                };
                vec![Effect::Alert(self.settings.save_success_message.clone())]
            }
            Err(e) => {
                tracing::warn!("[ProfileView] Failed to save profile: {}", e);
                vec![Effect::Alert(
                    e.user_message_or(&self.settings.save_failure_message),
                )]
            }
        }
    }

    fn handle_image_edited(&mut self, image: EncodedImage) -> Vec<Effect> {
        match self.state.loaded_mut() {
            Some(loaded) => {
                loaded.record.avatar = Some(image);
                loaded.image_editor_open = false;
            }
            None => tracing::warn!("[ProfileView] New avatar arrived without a loaded record"),
        }
        Vec::new()
    }

    fn handle_start_edit(&mut self) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            ProfileState::Viewing(loaded) => {
                let draft = EditDraft::from_record(&loaded.record);
                ProfileState::Editing(loaded, draft)
            }
            other => other,
        };
        Vec::new()
    }

    fn handle_field_changed(&mut self, field: DraftField, value: String) -> Vec<Effect> {
        if let ProfileState::Editing(_, draft) = &mut self.state {
            draft.set(field, value);
        }
        Vec::new()
    }

    // No in-flight guard: every Save issues a request.
    fn handle_save(&mut self) -> Vec<Effect> {
        match &self.state {
            ProfileState::Editing(loaded, draft) => vec![Effect::UpdateRecord {
                identity: loaded.identity(),
                draft: draft.clone(),
            }],
            _ => Vec::new(),
        }
    }

    fn handle_cancel(&mut self) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            ProfileState::Editing(loaded, _) => ProfileState::Viewing(loaded),
            other => other,
        };
        Vec::new()
    }

    fn handle_open_image_editor(&mut self) -> Vec<Effect> {
        match self.state.loaded_mut() {
            Some(loaded) if !loaded.image_editor_open => {
                loaded.image_editor_open = true;
                vec![Effect::OpenImageEditor(loaded.identity())]
            }
            _ => Vec::new(),
        }
    }

    fn handle_dismiss_image_editor(&mut self) -> Vec<Effect> {
        if let Some(loaded) = self.state.loaded_mut() {
            loaded.image_editor_open = false;
        }
        Vec::new()
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
