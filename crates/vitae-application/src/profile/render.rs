//! Rendering of the profile view into a toolkit-independent screen model.
//!
//! Hosts (a terminal, a webview) draw a [`ProfileScreen`]; they never look at
//! [`ProfileState`] directly.

use serde::Serialize;
use strum::IntoEnumIterator;

use vitae_core::avatar::EncodedImage;
use vitae_core::user::{AcademicTitle, AccountKind, CareerEntry, DraftField, EditDraft, UserRecord};

use super::format::format_date;
use super::state::ProfileState;
use super::update::ProfileView;

pub const PAGE_TITLE: &str = "Meu Perfil";
pub const NOT_FOUND_TEXT: &str = "Usuário não encontrado";
pub const IMAGE_EDITOR_TITLE: &str = "Alterar Foto de Perfil";

/// Top-level screen for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ProfileScreen {
    /// Spinner while the session or the record is pending.
    Loading,
    /// Shown for the instant before navigation happens.
    Redirecting { route: String },
    /// The record could not be loaded.
    NotFound { message: String },
    Profile(Box<ProfilePage>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeaderAction {
    Edit,
    Save,
    Cancel,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::Edit => "Editar Perfil",
            HeaderAction::Save => "Salvar",
            HeaderAction::Cancel => "Cancelar",
        }
    }
}

/// Colour of the account classification badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BadgeTone {
    Green,
    Blue,
    Yellow,
    Red,
}

impl BadgeTone {
    pub fn for_kind(kind: &AccountKind) -> Self {
        match kind {
            AccountKind::Normal => BadgeTone::Green,
            AccountKind::Super => BadgeTone::Blue,
            AccountKind::Pendente => BadgeTone::Yellow,
            AccountKind::Other(_) => BadgeTone::Red,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            BadgeTone::Green => "badge-green",
            BadgeTone::Blue => "badge-blue",
            BadgeTone::Yellow => "badge-yellow",
            BadgeTone::Red => "badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

/// Visual class of a career entry badge. Binary by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CareerClass {
    Academic,
    NonAcademic,
}

impl CareerClass {
    pub fn for_entry(entry: &CareerEntry) -> Self {
        if entry.is_academic() {
            CareerClass::Academic
        } else {
            CareerClass::NonAcademic
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            CareerClass::Academic => "academic",
            CareerClass::NonAcademic => "non-academic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarView {
    /// `None` renders the placeholder silhouette.
    pub image: Option<EncodedImage>,
    /// The "change photo" affordance over the avatar.
    pub can_change: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InputKind {
    Text,
    Email,
    Select { options: Vec<String> },
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    #[serde(skip)]
    pub field: DraftField,
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub input: InputKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub id: i64,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationView {
    pub id: i64,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub class: CareerClass,
    /// `start - end`, both formatted as calendar dates.
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub id: String,
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEditorOverlay {
    pub title: &'static str,
    pub identity: i64,
}

/// Everything drawn on the loaded profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    pub title: &'static str,
    pub actions: Vec<HeaderAction>,
    pub avatar: AvatarView,
    pub name: String,
    pub email: String,
    pub academic_title: String,
    pub institution: String,
    pub badge: Badge,
    /// Present only in edit mode.
    pub form: Option<Vec<FormField>>,
    /// Sections are omitted when their collection is empty.
    pub links: Option<Vec<LinkView>>,
    pub publications: Option<Vec<PublicationView>>,
    pub careers: Option<Vec<CareerView>>,
    pub account: AccountInfo,
    pub image_editor: Option<ImageEditorOverlay>,
}

impl ProfileView {
    /// Renders the current state.
    pub fn render(&self) -> ProfileScreen {
        let date_format = self.settings().date_format.as_str();
        match self.state() {
            ProfileState::Resolving | ProfileState::Loading { .. } => ProfileScreen::Loading,
            ProfileState::Unauthenticated => ProfileScreen::Redirecting {
                route: self.settings().login_route.clone(),
            },
            ProfileState::NotFound { .. } => ProfileScreen::NotFound {
                message: NOT_FOUND_TEXT.to_string(),
            },
            ProfileState::Viewing(loaded) => ProfileScreen::Profile(Box::new(render_page(
                &loaded.record,
                None,
                loaded.image_editor_open,
                date_format,
            ))),
            ProfileState::Editing(loaded, draft) => ProfileScreen::Profile(Box::new(render_page(
                &loaded.record,
                Some(draft),
                loaded.image_editor_open,
                date_format,
            ))),
        }
    }
}

fn render_page(
    record: &UserRecord,
    draft: Option<&EditDraft>,
    image_editor_open: bool,
    date_format: &str,
) -> ProfilePage {
    let actions = match draft {
        Some(_) => vec![HeaderAction::Save, HeaderAction::Cancel],
        None => vec![HeaderAction::Edit],
    };

    ProfilePage {
        title: PAGE_TITLE,
        actions,
        avatar: AvatarView {
            image: record.avatar.clone(),
            can_change: true,
        },
        name: record.name.clone(),
        email: record.email.clone(),
        academic_title: record.title.as_str().to_string(),
        institution: record.institution.clone(),
        badge: Badge {
            label: record.kind.label().to_string(),
            tone: BadgeTone::for_kind(&record.kind),
        },
        form: draft.map(render_form),
        links: non_empty(
            record
                .links
                .iter()
                .map(|link| LinkView {
                    id: link.id,
                    category: link.category.clone(),
                    url: link.url.clone(),
                })
                .collect(),
        ),
        publications: non_empty(
            record
                .publications
                .iter()
                .map(|publication| PublicationView {
                    id: publication.id,
                    description: publication.description.clone(),
                    url: publication.url.clone(),
                })
                .collect(),
        ),
        careers: non_empty(
            record
                .careers
                .iter()
                .map(|career| CareerView {
                    id: career.id,
                    name: career.name.clone(),
                    description: career.description.clone(),
                    category: career.category.clone(),
                    class: CareerClass::for_entry(career),
                    period: format!(
                        "{} - {}",
                        format_date(&career.start_date, date_format),
                        format_date(&career.end_date, date_format)
                    ),
                })
                .collect(),
        ),
        account: AccountInfo {
            id: record.id.to_string(),
            member_since: format_date(&record.created_at, date_format),
        },
        image_editor: image_editor_open.then(|| ImageEditorOverlay {
            title: IMAGE_EDITOR_TITLE,
            identity: record.id.0,
        }),
    }
}

fn render_form(draft: &EditDraft) -> Vec<FormField> {
    DraftField::iter()
        .map(|field| FormField {
            field,
            name: field.wire_name(),
            label: field.label(),
            value: draft.get(field).to_string(),
            input: input_kind(field),
        })
        .collect()
}

fn input_kind(field: DraftField) -> InputKind {
    match field {
        DraftField::Email => InputKind::Email,
        DraftField::Title => InputKind::Select {
            options: AcademicTitle::options()
                .iter()
                .map(|title| title.label().to_string())
                .collect(),
        },
        DraftField::Bio => InputKind::TextArea { rows: 4 },
        _ => InputKind::Text,
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileMessage;
    use vitae_core::session::SessionStatus;
    use vitae_core::user::{Identity, LinkEntry, PublicationEntry};
    use vitae_core::VitaeError;
    use vitae_core::config::ViewConfig;

    fn record() -> UserRecord {
        let mut record = UserRecord::new(Identity(21));
        record.name = "João Souza".into();
        record.email = "joao@usp.br".into();
        record.title = AcademicTitle::Doutor.into();
        record.institution = "USP".into();
        record.kind = AccountKind::Super;
        record.created_at = "2022-08-15T12:00:00.000Z".into();
        record
    }

    fn loaded(record: UserRecord) -> ProfileView {
        let mut view = ProfileView::default();
        view.update(ProfileMessage::RecordLoaded {
            identity: record.id,
            result: Ok(record),
        });
        view
    }

    fn page(view: &ProfileView) -> ProfilePage {
        match view.render() {
            ProfileScreen::Profile(page) => *page,
            other => panic!("expected profile page, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_states_render_spinner() {
        let mut view = ProfileView::default();
        assert_eq!(view.render(), ProfileScreen::Loading);
        view.update(ProfileMessage::SessionChanged(SessionStatus::Authenticated(
            Identity(1),
        )));
        assert_eq!(view.render(), ProfileScreen::Loading);
    }

    #[test]
    fn test_unauthenticated_renders_redirect() {
        let mut view = ProfileView::default();
        view.update(ProfileMessage::SessionChanged(SessionStatus::Unauthenticated));
        assert_eq!(
            view.render(),
            ProfileScreen::Redirecting {
                route: "/login".into()
            }
        );
    }

    #[test]
    fn test_load_failure_renders_not_found() {
        let mut view = ProfileView::default();
        view.update(ProfileMessage::RecordLoaded {
            identity: Identity(1),
            result: Err(VitaeError::http(404, None)),
        });
        assert_eq!(
            view.render(),
            ProfileScreen::NotFound {
                message: NOT_FOUND_TEXT.into()
            }
        );
    }

    #[test]
    fn test_basic_info_and_badge() {
        let page = page(&loaded(record()));

        assert_eq!(page.name, "João Souza");
        assert_eq!(page.email, "joao@usp.br");
        assert_eq!(page.academic_title, "Doutor");
        assert_eq!(page.institution, "USP");
        assert_eq!(page.badge.label, "Super");
        assert_eq!(page.badge.tone, BadgeTone::Blue);
        assert_eq!(page.actions, vec![HeaderAction::Edit]);
        assert!(page.form.is_none());
        assert_eq!(page.account.id, "21");
        assert_eq!(page.account.member_since, "15/08/2022");
        assert!(page.avatar.image.is_none());
    }

    #[test]
    fn test_badge_tones() {
        assert_eq!(BadgeTone::for_kind(&AccountKind::Normal), BadgeTone::Green);
        assert_eq!(BadgeTone::for_kind(&AccountKind::Pendente), BadgeTone::Yellow);
        assert_eq!(
            BadgeTone::for_kind(&AccountKind::Other("Bloqueado".into())),
            BadgeTone::Red
        );
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let page = page(&loaded(record()));
        assert!(page.links.is_none());
        assert!(page.publications.is_none());
        assert!(page.careers.is_none());
    }

    #[test]
    fn test_collections_render_with_dates_and_classes() {
        let mut record = record();
        record.links.push(LinkEntry {
            id: 1,
            url: "https://orcid.org/0000".into(),
            category: "ORCID".into(),
        });
        record.publications.push(PublicationEntry {
            id: 2,
            description: "Um estudo".into(),
            url: "https://doi.org/10.1/x".into(),
        });
        record.careers.push(CareerEntry {
            id: 3,
            name: "Docente".into(),
            description: String::new(),
            category: "academic".into(),
            start_date: "2018-02-01".into(),
            end_date: "2021-07-31".into(),
        });
        record.careers.push(CareerEntry {
            id: 4,
            name: "Analista".into(),
            description: String::new(),
            category: "profissional".into(),
            start_date: "2015-01-10".into(),
            end_date: "nunca".into(),
        });

        let page = page(&loaded(record));

        assert_eq!(page.links.unwrap()[0].category, "ORCID");
        assert_eq!(page.publications.unwrap()[0].url, "https://doi.org/10.1/x");
        let careers = page.careers.unwrap();
        assert_eq!(careers[0].class, CareerClass::Academic);
        assert_eq!(careers[0].period, "01/02/2018 - 31/07/2021");
        assert_eq!(careers[1].class, CareerClass::NonAcademic);
        assert_eq!(careers[1].period, "10/01/2015 - Invalid Date");
    }

    #[test]
    fn test_bad_configured_date_format_renders_invalid_date() {
        let settings = ViewConfig {
            date_format: "%Q".into(),
            ..ViewConfig::default()
        };
        let mut view = ProfileView::new(settings);
        let record = record();
        view.update(ProfileMessage::RecordLoaded {
            identity: record.id,
            result: Ok(record),
        });

        let page = page(&view);

        assert_eq!(page.account.member_since, "Invalid Date");
        assert_eq!(page.name, "João Souza");
    }

    #[test]
    fn test_edit_mode_renders_form_from_draft() {
        let mut view = loaded(record());
        view.update(ProfileMessage::StartEdit);
        view.update(ProfileMessage::FieldChanged(DraftField::Institution, "UFRJ".into()));

        let page = page(&view);

        assert_eq!(page.actions, vec![HeaderAction::Save, HeaderAction::Cancel]);
        assert_eq!(page.institution, "USP", "header shows the record, not the draft");
        let form = page.form.unwrap();
        let names: Vec<_> = form.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Nome",
                "email",
                "Titulacao",
                "instituicaoEnsino",
                "formacaoAcademica",
                "resumoPessoal"
            ]
        );
        assert_eq!(form[3].value, "UFRJ");
        assert_eq!(
            form[2].input,
            InputKind::Select {
                options: vec![
                    "Bacharel".into(),
                    "Licenciado".into(),
                    "Especialista".into(),
                    "Mestre".into(),
                    "Doutor".into()
                ]
            }
        );
    }

    #[test]
    fn test_overlay_renders_when_open() {
        let mut view = loaded(record());
        assert!(page(&view).image_editor.is_none());
        view.update(ProfileMessage::OpenImageEditor);
        let overlay = page(&view).image_editor.unwrap();
        assert_eq!(overlay.title, IMAGE_EDITOR_TITLE);
        assert_eq!(overlay.identity, 21);
    }

    #[test]
    fn test_screen_serializes_for_webview_hosts() {
        let json = serde_json::to_value(loaded(record()).render()).unwrap();
        assert_eq!(json["type"], "Profile");
        assert_eq!(json["data"]["badge"]["tone"], "Blue");
    }
}
