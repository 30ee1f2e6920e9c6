//! Editable subset of a [`UserRecord`].

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use super::model::{TitleValue, UserRecord};

/// Names the editable fields of a profile.
///
/// String forms match the form field names used by the backend payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum DraftField {
    #[strum(serialize = "Nome", serialize = "name")]
    Name,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "Titulacao", serialize = "title")]
    Title,
    #[strum(serialize = "instituicaoEnsino", serialize = "institution")]
    Institution,
    #[strum(serialize = "formacaoAcademica", serialize = "background")]
    AcademicBackground,
    #[strum(serialize = "resumoPessoal", serialize = "bio")]
    Bio,
}

impl DraftField {
    /// Field name in the backend payload.
    pub fn wire_name(&self) -> &'static str {
        match self {
            DraftField::Name => "Nome",
            DraftField::Email => "email",
            DraftField::Title => "Titulacao",
            DraftField::Institution => "instituicaoEnsino",
            DraftField::AcademicBackground => "formacaoAcademica",
            DraftField::Bio => "resumoPessoal",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Nome",
            DraftField::Email => "Email",
            DraftField::Title => "Titulação",
            DraftField::Institution => "Instituição de Ensino",
            DraftField::AcademicBackground => "Formação Acadêmica",
            DraftField::Bio => "Resumo Pessoal",
        }
    }
}

/// Transient editable copy of a record's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    pub name: String,
    pub email: String,
    pub title: TitleValue,
    pub institution: String,
    pub academic_background: String,
    pub bio: String,
}

impl EditDraft {
    /// Copies the editable fields out of a record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            title: record.title.clone(),
            institution: record.institution.clone(),
            academic_background: record.academic_background.clone(),
            bio: record.bio.clone(),
        }
    }

    /// Sets a single field. The record this draft was taken from is untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Title => self.title = TitleValue::from(value),
            DraftField::Institution => self.institution = value,
            DraftField::AcademicBackground => self.academic_background = value,
            DraftField::Bio => self.bio = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Title => self.title.as_str(),
            DraftField::Institution => &self.institution,
            DraftField::AcademicBackground => &self.academic_background,
            DraftField::Bio => &self.bio,
        }
    }

    /// Shallow overwrite of the record's editable fields.
    ///
    /// Identity, avatar, classification, timestamps and collections are left
    /// as they are.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.title = self.title.clone();
        record.institution = self.institution.clone();
        record.academic_background = self.academic_background.clone();
        record.bio = self.bio.clone();
    }
}
