//! UserRecord domain model.
//!
//! Represents a user's academic profile as returned by the record service,
//! including the owned link, publication and career collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::avatar::EncodedImage;

/// Career category label the backend uses for academic positions.
pub const ACADEMIC_CATEGORY: &str = "acadêmica";

/// Unique key of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub i64);

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// The fixed set of academic titles a user may hold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
pub enum AcademicTitle {
    Bacharel,
    Licenciado,
    Especialista,
    Mestre,
    Doutor,
}

impl AcademicTitle {
    /// All titles in the order they are offered for selection.
    pub fn options() -> Vec<AcademicTitle> {
        AcademicTitle::iter().collect()
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

/// Title as stored on a record.
///
/// The backend may hold a value outside the known enumeration (or nothing at
/// all); such values are kept verbatim so they render and round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TitleValue {
    Known(AcademicTitle),
    Other(String),
}

impl TitleValue {
    pub fn as_str(&self) -> &str {
        match self {
            TitleValue::Known(title) => title.label(),
            TitleValue::Other(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<AcademicTitle> {
        match self {
            TitleValue::Known(title) => Some(*title),
            TitleValue::Other(_) => None,
        }
    }
}

impl Default for TitleValue {
    fn default() -> Self {
        TitleValue::Other(String::new())
    }
}

impl From<String> for TitleValue {
    fn from(raw: String) -> Self {
        match raw.parse::<AcademicTitle>() {
            Ok(title) => TitleValue::Known(title),
            Err(_) => TitleValue::Other(raw),
        }
    }
}

impl From<&str> for TitleValue {
    fn from(raw: &str) -> Self {
        TitleValue::from(raw.to_string())
    }
}

impl From<AcademicTitle> for TitleValue {
    fn from(title: AcademicTitle) -> Self {
        TitleValue::Known(title)
    }
}

impl From<TitleValue> for String {
    fn from(value: TitleValue) -> Self {
        match value {
            TitleValue::Known(title) => title.label().to_string(),
            TitleValue::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TitleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account classification of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountKind {
    Normal,
    Super,
    Pendente,
    /// Any other label the backend sends (e.g. a blocked account).
    Other(String),
}

impl AccountKind {
    pub fn label(&self) -> &str {
        match self {
            AccountKind::Normal => "Normal",
            AccountKind::Super => "Super",
            AccountKind::Pendente => "Pendente",
            AccountKind::Other(raw) => raw,
        }
    }
}

impl Default for AccountKind {
    fn default() -> Self {
        AccountKind::Other(String::new())
    }
}

impl From<String> for AccountKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Normal" => AccountKind::Normal,
            "Super" => AccountKind::Super,
            "Pendente" => AccountKind::Pendente,
            _ => AccountKind::Other(raw),
        }
    }
}

impl From<&str> for AccountKind {
    fn from(raw: &str) -> Self {
        AccountKind::from(raw.to_string())
    }
}

impl From<AccountKind> for String {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An external link owned by a user (personal site, Lattes, ORCID...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: i64,
    pub url: String,
    /// Free-form category label, e.g. "GitHub".
    pub category: String,
}

/// A publication listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub id: i64,
    pub description: String,
    pub url: String,
}

/// A position in the user's career history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Raw timestamp as sent by the backend (ISO-8601 or date only).
    pub start_date: String,
    pub end_date: String,
}

impl CareerEntry {
    /// Binary classification used for the career badge.
    pub fn is_academic(&self) -> bool {
        self.category == ACADEMIC_CATEGORY || self.category == "academic"
    }
}

/// Full user profile entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Identity,
    pub email: String,
    pub name: String,
    pub title: TitleValue,
    pub institution: String,
    pub academic_background: String,
    pub bio: String,
    pub avatar: Option<EncodedImage>,
    pub kind: AccountKind,
    /// Raw creation timestamp as sent by the backend.
    pub created_at: String,
    pub links: Vec<LinkEntry>,
    pub publications: Vec<PublicationEntry>,
    pub careers: Vec<CareerEntry>,
}

impl UserRecord {
    /// Creates an empty record for the given identity.
    pub fn new(id: Identity) -> Self {
        Self {
            id,
            email: String::new(),
            name: String::new(),
            title: TitleValue::default(),
            institution: String::new(),
            academic_background: String::new(),
            bio: String::new(),
            avatar: None,
            kind: AccountKind::default(),
            created_at: String::new(),
            links: Vec::new(),
            publications: Vec::new(),
            careers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_parsing_keeps_unknown_values() {
        assert_eq!(TitleValue::from("Mestre"), TitleValue::Known(AcademicTitle::Mestre));
        assert_eq!(
            TitleValue::from("Pós-Doutor"),
            TitleValue::Other("Pós-Doutor".to_string())
        );
        assert_eq!(TitleValue::from("").as_str(), "");
    }

    #[test]
    fn test_title_options_order() {
        let labels: Vec<_> = AcademicTitle::options()
            .iter()
            .map(|t| t.label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["Bacharel", "Licenciado", "Especialista", "Mestre", "Doutor"]
        );
    }

    #[test]
    fn test_account_kind_round_trip_labels() {
        assert_eq!(AccountKind::from("Super"), AccountKind::Super);
        assert_eq!(
            AccountKind::from("Bloqueado"),
            AccountKind::Other("Bloqueado".to_string())
        );
        assert_eq!(String::from(AccountKind::Pendente), "Pendente");
        assert_eq!(AccountKind::Other("Bloqueado".into()).label(), "Bloqueado");
    }

    #[test]
    fn test_career_classification_is_binary() {
        let mut entry = CareerEntry {
            id: 1,
            name: "UFMG".into(),
            description: String::new(),
            category: ACADEMIC_CATEGORY.into(),
            start_date: "2020-01-01".into(),
            end_date: "2021-01-01".into(),
        };
        assert!(entry.is_academic());
        entry.category = "academic".into();
        assert!(entry.is_academic());
        entry.category = "profissional".into();
        assert!(!entry.is_academic());
        entry.category = "Acadêmica".into();
        assert!(!entry.is_academic());
    }

    #[test]
    fn test_identity_serializes_as_number() {
        let json = serde_json::to_string(&Identity(42)).unwrap();
        assert_eq!(json, "42");
    }
}
