//! Wire DTOs for the user record endpoint.
//!
//! Field names are fixed by the backend. Text fields and collections may be
//! missing or `null`; both become empty values in the domain model.

use serde::{Deserialize, Serialize};

use vitae_core::avatar::EncodedImage;
use vitae_core::user::{
    AccountKind, CareerEntry, EditDraft, Identity, LinkEntry, PublicationEntry, TitleValue,
    UserRecord,
};

/// User record as returned by `GET <record-endpoint>?id=<identity>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecordDto {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "fotoPerfil", default)]
    pub foto_perfil: Option<String>,
    #[serde(rename = "Nome", default)]
    pub nome: Option<String>,
    #[serde(rename = "Titulacao", default)]
    pub titulacao: Option<String>,
    #[serde(rename = "instituicaoEnsino", default)]
    pub instituicao_ensino: Option<String>,
    #[serde(rename = "formacaoAcademica", default)]
    pub formacao_academica: Option<String>,
    #[serde(rename = "resumoPessoal", default)]
    pub resumo_pessoal: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub link: Option<Vec<LinkDto>>,
    #[serde(default)]
    pub publicacao: Option<Vec<PublicacaoDto>>,
    #[serde(default)]
    pub carreira: Option<Vec<CarreiraDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkDto {
    pub id: i64,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicacaoDto {
    pub id: i64,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarreiraDto {
    pub id: i64,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(rename = "dataInicio", default)]
    pub data_inicio: Option<String>,
    #[serde(rename = "dataFim", default)]
    pub data_fim: Option<String>,
}

/// Body of `PATCH <record-endpoint>?id=<identity>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraftDto {
    #[serde(rename = "Nome")]
    pub nome: String,
    pub email: String,
    #[serde(rename = "Titulacao")]
    pub titulacao: String,
    #[serde(rename = "instituicaoEnsino")]
    pub instituicao_ensino: String,
    #[serde(rename = "formacaoAcademica")]
    pub formacao_academica: String,
    #[serde(rename = "resumoPessoal")]
    pub resumo_pessoal: String,
}

/// Body of the avatar upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDto {
    #[serde(rename = "fotoPerfil")]
    pub foto_perfil: String,
}

/// Error body sent by the backend on failed requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBodyDto {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<UserRecordDto> for UserRecord {
    fn from(dto: UserRecordDto) -> Self {
        UserRecord {
            id: Identity(dto.id),
            email: dto.email.unwrap_or_default(),
            name: dto.nome.unwrap_or_default(),
            title: TitleValue::from(dto.titulacao.unwrap_or_default()),
            institution: dto.instituicao_ensino.unwrap_or_default(),
            academic_background: dto.formacao_academica.unwrap_or_default(),
            bio: dto.resumo_pessoal.unwrap_or_default(),
            avatar: dto
                .foto_perfil
                .filter(|encoded| !encoded.is_empty())
                .map(EncodedImage::new),
            kind: AccountKind::from(dto.tipo.unwrap_or_default()),
            created_at: dto.created_at.unwrap_or_default(),
            links: dto
                .link
                .unwrap_or_default()
                .into_iter()
                .map(LinkEntry::from)
                .collect(),
            publications: dto
                .publicacao
                .unwrap_or_default()
                .into_iter()
                .map(PublicationEntry::from)
                .collect(),
            careers: dto
                .carreira
                .unwrap_or_default()
                .into_iter()
                .map(CareerEntry::from)
                .collect(),
        }
    }
}

impl From<LinkDto> for LinkEntry {
    fn from(dto: LinkDto) -> Self {
        LinkEntry {
            id: dto.id,
            url: dto.link.unwrap_or_default(),
            category: dto.tipo.unwrap_or_default(),
        }
    }
}

impl From<PublicacaoDto> for PublicationEntry {
    fn from(dto: PublicacaoDto) -> Self {
        PublicationEntry {
            id: dto.id,
            description: dto.descricao.unwrap_or_default(),
            url: dto.link.unwrap_or_default(),
        }
    }
}

impl From<CarreiraDto> for CareerEntry {
    fn from(dto: CarreiraDto) -> Self {
        CareerEntry {
            id: dto.id,
            name: dto.nome.unwrap_or_default(),
            description: dto.descricao.unwrap_or_default(),
            category: dto.categoria.unwrap_or_default(),
            start_date: dto.data_inicio.unwrap_or_default(),
            end_date: dto.data_fim.unwrap_or_default(),
        }
    }
}

impl From<&EditDraft> for EditDraftDto {
    fn from(draft: &EditDraft) -> Self {
        EditDraftDto {
            nome: draft.name.clone(),
            email: draft.email.clone(),
            titulacao: draft.title.as_str().to_string(),
            instituicao_ensino: draft.institution.clone(),
            formacao_academica: draft.academic_background.clone(),
            resumo_pessoal: draft.bio.clone(),
        }
    }
}
