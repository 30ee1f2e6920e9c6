use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use vitae_core::avatar::EncodedImage;
use vitae_core::user::{AccountKind, DraftField, EditDraft, Identity, UserRecordService};
use vitae_infrastructure::HttpUserRecordService;

#[derive(Default)]
struct Backend {
    patches: Mutex<Vec<(String, Value)>>,
    reject_patch_with: Mutex<Option<(StatusCode, Value)>>,
}

type Shared = Arc<Backend>;

async fn get_usuario(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("id").map(String::as_str) {
        Some("12") => Json(json!({
            "id": 12,
            "email": "ana@ufmg.br",
            "fotoPerfil": null,
            "Nome": "Ana",
            "Titulacao": "Mestre",
            "instituicaoEnsino": "UFMG",
            "formacaoAcademica": "Física",
            "resumoPessoal": "",
            "tipo": "Normal",
            "createdAt": "2023-05-02T10:00:00.000Z",
            "link": [],
            "publicacao": [],
            "carreira": []
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Usuário não encontrado"})))
            .into_response(),
    }
}

async fn patch_usuario(
    State(backend): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if let Some((status, body)) = backend.reject_patch_with.lock().unwrap().clone() {
        return (status, Json(body)).into_response();
    }
    let id = params.get("id").cloned().unwrap_or_default();
    backend.patches.lock().unwrap().push((id, body.clone()));
    Json(body).into_response()
}

async fn spawn_backend(backend: Shared) -> String {
    let app = Router::new()
        .route("/api/usuario", get(get_usuario).patch(patch_usuario))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/usuario", addr)
}

#[tokio::test]
async fn test_fetch_record_maps_payload() {
    let url = spawn_backend(Arc::new(Backend::default())).await;
    let service = HttpUserRecordService::new(url);

    let record = service.fetch_record(Identity(12)).await.expect("record");

    assert_eq!(record.id, Identity(12));
    assert_eq!(record.name, "Ana");
    assert_eq!(record.kind, AccountKind::Normal);
    assert_eq!(record.avatar, None);
}

#[tokio::test]
async fn test_fetch_unknown_identity_is_http_error() {
    let url = spawn_backend(Arc::new(Backend::default())).await;
    let service = HttpUserRecordService::new(url);

    let err = service.fetch_record(Identity(99)).await.unwrap_err();

    assert!(err.is_http());
    assert_eq!(err.user_message(), "Usuário não encontrado");
}

#[tokio::test]
async fn test_update_sends_draft_keyed_by_identity() {
    let backend = Arc::new(Backend::default());
    let url = spawn_backend(backend.clone()).await;
    let service = HttpUserRecordService::new(url);

    let mut draft = EditDraft::default();
    draft.set(DraftField::Name, "Ana Paula");
    draft.set(DraftField::Title, "Doutor");
    service.update_record(Identity(12), &draft).await.expect("update");

    let patches = backend.patches.lock().unwrap();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].0, "12");
    assert_eq!(patches[0].1["Nome"], "Ana Paula");
    assert_eq!(patches[0].1["Titulacao"], "Doutor");
}

#[tokio::test]
async fn test_update_failure_carries_server_message() {
    let backend = Arc::new(Backend::default());
    *backend.reject_patch_with.lock().unwrap() = Some((
        StatusCode::CONFLICT,
        json!({"error": "Email já está em uso"}),
    ));
    let url = spawn_backend(backend).await;
    let service = HttpUserRecordService::new(url);

    let err = service
        .update_record(Identity(12), &EditDraft::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Email já está em uso");
}

#[tokio::test]
async fn test_update_failure_without_message_uses_generic_text() {
    let backend = Arc::new(Backend::default());
    *backend.reject_patch_with.lock().unwrap() =
        Some((StatusCode::INTERNAL_SERVER_ERROR, json!({})));
    let url = spawn_backend(backend).await;
    let service = HttpUserRecordService::new(url);

    let err = service
        .update_record(Identity(12), &EditDraft::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Erro ao atualizar perfil");
}

#[tokio::test]
async fn test_upload_avatar_patches_only_the_photo() {
    let backend = Arc::new(Backend::default());
    let url = spawn_backend(backend.clone()).await;
    let service = HttpUserRecordService::new(url);

    let avatar = EncodedImage::from_bytes("image/png", b"png");
    service.upload_avatar(Identity(12), &avatar).await.expect("upload");

    let patches = backend.patches.lock().unwrap();
    let body = patches[0].1.as_object().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body["fotoPerfil"], avatar.as_str());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpUserRecordService::new(format!("http://{}/api/usuario", addr));
    let err = service.fetch_record(Identity(1)).await.unwrap_err();

    assert!(err.is_transport());
}
