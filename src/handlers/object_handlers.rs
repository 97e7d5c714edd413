//! HTTP handlers for object operations.
//! Bodies are in-memory byte buffers; all storage concerns are delegated to
//! the `ObjectStorageOrchestrator`. The principal comes from the `x-user-id`
//! header and permission grants from `x-user-permissions`; authentication
//! itself lives outside this service.

use crate::{
    errors::AppError,
    handlers::AppState,
    models::record::{ObjectRecord, ObjectRecordPatch},
    services::access_policy::Permission,
};
use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;

/// Query params accepted by file upload.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub public: Option<bool>,
}

/// Query params accepted by content replace.
#[derive(Debug, Deserialize)]
pub struct ReplaceQuery {
    pub path: Option<String>,
    pub public: Option<bool>,
}

/// Query params accepted by criteria lookup.
#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub id: Option<i64>,
    pub path: Option<String>,
    pub name: Option<String>,
}

fn principal_id(headers: &HeaderMap) -> Result<i64, AppError> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| {
            AppError::new(
                StatusCode::UNAUTHORIZED,
                "missing or invalid x-user-id header",
            )
        })
}

fn granted_permissions(headers: &HeaderMap) -> Vec<Permission> {
    headers
        .get("x-user-permissions")
        .and_then(|value| value.to_str().ok())
        .map(Permission::parse_list)
        .unwrap_or_default()
}

fn content_type_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Upload a new object to `PUT /files/{*path}`.
pub async fn upload_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let mut record = ObjectRecord::empty_at(format!("/{path}"));
    record.content_type = content_type_header(&headers);
    record.publicity = query.public.unwrap_or(false);
    record.payload = Some(body);

    let stored = state.orchestrator.create(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Download an object's payload from `GET /files/{*path}`.
pub async fn download_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let principal = principal_id(&headers)?;
    let granted = granted_permissions(&headers);

    let record = state
        .orchestrator
        .get_by_path(&format!("/{path}"), principal, &granted)
        .await?
        .ok_or_else(|| AppError::not_found("file not found"))?;

    let payload = record.payload.clone().unwrap_or_default();
    let length = payload.len();
    let mut response = Response::new(Body::from(payload));
    set_record_headers(response.headers_mut(), &record, length as i64);
    Ok(response)
}

/// HEAD `/files/{*path}` — metadata headers, no body.
pub async fn head_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let principal = principal_id(&headers)?;
    let granted = granted_permissions(&headers);

    let record = state
        .orchestrator
        .get_record_by_path(&format!("/{path}"), principal, &granted)
        .await?
        .ok_or_else(|| AppError::not_found("file not found"))?;

    let mut response = Response::new(Body::empty());
    set_record_headers(response.headers_mut(), &record, record.size);
    Ok(response)
}

/// GET `/files?id=&path=&name=` — first hit among id, path, and name.
pub async fn find_file(
    State(state): State<AppState>,
    Query(query): Query<FindQuery>,
    headers: HeaderMap,
) -> Result<Json<ObjectRecord>, AppError> {
    let principal = principal_id(&headers)?;
    let granted = granted_permissions(&headers);

    let record = state
        .orchestrator
        .get_record_by_criteria(
            query.id,
            query.path.as_deref(),
            query.name.as_deref(),
            principal,
            &granted,
        )
        .await?
        .ok_or_else(|| AppError::not_found("file not found"))?;

    Ok(Json(record))
}

/// GET `/objects/{id}` — metadata by id.
pub async fn get_object(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ObjectRecord>, AppError> {
    Ok(Json(state.orchestrator.get_by_id(id).await?))
}

/// PUT `/objects/{id}` — replace an object's content.
pub async fn replace_object(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ReplaceQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ObjectRecord>, AppError> {
    let mut record = state.orchestrator.get_by_id(id).await?;
    if let Some(path) = query.path {
        record.path = path;
    }
    if let Some(content_type) = content_type_header(&headers) {
        record.content_type = Some(content_type);
    }
    if let Some(public) = query.public {
        record.publicity = public;
    }
    record.payload = Some(body);

    Ok(Json(state.orchestrator.replace(id, record).await?))
}

/// PATCH `/objects/{id}` — partial metadata update.
pub async fn patch_object(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(patch): Json<ObjectRecordPatch>,
) -> Result<Json<ObjectRecord>, AppError> {
    let principal = principal_id(&headers)?;
    Ok(Json(state.orchestrator.patch(id, patch, principal).await?))
}

/// DELETE `/objects/{id}` — move the blob to trash and drop the record.
pub async fn delete_object(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.orchestrator.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET `/owners/{owner}/files` — every record the owner holds.
pub async fn list_owner_files(
    State(state): State<AppState>,
    Path(owner): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<ObjectRecord>>, AppError> {
    let principal = principal_id(&headers)?;
    let granted = granted_permissions(&headers);
    if principal != owner && !granted.contains(&Permission::Admin) {
        return Err(AppError::not_found("file not found"));
    }

    Ok(Json(state.orchestrator.list_by_owner(owner).await?))
}

fn set_record_headers(headers: &mut HeaderMap, record: &ObjectRecord, length: i64) {
    let content_type = record
        .content_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".into());
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );

    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from_str(&length.max(0).to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("0")),
    );
}
