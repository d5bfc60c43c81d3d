//! Handlers for `/dashboard/gallery`: browsing, uploading and deleting
//! media assets.
//!
//! Uploads are compressed to WebP in a blocking task, sent to the media
//! host, and recorded in the `Default` album.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use goldleaf_core::error::CoreError;
use goldleaf_core::pagination::{Page, Paginated, GALLERY_PER_PAGE};
use goldleaf_core::slug::public_id_from_filename;
use goldleaf_core::types::DbId;
use goldleaf_db::models::media::{CreateMediaAsset, MediaAlbum, MediaAsset};
use goldleaf_db::repositories::{MediaAlbumRepo, MediaAssetRepo};
use goldleaf_media::host::DEFAULT_FOLDER;
use goldleaf_media::{compress_to_webp_blocking, UploadRequest};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireAuthor};
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Album every upload goes into.
pub const DEFAULT_ALBUM: &str = "Default";

/// Multipart field carrying the files.
const FILES_FIELD: &str = "files";

#[derive(Debug, Serialize)]
pub struct GalleryPage {
    pub album: MediaAlbum,
    pub assets: Paginated<MediaAsset>,
}

/// Asset title: the file name up to its first `.`.
fn title_from_filename(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

/// GET /api/v1/dashboard/gallery?page=
///
/// Newest first, 24 per page. Creates the default album on first visit.
pub async fn gallery(
    State(state): State<AppState>,
    RequireAuthor(_user): RequireAuthor,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<GalleryPage>>> {
    let album = MediaAlbumRepo::get_or_create(&state.pool, DEFAULT_ALBUM, DEFAULT_FOLDER).await?;
    let total = MediaAssetRepo::count(&state.pool).await?;
    let page = Page::resolve(params.page.as_deref(), GALLERY_PER_PAGE, total);
    let items = MediaAssetRepo::list_page(&state.pool, page.limit(), page.offset()).await?;

    Ok(Json(DataResponse {
        data: GalleryPage {
            album,
            assets: Paginated { items, page },
        },
    }))
}

/// GET /api/v1/dashboard/gallery/images
///
/// Every asset, newest first (the editor's image picker).
pub async fn list_images(
    State(state): State<AppState>,
    RequireAuthor(_user): RequireAuthor,
) -> AppResult<Json<DataResponse<Vec<MediaAsset>>>> {
    let assets = MediaAssetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/dashboard/gallery/upload
///
/// Multipart form with one or more `files` fields. Files are processed in
/// order; the first failure aborts the request, and files before it stay
/// uploaded.
pub async fn upload(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<MediaAsset>>>)> {
    let album = MediaAlbumRepo::get_or_create(&state.pool, DEFAULT_ALBUM, DEFAULT_FOLDER).await?;
    let mut uploaded = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if data.is_empty() {
            continue;
        }

        let asset = store_file(&state, &album, &filename, data.to_vec()).await?;
        tracing::info!(
            user_id = user.user_id,
            asset_id = asset.id,
            bytes = asset.bytes_size,
            public_id = %asset.public_id,
            "Gallery image uploaded"
        );
        uploaded.push(asset);
    }

    if uploaded.is_empty() {
        return Err(AppError::BadRequest("No files provided".into()));
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: uploaded })))
}

/// Compress, upload and record a single file.
async fn store_file(
    state: &AppState,
    album: &MediaAlbum,
    filename: &str,
    data: Vec<u8>,
) -> AppResult<MediaAsset> {
    let failed = |source| AppError::UploadFailed {
        file: filename.to_string(),
        source,
    };

    let compressed = compress_to_webp_blocking(data).await.map_err(failed)?;

    let mut public_id = public_id_from_filename(filename);
    if public_id.is_empty() {
        public_id = format!("upload-{}", Utc::now().timestamp_millis());
    }

    let image = state
        .media
        .upload(UploadRequest {
            bytes: compressed.bytes,
            folder: DEFAULT_FOLDER.to_string(),
            public_id,
            tags: Vec::new(),
        })
        .await
        .map_err(failed)?;

    let asset = MediaAssetRepo::create(
        &state.pool,
        &CreateMediaAsset {
            album_id: Some(album.id),
            title: title_from_filename(filename).to_string(),
            public_id: image.public_id,
            secure_url: image.secure_url,
            web_url: image.web_url,
            thumb_url: image.thumb_url,
            bytes_size: image.bytes,
            width: image.width,
            height: image.height,
            format: image.format,
            tags_csv: String::new(),
        },
    )
    .await?;
    Ok(asset)
}

/// DELETE /api/v1/dashboard/gallery/{id}
///
/// Removes the asset row only; the file stays on the media host.
pub async fn delete_image(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MediaAssetRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Media asset",
            id,
        }));
    }
    tracing::info!(user_id = user.user_id, asset_id = id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}
