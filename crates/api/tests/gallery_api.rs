//! HTTP-level integration tests for the gallery endpoints.
//!
//! Uploads go through the real compression pipeline into an in-memory
//! media host.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_media, delete_auth, get_auth, png_bytes,
    post_files_auth, token_for_role, MEDIA_BASE_URL,
};
use goldleaf_core::roles::Role;
use goldleaf_db::repositories::MediaAssetRepo;
use goldleaf_media::MockMediaHost;
use sqlx::PgPool;

const UPLOAD_URI: &str = "/api/v1/dashboard/gallery/upload";

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_records_assets_in_default_album(pool: PgPool) {
    let token = token_for_role(&pool, "uploader", Role::BlogAuthor).await;
    let media = Arc::new(MockMediaHost::new(MEDIA_BASE_URL));

    let response = post_files_auth(
        build_test_app_with_media(pool.clone(), media.clone()),
        UPLOAD_URI,
        &[
            ("Palm Villa.Garden.png", png_bytes(64, 48)),
            ("lawn.png", png_bytes(32, 32)),
        ],
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let assets = json["data"].as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0]["title"], "Palm Villa");
    assert_eq!(assets[0]["public_id"], "uploads/palm-villagarden");
    assert_eq!(assets[0]["format"], "webp");
    assert!(assets[0]["album_id"].is_number());

    let uploads = media.uploads();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[1].public_id, "lawn");
    assert_eq!(uploads[1].folder, "uploads");
    assert!(uploads[1].tags.is_empty());
    // Uploaded bytes are WebP.
    assert_eq!(&uploads[0].bytes[..4], b"RIFF");
    assert_eq!(&uploads[0].bytes[8..12], b"WEBP");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_stops_at_first_failure(pool: PgPool) {
    let token = token_for_role(&pool, "stopper", Role::Admin).await;
    let media = Arc::new(MockMediaHost::new(MEDIA_BASE_URL).failing_on("broken"));

    let response = post_files_auth(
        build_test_app_with_media(pool.clone(), media.clone()),
        UPLOAD_URI,
        &[
            ("first.png", png_bytes(16, 16)),
            ("broken.png", png_bytes(16, 16)),
            ("never.png", png_bytes(16, 16)),
        ],
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to upload broken.png:"));

    // The file before the failure stays uploaded; the one after is never sent.
    assert_eq!(media.uploads().len(), 1);
    assert_eq!(MediaAssetRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_rejects_non_images(pool: PgPool) {
    let token = token_for_role(&pool, "texter", Role::Admin).await;

    let response = post_files_auth(
        build_test_app(pool.clone()),
        UPLOAD_URI,
        &[("notes.png", b"definitely not a png".to_vec())],
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_IMAGE");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to upload notes.png:"));
    assert_eq!(MediaAssetRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_without_files_is_400(pool: PgPool) {
    let token = token_for_role(&pool, "empty", Role::Admin).await;

    let response = post_files_auth(build_test_app(pool), UPLOAD_URI, &[], &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No files provided");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gallery_pages_newest_first(pool: PgPool) {
    let token = token_for_role(&pool, "browser", Role::BlogAuthor).await;

    let files: Vec<(String, Vec<u8>)> = (0..26)
        .map(|i| (format!("img-{i}.png"), png_bytes(8, 8)))
        .collect();
    let parts: Vec<(&str, Vec<u8>)> = files
        .iter()
        .map(|(name, bytes)| (name.as_str(), bytes.clone()))
        .collect();
    let response = post_files_auth(build_test_app(pool.clone()), UPLOAD_URI, &parts, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/dashboard/gallery",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["album"]["title"], "Default");
    assert_eq!(data["album"]["cld_folder"], "uploads");
    assert_eq!(data["assets"]["items"].as_array().unwrap().len(), 24);
    assert_eq!(data["assets"]["items"][0]["title"], "img-25");
    assert_eq!(data["assets"]["page"]["num_pages"], 2);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/dashboard/gallery?page=2",
        &token,
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["assets"]["items"].as_array().unwrap().len(), 2);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/dashboard/gallery/images",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 26);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gallery_browsing_requires_author(pool: PgPool) {
    let token = token_for_role(&pool, "lurker", Role::User).await;

    let response = get_auth(build_test_app(pool), "/api/v1/dashboard/gallery", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let token = token_for_role(&pool, "cleaner", Role::Admin).await;

    let response = post_files_auth(
        build_test_app(pool.clone()),
        UPLOAD_URI,
        &[("old.png", png_bytes(8, 8))],
        &token,
    )
    .await;
    let id = body_json(response).await["data"][0]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/dashboard/gallery/{id}");
    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
