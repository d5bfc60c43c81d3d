//! HTTP-level integration tests for the public `/site` endpoints.
//!
//! Content is seeded through the repository layer so the tests focus on
//! what the site exposes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use goldleaf_db::models::hero::CreateHero;
use goldleaf_db::models::insight::CreateInsight;
use goldleaf_db::models::page_metadata::CreatePageMetadata;
use goldleaf_db::models::project::CreateProject;
use goldleaf_db::models::service::CreateService;
use goldleaf_db::repositories::{
    HeroRepo, InsightRepo, PageMetadataRepo, ProjectRepo, ServiceRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_service(pool: &PgPool, title: &str, featured: bool, order: i32) -> i64 {
    ServiceRepo::create(
        pool,
        &CreateService {
            title: title.to_string(),
            featured: Some(featured),
            sort_order: Some(order),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_project(pool: &PgPool, title: &str, category: &str, featured: bool) -> i64 {
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: title.to_string(),
            location: "Dubai Hills".to_string(),
            category: category.to_string(),
            featured: Some(featured),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_insight(pool: &PgPool, title: &str, status: &str) {
    let published = status == "published";
    InsightRepo::create(
        pool,
        &CreateInsight {
            title: title.to_string(),
            content: Some(
                r#"{"blocks":[{"type":"paragraph","data":{"text":"Water <b>early</b>."}}]}"#
                    .to_string(),
            ),
            status: Some(status.to_string()),
            published_at: published.then(chrono::Utc::now),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Home and services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_falls_back_to_first_services(pool: PgPool) {
    for i in 0..8 {
        seed_service(&pool, &format!("Service {i}"), false, i).await;
    }
    HeroRepo::create(
        &pool,
        &CreateHero {
            title: "Gardens that last".into(),
            stats_data: Some("140+|Villas,12|Years".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let response = get(build_test_app(pool), "/api/v1/site/home").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["services"].as_array().unwrap().len(), 6);
    assert_eq!(data["services"][0]["title"], "Service 0");
    assert_eq!(data["hero"]["title"], "Gardens that last");
    assert_eq!(data["hero"]["stats"][0]["number"], "140+");
    assert_eq!(data["hero"]["stats"][1]["label"], "Years");
    assert!(data["intro"].is_object());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_prefers_featured_services(pool: PgPool) {
    seed_service(&pool, "Plain", false, 0).await;
    seed_service(&pool, "Pools", true, 2).await;
    seed_service(&pool, "Lighting", true, 1).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/site/home").await).await;
    let services = json["data"]["services"].as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["title"], "Lighting");
    assert_eq!(services[1]["title"], "Pools");
    assert!(json["data"]["hero"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_detail_parses_structured_fields(pool: PgPool) {
    let related_id = seed_service(&pool, "Irrigation", false, 0).await;
    ServiceRepo::create(
        &pool,
        &CreateService {
            title: "Pool <em>Design</em>".into(),
            slug: Some("pool-design".into()),
            stats_strip_data: Some("140+|Pools|Since 2012,3-8|Weeks|Per build".into()),
            timeline_data: Some("Week 1|Survey,Week 2|Dig".into()),
            faq_data: Some("Do you maintain?|Yes".into()),
            whats_included: Some("Design\n\nBuild\n".into()),
            related_services: Some("irrigation, pool-design, missing".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let response = get(build_test_app(pool), "/api/v1/site/services/pool-design").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["clean_title"], "Pool Design");
    assert_eq!(data["stats_strip"].as_array().unwrap().len(), 2);
    assert_eq!(data["stats_strip"][1]["subtext"], "Per build");
    assert_eq!(data["timeline"][0]["week"], "Week 1");
    assert_eq!(data["faqs"][0]["answer"], "Yes");
    assert_eq!(data["included_items"], serde_json::json!(["Design", "Build"]));
    // The service never relates to itself.
    let related = data["related"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["id"], related_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_service_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/site/services/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_lists_categories(pool: PgPool) {
    seed_project(&pool, "Palm Villa", "Residential", true).await;
    seed_project(&pool, "Marina Roof", "Commercial", false).await;
    seed_project(&pool, "Hills Villa", "Residential", false).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/site/projects").await).await;
    let data = &json["data"];
    assert_eq!(data["projects"].as_array().unwrap().len(), 3);
    assert_eq!(data["projects"][0]["title"], "Palm Villa");
    let mut categories: Vec<String> = data["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect();
    categories.sort();
    assert_eq!(categories, vec!["Commercial", "Residential"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_detail_excludes_itself_from_related(pool: PgPool) {
    let service_id = seed_service(&pool, "Hardscape", false, 0).await;
    ProjectRepo::create(
        &pool,
        &CreateProject {
            title: "Desert Courtyard".into(),
            location: "Al Barari".into(),
            category: "Residential".into(),
            specs_data: Some("Area|1200 sqm,Duration|10 weeks".into()),
            gallery_images: Some("https://img/a.jpg, https://img/b.jpg".into()),
            related_service_id: Some(service_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    for i in 0..4 {
        seed_project(&pool, &format!("Other {i}"), "Commercial", i % 2 == 0).await;
    }

    let response = get(build_test_app(pool), "/api/v1/site/projects/desert-courtyard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["specs"][0]["key"], "Area");
    assert_eq!(data["gallery"].as_array().unwrap().len(), 2);
    assert_eq!(data["related_service"]["id"], service_id);
    let related = data["related"].as_array().unwrap();
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p["slug"] != "desert-courtyard"));
    // Featured projects fill the list first.
    assert_eq!(related[0]["featured"], true);
    assert_eq!(related[1]["featured"], true);
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insights_are_paginated(pool: PgPool) {
    for i in 0..14 {
        seed_insight(&pool, &format!("Post {i}"), "published").await;
    }
    seed_insight(&pool, "Hidden draft", "draft").await;

    let json = body_json(get(build_test_app(pool.clone()), "/api/v1/site/insights").await).await;
    let page = &json["data"]["page"];
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 12);
    assert_eq!(page["total"], 14);
    assert_eq!(page["num_pages"], 2);
    assert_eq!(page["has_next"], true);

    let json =
        body_json(get(build_test_app(pool.clone()), "/api/v1/site/insights?page=2").await).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);

    // Out-of-range pages clamp to the last page.
    let json = body_json(get(build_test_app(pool), "/api/v1/site/insights?page=99").await).await;
    assert_eq!(json["data"]["page"]["number"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insight_detail_renders_blocks(pool: PgPool) {
    seed_insight(&pool, "Summer Watering", "published").await;
    seed_insight(&pool, "Older Post", "published").await;

    let response = get(build_test_app(pool), "/api/v1/site/insights/summer-watering").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["content_html"], "<p>Water <b>early</b>.</p>");
    let recent = data["recent"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["slug"], "older-post");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_insight_is_404(pool: PgPool) {
    seed_insight(&pool, "Work In Progress", "draft").await;

    let response = get(build_test_app(pool), "/api/v1/site/insights/work-in-progress").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Footer and metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_footer_caps_featured_services(pool: PgPool) {
    for i in 0..8 {
        seed_service(&pool, &format!("<b>Featured</b> {i}"), true, i).await;
    }

    let json = body_json(get(build_test_app(pool), "/api/v1/site/footer").await).await;
    let links = json["data"].as_array().unwrap();
    assert_eq!(links.len(), 6);
    assert_eq!(links[0]["title"], "Featured 0");
    assert!(links[0]["slug"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metadata_lookup(pool: PgPool) {
    PageMetadataRepo::create(
        &pool,
        &CreatePageMetadata {
            page: Some("custom".into()),
            custom_slug: Some("villa-care".into()),
            title: "Villa Care | Gold Leaf".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/site/metadata?page=custom&custom_slug=villa-care",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Villa Care | Gold Leaf");

    let response = get(build_test_app(pool.clone()), "/api/v1/site/metadata?page=home").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool), "/api/v1/site/metadata?page=pricing").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
