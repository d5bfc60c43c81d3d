//! Public content endpoints for the marketing site.
//!
//! Everything here is read-only and unauthenticated. Delimiter-encoded
//! columns are returned both raw (on the flattened row) and parsed.

use axum::extract::{Path, Query, State};
use axum::Json;
use goldleaf_core::content::render_content;
use goldleaf_core::error::CoreError;
use goldleaf_core::fields::{
    self, FaqItem, HeroStat, ProcessStepItem, ShowcaseProject, SpecItem, StatStripItem,
    TimelineItem,
};
use goldleaf_core::html::strip_tags;
use goldleaf_core::pages::{validate_metadata_page, PAGE_HOME, PAGE_SERVICES};
use goldleaf_core::pagination::{Page, Paginated, INSIGHTS_PER_PAGE};
use goldleaf_core::types::{DbId, Timestamp};
use goldleaf_db::models::hero::Hero;
use goldleaf_db::models::insight::Insight;
use goldleaf_db::models::intro_settings::IntroSettings;
use goldleaf_db::models::page_metadata::PageMetadata;
use goldleaf_db::models::process_step::ProcessStep;
use goldleaf_db::models::project::Project;
use goldleaf_db::models::service::Service;
use goldleaf_db::repositories::{
    HeroRepo, InsightRepo, IntroSettingsRepo, PageMetadataRepo, ProcessStepRepo, ProjectRepo,
    ServiceRepo,
};
use goldleaf_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{MetadataQuery, PageParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Services shown when nothing is featured, and the footer cap.
const FALLBACK_SERVICE_COUNT: i64 = 6;
/// Featured projects on the home page.
const HOME_PROJECT_COUNT: i64 = 4;
/// Related services on a service page.
const RELATED_SERVICE_COUNT: i64 = 3;
/// Showcase services on a service page.
const SHOWCASE_SERVICE_COUNT: i64 = 4;
/// Related projects on a project page.
const RELATED_PROJECT_COUNT: i64 = 3;
/// Recent posts under an insight.
const RECENT_INSIGHT_COUNT: i64 = 3;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A hero banner with its stats parsed.
#[derive(Debug, Serialize)]
pub struct HeroView {
    #[serde(flatten)]
    pub hero: Hero,
    pub stats: Vec<HeroStat>,
}

impl From<Hero> for HeroView {
    fn from(hero: Hero) -> Self {
        let stats = fields::parse_hero_stats(&hero.stats_data);
        Self { hero, stats }
    }
}

/// A service card: the row plus its markup-free title.
#[derive(Debug, Serialize)]
pub struct ServiceCard {
    #[serde(flatten)]
    pub service: Service,
    pub clean_title: String,
}

impl From<Service> for ServiceCard {
    fn from(service: Service) -> Self {
        let clean_title = strip_tags(&service.title);
        Self {
            service,
            clean_title,
        }
    }
}

fn cards(services: Vec<Service>) -> Vec<ServiceCard> {
    services.into_iter().map(ServiceCard::from).collect()
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub hero: Option<HeroView>,
    pub services: Vec<ServiceCard>,
    pub featured_projects: Vec<Project>,
    pub intro: IntroSettings,
}

#[derive(Debug, Serialize)]
pub struct ServicesPage {
    pub hero: Option<HeroView>,
    pub services: Vec<ServiceCard>,
    pub process_steps: Vec<ProcessStep>,
}

/// A service page with every structured field parsed.
#[derive(Debug, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub clean_title: String,
    pub stats_strip: Vec<StatStripItem>,
    pub overview_paragraphs: Vec<String>,
    pub included_items: Vec<String>,
    pub timeline: Vec<TimelineItem>,
    pub service_process_steps: Vec<ProcessStepItem>,
    pub showcase_projects: Vec<ShowcaseProject>,
    pub specs: Vec<SpecItem>,
    pub faqs: Vec<FaqItem>,
    pub related: Vec<ServiceCard>,
    pub showcase_services: Vec<ServiceCard>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub specs: Vec<SpecItem>,
    pub gallery: Vec<String>,
    pub related_service: Option<ServiceCard>,
    pub related: Vec<Project>,
}

/// An insight as listed on the blog, without its body.
#[derive(Debug, Serialize)]
pub struct InsightCard {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image_url: String,
    pub author_username: Option<String>,
    pub published_at: Option<Timestamp>,
}

impl From<Insight> for InsightCard {
    fn from(insight: Insight) -> Self {
        Self {
            id: insight.id,
            title: insight.title,
            slug: insight.slug,
            excerpt: insight.excerpt,
            featured_image_url: insight.featured_image_url,
            author_username: insight.author_username,
            published_at: insight.published_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightDetail {
    #[serde(flatten)]
    pub insight: Insight,
    pub content_html: String,
    pub recent: Vec<InsightCard>,
}

#[derive(Debug, Serialize)]
pub struct FooterService {
    pub title: String,
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/site/home
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let hero = HeroRepo::find_active_for_page(&state.pool, PAGE_HOME).await?;
    let services = featured_or_first(&state.pool, None).await?;
    let featured_projects = ProjectRepo::list_featured(&state.pool, HOME_PROJECT_COUNT).await?;
    let intro = IntroSettingsRepo::get(&state.pool).await?;

    Ok(Json(DataResponse {
        data: HomePage {
            hero: hero.map(HeroView::from),
            services: cards(services),
            featured_projects,
            intro,
        },
    }))
}

/// GET /api/v1/site/services
pub async fn services(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ServicesPage>>> {
    let hero = HeroRepo::find_active_for_page(&state.pool, PAGE_SERVICES).await?;
    let mut services = ServiceRepo::list_featured(&state.pool, None).await?;
    if services.is_empty() {
        services = ServiceRepo::list(&state.pool).await?;
    }
    let process_steps = ProcessStepRepo::list_active(&state.pool).await?;

    Ok(Json(DataResponse {
        data: ServicesPage {
            hero: hero.map(HeroView::from),
            services: cards(services),
            process_steps,
        },
    }))
}

/// GET /api/v1/site/services/{slug}
pub async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ServiceDetail>>> {
    let service = ServiceRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found("Service", slug))?;

    let related_slugs = fields::parse_csv_list(&service.related_services);
    let related = ServiceRepo::list_by_slugs(
        &state.pool,
        &related_slugs,
        service.id,
        RELATED_SERVICE_COUNT,
    )
    .await?;
    let showcase =
        ServiceRepo::list_featured_excluding(&state.pool, service.id, SHOWCASE_SERVICE_COUNT)
            .await?;

    Ok(Json(DataResponse {
        data: ServiceDetail {
            clean_title: strip_tags(&service.title),
            stats_strip: fields::parse_stats_strip(&service.stats_strip_data),
            overview_paragraphs: fields::parse_paragraphs(&service.overview_content),
            included_items: fields::parse_lines(&service.whats_included),
            timeline: fields::parse_timeline(&service.timeline_data),
            service_process_steps: fields::parse_process_steps(&service.process_steps_data),
            showcase_projects: fields::parse_showcase_projects(&service.showcase_projects_data),
            specs: fields::parse_service_specs(&service.specs_data),
            faqs: fields::parse_faqs(&service.faq_data),
            related: cards(related),
            showcase_services: cards(showcase),
            service,
        },
    }))
}

/// GET /api/v1/site/projects
pub async fn projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProjectsPage>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let categories = ProjectRepo::list_categories(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ProjectsPage {
            projects,
            categories,
        },
    }))
}

/// GET /api/v1/site/projects/{slug}
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found("Project", slug))?;

    let related_service = match project.related_service_id {
        Some(id) => ServiceRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    let related = ProjectRepo::list_related(&state.pool, project.id, RELATED_PROJECT_COUNT).await?;

    Ok(Json(DataResponse {
        data: ProjectDetail {
            specs: fields::parse_project_specs(&project.specs_data),
            gallery: fields::parse_csv_list(&project.gallery_images),
            related_service: related_service.map(ServiceCard::from),
            related,
            project,
        },
    }))
}

/// GET /api/v1/site/insights?page=
pub async fn insights(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Paginated<InsightCard>>>> {
    let total = InsightRepo::count_published(&state.pool).await?;
    let page = Page::resolve(params.page.as_deref(), INSIGHTS_PER_PAGE, total);
    let items = InsightRepo::list_published(&state.pool, page.limit(), page.offset()).await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items: items.into_iter().map(InsightCard::from).collect(),
            page,
        },
    }))
}

/// GET /api/v1/site/insights/{slug}
///
/// Drafts are not found.
pub async fn insight_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<InsightDetail>>> {
    let insight = InsightRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found("Insight", slug))?;

    let recent =
        InsightRepo::list_recent_published_excluding(&state.pool, insight.id, RECENT_INSIGHT_COUNT)
            .await?;

    Ok(Json(DataResponse {
        data: InsightDetail {
            content_html: render_content(&insight.content),
            recent: recent.into_iter().map(InsightCard::from).collect(),
            insight,
        },
    }))
}

/// GET /api/v1/site/footer
pub async fn footer(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FooterService>>>> {
    let services = featured_or_first(&state.pool, Some(FALLBACK_SERVICE_COUNT)).await?;
    let links = services
        .into_iter()
        .map(|s| FooterService {
            title: strip_tags(&s.title),
            slug: s.slug,
        })
        .collect();
    Ok(Json(DataResponse { data: links }))
}

/// GET /api/v1/site/metadata?page=&custom_slug=
pub async fn metadata(
    State(state): State<AppState>,
    Query(params): Query<MetadataQuery>,
) -> AppResult<Json<DataResponse<PageMetadata>>> {
    validate_metadata_page(&params.page)?;
    let custom_slug = params.custom_slug.trim();
    let metadata = PageMetadataRepo::find_for_page(&state.pool, &params.page, custom_slug)
        .await?
        .ok_or_else(|| {
            let key = if custom_slug.is_empty() {
                params.page.clone()
            } else {
                format!("{}/{custom_slug}", params.page)
            };
            not_found("Page metadata", key)
        })?;
    Ok(Json(DataResponse { data: metadata }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Featured services (optionally capped), or the first few services when
/// none are featured.
async fn featured_or_first(pool: &DbPool, limit: Option<i64>) -> AppResult<Vec<Service>> {
    let featured = ServiceRepo::list_featured(pool, limit).await?;
    if !featured.is_empty() {
        return Ok(featured);
    }
    Ok(ServiceRepo::list_first(pool, FALLBACK_SERVICE_COUNT).await?)
}

fn not_found(entity: &'static str, key: String) -> AppError {
    AppError::Core(CoreError::NotFoundByKey { entity, key })
}
