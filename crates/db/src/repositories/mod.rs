//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod hero_repo;
pub mod insight_repo;
pub mod intro_settings_repo;
pub mod media_album_repo;
pub mod media_asset_repo;
pub mod page_metadata_repo;
pub mod process_step_repo;
pub mod project_repo;
pub mod service_repo;
pub mod session_repo;
pub mod user_profile_repo;
pub mod user_repo;

pub use hero_repo::HeroRepo;
pub use insight_repo::InsightRepo;
pub use intro_settings_repo::IntroSettingsRepo;
pub use media_album_repo::MediaAlbumRepo;
pub use media_asset_repo::MediaAssetRepo;
pub use page_metadata_repo::PageMetadataRepo;
pub use process_step_repo::ProcessStepRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use user_profile_repo::UserProfileRepo;
pub use user_repo::UserRepo;
