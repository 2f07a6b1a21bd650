//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod edition_repo;
pub mod organisation_repo;
pub mod statistics_announcement_repo;
pub mod topic_repo;
pub mod unpublishing_repo;
pub mod user_repo;

pub use edition_repo::EditionRepo;
pub use organisation_repo::OrganisationRepo;
pub use statistics_announcement_repo::StatisticsAnnouncementRepo;
pub use topic_repo::TopicRepo;
pub use unpublishing_repo::UnpublishingRepo;
pub use user_repo::UserRepo;
