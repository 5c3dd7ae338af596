use crate::domain::model::{Achievement, Project, SiteContent, SiteModel, Skill};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Local structured-content store. Returns all records for a category,
/// unfiltered and unsorted.
pub trait ContentStore: Send + Sync {
    fn load_projects(&self) -> impl std::future::Future<Output = Result<Vec<Project>>> + Send;
    fn load_achievements(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Achievement>>> + Send;
}

/// Remote content API for skills: enumerate slugs for path generation, or
/// fetch exactly one record. A missing record is a build failure, not a
/// recoverable condition.
pub trait SkillSource: Send + Sync {
    fn list_slugs(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn fetch_skill(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Skill>> + Send;
}

/// Preview-image service. `None` means the service had no result for this URL
/// and the caller falls back to the original.
pub trait PreviewService: Send + Sync {
    fn placeholder_for(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_dir(&self) -> &str;
    fn skill_api_endpoint(&self) -> &str;
    fn preview_endpoint(&self) -> &str;
    fn media_host(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteContent>;
    async fn transform(&self, content: SiteContent) -> Result<SiteModel>;
    async fn load(&self, model: SiteModel) -> Result<String>;
}
