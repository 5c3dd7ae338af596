use crate::core::mapper;
use crate::core::resolver;
use crate::domain::model::{SiteContent, SiteModel};
use crate::domain::ports::{
    ConfigProvider, ContentStore, Pipeline, PreviewService, SkillSource, Storage,
};
use crate::render::PageRenderer;
use crate::utils::error::Result;

/// The build pipeline: pulls raw records from both content sources, shapes
/// them into view-models, and writes rendered pages through the storage port.
pub struct SitePipeline<T, K, V, S, C> {
    content: T,
    skills: K,
    previews: V,
    storage: S,
    config: C,
    renderer: PageRenderer,
}

impl<T, K, V, S, C> SitePipeline<T, K, V, S, C>
where
    T: ContentStore,
    K: SkillSource,
    V: PreviewService,
    S: Storage,
    C: ConfigProvider,
{
    pub fn new(content: T, skills: K, previews: V, storage: S, config: C) -> Result<Self> {
        Ok(Self {
            content,
            skills,
            previews,
            storage,
            config,
            renderer: PageRenderer::new()?,
        })
    }

    async fn write_page(&self, path: &str, html: &str) -> Result<()> {
        tracing::debug!("Writing page: {}", path);
        self.storage.write_file(path, html.as_bytes()).await
    }
}

#[async_trait::async_trait]
impl<T, K, V, S, C> Pipeline for SitePipeline<T, K, V, S, C>
where
    T: ContentStore,
    K: SkillSource,
    V: PreviewService,
    S: Storage,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<SiteContent> {
        let projects = self.content.load_projects().await?;
        let achievements = self.content.load_achievements().await?;

        // One fetch per enumerated path, sequential. A slug that fails to
        // resolve fails the whole build.
        let slugs = self.skills.list_slugs().await?;
        tracing::debug!("Skill paths: {:?}", slugs);
        let mut skills = Vec::with_capacity(slugs.len());
        for slug in &slugs {
            skills.push(self.skills.fetch_skill(slug).await?);
        }

        Ok(SiteContent {
            projects,
            achievements,
            skills,
        })
    }

    async fn transform(&self, content: SiteContent) -> Result<SiteModel> {
        let media_host = self.config.media_host();

        let mut projects = Vec::with_capacity(content.projects.len());
        for raw in content.projects {
            let mut view = mapper::project_view(raw);
            view.placeholder_image =
                resolver::resolve_placeholder(&self.previews, media_host, view.image.as_ref())
                    .await?;
            projects.push(view);
        }
        mapper::sort_projects(&mut projects);

        let mut achievements: Vec<_> = content
            .achievements
            .into_iter()
            .map(mapper::achievement_view)
            .collect();
        mapper::sort_achievements(&mut achievements);

        let skills = content.skills.into_iter().map(mapper::skill_view).collect();

        Ok(SiteModel {
            projects,
            achievements,
            skills,
        })
    }

    async fn load(&self, model: SiteModel) -> Result<String> {
        self.write_page("index.html", &self.renderer.home(&model.skills)?)
            .await?;

        self.write_page(
            "projects/index.html",
            &self.renderer.projects_index(&model.projects)?,
        )
        .await?;

        for project in &model.projects {
            let path = format!("projects/{}/index.html", project.slug);
            self.write_page(&path, &self.renderer.project_detail(project)?)
                .await?;
        }

        self.write_page(
            "achievements/index.html",
            &self.renderer.achievements_index(&model.achievements)?,
        )
        .await?;

        for skill in &model.skills {
            let path = format!("skills/{}/index.html", skill.slug);
            self.write_page(&path, &self.renderer.skill_detail(skill)?)
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
