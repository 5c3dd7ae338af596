use crate::domain::model::{Achievement, Project};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based content layer: one TOML document per record, grouped by
/// category directory (`projects/`, `achievements/`). Records come back
/// unfiltered and unsorted; ordering is the presentation layer's concern.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    content_dir: PathBuf,
}

impl FileContentStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    fn category_files(&self, category: &str) -> Result<Vec<PathBuf>> {
        let dir = self.content_dir.join(category);
        if !dir.exists() {
            tracing::warn!("Content category directory missing: {}", dir.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("toml") {
                files.push(path);
            }
        }
        Ok(files)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

impl ContentStore for FileContentStore {
    async fn load_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for path in self.category_files("projects")? {
            let raw = fs::read_to_string(&path)?;
            let mut project: Project = toml::from_str(&raw)?;
            if project.slug.is_empty() {
                project.slug = file_stem(&path);
            }
            projects.push(project);
        }
        tracing::debug!("Loaded {} project records", projects.len());
        Ok(projects)
    }

    async fn load_achievements(&self) -> Result<Vec<Achievement>> {
        let mut achievements = Vec::new();
        for path in self.category_files("achievements")? {
            let raw = fs::read_to_string(&path)?;
            let mut achievement: Achievement = toml::from_str(&raw)?;
            if achievement.id.is_empty() {
                achievement.id = file_stem(&path);
            }
            achievements.push(achievement);
        }
        tracing::debug!("Loaded {} achievement records", achievements.len());
        Ok(achievements)
    }
}
