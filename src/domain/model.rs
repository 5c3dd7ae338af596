use serde::{Deserialize, Serialize};

/// An image as authored in content: a URL plus optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A project record as it sits in the content store. Optional fields stay
/// optional here; defaulting happens in the view-model mapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub badges: Option<Vec<String>>,
    #[serde(default)]
    pub level: Option<i64>,
}

/// An achievement record as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub proof: Option<String>,
    #[serde(default)]
    pub prize_value: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// A skill record as returned by the remote content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "iconName")]
    pub icon_name: String,
    pub link: String,
}

/// Project view-model: consistent shape for the renderer. Absent optionals are
/// coerced to sentinels (`None`, empty vec, level 0) so templates never see an
/// inconsistent shape.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub link_label: Option<String>,
    pub github_link: Option<String>,
    pub github_label: Option<String>,
    pub image: Option<ImageRef>,
    pub video: Option<String>,
    pub badges: Vec<String>,
    pub level: i64,
    pub placeholder_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Raw date string used as the sort key; empty when the source had none.
    pub date: String,
    pub date_display: String,
    pub proof: Option<String>,
    pub prize_value: Option<String>,
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon_name: String,
    pub link: String,
    pub link_label: String,
}

/// Raw records pulled from both content sources, one build's worth.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub skills: Vec<Skill>,
}

/// Mapped, resolved and sorted view-models ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct SiteModel {
    pub projects: Vec<ProjectView>,
    pub achievements: Vec<AchievementView>,
    pub skills: Vec<SkillView>,
}
