//! Presentation layer. Stateless page rendering from pre-sorted view-models;
//! templates are embedded so the binary carries everything it needs.

use crate::domain::model::{AchievementView, ProjectView, SkillView};
use crate::utils::error::Result;
use tera::{Context, Tera};

const BASE: &str = include_str!("templates/base.html");
const HOME: &str = include_str!("templates/home.html");
const PROJECTS: &str = include_str!("templates/projects.html");
const PROJECT: &str = include_str!("templates/project.html");
const ACHIEVEMENTS: &str = include_str!("templates/achievements.html");
const SKILL: &str = include_str!("templates/skill.html");

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("home.html", HOME),
            ("projects.html", PROJECTS),
            ("project.html", PROJECT),
            ("achievements.html", ACHIEVEMENTS),
            ("skill.html", SKILL),
        ])?;
        Ok(Self { tera })
    }

    pub fn home(&self, skills: &[SkillView]) -> Result<String> {
        let mut context = Context::new();
        context.insert("skills", skills);
        Ok(self.tera.render("home.html", &context)?)
    }

    /// Project listing. Expects the caller to have sorted by display priority.
    pub fn projects_index(&self, projects: &[ProjectView]) -> Result<String> {
        let mut context = Context::new();
        context.insert("projects", projects);
        Ok(self.tera.render("projects.html", &context)?)
    }

    pub fn project_detail(&self, project: &ProjectView) -> Result<String> {
        let mut context = Context::new();
        context.insert("project", project);
        Ok(self.tera.render("project.html", &context)?)
    }

    /// Achievement listing. Expects the caller to have sorted by date.
    pub fn achievements_index(&self, achievements: &[AchievementView]) -> Result<String> {
        let mut context = Context::new();
        context.insert("achievements", achievements);
        Ok(self.tera.render("achievements.html", &context)?)
    }

    pub fn skill_detail(&self, skill: &SkillView) -> Result<String> {
        let mut context = Context::new();
        context.insert("skill", skill);
        Ok(self.tera.render("skill.html", &context)?)
    }
}
