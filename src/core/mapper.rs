//! Pure view-model mapping. Every optional source field is coerced to an
//! explicit sentinel here, in one place, so the renderer can rely on a
//! consistent shape.

use crate::domain::model::{
    Achievement, AchievementView, Project, ProjectView, Skill, SkillView,
};
use crate::utils::links::{clean_link, github_owner_and_repo};
use chrono::NaiveDate;

pub fn project_view(project: Project) -> ProjectView {
    let link_label = project.link.as_deref().map(clean_link);
    let github_label = project.github_link.as_deref().map(github_owner_and_repo);

    ProjectView {
        slug: project.slug,
        name: project.name,
        description: project.description,
        link: project.link,
        link_label,
        github_link: project.github_link,
        github_label,
        image: project.image,
        video: project.video,
        badges: project.badges.unwrap_or_default(),
        level: project.level.unwrap_or(0),
        placeholder_image: None,
    }
}

pub fn achievement_view(achievement: Achievement) -> AchievementView {
    let date = achievement.date.unwrap_or_default();
    let date_display = display_date(&date);

    AchievementView {
        id: achievement.id,
        title: achievement.title,
        content: achievement.content,
        date,
        date_display,
        proof: achievement.proof,
        prize_value: achievement.prize_value,
        image: achievement.image,
    }
}

pub fn skill_view(skill: Skill) -> SkillView {
    let link_label = clean_link(&skill.link);

    SkillView {
        id: skill.id,
        slug: skill.slug,
        name: skill.name,
        description: skill.description,
        icon_name: skill.icon_name,
        link: skill.link,
        link_label,
    }
}

/// Descending by level; records without a level sort as level 0.
pub fn sort_projects(projects: &mut [ProjectView]) {
    projects.sort_by(|a, b| b.level.cmp(&a.level));
}

/// Descending lexicographic date-string compare; dateless records (empty
/// sentinel) sort last.
pub fn sort_achievements(achievements: &mut [AchievementView]) {
    achievements.sort_by(|a, b| b.date.cmp(&a.date));
}

fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
