use crate::domain::model::Skill;
use crate::domain::ports::SkillSource;
use crate::utils::error::{Result, SiteError};
use reqwest::Client;

const SKILL_QUERY: &str = r#"query PageSkill($slug: String!) {
  skill(where: { slug: $slug }) {
    iconName
    id
    link
    name
    description
  }
}"#;

const SKILL_PATHS_QUERY: &str = r#"query PageSkillPaths {
  skills {
    slug
  }
}"#;

/// GraphQL client for the headless content API serving skill records.
#[derive(Debug, Clone)]
pub struct GraphClient {
    endpoint: String,
    client: Client,
}

impl GraphClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    async fn query(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value> {
        tracing::debug!("GraphQL request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
            return Err(SiteError::GraphqlError {
                message: errors.to_string(),
            });
        }

        Ok(body.get("data").cloned().unwrap_or(serde_json::Value::Null))
    }
}

impl SkillSource for GraphClient {
    async fn list_slugs(&self) -> Result<Vec<String>> {
        let data = self
            .query(SKILL_PATHS_QUERY, serde_json::json!({}))
            .await?;

        let skills = data
            .get("skills")
            .and_then(|s| s.as_array())
            .cloned()
            .unwrap_or_default();

        let slugs = skills
            .iter()
            .filter_map(|s| s.get("slug").and_then(|v| v.as_str()))
            .map(str::to_string)
            .collect();
        Ok(slugs)
    }

    async fn fetch_skill(&self, slug: &str) -> Result<Skill> {
        let data = self
            .query(SKILL_QUERY, serde_json::json!({ "slug": slug }))
            .await?;

        match data.get("skill") {
            Some(value) if !value.is_null() => {
                let mut skill: Skill = serde_json::from_value(value.clone())?;
                // The query does not return the slug; it is the lookup key.
                skill.slug = slug.to_string();
                Ok(skill)
            }
            _ => Err(SiteError::ContentNotFound {
                kind: "skill".to_string(),
                slug: slug.to_string(),
            }),
        }
    }
}
