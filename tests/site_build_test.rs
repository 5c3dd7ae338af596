use folio_build::{
    CliConfig, FileContentStore, GraphClient, LocalStorage, PreviewClient, SiteEngine,
    SitePipeline,
};
use httpmock::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_content(content_dir: &Path, category: &str, name: &str, body: &str) {
    let dir = content_dir.join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

fn config(content_dir: &str, graphql_url: String, preview_url: String, output: &str) -> CliConfig {
    CliConfig {
        content_dir: content_dir.to_string(),
        skill_api_endpoint: graphql_url,
        preview_endpoint: preview_url,
        media_host: "res.cloudinary.com".to_string(),
        output_path: output.to_string(),
        verbose: false,
    }
}

fn mock_skill_paths<'a>(server: &'a MockServer, slugs: &[&str]) -> httpmock::Mock<'a> {
    let skills: Vec<serde_json::Value> =
        slugs.iter().map(|s| serde_json::json!({ "slug": s })).collect();
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("PageSkillPaths");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "data": { "skills": skills } }));
    })
}

fn mock_skill<'a>(server: &'a MockServer, slug: &str) -> httpmock::Mock<'a> {
    let body = serde_json::json!({
        "data": {
            "skill": {
                "iconName": slug,
                "id": format!("id-{}", slug),
                "link": format!("https://example.com/{}", slug),
                "name": slug.to_uppercase(),
                "description": format!("About {}", slug)
            }
        }
    });
    let slug = slug.to_string();
    server.mock(move |when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("PageSkill($slug")
            .body_contains(format!("\"slug\":\"{}\"", slug));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body.clone());
    })
}

#[tokio::test]
async fn test_end_to_end_build_writes_all_pages() {
    let content_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_content(
        content_dir.path(),
        "projects",
        "portfolio.toml",
        r#"
name = "Portfolio"
description = "This site"
link = "https://www.example.com/portfolio/"
github_link = "https://github.com/someone/portfolio"
level = 5

[image]
url = "https://res.cloudinary.com/demo/portfolio.png"
"#,
    );
    write_content(
        content_dir.path(),
        "projects",
        "sideproject.toml",
        r#"
name = "Side Project"
description = "A side project"
level = 1
"#,
    );
    write_content(
        content_dir.path(),
        "achievements",
        "hackathon.toml",
        r#"
title = "Hackathon Winner"
content = "Won first place"
date = "2023-05-01"
prize_value = "$500"
"#,
    );
    write_content(
        content_dir.path(),
        "achievements",
        "scholarship.toml",
        r#"
title = "Scholarship"
content = "Awarded a scholarship"
date = "2024-02-10"
"#,
    );

    let server = MockServer::start();
    let paths_mock = mock_skill_paths(&server, &["rust"]);
    let skill_mock = mock_skill(&server, "rust");
    let preview_mock = server.mock(|when, then| {
        when.method(GET).path("/preview");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "url": "data:image/png;base64,tiny" }));
    });

    let cfg = config(
        content_dir.path().to_str().unwrap(),
        server.url("/graphql"),
        server.url("/preview"),
        output_dir.path().to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(
        FileContentStore::new(cfg.content_dir.clone()),
        GraphClient::new(cfg.skill_api_endpoint.clone()),
        PreviewClient::new(cfg.preview_endpoint.clone()),
        LocalStorage::new(cfg.output_path.clone()),
        cfg,
    )
    .unwrap();

    let result = SiteEngine::new(pipeline).run().await;
    assert!(result.is_ok());

    paths_mock.assert();
    skill_mock.assert();
    // Both project images are on the media host or absent, so the preview
    // service is never consulted.
    preview_mock.assert_hits(0);

    for page in [
        "index.html",
        "projects/index.html",
        "projects/portfolio/index.html",
        "projects/sideproject/index.html",
        "achievements/index.html",
        "skills/rust/index.html",
    ] {
        assert!(
            output_dir.path().join(page).exists(),
            "missing page: {}",
            page
        );
    }

    // Listing order: higher display priority first.
    let projects_html =
        fs::read_to_string(output_dir.path().join("projects/index.html")).unwrap();
    assert!(
        projects_html.find("Portfolio").unwrap() < projects_html.find("Side Project").unwrap()
    );
    assert!(projects_html.contains("someone/portfolio"));
    assert!(projects_html.contains("example.com/portfolio"));

    // Media-host image keeps its original URL as the placeholder.
    let detail_html =
        fs::read_to_string(output_dir.path().join("projects/portfolio/index.html")).unwrap();
    assert!(detail_html.contains("https://res.cloudinary.com/demo/portfolio.png"));

    // Achievements in descending date order.
    let achievements_html =
        fs::read_to_string(output_dir.path().join("achievements/index.html")).unwrap();
    assert!(
        achievements_html.find("Scholarship").unwrap()
            < achievements_html.find("Hackathon Winner").unwrap()
    );
    assert!(achievements_html.contains("$500"));

    let skill_html = fs::read_to_string(output_dir.path().join("skills/rust/index.html")).unwrap();
    assert!(skill_html.contains("RUST"));
    assert!(skill_html.contains("About rust"));
}

#[tokio::test]
async fn test_external_image_gets_preview_placeholder() {
    let content_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    write_content(
        content_dir.path(),
        "projects",
        "external.toml",
        r#"
name = "External"
description = "Externally hosted image"

[image]
url = "https://example.com/shot.png"
"#,
    );

    let server = MockServer::start();
    mock_skill_paths(&server, &[]);
    let preview_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/preview")
            .query_param("url", "https://example.com/shot.png");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "url": "data:image/png;base64,lowres" }));
    });

    let cfg = config(
        content_dir.path().to_str().unwrap(),
        server.url("/graphql"),
        server.url("/preview"),
        output_dir.path().to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(
        FileContentStore::new(cfg.content_dir.clone()),
        GraphClient::new(cfg.skill_api_endpoint.clone()),
        PreviewClient::new(cfg.preview_endpoint.clone()),
        LocalStorage::new(cfg.output_path.clone()),
        cfg,
    )
    .unwrap();

    SiteEngine::new(pipeline).run().await.unwrap();

    preview_mock.assert();
    let detail_html =
        fs::read_to_string(output_dir.path().join("projects/external/index.html")).unwrap();
    assert!(detail_html.contains("data:image/png;base64,lowres"));
}

#[tokio::test]
async fn test_unknown_skill_slug_fails_the_build() {
    let content_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    mock_skill_paths(&server, &["ghost"]);
    // The slug is enumerated but the record query comes back empty.
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("PageSkill($slug");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "data": { "skill": null } }));
    });

    let cfg = config(
        content_dir.path().to_str().unwrap(),
        server.url("/graphql"),
        server.url("/preview"),
        output_dir.path().to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(
        FileContentStore::new(cfg.content_dir.clone()),
        GraphClient::new(cfg.skill_api_endpoint.clone()),
        PreviewClient::new(cfg.preview_endpoint.clone()),
        LocalStorage::new(cfg.output_path.clone()),
        cfg,
    )
    .unwrap();

    let result = SiteEngine::new(pipeline).run().await;

    assert!(result.is_err());
    // No partial output for the failed build's skill page.
    assert!(!output_dir.path().join("skills/ghost/index.html").exists());
}

#[tokio::test]
async fn test_unreachable_content_api_fails_the_build() {
    let content_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(503);
    });

    let cfg = config(
        content_dir.path().to_str().unwrap(),
        server.url("/graphql"),
        server.url("/preview"),
        output_dir.path().to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(
        FileContentStore::new(cfg.content_dir.clone()),
        GraphClient::new(cfg.skill_api_endpoint.clone()),
        PreviewClient::new(cfg.preview_endpoint.clone()),
        LocalStorage::new(cfg.output_path.clone()),
        cfg,
    )
    .unwrap();

    assert!(SiteEngine::new(pipeline).run().await.is_err());
}
