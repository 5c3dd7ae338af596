use regex::Regex;
use std::sync::OnceLock;

fn github_repo_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"github\.com/([^/\s]+)/([^/\s#?]+)").expect("static regex is valid")
    })
}

/// Turns a full URL into the short label shown on link chips:
/// `https://www.example.com/page/` becomes `example.com/page`.
pub fn clean_link(link: &str) -> String {
    let mut cleaned = link;
    for prefix in ["https://", "http://"] {
        cleaned = cleaned.strip_prefix(prefix).unwrap_or(cleaned);
    }
    cleaned = cleaned.strip_prefix("www.").unwrap_or(cleaned);
    cleaned.trim_end_matches('/').to_string()
}

/// Extracts `owner/repo` from a GitHub URL, or falls back to the cleaned link
/// when the URL does not look like a repository.
pub fn github_owner_and_repo(link: &str) -> String {
    match github_repo_regex().captures(link) {
        Some(caps) => format!("{}/{}", &caps[1], &caps[2]),
        None => clean_link(link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_link() {
        assert_eq!(clean_link("https://www.example.com/page/"), "example.com/page");
        assert_eq!(clean_link("http://example.com"), "example.com");
        assert_eq!(clean_link("example.com/x"), "example.com/x");
    }

    #[test]
    fn test_github_owner_and_repo() {
        assert_eq!(
            github_owner_and_repo("https://github.com/rust-lang/rust"),
            "rust-lang/rust"
        );
        assert_eq!(
            github_owner_and_repo("https://github.com/rust-lang/rust/tree/master"),
            "rust-lang/rust"
        );
        assert_eq!(github_owner_and_repo("https://example.com/repo"), "example.com/repo");
    }
}
