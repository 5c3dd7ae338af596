//! Preview-image resolution. The only stage with an external-call side effect:
//! images not already served from the site's media host are swapped for a
//! low-resolution placeholder fetched from the preview service.

use crate::domain::model::ImageRef;
use crate::domain::ports::PreviewService;
use crate::utils::error::Result;
use url::Url;

/// Ownership rule: a URL is site-hosted when its host matches the configured
/// media host. Relative URLs (unparsable as absolute) resolve against the site
/// itself and count as site-hosted too.
pub fn is_site_hosted(url: &str, media_host: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str() == Some(media_host),
        Err(_) => true,
    }
}

/// Decides the placeholder for a project image:
/// - no image: `None`, no external call;
/// - site-hosted URL: the original URL, no external call;
/// - anything else: the preview service's result, falling back to the
///   original URL when the service has none.
pub async fn resolve_placeholder<P: PreviewService>(
    previews: &P,
    media_host: &str,
    image: Option<&ImageRef>,
) -> Result<Option<String>> {
    let Some(image) = image else {
        return Ok(None);
    };

    if is_site_hosted(&image.url, media_host) {
        return Ok(Some(image.url.clone()));
    }

    tracing::debug!("Requesting preview placeholder for {}", image.url);
    let placeholder = previews.placeholder_for(&image.url).await?;
    Ok(Some(placeholder.unwrap_or_else(|| image.url.clone())))
}
