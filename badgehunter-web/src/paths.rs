//! Deployment base path handling.
//!
//! `PUBLIC_URL` (e.g. `/badge-hunter` on GitHub Pages) is read at compile
//! time and prefixes both router paths and badge artwork.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalized_base(public_url())
}

/// Source for a badge's artwork. Absolute URLs pass through; relative paths
/// are anchored under the deployment base.
#[must_use]
pub fn image_src(image_url: &str) -> String {
    resolve_against(image_url, public_url())
}

fn normalized_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn resolve_against(url: &str, base: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") {
        return url.to_string();
    }
    let relative = url.trim_start_matches('/');
    normalized_base(base).map_or_else(
        || format!("/{relative}"),
        |base| format!("{base}/{relative}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_images_are_untouched() {
        assert_eq!(
            resolve_against("https://github.githubassets.com/x.png", "/hunt"),
            "https://github.githubassets.com/x.png"
        );
    }

    #[test]
    fn relative_images_follow_the_base() {
        assert_eq!(resolve_against("img/shark.png", ""), "/img/shark.png");
        assert_eq!(resolve_against("/img/shark.png", "/hunt/"), "/hunt/img/shark.png");
    }

    #[test]
    fn blank_base_means_root_router() {
        assert_eq!(normalized_base("  "), None);
        assert_eq!(normalized_base("/hunt/"), Some("/hunt".to_string()));
        assert_eq!(router_base(), normalized_base(public_url()));
    }
}
