use std::sync::LazyLock;
use regex::Regex;
use url::Url;

/// Substring every platform host carries
pub const PLATFORM_DOMAIN: &str = "tiktok.com";

/// Hosts that only serve redirects to the real content URL
pub const SHORT_LINK_HOSTS: &[&str] = &["vm.tiktok.com", "vt.tiktok.com"];

/// Path prefix of short links served from the main host (`www.tiktok.com/t/...`)
pub const SHORT_LINK_PATH_PREFIX: &str = "/t/";

static SHARED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://\S+").expect("valid shared URL pattern")
});

/// Pulls the first http(s) URL out of free-form shared text.
///
/// Share sheets usually wrap the link in a caption ("Check out this video! https://vm.tiktok.com/ZM...").
/// When no URL-looking token exists, the trimmed text itself is returned so
/// bare inputs like `vm.tiktok.com/abc` still reach the pipeline. Empty input yields `None`.
pub fn extract_url(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    match SHARED_URL.find(trimmed) {
        Some(found) => Some(found.as_str().to_string()),
        None => Some(trimmed.to_string()),
    }
}

/// Decides whether a URL needs a network round trip before it can be cleaned
pub fn is_short_link(input: &str) -> bool {
    let Ok(url) = Url::parse(input.trim()) else {
        return false;
    };

    let host_matches = url
        .host_str()
        .map(|host| SHORT_LINK_HOSTS.iter().any(|short| host.eq_ignore_ascii_case(short)))
        .unwrap_or(false);

    host_matches || url.path().starts_with(SHORT_LINK_PATH_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_url_from_caption() {
        let text = "Check this out! https://vm.tiktok.com/ZMabc123/ and also https://example.com";
        assert_eq!(extract_url(text).as_deref(), Some("https://vm.tiktok.com/ZMabc123/"));
    }

    #[test]
    fn extraction_stops_at_whitespace() {
        let text = "http://www.tiktok.com/@user/video/1?_t=x\nsent from my phone";
        assert_eq!(extract_url(text).as_deref(), Some("http://www.tiktok.com/@user/video/1?_t=x"));
    }

    #[test]
    fn extraction_falls_back_to_trimmed_text() {
        assert_eq!(extract_url("  vm.tiktok.com/abc  ").as_deref(), Some("vm.tiktok.com/abc"));
        assert_eq!(extract_url("   \n"), None);
    }

    #[test]
    fn short_link_hosts_match_case_insensitively() {
        assert!(is_short_link("https://vm.tiktok.com/ZMabc123/"));
        assert!(is_short_link("https://VT.TikTok.com/ZSxyz/"));
        assert!(!is_short_link("https://www.tiktok.com/@user/video/123"));
    }

    #[test]
    fn short_link_path_prefix_matches() {
        assert!(is_short_link("https://www.tiktok.com/t/ZT8abc/"));
        assert!(!is_short_link("https://www.tiktok.com/tag/cats"));
    }

    #[test]
    fn unparseable_input_is_not_a_short_link() {
        assert!(!is_short_link("vm.tiktok.com/abc"));
        assert!(!is_short_link(""));
    }
}
