use serde::Serialize;

/// Report of a single clean-up run
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CleanedLink {
    /// URL as it entered the pipeline, after extraction from shared text
    pub input: String,
    /// Landing URL when a short link was resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_error: Option<String>,
    pub cleaned: String,
}

impl CleanedLink {
    pub fn new(input: String, cleaned: String) -> Self {
        CleanedLink {
            input,
            resolved: None,
            resolve_error: None,
            cleaned,
        }
    }

    pub fn with_resolution(mut self, resolved: Option<String>, resolve_error: Option<String>) -> Self {
        self.resolved = resolved;
        self.resolve_error = resolve_error;
        self
    }

    /// True when the pipeline changed anything
    pub fn is_modified(&self) -> bool {
        self.cleaned != self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_resolution_fields() {
        let link = CleanedLink::new(
            "https://www.tiktok.com/v?_t=1".to_string(),
            "https://www.tiktok.com/v".to_string(),
        );
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "https://www.tiktok.com/v?_t=1",
                "cleaned": "https://www.tiktok.com/v",
            })
        );
        assert!(link.is_modified());
    }

    #[test]
    fn serializes_resolve_error() {
        let link = CleanedLink::new("https://vm.tiktok.com/a/".to_string(), "https://vm.tiktok.com/a/".to_string())
            .with_resolution(None, Some("request timed out".to_string()));
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["resolve_error"], "request timed out");
        assert!(json.get("resolved").is_none());
        assert!(!link.is_modified());
    }
}
