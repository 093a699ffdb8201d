use log::{debug, info, warn};
use crate::models::CleanedLink;
use crate::normalizer::normalize;
use crate::resolver::RedirectResolver;
use crate::url_utils::{extract_url, is_short_link};

/// Runs the whole clean-up for one URL.
///
/// Short links are resolved first when a resolver is given; a failed lookup
/// falls back to the original URL. Always yields a cleaned string.
pub async fn clean_url(resolver: Option<&RedirectResolver>, url: &str) -> CleanedLink {
    let mut resolved = None;
    let mut resolve_error = None;

    let working = match resolver {
        Some(resolver) if is_short_link(url) => match resolver.resolve(url).await {
            Ok(final_url) => {
                let final_url = final_url.to_string();
                resolved = Some(final_url.clone());
                final_url
            }
            Err(err) => {
                warn!("Could not resolve short link {}: {}; using it as is", url, err);
                sentry::capture_message(
                    &format!("Short link resolution failed: {}", err),
                    sentry::Level::Warning,
                );
                resolve_error = Some(err.to_string());
                url.to_string()
            }
        },
        Some(_) => url.to_string(),
        None => {
            debug!("Resolution disabled, normalizing {} directly", url);
            url.to_string()
        }
    };

    let cleaned = normalize(&working);
    let link = CleanedLink::new(url.to_string(), cleaned).with_resolution(resolved, resolve_error);

    if link.is_modified() {
        info!("Cleaned {} -> {}", link.input, link.cleaned);
    } else {
        debug!("Nothing to clean in {}", link.input);
    }
    link
}

/// Extracts the first URL from shared text and cleans it.
/// Returns `None` only for blank input.
pub async fn clean_shared_text(resolver: Option<&RedirectResolver>, text: &str) -> Option<CleanedLink> {
    let url = extract_url(text)?;
    Some(clean_url(resolver, &url).await)
}
