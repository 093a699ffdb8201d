//! Pure clean-up of platform URLs.
//!
//! Three steps run in order: host gate, login-page unwrap, tracking strip.
//! Each step is a standalone function returning an explicit value; [`normalize`]
//! composes them and turns every failure into "keep the last good value".

use log::debug;
use url::Url;
use crate::error::NormalizeError;
use crate::url_utils::PLATFORM_DOMAIN;

/// Query parameter the platform appends for share analytics
pub const TRACKING_PARAM: &str = "_t";

/// Query parameter of the login wall holding the content URL
pub const REDIRECT_PARAM: &str = "redirect_url";

const LOGIN_PATH_MARKER: &str = "login";

/// Returns true when the host, exactly as written in `input`, carries the
/// platform domain marker. The match is case-sensitive, so it runs on the raw
/// text rather than on the lowercased host of a parsed `Url`.
pub fn is_platform_host(input: &str) -> bool {
    raw_host(input)
        .map(|host| host.contains(PLATFORM_DOMAIN))
        .unwrap_or(false)
}

/// Host portion of the authority, without userinfo or port
fn raw_host(input: &str) -> Option<&str> {
    let (_, rest) = input.trim().split_once("://")?;
    let authority = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .map_or(rest, |end| &rest[..end]);
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = if host.starts_with('[') {
        host.find(']').map_or(host, |end| &host[..=end])
    } else {
        host.split(':').next().unwrap_or(host)
    };
    (!host.is_empty()).then_some(host)
}

/// Recovers the content URL from a login-wall URL.
///
/// Returns `Ok(None)` when the path is not a login page or carries no
/// `redirect_url`. The parameter is decoded exactly once; the result is not
/// inspected for a further login wall.
pub fn unwrap_login_page(url: &Url) -> Result<Option<Url>, NormalizeError> {
    if !url.path().contains(LOGIN_PATH_MARKER) {
        return Ok(None);
    }

    let target = url
        .query_pairs()
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned());

    match target {
        Some(target) => Url::parse(&target)
            .map(Some)
            .map_err(|_| NormalizeError::InvalidRedirect(target)),
        None => Ok(None),
    }
}

/// Drops every `_t` pair and the fragment.
///
/// Surviving pairs keep their original bytes and order. Returns `None` when
/// there is nothing to remove so callers can hand back their input untouched.
pub fn strip_tracking(url: &Url) -> Option<Url> {
    let has_tracking = url
        .query()
        .map(|query| query.split('&').any(is_tracking_pair))
        .unwrap_or(false);

    if !has_tracking && url.fragment().is_none() {
        return None;
    }

    let mut cleaned = url.clone();
    cleaned.set_fragment(None);

    if has_tracking {
        let kept: Vec<&str> = url
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !is_tracking_pair(pair))
            .collect();

        if kept.is_empty() {
            cleaned.set_query(None);
        } else {
            cleaned.set_query(Some(&kept.join("&")));
        }
    }

    Some(cleaned)
}

// Keys are compared as written; an encoded `%5Ft` is a different name.
fn is_tracking_pair(pair: &str) -> bool {
    pair.split('=').next() == Some(TRACKING_PARAM)
}

/// Cleans a shared platform URL.
///
/// Never fails: unrelated or unparseable input comes back byte-identical, and
/// a step that cannot complete leaves the previous value in place.
pub fn normalize(input: &str) -> String {
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(err) => {
            debug!("Not normalizing unparseable URL {:?}: {}", input, err);
            return input.to_string();
        }
    };

    if !is_platform_host(input) {
        return input.to_string();
    }

    let (working, changed) = match unwrap_login_page(&url) {
        Ok(Some(target)) => {
            debug!("Unwrapped login page: {} -> {}", input, target);
            (target, true)
        }
        Ok(None) => (url, false),
        Err(err) => {
            debug!("Keeping login page URL {}: {}", input, err);
            (url, false)
        }
    };

    match strip_tracking(&working) {
        Some(cleaned) => {
            debug!("Stripped tracking data: {} -> {}", working, cleaned);
            cleaned.into()
        }
        None if changed => working.into(),
        None => input.to_string(),
    }
}
