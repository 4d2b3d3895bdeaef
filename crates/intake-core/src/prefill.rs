//! Services pre-fill from URL query parameters.
//!
//! A landing link such as `?service=UI%2FUX&service=Branding,Web%20Dev`
//! seeds the services selection when the form opens. Only members of the
//! service enumeration survive; anything that fails to decode drops the whole
//! pre-fill rather than surfacing an error.

use std::borrow::Cow;

use crate::service::Service;

/// Query parameter that carries pre-selected services.
pub const SERVICE_PARAM: &str = "service";

/// Read the services pre-fill from a query string.
///
/// `query` may be a bare query (`service=Branding`), a query with its leading
/// `?`, or a whole URL; any `#fragment` is ignored. Each `service` parameter
/// may hold a comma-joined list. Values are percent-decoded (`+` is a space),
/// trimmed, filtered to known services, and deduplicated in first-seen order.
#[must_use]
pub fn services_from_query(query: &str) -> Vec<Service> {
    let mut selected = Vec::new();

    for pair in query_part(query).split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(key) = decode_component(raw_key) else {
            continue;
        };
        if key != SERVICE_PARAM {
            continue;
        }

        let Some(value) = decode_component(raw_value) else {
            tracing::debug!(value = raw_value, "service pre-fill failed to decode; ignoring");
            return Vec::new();
        };

        for label in value.split(',').map(str::trim) {
            if let Some(service) = Service::from_label(label)
                && !selected.contains(&service)
            {
                selected.push(service);
            }
        }
    }

    selected
}

/// Strip everything up to the first `?` and anything from the first `#`.
fn query_part(input: &str) -> &str {
    let after_mark = input.split_once('?').map_or(input, |(_, rest)| rest);
    after_mark
        .split_once('#')
        .map_or(after_mark, |(query, _)| query)
}

/// Percent-decode one query component, `+` as space.
///
/// `None` for a `%` not followed by two hex digits, or for bytes that are
/// not UTF-8 once decoded.
fn decode_component(raw: &str) -> Option<String> {
    if has_malformed_escape(raw) {
        return None;
    }
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    urlencoding::decode(&spaced).map(Cow::into_owned).ok()
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}
