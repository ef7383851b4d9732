use bingo_core as bingo;
use gloo::utils::window;
use wasm_bindgen::JsValue;

/// What the address bar says about the board.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Location {
    pub seed: Option<String>,
    pub token: Option<String>,
}

impl Location {
    /// Seed from the first path segment, token from the `state` query parameter.
    pub(crate) fn parse(path: &str, query: &str, decode: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: seed_segment(path).and_then(&decode),
            token: bingo::query_state(query).and_then(&decode),
        }
    }

    pub(crate) fn current() -> Self {
        let location = window().location();
        let path = location.pathname().unwrap_or_default();
        let query = location.search().unwrap_or_default();
        Self::parse(&path, &query, |encoded| {
            js_sys::decode_uri_component(encoded)
                .ok()
                .map(String::from)
        })
    }
}

/// First path segment, still percent-encoded. `None` for the bare root.
pub(crate) fn seed_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Rewrites the address without adding a history entry, used for every toggle.
pub(crate) fn replace(url: &str) {
    match window().history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::error!("failed to replace url: {:?}", err);
            }
        }
        Err(err) => log::error!("no history: {:?}", err),
    }
}

/// Navigates to a new address, used for a new board or a reset so back still works.
pub(crate) fn push(url: &str) {
    match window().history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::error!("failed to push url: {:?}", err);
            }
        }
        Err(err) => log::error!("no history: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbatim(encoded: &str) -> Option<String> {
        Some(encoded.to_string())
    }

    #[test]
    fn seed_is_the_first_segment() {
        assert_eq!(seed_segment("/12345678"), Some("12345678"));
        assert_eq!(seed_segment("/12345678/"), Some("12345678"));
        assert_eq!(seed_segment("/a/b"), Some("a"));
        assert_eq!(seed_segment("/"), None);
        assert_eq!(seed_segment(""), None);
    }

    #[test]
    fn location_reads_seed_and_token() {
        let location = Location::parse("/12345678", "?state=f000", verbatim);
        assert_eq!(
            location,
            Location {
                seed: Some("12345678".into()),
                token: Some("f000".into()),
            }
        );
    }

    #[test]
    fn root_without_query_has_nothing() {
        assert_eq!(Location::parse("/", "", verbatim), Location::default());
    }

    #[test]
    fn undecodable_parts_are_dropped() {
        let location = Location::parse("/%E0%A4%A", "?state=00ff", |encoded| {
            (!encoded.contains('%')).then(|| encoded.to_string())
        });
        assert_eq!(location.seed, None);
        assert_eq!(location.token.as_deref(), Some("00ff"));
    }
}
