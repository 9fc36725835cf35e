use crate::model::SessionId;
use regex::Regex;
use std::sync::LazyLock;

static SESSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/sessions/(.*?)/contexts/").expect("session pattern is valid"));

/// The session segment of an output context name, or an empty id when the
/// name has no `/sessions/<id>/contexts/` part.
pub fn extract_session_id(context_name: &str) -> SessionId {
    SESSION_PATTERN
        .captures(context_name)
        .and_then(|captures| captures.get(1))
        .map(|session| SessionId::from(session.as_str()))
        .unwrap_or_else(|| SessionId::from(""))
}
