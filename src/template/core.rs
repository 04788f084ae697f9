//! Template compiler core - builds the match and extract patterns.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Maximum number of path parameters before heap allocation.
/// Most routes have well under 8 params (e.g. `/users/:id/posts/:post_id`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
///
/// Param names use `Arc<str>` instead of `String`: names come from the
/// compiled template (known at registration), so handing one out per request
/// is an O(1) refcount bump rather than a string copy. Values stay `String`
/// because they are per-request data taken from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// One parameter token: the marker and everything up to the next separator.
static PARAM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(":[^/]+").expect("parameter token regex"));

// Placeholder bytes for wildcard tokens while the pattern source is being
// assembled. Control bytes cannot appear in a template, so the literal text
// around them can be regex-escaped without disturbing the tokens.
const NO_SLASH_TOKEN: char = '\u{1}';
const CROSS_TOKEN: char = '\u{2}';

/// A compiled path template.
///
/// Built once from the template string at registration time; read-only
/// afterwards. Holds the ordered parameter names, the anchored match
/// pattern, and the capturing extract pattern.
///
/// Invariant: for a well-formed template, `param_names` has exactly one name
/// per capturing group of the extract pattern, in order of appearance.
/// Extraction pairs the two positionally and truncates to the shorter
/// sequence if a degenerate template ever makes them disagree.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    param_names: Vec<Arc<str>>,
    match_pattern: Regex,
    extract_pattern: Regex,
}

impl PathTemplate {
    /// Compile a template string.
    ///
    /// Total over all inputs: literal text is escaped during assembly, so the
    /// generated pattern always compiles and a malformed template degrades to
    /// a best-effort literal pattern instead of failing.
    #[must_use]
    pub fn compile(template: &str) -> Self {
        let param_names = template
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .map(Arc::from)
            .collect();

        let (match_src, extract_src) = pattern_sources(template);
        let match_pattern = Regex::new(&match_src).expect("generated match pattern compiles");
        let extract_pattern =
            Regex::new(&extract_src).expect("generated extract pattern compiles");

        Self {
            raw: template.to_string(),
            param_names,
            match_pattern,
            extract_pattern,
        }
    }

    /// The template string this was compiled from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parameter names in order of appearance in the template.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    /// Full-string test of a concrete path against the match pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.match_pattern.is_match(path)
    }

    /// Extract named parameters from a concrete path.
    ///
    /// The i-th capture pairs with the i-th parameter name; every value is
    /// percent-decoded before being returned. A path that does not match
    /// yields an empty list - callers are expected to have confirmed
    /// [`matches`](Self::matches) first, so a miss here signals an internal
    /// inconsistency, not a request-level error.
    #[must_use]
    pub fn extract_params(&self, path: &str) -> ParamVec {
        let mut params = ParamVec::new();
        let Some(caps) = self.extract_pattern.captures(path) else {
            return params;
        };
        for (name, group) in self.param_names.iter().zip(caps.iter().skip(1)) {
            if let Some(value) = group {
                params.push((Arc::clone(name), decode_component(value.as_str())));
            }
        }
        params
    }
}

/// Ordered textual substitution from a template to the two anchored pattern
/// sources. Returns `(match source, extract source)`; they differ only in
/// whether the no-separator wildcard captures.
///
/// The substitution order matters: later steps consume text introduced by
/// earlier ones.
pub(crate) fn pattern_sources(template: &str) -> (String, String) {
    // a. each parameter becomes a no-separator wildcard token
    let mut work = PARAM_TOKEN
        .replace_all(template, NO_SLASH_TOKEN.to_string())
        .into_owned();
    // b. separators doubled by substitution collapse back to one
    work = work.replace("//", "/");
    // c. a wildcard between separators crosses segments
    work = work.replace("/*/", &format!("/{CROSS_TOKEN}/"));
    // d. a leading wildcard crosses segments from the start
    if let Some(rest) = work.strip_prefix('*') {
        work = format!("{CROSS_TOKEN}{rest}");
    }
    // e. a trailing wildcard crosses segments to the end
    if let Some(rest) = work.strip_suffix("/*") {
        work = format!("{rest}/{CROSS_TOKEN}");
    }
    // f. exactly one optional trailing separator; assembly appends the
    //    optional form, so drop the literal one here
    if work.ends_with('/') {
        work.pop();
    }
    // g. escape the residual literal text and anchor
    (assemble(&work, false), assemble(&work, true))
}

fn assemble(work: &str, capture: bool) -> String {
    let mut src = String::with_capacity(work.len() + 8);
    src.push('^');
    let mut literal = String::new();
    for ch in work.chars() {
        match ch {
            NO_SLASH_TOKEN => {
                flush_literal(&mut src, &mut literal);
                src.push_str(if capture { "([^/]+?)" } else { "[^/]+?" });
            }
            CROSS_TOKEN => {
                flush_literal(&mut src, &mut literal);
                src.push_str(".*?");
            }
            _ => literal.push(ch),
        }
    }
    flush_literal(&mut src, &mut literal);
    src.push_str("/?$");
    src
}

fn flush_literal(src: &mut String, literal: &mut String) {
    if !literal.is_empty() {
        src.push_str(&regex::escape(literal));
        literal.clear();
    }
}

/// Percent-decode one captured value, keeping the raw text when the decoded
/// bytes are not valid UTF-8.
fn decode_component(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}
