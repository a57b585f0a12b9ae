//! Symbol name normalization.
//!
//! Demangled Rust symbols look like one of:
//! - `my_app::db::connect`
//! - `my_app::db::Pool::acquire`
//! - `<my_app::db::Pool as core::ops::Drop>::drop`
//! - `my_app::run::{{closure}}`
//! - `my_app::db::Pool<T>::acquire::h0123456789abcdef`
//!
//! and are reduced to `connect`, `Pool::acquire`, `Pool::drop`, `run` and
//! `Pool::acquire` respectively.

const CLOSURE_MARKER: &str = "{{closure}}";
const FN_POINTER: &str = "fn";

/// Reduces a demangled symbol to its short `function` or `Type::method` form.
pub(crate) fn short_name(raw: &str) -> String {
    let name = strip_hash(raw.trim());

    if let Some(rest) = name.strip_prefix('<') {
        if let Some(close) = matching_close(rest) {
            let inner = &rest[..close];
            let self_ty = split_top_level_as(inner).unwrap_or(inner);
            let method = rest[close + 1..]
                .trim_start_matches("::")
                .split("::")
                .filter(|s| !s.is_empty() && *s != CLOSURE_MARKER)
                .last()
                .unwrap_or("");
            let ty = if is_fn_pointer(self_ty) {
                FN_POINTER.to_owned()
            } else {
                strip_decorations(&last_segment(&strip_generics(self_ty)))
            };
            return match (ty.is_empty(), method.is_empty()) {
                (_, true) => ty,
                (true, false) => method.to_owned(),
                (false, false) => format!("{ty}::{method}"),
            };
        }
    }

    let plain = strip_generics(name);
    let segments: Vec<&str> = plain
        .split("::")
        .filter(|s| !s.is_empty() && *s != CLOSURE_MARKER)
        .collect();

    match segments.as_slice() {
        [] => String::new(),
        [only] => strip_decorations(only),
        [.., owner, function] if starts_uppercase(owner) => {
            format!("{}::{}", strip_decorations(owner), strip_decorations(function))
        },
        [.., function] => strip_decorations(function),
    }
}

/// Returns `true` if the symbol belongs to the runtime entry machinery below `main`
/// or below a test body.
pub(crate) fn is_runtime_boundary(raw: &str) -> bool {
    raw.contains("__rust_begin_short_backtrace") || raw.starts_with("std::rt::lang_start")
}

/// Returns `true` if `name` is a closure defined directly inside `enclosing`.
pub(crate) fn is_enclosing_closure(name: &str, enclosing: &str) -> bool {
    !enclosing.is_empty()
        && name
            .strip_suffix(CLOSURE_MARKER)
            .and_then(|rest| rest.strip_suffix("::"))
            .is_some_and(|rest| rest == enclosing)
}

pub(crate) fn strip_hash(name: &str) -> &str {
    match name.rfind("::h") {
        Some(pos)
            if name.len() - pos == 19
                && name[pos + 3..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            &name[..pos]
        },
        _ => name,
    }
}

/// Index of the `>` closing the `<` consumed just before `s`.
fn matching_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in brackets(s) {
        match c {
            '<' => depth += 1,
            '>' if depth == 0 => return Some(i),
            _ => depth -= 1,
        }
    }
    None
}

/// Angle brackets of `s` with their byte offsets; the `>` of `->` is not one.
fn brackets(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    s.char_indices()
        .filter(|&(i, c)| c == '<' || (c == '>' && !is_arrow_head(s, i)))
}

fn is_arrow_head(s: &str, i: usize) -> bool {
    s[..i].ends_with('-')
}

fn is_fn_pointer(s: &str) -> bool {
    let s = s.trim_start_matches(|c: char| matches!(c, '&' | '*' | ' '));
    ["fn(", "unsafe fn(", "extern "].iter().any(|prefix| s.starts_with(prefix))
}

fn split_top_level_as(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if !is_arrow_head(s, i) => depth = depth.saturating_sub(1),
            ' ' if depth == 0 && s[i..].starts_with(" as ") => return Some(&s[..i]),
            _ => {},
        }
    }
    None
}

fn strip_generics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if !is_arrow_head(s, i) => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {},
        }
    }
    out
}

fn last_segment(s: &str) -> String {
    s.rsplit("::").next().unwrap_or(s).to_owned()
}

fn strip_decorations(s: &str) -> String {
    let mut s = s.trim();
    loop {
        let next = s.trim_start_matches(|c: char| matches!(c, '&' | '*' | '(' | ' '));
        let next = ["mut ", "const ", "dyn "]
            .iter()
            .find_map(|prefix| next.strip_prefix(*prefix))
            .unwrap_or(next);
        if next.len() == s.len() {
            break;
        }
        s = next;
    }
    s.chars().filter(|c| !matches!(c, '(' | ')' | '*' | '&' | '<' | '>' | ' ')).collect()
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
