//! Filesystem-safe filenames and the index-prefix strip used to rank candidates.

/// Characters kept verbatim by [`sanitize_filename`] besides ASCII letters and digits.
const ALLOWED_PUNCTUATION: [char; 6] = [' ', '[', ']', '(', ')', '.'];

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || ALLOWED_PUNCTUATION.contains(&c)
}

/// Replaces every character outside `[A-Za-z0-9 \[\]().-]` with `_`.
///
/// One `_` per replaced character; nothing is trimmed or collapsed, so the
/// character count is unchanged.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect()
}

/// Strips leading `<digits>.` groups, e.g. `"12.foo.gif"` -> `"foo.gif"`.
///
/// Only used to compare how descriptive two names are; never applied to the
/// name that gets written.
pub fn strip_index_prefix(name: &str) -> &str {
    let mut rest = name;
    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && rest.as_bytes().get(digits) == Some(&b'.') {
            rest = &rest[digits + 1..];
        } else {
            return rest;
        }
    }
}
