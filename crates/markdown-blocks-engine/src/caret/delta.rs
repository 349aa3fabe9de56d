/// Emphasis marker characters that disappear when markup is rendered.
const MARKERS: [char; 2] = ['*', '_'];

fn is_marker(c: char) -> bool {
    MARKERS.contains(&c)
}

/// How far a caret at char offset `caret` in `before` moves once the text
/// becomes `after`.
///
/// Walks both texts in step up to the caret. Marker runs in `before` are
/// skipped as a whole; a caret inside or at the end of such a run snaps to
/// where the run collapsed. Mismatched characters are treated as
/// replacements while `after` has characters left, deletions after that.
///
/// A caret at or past the end of `before` keeps its distance to the end.
pub fn caret_delta(before: &str, after: &str, caret: usize) -> isize {
    let before: Vec<char> = before.chars().collect();
    let after: Vec<char> = after.chars().collect();

    if caret >= before.len() {
        return signed(after.len()) - signed(caret);
    }

    let mut bi = 0;
    let mut ci = 0;

    while bi < caret {
        if is_marker(before[bi]) {
            while bi < before.len() && is_marker(before[bi]) {
                bi += 1;
            }
            if caret <= bi {
                return signed(ci) - signed(caret);
            }
            continue;
        }

        // Equal or replaced characters advance both sides
        bi += 1;
        if ci < after.len() {
            ci += 1;
        }
    }

    signed(ci) - signed(caret)
}

/// The caret's char offset in `after`, clamped to `0..=len(after)`.
pub fn remap(before: &str, after: &str, caret: usize) -> usize {
    let delta = caret_delta(before, after, caret);
    let len = after.chars().count();
    caret.saturating_add_signed(delta).min(len)
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
