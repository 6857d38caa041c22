//! Fixed-size pagination over already-ordered result lists.

use std::num::{IntErrorKind, NonZeroUsize};

/// Number of questions on every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the slice of `items` belonging to 1-based `page`.
///
/// Pages past the end are empty, not an error.
pub fn paginate<T>(page: NonZeroUsize, items: &[T]) -> &[T] {
  let start = (page.get() - 1).saturating_mul(QUESTIONS_PER_PAGE);
  if start >= items.len() {
    return &[];
  }
  let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
  &items[start..end]
}

/// Parse a `?page=` query value. Absent, non-numeric and zero values mean
/// page 1; numbers too large for `usize` are still past the end.
pub fn parse_page(raw: Option<&str>) -> NonZeroUsize {
  let Some(raw) = raw else {
    return NonZeroUsize::MIN;
  };
  match raw.trim().parse::<usize>() {
    Ok(n) => NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN),
    Err(e) if *e.kind() == IntErrorKind::PosOverflow => NonZeroUsize::MAX,
    Err(_) => NonZeroUsize::MIN,
  }
}
