/// Returns the trailing `window_size` items, preserving their relative order.
#[must_use]
pub fn trailing_window<T>(items: &[T], window_size: usize) -> &[T] {
    let start = items.len().saturating_sub(window_size);
    &items[start..]
}
