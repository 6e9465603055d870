use crate::pack::Pack;

/// Render a resolved pack as its item indices joined by commas, or `"-"`
/// when nothing was selected.
///
/// Indices come out in stored order; callers pass packs that
/// [`Selector::select`](crate::selection::Selector::select) already
/// reordered by ascending index.
pub fn render(pack: &Pack) -> String {
    if pack.is_empty() {
        return "-".to_string();
    }
    pack.items()
        .iter()
        .map(|item| item.index.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
