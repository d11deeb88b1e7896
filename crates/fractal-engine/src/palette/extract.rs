use crate::host::SourceNode;

use super::Palette;

/// Derives a palette from an element's own solid fills.
///
/// Checks the node's solid paints first. If there are none, children are
/// searched depth-first in order and the first non-empty result wins.
/// Gradients and images are skipped, not decomposed.
///
/// `None` means no element in the subtree has a solid fill; callers fall
/// back to a palette of their own.
pub fn extract(node: &dyn SourceNode) -> Option<Palette> {
    let own: Vec<_> = node.fills().iter().filter_map(|f| f.solid_color()).collect();
    if let Some(palette) = Palette::new(own) {
        return Some(palette);
    }

    node.children().into_iter().find_map(extract)
}
