//! Display list of text runs
//!
//! Flattens the attached tree into the text runs a paint backend draws, in
//! document order, each with its font resolved through a [`FontPolicy`].
//! Geometry is not part of a run; placing runs is the layout stage's job.

use compact_str::CompactString;

use crate::error::RenderTreeResult;
use crate::font::{FontPolicy, ResolvedFont};
use crate::id::NodeId;
use crate::tree::Tree;

/// One text node ready for paint
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub node: NodeId,
    pub text: CompactString,
    pub font: ResolvedFont,
}

/// Text runs of a tree in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    runs: Vec<TextRun>,
}

impl DisplayList {
    /// Collect every non-empty text node reachable from the root.
    pub fn build(tree: &Tree, policy: &FontPolicy) -> RenderTreeResult<Self> {
        let mut runs = Vec::new();
        for node in tree.iter() {
            let Some(text) = node.data().as_text() else { continue };
            if text.is_empty() {
                continue;
            }
            runs.push(TextRun {
                node: node.id(),
                text: text.value.clone(),
                font: policy.resolve(tree, node.id())?,
            });
        }
        log::debug!("display list built with {} text runs", runs.len());
        Ok(Self { runs })
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a TextRun;
    type IntoIter = std::slice::Iter<'a, TextRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// Build display lists for many trees in parallel.
///
/// Each tree is only read, so the trees can be shared across rayon workers.
#[cfg(feature = "parallel")]
pub fn build_all(trees: &[Tree], policy: &FontPolicy) -> Vec<RenderTreeResult<DisplayList>> {
    use rayon::prelude::*;

    trees
        .par_iter()
        .map(|tree| DisplayList::build(tree, policy))
        .collect()
}
