use std::sync::LazyLock;

use regex::Regex;

use crate::domain::conversation::entities::{ExtractionResult, FoodItem};

/// A list marker (`1.`, `12.` or `-`), optional whitespace, then a run of
/// characters that are neither digits nor newlines.
///
/// A digit inside a food name ends the capture: `1. 7-grain bread` yields a
/// blank candidate followed by `grain bread`.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\d+\.|-)\s*([^\d\n]+)").expect("list item pattern is valid")
});

/// Pulls up to three food names out of a free-form bot reply.
///
/// Candidates keep their order of appearance. Anything past the third match is
/// dropped, and a capture that trims down to nothing still counts as a
/// candidate.
pub fn extract(text: &str) -> ExtractionResult {
    let candidates = LIST_ITEM
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|capture| FoodItem::new(capture.as_str()));

    ExtractionResult::from_candidates(candidates)
}
