/*! Markup transformers.

Turn raw wiki markup into plain text.
[MarkupStripper] is the primary tier, [BasicCleaner] the fallback,
and [Extractor] chains both.
!*/

mod delimiters;
mod fallback;
mod patterns;
mod strip;
mod transform;

pub use delimiters::{Delimiters, ScanError, LINK, MAX_DEPTH, TABLE, TEMPLATE};
pub use fallback::BasicCleaner;
pub use patterns::{CleaningPatternSet, CleaningRule, PatternKind, PATTERNS};
pub use strip::{normalize_whitespace, MarkupStripper};
pub use transform::{Extraction, Extractor, Tier, Transform};
