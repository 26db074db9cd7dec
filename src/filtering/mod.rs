/*! Filtering utilities

Filters operate at three levels, from cheapest to most expensive:
- [page::PageFilter] is the structural inclusion test run by the dump decoder on raw pages,
- [paragraph::ParagraphFilter] is run by the markup stripper on each cleaned paragraph,
- [article::ArticleFilter] is run once on the reassembled article text.

Every filter implements [filter::Filter]. Filters that can explain a rejection also expose it
(see [page::Exclusion] and [article::Rejection]) so that the pipeline can count outcomes per reason.

All numeric gates come from [Thresholds].
! */
pub mod article;
pub mod chars;
mod filter;
pub mod page;
pub mod paragraph;
mod thresholds;

pub use article::{ArticleFilter, Rejection};
pub use filter::Filter;
pub use page::{Exclusion, PageFilter};
pub use paragraph::ParagraphFilter;
pub use thresholds::Thresholds;
