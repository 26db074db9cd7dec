//! Transform trait and two-tier extraction.
use log::debug;

use crate::error::Error;
use crate::filtering::Thresholds;

use super::{BasicCleaner, MarkupStripper};

pub trait Transform {
    /// Turns raw markup into plain text.
    fn transform(&self, markup: &str) -> Result<String, Error>;
}

/// Which tier produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub tier: Tier,
}

/// Runs `primary`, and `fallback` on the same markup if `primary` fails.
pub struct Extractor<P = MarkupStripper, F = BasicCleaner> {
    primary: P,
    fallback: F,
}

impl Extractor {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            primary: MarkupStripper::new(thresholds),
            fallback: BasicCleaner,
        }
    }
}

impl<P, F> Extractor<P, F>
where
    P: Transform,
    F: Transform,
{
    pub fn with_tiers(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn extract(&self, markup: &str) -> Result<Extraction, Error> {
        match self.primary.transform(markup) {
            Ok(text) => Ok(Extraction {
                text,
                tier: Tier::Primary,
            }),
            Err(e) => {
                debug!("primary extraction failed ({}), using fallback", e);
                let text = self.fallback.transform(markup)?;
                Ok(Extraction {
                    text,
                    tier: Tier::Fallback,
                })
            }
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Extractor, Tier, Transform};
    use crate::error::Error;

    struct Failing;
    impl Transform for Failing {
        fn transform(&self, _: &str) -> Result<String, Error> {
            Err(Error::Custom("nope".to_string()))
        }
    }

    struct Upper;
    impl Transform for Upper {
        fn transform(&self, markup: &str) -> Result<String, Error> {
            Ok(markup.to_uppercase())
        }
    }

    #[test]
    fn primary_tier() {
        let e = Extractor::default();
        let markup = "长江是亚洲第一长河，".repeat(8);
        let r = e.extract(&markup).unwrap();
        assert_eq!(r.tier, Tier::Primary);
        assert_eq!(r.text, markup);
    }

    #[test]
    fn unterminated_markup_falls_back() {
        let e = Extractor::default();
        let markup = "长江{{Infobox river|name=长江\n长江是河流。";
        let r = e.extract(markup).unwrap();
        assert_eq!(r.tier, Tier::Fallback);
        assert_eq!(r.text, markup);
    }

    #[test]
    fn custom_tiers() {
        let e = Extractor::with_tiers(Failing, Upper);
        let r = e.extract("abc").unwrap();
        assert_eq!(r.tier, Tier::Fallback);
        assert_eq!(r.text, "ABC");

        let e = Extractor::with_tiers(Failing, Failing);
        assert!(e.extract("abc").is_err());
    }
}
