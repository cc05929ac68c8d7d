// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive page sizes: `threshold:count` tables resolved against a viewport width.

use core::convert::Infallible;
use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::util::leading_int;

/// A single responsive rule: from `min_width` upward, show `per_page` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    /// Minimum viewport width (inclusive) at which this rule applies, in pixels.
    pub min_width: u32,
    /// Number of items visible at once.
    pub per_page: NonZeroUsize,
}

/// Ordered table of [`Breakpoint`]s, sorted by ascending `min_width` with unique thresholds.
///
/// The table is never empty. When built from a specification that holds no usable
/// rule it contains the single fallback rule `0:1`; widths below the smallest
/// threshold also resolve to one item per page.
///
/// Tables are parsed from the compact `threshold:count|threshold:count` form that
/// page builders store as a plain string:
///
/// ```
/// use understory_carousel::BreakpointTable;
///
/// let table = BreakpointTable::parse("300:1 | 768:2 | 1024:4");
/// assert_eq!(table.resolve(200).get(), 1);
/// assert_eq!(table.resolve(800).get(), 2);
/// assert_eq!(table.resolve(1920).get(), 4);
///
/// // Nothing usable falls back to a single item per page.
/// assert_eq!(BreakpointTable::parse("garbage"), BreakpointTable::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BreakpointTable {
    rules: SmallVec<[Breakpoint; 4]>,
}

impl BreakpointTable {
    /// The implicit rule used when nothing else applies.
    pub const FALLBACK: Breakpoint = Breakpoint {
        min_width: 0,
        per_page: NonZeroUsize::MIN,
    };

    /// Parses a `threshold:count` specification.
    ///
    /// Segments are separated by `|` and their two fields by `:`. Fields are trimmed
    /// and read as leading integers, so `" 768px : 2 "` is accepted. A segment is
    /// discarded when it does not have exactly two non-empty fields, when the
    /// threshold is negative, or when the count is below one. A repeated threshold
    /// keeps the last count given for it.
    ///
    /// This never fails: a specification without any usable segment produces the
    /// fallback table.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut rules: SmallVec<[Breakpoint; 4]> = SmallVec::new();
        for segment in spec.split('|') {
            let Some(rule) = parse_segment(segment) else {
                if !segment.trim().is_empty() {
                    tracing::debug!(segment, "discarding malformed breakpoint");
                }
                continue;
            };
            match rules.binary_search_by_key(&rule.min_width, |r| r.min_width) {
                Ok(i) => rules[i] = rule,
                Err(i) => rules.insert(i, rule),
            }
        }
        if rules.is_empty() {
            tracing::debug!(spec, "no usable breakpoints; using one item per page");
            return Self::default();
        }
        Self { rules }
    }

    /// Parses an optional specification; `None` yields the fallback table.
    #[must_use]
    pub fn parse_optional(spec: Option<&str>) -> Self {
        spec.map(Self::parse).unwrap_or_default()
    }

    /// Builds a table from explicit rules.
    ///
    /// Rules are sorted by threshold; later rules replace earlier ones with the same
    /// threshold. An empty iterator yields the fallback table.
    pub fn from_rules(rules: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut table: SmallVec<[Breakpoint; 4]> = SmallVec::new();
        for rule in rules {
            match table.binary_search_by_key(&rule.min_width, |r| r.min_width) {
                Ok(i) => table[i] = rule,
                Err(i) => table.insert(i, rule),
            }
        }
        if table.is_empty() {
            return Self::default();
        }
        Self { rules: table }
    }

    /// Resolves the number of items per page for a viewport `width`.
    ///
    /// Picks the rule with the greatest `min_width <= width`, or one item per page
    /// when every threshold is above `width`.
    #[must_use]
    pub fn resolve(&self, width: u32) -> NonZeroUsize {
        let above = self.rules.partition_point(|r| r.min_width <= width);
        match above.checked_sub(1) {
            Some(i) => self.rules[i].per_page,
            None => Self::FALLBACK.per_page,
        }
    }

    /// Returns the rules in ascending threshold order.
    #[must_use]
    pub fn rules(&self) -> &[Breakpoint] {
        &self.rules
    }

    /// Returns `true` if this is the single-rule fallback table.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.rules.as_slice() == &[Self::FALLBACK]
    }
}

fn parse_segment(segment: &str) -> Option<Breakpoint> {
    let mut fields = segment.split(':').map(str::trim).filter(|f| !f.is_empty());
    let (threshold, count) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    let min_width = u32::try_from(leading_int(threshold)?).ok()?;
    let per_page = usize::try_from(leading_int(count)?)
        .ok()
        .and_then(NonZeroUsize::new)?;
    Some(Breakpoint {
        min_width,
        per_page,
    })
}

impl Default for BreakpointTable {
    fn default() -> Self {
        let mut rules = SmallVec::new();
        rules.push(Self::FALLBACK);
        Self { rules }
    }
}

impl FromStr for BreakpointTable {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for BreakpointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}:{}", rule.min_width, rule.per_page)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::num::NonZeroUsize;

    use super::{Breakpoint, BreakpointTable};

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_and_garbage_fall_back_to_one_item() {
        let fallback = BreakpointTable::default();
        assert!(fallback.is_fallback());
        assert_eq!(fallback.rules(), &[BreakpointTable::FALLBACK]);

        assert_eq!(BreakpointTable::parse(""), fallback);
        assert_eq!(BreakpointTable::parse_optional(None), fallback);
        assert_eq!(BreakpointTable::parse("garbage"), fallback);
        assert_eq!(BreakpointTable::parse("|||"), fallback);
        assert_eq!(BreakpointTable::parse("a:b|:3|4:"), fallback);
    }

    #[test]
    fn resolves_greatest_threshold_at_or_below_width() {
        let table = BreakpointTable::parse("300:1|768:2");
        assert_eq!(table.resolve(1000), nz(2));
        assert_eq!(table.resolve(768), nz(2));
        assert_eq!(table.resolve(767), nz(1));
        assert_eq!(table.resolve(500), nz(1));
    }

    #[test]
    fn widths_below_every_threshold_show_one_item() {
        let table = BreakpointTable::parse("600:3|1200:5");
        assert_eq!(table.resolve(0), nz(1));
        assert_eq!(table.resolve(599), nz(1));
        assert_eq!(table.resolve(600), nz(3));
        assert_eq!(table.resolve(u32::MAX), nz(5));
    }

    #[test]
    fn explicit_zero_threshold_overrides_fallback() {
        let table = BreakpointTable::parse("0:2|900:4");
        assert_eq!(table.resolve(0), nz(2));
        assert_eq!(table.resolve(899), nz(2));
        assert!(!table.is_fallback());
    }

    #[test]
    fn whitespace_and_unit_suffixes_are_tolerated() {
        let table = BreakpointTable::parse("  768px : 2 | 1024 :3 ");
        assert_eq!(
            table.rules(),
            &[
                Breakpoint {
                    min_width: 768,
                    per_page: nz(2),
                },
                Breakpoint {
                    min_width: 1024,
                    per_page: nz(3),
                },
            ]
        );
    }

    #[test]
    fn malformed_segments_are_dropped_individually() {
        let table = BreakpointTable::parse("1024:3|oops|768:0|-5:2|1:2:3|480:2");
        assert_eq!(table.to_string(), "480:2|1024:3");
    }

    #[test]
    fn unordered_input_is_sorted_and_last_duplicate_wins() {
        let table = BreakpointTable::parse("1024:4|300:1|1024:3");
        assert_eq!(table.to_string(), "300:1|1024:3");
        assert_eq!(table.resolve(2000), nz(3));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let table: BreakpointTable = "768:2|0:1|1280:4".parse().unwrap();
        assert_eq!(table.to_string(), "0:1|768:2|1280:4");
        assert_eq!(BreakpointTable::parse(&table.to_string()), table);
    }

    #[test]
    fn from_rules_sorts_and_defaults() {
        assert!(BreakpointTable::from_rules([]).is_fallback());

        let table = BreakpointTable::from_rules([
            Breakpoint {
                min_width: 900,
                per_page: nz(3),
            },
            Breakpoint {
                min_width: 400,
                per_page: nz(2),
            },
        ]);
        assert_eq!(table.to_string(), "400:2|900:3");
        assert_eq!(table.resolve(100), nz(1));
    }
}
