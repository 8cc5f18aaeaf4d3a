//! Ordered-map maintenance for the active character set and brightness
//! resolution under a comparison policy.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use sg_core::config::ComparisonPolicy;
use sg_core::error::CoreError;
use sg_glyph::brightness::GlyphSource;
use sg_glyph::font::BitmapFont;

/// Brightness key with a total order, so f64 values can index a BTreeMap.
///
/// Keys are always built from an integer on-pixel count over the fixed mask
/// size (or a normalization of two such values), so equal brightnesses are
/// bit-identical and bucket together.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Key(f64);

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Min/max raw brightness over the active set.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min: f64,
    max: f64,
}

/// Matches characters to brightness values.
///
/// Two ordered indices coexist: one keyed by raw brightness, one keyed by
/// normalized brightness. The normalized index is the one queried during
/// matching; every mutation keeps the two in lock-step.
///
/// # Example
/// ```
/// use sg_match::BrightnessMatcher;
/// let matcher = BrightnessMatcher::builtin("0123456789".chars());
/// let ch = matcher.match_char(0.0).unwrap();
/// assert!("0123456789".contains(ch));
/// ```
pub struct BrightnessMatcher<G: GlyphSource> {
    glyphs: G,
    raw: BTreeMap<Key, BTreeSet<char>>,
    normalized: BTreeMap<Key, BTreeSet<char>>,
    bounds: Option<Bounds>,
    policy: ComparisonPolicy,
}

impl BrightnessMatcher<BitmapFont> {
    /// Matcher backed by the builtin 5×5 bitmap font.
    #[must_use]
    pub fn builtin(charset: impl IntoIterator<Item = char>) -> Self {
        Self::new(BitmapFont, charset)
    }
}

impl<G: GlyphSource> BrightnessMatcher<G> {
    /// Build a matcher over an initial character set.
    pub fn new(glyphs: G, charset: impl IntoIterator<Item = char>) -> Self {
        let mut matcher = Self {
            glyphs,
            raw: BTreeMap::new(),
            normalized: BTreeMap::new(),
            bounds: None,
            policy: ComparisonPolicy::default(),
        };
        for ch in charset {
            let b = matcher.glyphs.raw_brightness(ch);
            matcher.raw.entry(Key(b)).or_default().insert(ch);
        }
        matcher.recompute_bounds_and_maybe_rebuild();
        matcher
    }

    /// Replace the active comparison policy.
    pub fn set_policy(&mut self, policy: ComparisonPolicy) {
        self.policy = policy;
    }

    /// Current comparison policy.
    #[must_use]
    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    /// Insert a character into both indices. Idempotent.
    ///
    /// When the new raw brightness leaves the current bounds unchanged this
    /// is an O(log n) incremental insert into the normalized index; when it
    /// widens the bounds every normalized value shifts, so the whole
    /// normalized index is rebuilt from the raw one.
    pub fn add(&mut self, ch: char) {
        let b = self.glyphs.raw_brightness(ch);
        self.raw.entry(Key(b)).or_default().insert(ch);
        if !self.recompute_bounds_and_maybe_rebuild() {
            let key = Key(self.normalize(b));
            self.normalized.entry(key).or_default().insert(ch);
        }
    }

    /// Remove a character from both indices.
    ///
    /// Removing a character absent from the set is a no-op. When the removed
    /// brightness carried a bound, the true bounds are rescanned and the
    /// normalized index rebuilt.
    pub fn remove(&mut self, ch: char) {
        let b = self.glyphs.raw_brightness(ch);
        let Some(bucket) = self.raw.get_mut(&Key(b)) else {
            return;
        };
        if !bucket.remove(&ch) {
            return;
        }
        let raw_empty = bucket.is_empty();
        if raw_empty {
            self.raw.remove(&Key(b));
        }

        // Mirror the removal in the normalized index under the current
        // bounds, which are exactly the bounds the entry was keyed with.
        let norm_key = Key(self.normalize(b));
        if let Some(norm_bucket) = self.normalized.get_mut(&norm_key) {
            norm_bucket.remove(&ch);
            if norm_bucket.is_empty() {
                self.normalized.remove(&norm_key);
            }
        }

        self.recompute_bounds_and_maybe_rebuild();
    }

    /// Resolve a normalized target brightness to the best character under
    /// the current policy.
    ///
    /// Considers the floor entry (largest key ≤ target) and ceiling entry
    /// (smallest key ≥ target) of the normalized index. Ties within a
    /// brightness bucket resolve to the smallest code point.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyCharset`] when the active set is empty.
    pub fn match_char(&self, brightness: f64) -> Result<char, CoreError> {
        let target = Key(brightness);
        let floor = self.normalized.range(..=target).next_back();
        let ceiling = self.normalized.range(target..).next();

        let chosen = match self.policy {
            ComparisonPolicy::ClosestHigher => ceiling.or(floor),
            ComparisonPolicy::ClosestLower => floor.or(ceiling),
            ComparisonPolicy::ClosestAbsolute => match (floor, ceiling) {
                (Some(lo), Some(hi)) => {
                    if (lo.0.0 - brightness).abs() <= (hi.0.0 - brightness).abs() {
                        Some(lo)
                    } else {
                        Some(hi)
                    }
                }
                (lo, hi) => lo.or(hi),
            },
        };

        chosen
            .and_then(|(_, bucket)| bucket.first().copied())
            .ok_or(CoreError::EmptyCharset)
    }

    /// Characters in the active set, ordered by code point.
    #[must_use]
    pub fn chars(&self) -> BTreeSet<char> {
        self.raw.values().flatten().copied().collect()
    }

    /// Number of characters in the active set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.values().map(BTreeSet::len).sum()
    }

    /// Whether the active set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether a character is in the active set.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        let b = self.glyphs.raw_brightness(ch);
        self.raw.get(&Key(b)).is_some_and(|bucket| bucket.contains(&ch))
    }

    /// Current (min, max) raw brightness, if the set is non-empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds.map(|b| (b.min, b.max))
    }

    /// Single mutation funnel for the bounds bookkeeping: derives the true
    /// min/max from the raw index keys and, when they moved, rebuilds the
    /// normalized index under the new bounds.
    ///
    /// Returns whether a rebuild occurred.
    fn recompute_bounds_and_maybe_rebuild(&mut self) -> bool {
        let true_bounds = match (self.raw.first_key_value(), self.raw.last_key_value()) {
            (Some((min, _)), Some((max, _))) => Some(Bounds {
                min: min.0,
                max: max.0,
            }),
            _ => None,
        };
        if true_bounds == self.bounds {
            return false;
        }
        self.bounds = true_bounds;
        self.rebuild_normalized();
        log::trace!("bounds moved, normalized index rebuilt over {} raw buckets", self.raw.len());
        true
    }

    /// Rebuild the normalized index from the raw index under the current
    /// bounds.
    fn rebuild_normalized(&mut self) {
        let bounds = self.bounds;
        self.normalized.clear();
        for (key, bucket) in &self.raw {
            let norm = Key(normalize_with(bounds, key.0));
            self.normalized
                .entry(norm)
                .or_default()
                .extend(bucket.iter().copied());
        }
    }

    /// Rescale a raw brightness into [0, 1] using the current bounds.
    fn normalize(&self, raw: f64) -> f64 {
        normalize_with(self.bounds, raw)
    }
}

/// Linear rescale of a raw brightness into [0, 1].
///
/// A degenerate span (single distinct brightness, or empty set) maps to 0
/// rather than propagating a non-finite division.
fn normalize_with(bounds: Option<Bounds>, raw: f64) -> f64 {
    match bounds {
        Some(b) if b.max > b.min => (raw - b.min) / (b.max - b.min),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Glyph stub where a character's mask has as many on-pixels as we say.
    struct FakeGlyphs;

    impl GlyphSource for FakeGlyphs {
        fn mask(&self, ch: char) -> u32 {
            let count = match ch {
                'a' => 0,
                'b' => 10,
                'c' => 20,
                'd' => 25,
                _ => 5,
            };
            if count == 0 { 0 } else { (1u32 << count) - 1 }
        }
    }

    fn fake_matcher(chars: &str) -> BrightnessMatcher<FakeGlyphs> {
        BrightnessMatcher::new(FakeGlyphs, chars.chars())
    }

    fn normalized_keys<G: GlyphSource>(m: &BrightnessMatcher<G>) -> Vec<f64> {
        m.normalized.keys().map(|k| k.0).collect()
    }

    #[test]
    fn match_returns_member_of_active_set() {
        let matcher = BrightnessMatcher::builtin("0123456789".chars());
        for step in 0..=10 {
            let target = f64::from(step) / 10.0;
            let ch = matcher.match_char(target).expect("non-empty set");
            assert!(matcher.contains(ch), "{ch} not in set for target {target}");
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = fake_matcher("ab");
        once.add('c');
        let mut twice = fake_matcher("ab");
        twice.add('c');
        twice.add('c');
        assert_eq!(once.chars(), twice.chars());
        assert_eq!(once.bounds(), twice.bounds());
        assert_eq!(normalized_keys(&once), normalized_keys(&twice));
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut matcher = fake_matcher("ab");
        let chars_before = matcher.chars();
        let bounds_before = matcher.bounds();
        let keys_before = normalized_keys(&matcher);

        matcher.add('d');
        assert_ne!(matcher.bounds(), bounds_before);
        matcher.remove('d');

        assert_eq!(matcher.chars(), chars_before);
        assert_eq!(matcher.bounds(), bounds_before);
        assert_eq!(normalized_keys(&matcher), keys_before);
    }

    #[test]
    fn bounds_cover_every_raw_brightness() {
        let mut matcher = BrightnessMatcher::builtin(" .@".chars());
        for ch in "0aZ#|".chars() {
            matcher.add(ch);
        }
        let (min, max) = matcher.bounds().expect("non-empty");
        let font = BitmapFont;
        for ch in matcher.chars() {
            let b = font.raw_brightness(ch);
            assert!(min <= b && b <= max, "{ch} outside [{min}, {max}]");
        }
    }

    #[test]
    fn tie_break_picks_smallest_code_point() {
        // '/' (0x2F) and '\\' (0x5C) share an on-pixel count in the builtin
        // font, so they bucket together in both indices.
        let mut matcher = BrightnessMatcher::builtin(" /@".chars());
        matcher.add('\\');
        let font = BitmapFont;
        let (min, max) = matcher.bounds().expect("non-empty");
        let at = (font.raw_brightness('/') - min) / (max - min);
        for policy in [
            ComparisonPolicy::ClosestAbsolute,
            ComparisonPolicy::ClosestLower,
            ComparisonPolicy::ClosestHigher,
        ] {
            matcher.set_policy(policy);
            assert_eq!(matcher.match_char(at).expect("non-empty"), '/');
        }
    }

    #[test]
    fn policies_pick_the_documented_neighbor() {
        // Normalized brightnesses: a → 0.0, b → 0.5, c → 1.0.
        let mut matcher = fake_matcher("abc");

        matcher.set_policy(ComparisonPolicy::ClosestAbsolute);
        assert_eq!(matcher.match_char(0.5).expect("set"), 'b');

        // Target 0.25 sits exactly between a and b: tie favors the floor.
        assert_eq!(matcher.match_char(0.25).expect("set"), 'a');

        matcher.set_policy(ComparisonPolicy::ClosestHigher);
        assert_eq!(matcher.match_char(0.25).expect("set"), 'b');

        matcher.set_policy(ComparisonPolicy::ClosestLower);
        assert_eq!(matcher.match_char(0.25).expect("set"), 'a');
    }

    #[test]
    fn policy_falls_back_when_one_side_is_missing() {
        let mut matcher = fake_matcher("abc");
        matcher.set_policy(ComparisonPolicy::ClosestHigher);
        // No key ≥ 1.5; ceiling is absent, floor takes over.
        assert_eq!(matcher.match_char(1.5).expect("set"), 'c');
        matcher.set_policy(ComparisonPolicy::ClosestLower);
        assert_eq!(matcher.match_char(-0.5).expect("set"), 'a');
    }

    #[test]
    fn degenerate_bounds_never_produce_non_finite_values() {
        // All of /, \, - and | share the same raw brightness.
        let matcher = BrightnessMatcher::builtin("/\\|-".chars());
        for key in normalized_keys(&matcher) {
            assert!(key.is_finite());
            assert_eq!(key, 0.0);
        }
        assert_eq!(matcher.match_char(0.7).expect("set"), '-');
    }

    #[test]
    fn single_character_set_matches_its_sole_member() {
        let matcher = fake_matcher("b");
        assert_eq!(matcher.match_char(0.9).expect("set"), 'b');
    }

    #[test]
    fn empty_set_yields_structured_error() {
        let matcher = fake_matcher("");
        assert!(matches!(
            matcher.match_char(0.5),
            Err(CoreError::EmptyCharset)
        ));
    }

    #[test]
    fn removing_a_bound_rescans_and_rebuilds() {
        let mut matcher = fake_matcher("abd");
        matcher.remove('d');
        let (min, max) = matcher.bounds().expect("non-empty");
        assert_eq!(min, 0.0);
        assert_eq!(max, 10.0 / 25.0);
        // 'b' now carries the max: its normalized key must be 1.0 again.
        assert_eq!(matcher.match_char(1.0).expect("set"), 'b');
    }

    #[test]
    fn removing_absent_or_from_empty_is_a_no_op() {
        let mut matcher = fake_matcher("ab");
        matcher.remove('z');
        assert_eq!(matcher.len(), 2);

        let mut empty = fake_matcher("");
        empty.remove('a');
        assert!(empty.is_empty());
    }

    #[test]
    fn removing_last_character_clears_bounds() {
        let mut matcher = fake_matcher("a");
        matcher.remove('a');
        assert!(matcher.is_empty());
        assert_eq!(matcher.bounds(), None);
        assert!(matcher.match_char(0.0).is_err());
    }

    #[test]
    fn indices_stay_in_lock_step() {
        let mut matcher = fake_matcher("ab");
        for ch in "cdxy".chars() {
            matcher.add(ch);
        }
        matcher.remove('d');
        matcher.remove('a');
        let raw_count: usize = matcher.raw.values().map(BTreeSet::len).sum();
        let norm_count: usize = matcher.normalized.values().map(BTreeSet::len).sum();
        assert_eq!(raw_count, norm_count);
        let from_raw: BTreeSet<char> = matcher.raw.values().flatten().copied().collect();
        let from_norm: BTreeSet<char> = matcher.normalized.values().flatten().copied().collect();
        assert_eq!(from_raw, from_norm);
    }
}
