//! Accent folding.
//!
//! Replaces a fixed set of precomposed accented characters with their base
//! letters so that `"Zurich"` matches `"Zürich"`. The substitution table is
//! plain data ([`FOLD_RULES`]); [`AccentFolder`] compiles it into a lookup map
//! and applies it in a single pass.
//!
//! Every substitution maps one code point to one code point, so the folded
//! string always has the same number of `char`s as the input (byte length may
//! shrink). Characters outside the table pass through untouched, including
//! combining marks and letters such as `ł`, `č` or `ğ`.
//!
//! ## Known quirk
//!
//! The uppercase `Ì Í Î Ï` group folds to lowercase `i`, unlike every other
//! uppercase group. Existing search keys depend on this, so it is kept.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// One entry of the substitution table: every char in `sources` becomes `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldRule {
    /// Characters replaced by this rule.
    pub sources: &'static str,
    /// Replacement character.
    pub target: char,
}

impl FoldRule {
    const fn new(sources: &'static str, target: char) -> Self {
        Self { sources, target }
    }
}

/// The substitution table, in application order.
///
/// No target of one rule is a source of another, so applying the rules one by
/// one or all at once yields the same result.
pub const FOLD_RULES: &[FoldRule] = &[
    FoldRule::new("έ", 'ε'),
    FoldRule::new("ύϋΰ", 'υ'),
    FoldRule::new("ό", 'ο'),
    FoldRule::new("ώ", 'ω'),
    FoldRule::new("ά", 'α'),
    FoldRule::new("ίϊΐ", 'ι'),
    FoldRule::new("ή", 'η'),
    FoldRule::new("\n", ' '),
    FoldRule::new("ÀÁÂÃÄÅ", 'A'),
    FoldRule::new("àáâãäå", 'a'),
    FoldRule::new("ÈÉÊË", 'E'),
    FoldRule::new("èéêë", 'e'),
    FoldRule::new("ÌÍÎÏ", 'i'),
    FoldRule::new("ìíîï", 'i'),
    FoldRule::new("ÒÓÔÕÖ", 'O'),
    FoldRule::new("òóôõö", 'o'),
    FoldRule::new("ÙÚÛÜ", 'U'),
    FoldRule::new("ùúûü", 'u'),
    FoldRule::new("Ñ", 'N'),
    FoldRule::new("ñ", 'n'),
    FoldRule::new("Ț", 'T'),
    FoldRule::new("ț", 't'),
    FoldRule::new("Ș", 'S'),
    FoldRule::new("ș", 's'),
    FoldRule::new("Ç", 'C'),
    FoldRule::new("ç", 'c'),
];

/// Compiled form of [`FOLD_RULES`].
///
/// Building the map is cheap but not free; reuse a folder, or call
/// [`fold_accents`] which shares one process-wide instance.
///
/// # Examples
///
/// ```
/// use tablefold_core::analyzer::fold::AccentFolder;
///
/// let folder = AccentFolder::new();
/// assert_eq!(folder.fold("Zürich"), "Zurich");
/// assert_eq!(folder.fold("a\nb"), "a b");
/// ```
#[derive(Debug, Clone)]
pub struct AccentFolder {
    map: FxHashMap<char, char>,
}

impl Default for AccentFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccentFolder {
    /// Compiles the substitution table.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        for rule in FOLD_RULES {
            for source in rule.sources.chars() {
                map.entry(source).or_insert(rule.target);
            }
        }
        Self { map }
    }

    /// Returns the shared folder used by [`fold_accents`].
    pub fn shared() -> &'static AccentFolder {
        static SHARED: OnceLock<AccentFolder> = OnceLock::new();
        SHARED.get_or_init(AccentFolder::new)
    }

    /// Folds a single character.
    #[inline(always)]
    pub fn fold_char(&self, c: char) -> char {
        self.map.get(&c).copied().unwrap_or(c)
    }

    /// Folds `input` into `out`, clearing it first and reusing its capacity.
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut rest = input;
        while !rest.is_empty() {
            // ASCII other than '\n' never folds; copy it in one go.
            let run = rest
                .bytes()
                .position(|b| b == b'\n' || !b.is_ascii())
                .unwrap_or(rest.len());
            out.push_str(&rest[..run]);
            rest = &rest[run..];

            let mut chars = rest.chars();
            let Some(c) = chars.next() else {
                break;
            };
            out.push(self.fold_char(c));
            rest = chars.as_str();
        }
    }

    /// Folds `input` and returns a new String.
    #[inline]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.fold_into(input, &mut out);
        out
    }

    /// Number of distinct source characters in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always `false`; the table is fixed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Folds accents out of `input` using the shared folder.
#[inline]
pub fn fold_accents(input: &str) -> String {
    AccentFolder::shared().fold(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(s: &str) -> String {
        fold_accents(s)
    }

    #[test]
    fn zurich() {
        assert_eq!(fold("Zürich"), "Zurich");
    }

    #[test]
    fn case_preserved() {
        assert_eq!(fold("ÀÉ"), "AE");
        assert_eq!(fold("àé"), "ae");
    }

    #[test]
    fn latin_groups() {
        assert_eq!(fold("ÀÁÂÃÄÅ"), "AAAAAA");
        assert_eq!(fold("àáâãäå"), "aaaaaa");
        assert_eq!(fold("ÈÉÊË"), "EEEE");
        assert_eq!(fold("èéêë"), "eeee");
        assert_eq!(fold("ìíîï"), "iiii");
        assert_eq!(fold("ÒÓÔÕÖ"), "OOOOO");
        assert_eq!(fold("òóôõö"), "ooooo");
        assert_eq!(fold("ÙÚÛÜ"), "UUUU");
        assert_eq!(fold("ùúûü"), "uuuu");
        assert_eq!(fold("Ññ"), "Nn");
        assert_eq!(fold("Çç"), "Cc");
    }

    #[test]
    fn uppercase_i_group_folds_to_lowercase() {
        assert_eq!(fold("ÌÍÎÏ"), "iiii");
        assert_eq!(fold("Ísland"), "island");
    }

    #[test]
    fn romanian_comma_below() {
        assert_eq!(fold("ȚțȘș"), "TtSs");
        assert_eq!(fold("Timișoara"), "Timisoara");
    }

    #[test]
    fn cedilla_variants_not_folded() {
        // Ţ ţ Ş ş (cedilla) are distinct from the comma-below letters.
        assert_eq!(fold("ŢţŞş"), "ŢţŞş");
    }

    #[test]
    fn greek_folding() {
        assert_eq!(fold("έύόώάίή"), "ευοωαιη");
        assert_eq!(fold("ϋΰ"), "υυ");
        assert_eq!(fold("ϊΐ"), "ιι");
    }

    #[test]
    fn greek_uppercase_tonos_untouched() {
        assert_eq!(fold("ΆΈΉ"), "ΆΈΉ");
    }

    #[test]
    fn newline_becomes_space() {
        assert_eq!(fold("a\nb"), "a b");
        assert_eq!(fold("\n\n"), "  ");
    }

    #[test]
    fn other_whitespace_untouched() {
        assert_eq!(fold("a\r\nb"), "a\r b");
        assert_eq!(fold("a\tb"), "a\tb");
    }

    #[test]
    fn global_replacement() {
        assert_eq!(fold("ñññ"), "nnn");
    }

    #[test]
    fn unlisted_diacritics_pass_through() {
        assert_eq!(fold("Łódź"), "Łodź");
        assert_eq!(fold("Český"), "Český");
        assert_eq!(fold("ığş"), "ığş");
        assert_eq!(fold("ÿ"), "ÿ");
    }

    #[test]
    fn combining_marks_untouched() {
        assert_eq!(fold("cafe\u{0301}"), "cafe\u{0301}");
    }

    #[test]
    fn ascii_identity() {
        let s = "Hello, World! 0123456789 ~`@#$%^&*()_+-=[]{}|;':\",./<>?\t";
        assert_eq!(fold(s), s);
    }

    #[test]
    fn empty_input() {
        assert_eq!(fold(""), "");
    }

    #[test]
    fn char_count_preserved() {
        let inputs = ["Zürich", "ÀÉÌÒÙ àéìòù", "έύόώάίή\n", "日本語 ñ 🌍"];
        for input in inputs {
            assert_eq!(fold(input).chars().count(), input.chars().count());
        }
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Zürich",
            "São Paulo\nBrasil",
            "ÌÍÎÏ ìíîï",
            "έύόώάίή ϋΰϊΐ",
            "Țară Șosea Ça",
            "plain ascii",
        ];
        for s in samples {
            let once = fold(s);
            assert_eq!(fold(&once), once);
        }
    }

    #[test]
    fn targets_never_fold() {
        let folder = AccentFolder::new();
        for rule in FOLD_RULES {
            assert_eq!(folder.fold_char(rule.target), rule.target);
        }
    }

    #[test]
    fn every_source_is_mapped() {
        let folder = AccentFolder::new();
        let mut sources = 0;
        for rule in FOLD_RULES {
            for c in rule.sources.chars() {
                assert_eq!(folder.fold_char(c), rule.target, "source {:?}", c);
                sources += 1;
            }
        }
        assert_eq!(folder.len(), sources);
        assert!(!folder.is_empty());
    }

    #[test]
    fn non_ascii_between_ascii_runs() {
        assert_eq!(fold("abcé def ñ xyz"), "abce def n xyz");
        assert_eq!(fold("éa"), "ea");
        assert_eq!(fold("aé"), "ae");
    }

    #[test]
    fn fold_into_reuses_capacity() {
        let folder = AccentFolder::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        folder.fold_into("Zürich", &mut buf);
        assert_eq!(buf, "Zurich");
        folder.fold_into("Genève", &mut buf);
        assert_eq!(buf, "Geneve");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn shared_matches_fresh() {
        let fresh = AccentFolder::new();
        assert_eq!(AccentFolder::shared().fold("Crème brûlée"), fresh.fold("Crème brûlée"));
        assert_eq!(fresh.fold("Crème brûlée"), "Creme brulee");
    }
}
