//! Input notation normalization.
//!
//! Formulas arrive in assorted notations: ASCII shortcuts typed on a plain
//! keyboard (`!`, `&&`, `->`), the canonical glyphs themselves, or a mix.
//! [`normalize`] maps everything onto the canonical symbol set
//! `~ ∧ ∨ → ↔ ⊕` and strips whitespace, so the tokenizer and the span
//! machinery only ever see one spelling of each operator.
//!
//! # Example
//!
//! ```
//! use taut_rs::normalize::normalize;
//!
//! assert_eq!(normalize("p -> (q || !p)"), "p→(q∨~p)");
//! assert_eq!(normalize("p <-> q xor r"), "p↔q⊕r");
//! ```
//!
//! Normalization is idempotent and never fails: characters it does not
//! recognize pass through unchanged, to be rejected later by the tokenizer
//! rather than silently dropped.

/// Rewrites `raw` into canonical operator glyphs with all whitespace removed.
///
/// Alternate spellings: `!`→`~`, `^`/`&&`/`&`→`∧`, `|`/`||`→`∨`,
/// `->`/`=>`→`→`, `<->`/`<=>`→`↔`, `xor` (any case)→`⊕`.
pub fn normalize(raw: &str) -> String {
    // Strip whitespace first so spellings split by spaces ("- >") still fuse.
    let chars: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < chars.len() {
        // Longest spellings first, so "<->" wins over "->".
        if matches_at(&chars, i, &['<', '-', '>']) || matches_at(&chars, i, &['<', '=', '>']) {
            out.push('↔');
            i += 3;
        } else if matches_xor(&chars, i) {
            out.push('⊕');
            i += 3;
        } else if matches_at(&chars, i, &['-', '>']) || matches_at(&chars, i, &['=', '>']) {
            out.push('→');
            i += 2;
        } else if matches_at(&chars, i, &['&', '&']) {
            out.push('∧');
            i += 2;
        } else if matches_at(&chars, i, &['|', '|']) {
            out.push('∨');
            i += 2;
        } else {
            out.push(match chars[i] {
                '!' => '~',
                '^' | '&' => '∧',
                '|' => '∨',
                other => other,
            });
            i += 1;
        }
    }
    out
}

fn matches_at(chars: &[char], at: usize, pattern: &[char]) -> bool {
    chars[at..].starts_with(pattern)
}

fn matches_xor(chars: &[char], at: usize) -> bool {
    chars[at..].len() >= 3
        && chars[at].eq_ignore_ascii_case(&'x')
        && chars[at + 1].eq_ignore_ascii_case(&'o')
        && chars[at + 2].eq_ignore_ascii_case(&'r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace() {
        assert_eq!(normalize("p ∧ q"), "p∧q");
        assert_eq!(normalize("  p\t∨\n q "), "p∨q");
    }

    #[test]
    fn test_ascii_shortcuts() {
        assert_eq!(normalize("!p"), "~p");
        assert_eq!(normalize("p&q"), "p∧q");
        assert_eq!(normalize("p&&q"), "p∧q");
        assert_eq!(normalize("p^q"), "p∧q");
        assert_eq!(normalize("p|q"), "p∨q");
        assert_eq!(normalize("p||q"), "p∨q");
        assert_eq!(normalize("p->q"), "p→q");
        assert_eq!(normalize("p=>q"), "p→q");
        assert_eq!(normalize("p<->q"), "p↔q");
        assert_eq!(normalize("p<=>q"), "p↔q");
    }

    #[test]
    fn test_xor_is_case_insensitive() {
        assert_eq!(normalize("p xor q"), "p⊕q");
        assert_eq!(normalize("p XOR q"), "p⊕q");
        assert_eq!(normalize("p XoR q"), "p⊕q");
    }

    #[test]
    fn test_longest_spelling_wins() {
        // "<->" must not decay into "<" + "->"
        assert_eq!(normalize("p<->q->r"), "p↔q→r");
        // "||" must not become two "∨"
        assert_eq!(normalize("p||q|r"), "p∨q∨r");
    }

    #[test]
    fn test_canonical_glyphs_pass_through() {
        let canonical = "~(p∧q)∨r→s↔p⊕q";
        assert_eq!(normalize(canonical), canonical);
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        // Rejection is the tokenizer's job, not ours.
        assert_eq!(normalize("p # q"), "p#q");
        assert_eq!(normalize("x<y"), "x<y");
    }

    #[test]
    fn test_spaced_spellings_fuse() {
        // Whitespace is stripped before rewriting, so split arrows still fuse.
        assert_eq!(normalize("p - > q"), "p→q");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "p -> (q || !p)",
            "p <-> q xor r",
            "  ~ s ",
            "p&&q|r",
            "p # q",
            "<-",
            "p<-->q",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once);
            println!("{:?} -> {:?} -> {:?}", s, once, twice);
            assert_eq!(once, twice);
        }
    }
}
