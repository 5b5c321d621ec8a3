/// Turns free-text names (club names typed at registration) into a comparison
/// key, so that "Judo-Club d'Évry" and "JUDO CLUB D EVRY" end up in the same
/// bucket.
///
/// Injected into the roll-ups instead of being hard-wired, so a federation with
/// its own club registry can plug in an exact lookup.
pub trait NameNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

/// Default normalizer: folds Latin accents to ASCII, replaces punctuation with
/// spaces, collapses whitespace and uppercases.
///
/// # Examples
///
/// ```
/// use tournament::{FoldingNormalizer, NameNormalizer};
///
/// let normalizer = FoldingNormalizer;
/// assert_eq!(normalizer.normalize("  Judo-Club d'Évry "), "JUDO CLUB D EVRY");
/// assert_eq!(normalizer.normalize("judo club d evry"), "JUDO CLUB D EVRY");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingNormalizer;

impl NameNormalizer for FoldingNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let mut folded = String::with_capacity(raw.len());

        for c in raw.chars().flat_map(char::to_lowercase) {
            match fold_char(c) {
                Some(ascii) => folded.push_str(ascii),
                None if c.is_alphanumeric() => folded.push(c),
                None => folded.push(' '),
            }
        }

        folded
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }
}

fn fold_char(c: char) -> Option<&'static str> {
    let ascii = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_folded() {
        assert_eq!(FoldingNormalizer.normalize("Étoile Sportive Châtenay"), "ETOILE SPORTIVE CHATENAY");
    }

    #[test]
    fn test_punctuation_and_spacing() {
        assert_eq!(FoldingNormalizer.normalize("J.C.  Saint-Denis"), "J C SAINT DENIS");
        assert_eq!(FoldingNormalizer.normalize("   "), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            FoldingNormalizer.normalize("dojo lyonnais"),
            FoldingNormalizer.normalize("DOJO Lyonnais")
        );
    }

    #[test]
    fn test_ligatures() {
        assert_eq!(FoldingNormalizer.normalize("Cœur de Judo"), "COEUR DE JUDO");
    }
}
