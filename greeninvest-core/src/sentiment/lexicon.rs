use std::collections::HashMap;
use std::path::Path;

use greeninvest_types::{GreenInvestError, ScoringMethod, SentimentBreakdown, SentimentResult};

use super::SentimentScorer;

// Empirically derived VADER constants.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't", "rarely",
    "seldom", "despite",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
    "exceptionally", "extreme", "extremely", "fabulously", "fully", "greatly", "highly", "hugely",
    "incredible", "incredibly", "intensely", "major", "majorly", "more", "most", "particularly",
    "purely", "quite", "really", "remarkably", "so", "substantially", "thoroughly", "total",
    "totally", "tremendous", "tremendously", "unbelievably", "unusually", "utter", "utterly",
    "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little", "marginal",
    "marginally", "occasional", "occasionally", "partly", "scarce", "scarcely", "slight",
    "slightly", "somewhat", "sorta", "sortof", "sort-of",
];

/// Token valences loaded from a VADER-format lexicon.
///
/// Each line is `token<TAB>mean<TAB>stddev<TAB>raw ratings`; only the first
/// two columns are used.
#[derive(Debug, Clone, Default)]
pub struct VaderLexicon {
    valences: HashMap<String, f64>,
}

impl VaderLexicon {
    /// Parse lexicon text. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `Lexicon` if a line lacks a numeric valence or the lexicon is empty.
    pub fn parse(text: &str, origin: &str) -> Result<Self, GreenInvestError> {
        let mut valences = HashMap::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split('\t');
            let token = cols.next().unwrap_or_default().trim();
            let valence = cols
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    GreenInvestError::lexicon(origin, format!("malformed entry on line {}", n + 1))
                })?;
            if !token.is_empty() {
                valences.insert(token.to_lowercase(), valence);
            }
        }
        if valences.is_empty() {
            return Err(GreenInvestError::lexicon(origin, "lexicon contains no entries"));
        }
        Ok(Self { valences })
    }

    /// Read and parse a lexicon file.
    ///
    /// # Errors
    /// Returns `Lexicon` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, GreenInvestError> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GreenInvestError::lexicon(origin.clone(), e.to_string()))?;
        Self::parse(&text, &origin)
    }

    /// Build a lexicon from in-memory `(token, valence)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            valences: entries
                .into_iter()
                .map(|(t, v)| (t.as_ref().to_lowercase(), v))
                .collect(),
        }
    }

    /// Valence of a lower-cased token.
    #[must_use]
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// True if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// VADER-style rule-based scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: VaderLexicon,
}

struct Token<'a> {
    text: &'a str,
    lower: String,
}

impl LexiconScorer {
    /// Wrap a loaded lexicon.
    #[must_use]
    pub const fn new(lexicon: VaderLexicon) -> Self {
        Self { lexicon }
    }

    /// Raw VADER polarity scores for `text`.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> SentimentBreakdown {
        let tokens = tokenize(text);
        let cap_diff = is_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, tok) in tokens.iter().enumerate() {
            let kind_of = tok.lower == "kind" && tokens.get(i + 1).is_some_and(|n| n.lower == "of");
            if booster(&tok.lower).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, i, cap_diff));
        }
        but_check(&tokens, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence_at(&self, tokens: &[Token<'_>], i: usize, cap_diff: bool) -> f64 {
        let tok = &tokens[i];
        let Some(mut valence) = self.lexicon.valence(&tok.lower) else {
            return 0.0;
        };
        if cap_diff && is_upper(tok.text) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }
        for start in 0..3 {
            if i <= start {
                break;
            }
            let prev = &tokens[i - (start + 1)];
            if self.lexicon.contains(&prev.lower) {
                continue;
            }
            let mut s = scalar_inc_dec(prev, valence, cap_diff);
            match start {
                1 => s *= 0.95,
                2 => s *= 0.9,
                _ => {}
            }
            valence += s;
            valence = negation_check(valence, tokens, start, i);
        }
        self.least_check(valence, tokens, i)
    }

    fn least_check(&self, valence: f64, tokens: &[Token<'_>], i: usize) -> f64 {
        if i > 1 && !self.lexicon.contains(&tokens[i - 1].lower) && tokens[i - 1].lower == "least"
        {
            let before = tokens[i - 2].lower.as_str();
            if before != "at" && before != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0
            && !self.lexicon.contains(&tokens[i - 1].lower)
            && tokens[i - 1].lower == "least"
        {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentResult {
        let breakdown = self.polarity_scores(text);
        SentimentResult {
            score: (breakdown.compound + 1.0) / 2.0,
            breakdown,
            method: ScoringMethod::Lexicon,
        }
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            // Keep short tokens intact so emoticons like ":)" survive.
            let text = if stripped.chars().count() <= 2 { raw } else { stripped };
            Token {
                text,
                lower: text.to_lowercase(),
            }
        })
        .filter(|t| t.text.chars().count() > 1)
        .collect()
}

fn is_upper(word: &str) -> bool {
    let mut cased = word.chars().filter(|c| c.is_alphabetic()).peekable();
    cased.peek().is_some() && cased.all(char::is_uppercase)
}

fn is_cap_differential(tokens: &[Token<'_>]) -> bool {
    let upper = tokens.iter().filter(|t| is_upper(t.text)).count();
    upper > 0 && upper < tokens.len()
}

fn booster(lower: &str) -> Option<f64> {
    if BOOSTERS_UP.contains(&lower) {
        Some(B_INCR)
    } else if BOOSTERS_DOWN.contains(&lower) {
        Some(B_DECR)
    } else {
        None
    }
}

fn scalar_inc_dec(word: &Token<'_>, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(&word.lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_upper(word.text) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negated(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.contains("n't")
}

fn negation_check(valence: f64, tokens: &[Token<'_>], start: usize, i: usize) -> f64 {
    let w = |back: usize| tokens[i - back].lower.as_str();
    let so_or_this = |s: &str| s == "so" || s == "this";
    match start {
        0 if negated(w(1)) => valence * N_SCALAR,
        1 => {
            if w(2) == "never" && so_or_this(w(1)) {
                valence * 1.25
            } else if w(2) == "without" && w(1) == "doubt" {
                valence
            } else if negated(w(2)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if w(3) == "never" && (so_or_this(w(2)) || so_or_this(w(1))) {
                valence * 1.25
            } else if w(3) == "without" && (w(2) == "doubt" || w(1) == "doubt") {
                valence
            } else if negated(w(3)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

// Sentiment before "but" is halved and sentiment after it is boosted.
fn but_check(tokens: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(bi) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < bi {
            *s *= 0.5;
        } else if idx > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let bangs = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let ep = bangs as f64 * 0.292;
    let qm = match questions {
        0 | 1 => 0.0,
        #[allow(clippy::cast_precision_loss)]
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

fn normalize(score: f64) -> f64 {
    (score / score.mul_add(score, NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (v * f).round() / f
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentBreakdown {
    if sentiments.is_empty() {
        return SentimentBreakdown {
            compound: 0.0,
            pos: 0.0,
            neu: 0.0,
            neg: 0.0,
        };
    }
    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }
    let total = pos_sum + neg_sum.abs() + neu_count;

    SentimentBreakdown {
        compound: round_to(compound, 4),
        pos: round_to((pos_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        neg: round_to((neg_sum / total).abs(), 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::new(VaderLexicon::from_entries([
            ("good", 1.9),
            ("great", 3.1),
            ("bad", -2.5),
            ("pollution", -1.6),
            (":)", 2.0),
        ]))
    }

    #[test]
    fn tokenizer_strips_punctuation_but_keeps_emoticons() {
        let toks = tokenize("Great, results :) a !!");
        let words: Vec<&str> = toks.iter().map(|t| t.text).collect();
        assert_eq!(words, vec!["Great", "results", ":)", "!!"]);
    }

    #[test]
    fn negation_flips_polarity() {
        let s = scorer();
        assert!(s.polarity_scores("the outlook is good").compound > 0.0);
        assert!(s.polarity_scores("the outlook is not good").compound < 0.0);
    }

    #[test]
    fn booster_increases_intensity() {
        let s = scorer();
        let plain = s.polarity_scores("results were good").compound;
        let boosted = s.polarity_scores("results were extremely good").compound;
        assert!(boosted > plain);
    }

    #[test]
    fn clause_after_but_dominates() {
        let s = scorer();
        assert!(s.polarity_scores("governance was good but pollution").compound < 0.0);
        assert!(s.polarity_scores("pollution but governance was great").compound > 0.0);
    }

    #[test]
    fn exclamations_amplify() {
        let s = scorer();
        let calm = s.polarity_scores("a great year").compound;
        let loud = s.polarity_scores("a great year!!!").compound;
        assert!(loud > calm);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let b = scorer().polarity_scores("quarterly filing attached");
        assert!(b.compound.abs() < f64::EPSILON);
        assert!((b.neu - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        let err = VaderLexicon::parse("good\t1.9\t0.9\t[2]\nbroken-line\n", "mem").unwrap_err();
        assert!(matches!(err, GreenInvestError::Lexicon { .. }));
        let lex = VaderLexicon::parse("good\t1.9\t0.9\t[2, 2]\n\nbad\t-2.5\t0.6\t[-3]\n", "mem")
            .unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.valence("bad"), Some(-2.5));
    }
}
