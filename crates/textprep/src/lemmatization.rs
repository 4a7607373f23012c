//! Lemmatization strategies.
//!
//! Three variants are selectable at configuration time:
//!
//! - [`LemmaStrategy::RuleBased`]: at most one suffix strip (`ing`, `ed`, `s`).
//!   Works for any language and never fails.
//! - [`LemmaStrategy::Dictionary`]: irregular-form table plus suffix rules chosen
//!   by part of speech. English only.
//! - [`LemmaStrategy::External`]: a caller-supplied [`LemmaModel`].
//!
//! [`Lemmatizer::resolve`] picks the first usable variant along the chain
//! External → Dictionary → RuleBased and logs every step it skips.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::types::Language;

/// Requested lemmatization variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LemmaStrategy {
    #[default]
    RuleBased,
    Dictionary,
    External,
}

impl fmt::Display for LemmaStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LemmaStrategy::RuleBased => "rule_based",
            LemmaStrategy::Dictionary => "dictionary",
            LemmaStrategy::External => "external",
        })
    }
}

/// Coarse part of speech used to pick dictionary rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// An external lemmatizer, e.g. a statistical model for a specific language.
pub trait LemmaModel: Send + Sync {
    fn name(&self) -> &str;

    fn supports(&self, language: Language) -> bool;

    /// Base form of `token`. `pos` is set when POS tagging is enabled.
    fn lemma(&self, token: &str, pos: Option<PartOfSpeech>) -> String;
}

/// Apply at most one suffix rule: `ing` → drop 3, else `ed` → drop 2,
/// else `s` with more than 3 characters → drop 1.
pub fn rule_based_lemma(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ing") {
        return stem.to_string();
    }
    if let Some(stem) = token.strip_suffix("ed") {
        return stem.to_string();
    }
    if token.chars().count() > 3 {
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

const IRREGULAR_FORMS: &[(&str, &str, PartOfSpeech)] = &[
    ("children", "child", PartOfSpeech::Noun),
    ("men", "man", PartOfSpeech::Noun),
    ("women", "woman", PartOfSpeech::Noun),
    ("people", "person", PartOfSpeech::Noun),
    ("mice", "mouse", PartOfSpeech::Noun),
    ("geese", "goose", PartOfSpeech::Noun),
    ("feet", "foot", PartOfSpeech::Noun),
    ("teeth", "tooth", PartOfSpeech::Noun),
    ("analyses", "analysis", PartOfSpeech::Noun),
    ("indices", "index", PartOfSpeech::Noun),
    ("criteria", "criterion", PartOfSpeech::Noun),
    ("phenomena", "phenomenon", PartOfSpeech::Noun),
    ("is", "be", PartOfSpeech::Verb),
    ("are", "be", PartOfSpeech::Verb),
    ("was", "be", PartOfSpeech::Verb),
    ("were", "be", PartOfSpeech::Verb),
    ("been", "be", PartOfSpeech::Verb),
    ("has", "have", PartOfSpeech::Verb),
    ("had", "have", PartOfSpeech::Verb),
    ("did", "do", PartOfSpeech::Verb),
    ("done", "do", PartOfSpeech::Verb),
    ("went", "go", PartOfSpeech::Verb),
    ("gone", "go", PartOfSpeech::Verb),
    ("made", "make", PartOfSpeech::Verb),
    ("said", "say", PartOfSpeech::Verb),
    ("took", "take", PartOfSpeech::Verb),
    ("taken", "take", PartOfSpeech::Verb),
    ("saw", "see", PartOfSpeech::Verb),
    ("seen", "see", PartOfSpeech::Verb),
    ("came", "come", PartOfSpeech::Verb),
    ("got", "get", PartOfSpeech::Verb),
    ("knew", "know", PartOfSpeech::Verb),
    ("known", "know", PartOfSpeech::Verb),
    ("ran", "run", PartOfSpeech::Verb),
    ("began", "begin", PartOfSpeech::Verb),
    ("begun", "begin", PartOfSpeech::Verb),
    ("wrote", "write", PartOfSpeech::Verb),
    ("written", "write", PartOfSpeech::Verb),
    ("gave", "give", PartOfSpeech::Verb),
    ("given", "give", PartOfSpeech::Verb),
    ("found", "find", PartOfSpeech::Verb),
    ("thought", "think", PartOfSpeech::Verb),
    ("brought", "bring", PartOfSpeech::Verb),
    ("bought", "buy", PartOfSpeech::Verb),
    ("taught", "teach", PartOfSpeech::Verb),
    ("built", "build", PartOfSpeech::Verb),
    ("learnt", "learn", PartOfSpeech::Verb),
    ("better", "good", PartOfSpeech::Adjective),
    ("best", "good", PartOfSpeech::Adjective),
    ("worse", "bad", PartOfSpeech::Adjective),
    ("worst", "bad", PartOfSpeech::Adjective),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];

fn irregular_lemma(token: &str, pos: PartOfSpeech) -> Option<&'static str> {
    IRREGULAR_FORMS
        .iter()
        .find(|(form, _, p)| *form == token && *p == pos)
        .map(|(_, lemma, _)| *lemma)
}

/// Guess a part of speech from the irregular table and common suffixes.
pub fn guess_pos(token: &str) -> PartOfSpeech {
    if let Some((_, _, pos)) = IRREGULAR_FORMS.iter().find(|(form, _, _)| *form == token) {
        return *pos;
    }
    if token.chars().count() <= 4 {
        return PartOfSpeech::Noun;
    }
    if token.ends_with("ly") {
        PartOfSpeech::Adverb
    } else if token.ends_with("ing") || token.ends_with("ed") {
        PartOfSpeech::Verb
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }
    groups
}

/// Repair a stem left by dropping `ing`/`ed`: `hopp` → `hop`, `mak` → `make`.
fn restore_stem(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 2
        && chars[n - 1] == chars[n - 2]
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'l' | 's' | 'z')
    {
        return chars[..n - 1].iter().collect();
    }
    if n >= 3
        && is_consonant(chars[n - 3])
        && is_vowel(chars[n - 2])
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        && vowel_groups(&chars) == 1
    {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn strip_es(token: &str) -> Option<&str> {
    ["sses", "xes", "ches", "shes", "zzes"]
        .iter()
        .find(|suffix| token.ends_with(*suffix))
        .map(|_| &token[..token.len() - 2])
}

fn noun_lemma(token: &str) -> String {
    if token.chars().count() <= 3 {
        return token.to_string();
    }
    if token.chars().count() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = strip_es(token) {
        return stem.to_string();
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

fn verb_lemma(token: &str) -> String {
    if token.chars().count() <= 3 {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies").or_else(|| token.strip_suffix("ied")) {
        return format!("{stem}y");
    }
    if let Some(stem) = token
        .strip_suffix("eed")
        .filter(|stem| stem.chars().count() >= 2)
    {
        return format!("{stem}ee");
    }
    if let Some(stem) = token.strip_suffix("ing").or_else(|| token.strip_suffix("ed")) {
        if stem.chars().count() >= 2 && has_vowel(stem) {
            return restore_stem(stem);
        }
        return token.to_string();
    }
    if let Some(stem) = strip_es(token) {
        return stem.to_string();
    }
    if token.ends_with("ss") {
        return token.to_string();
    }
    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

/// Dictionary lemma for a token with a known part of speech.
pub fn dictionary_lemma(token: &str, pos: PartOfSpeech) -> String {
    if let Some(lemma) = irregular_lemma(token, pos) {
        return lemma.to_string();
    }
    match pos {
        PartOfSpeech::Noun => noun_lemma(token),
        PartOfSpeech::Verb => verb_lemma(token),
        PartOfSpeech::Adjective | PartOfSpeech::Adverb => token.to_string(),
    }
}

/// A resolved lemmatizer, ready to apply.
#[derive(Clone)]
pub enum Lemmatizer {
    RuleBased,
    Dictionary {
        use_pos: bool,
    },
    External {
        model: Arc<dyn LemmaModel>,
        use_pos: bool,
    },
}

impl fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lemmatizer::RuleBased => f.write_str("RuleBased"),
            Lemmatizer::Dictionary { use_pos } => f
                .debug_struct("Dictionary")
                .field("use_pos", use_pos)
                .finish(),
            Lemmatizer::External { model, use_pos } => f
                .debug_struct("External")
                .field("model", &model.name())
                .field("use_pos", use_pos)
                .finish(),
        }
    }
}

impl Lemmatizer {
    /// Resolve a requested strategy into one that can run for `language`.
    ///
    /// External needs a model that supports the language, otherwise Dictionary
    /// is tried. Dictionary is English-only, otherwise RuleBased is used.
    pub fn resolve(
        strategy: LemmaStrategy,
        language: Language,
        use_pos: bool,
        model: Option<Arc<dyn LemmaModel>>,
    ) -> Self {
        match strategy {
            LemmaStrategy::External => match model {
                Some(model) if model.supports(language) => Lemmatizer::External { model, use_pos },
                Some(model) => {
                    tracing::warn!(
                        model = model.name(),
                        %language,
                        "lemma model does not support language, falling back to dictionary"
                    );
                    Self::resolve(LemmaStrategy::Dictionary, language, use_pos, None)
                }
                None => {
                    tracing::warn!("no lemma model available, falling back to dictionary");
                    Self::resolve(LemmaStrategy::Dictionary, language, use_pos, None)
                }
            },
            LemmaStrategy::Dictionary if language == Language::English => {
                Lemmatizer::Dictionary { use_pos }
            }
            LemmaStrategy::Dictionary => {
                tracing::warn!(
                    %language,
                    "no lemma dictionary for language, falling back to rule-based"
                );
                Lemmatizer::RuleBased
            }
            LemmaStrategy::RuleBased => Lemmatizer::RuleBased,
        }
    }

    /// The strategy that actually runs.
    pub fn strategy(&self) -> LemmaStrategy {
        match self {
            Lemmatizer::RuleBased => LemmaStrategy::RuleBased,
            Lemmatizer::Dictionary { .. } => LemmaStrategy::Dictionary,
            Lemmatizer::External { .. } => LemmaStrategy::External,
        }
    }

    pub fn lemmatize(&self, token: &str) -> String {
        match self {
            Lemmatizer::RuleBased => rule_based_lemma(token),
            Lemmatizer::Dictionary { use_pos } => {
                // Untagged tokens are treated as nouns.
                let pos = if *use_pos {
                    guess_pos(token)
                } else {
                    PartOfSpeech::Noun
                };
                dictionary_lemma(token, pos)
            }
            Lemmatizer::External { model, use_pos } => {
                model.lemma(token, use_pos.then(|| guess_pos(token)))
            }
        }
    }

    /// Lemmatize every token. Output length equals input length.
    pub fn lemmatize_all(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.iter().map(|t| self.lemmatize(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_stem_undoubles() {
        assert_eq!(restore_stem("runn"), "run");
        assert_eq!(restore_stem("fall"), "fall");
    }

    #[test]
    fn restore_stem_adds_e_to_short_cvc() {
        assert_eq!(restore_stem("mak"), "make");
        assert_eq!(restore_stem("open"), "open");
        assert_eq!(restore_stem("creat"), "create");
    }

    #[test]
    fn vowel_groups_counts_runs() {
        let chars: Vec<char> = "beautiful".chars().collect();
        assert_eq!(vowel_groups(&chars), 3);
    }
}
