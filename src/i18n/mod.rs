// src/i18n/mod.rs  -  Phrase table, resolver and per-screen translator
mod phrases;

pub use phrases::keys;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ── Language ──────────────────────────────────────────────────────────────────
/// Display language. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
    Gu,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Gu];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Gu => "gu",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Gu => "ગુજરાતી",
        }
    }

    /// `en → hi → gu → en`, used by the language switch key
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::Gu,
            Language::Gu => Language::En,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "gu" => Some(Language::Gu),
            _    => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| TableError::UnknownLanguage(s.to_string()))
    }
}

// ── LocalizedString ───────────────────────────────────────────────────────────
/// One phrase in every supported language.
///
/// The phrase table macro only accepts entries with all three variants, and
/// [`TranslationTable::from_entries`] rejects empty ones, so `get` returning
/// `None` is only reachable through hand-built records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedString {
    pub en: &'static str,
    pub hi: &'static str,
    pub gu: &'static str,
}

impl LocalizedString {
    pub const fn new(en: &'static str, hi: &'static str, gu: &'static str) -> Self {
        Self { en, hi, gu }
    }

    /// Variant for `lang`, or `None` if that variant is empty
    pub fn get(&self, lang: Language) -> Option<&'static str> {
        let s = match lang {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Gu => self.gu,
        };
        (!s.is_empty()).then_some(s)
    }

    fn missing(&self) -> Option<Language> {
        Language::ALL.into_iter().find(|l| self.get(*l).is_none())
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("phrase '{key}' has no {lang} text")]
    MissingVariant { key: String, lang: Language },
    #[error("phrase '{0}' is defined twice")]
    DuplicateKey(String),
    #[error("'{0}' is not a valid phrase key (expected a short ASCII identifier)")]
    InvalidKey(String),
    #[error("unknown language '{0}' (expected en, hi or gu)")]
    UnknownLanguage(String),
}

// ── TranslationTable ──────────────────────────────────────────────────────────
/// Read-only map from semantic key to [`LocalizedString`].
/// Built once in `main` and lent to every screen through a [`Translator`].
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<&'static str, LocalizedString>,
}

impl TranslationTable {
    /// The compiled-in FarmConnect phrases
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_entries(phrases::PHRASES.iter().copied())
    }

    /// Validating constructor: every key must be a unique ASCII identifier and
    /// every entry must carry all three variants.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'static str, LocalizedString)>,
    {
        let mut map = HashMap::new();
        for (key, phrase) in entries {
            if !is_valid_key(key) {
                return Err(TableError::InvalidKey(key.to_string()));
            }
            if let Some(lang) = phrase.missing() {
                return Err(TableError::MissingVariant { key: key.to_string(), lang });
            }
            if map.insert(key, phrase).is_some() {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
        }
        Ok(Self { entries: map })
    }

    /// Skips validation so the fallback path can be exercised.
    #[cfg(test)]
    pub(crate) fn from_entries_unchecked<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, LocalizedString)>,
    {
        Self { entries: entries.into_iter().collect() }
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedString> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// `exact → english → raw key`. Total: never fails, never panics.
    pub fn resolve<'a>(&'a self, key: &'a str, lang: Language) -> &'a str {
        match self.entries.get(key) {
            Some(phrase) => phrase
                .get(lang)
                .or_else(|| phrase.get(Language::En))
                .unwrap_or(key),
            None => key,
        }
    }

    /// Like [`resolve`](Self::resolve) for a raw language code.
    /// Codes outside `en`/`hi`/`gu` resolve as English.
    pub fn resolve_code<'a>(&'a self, key: &'a str, code: &str) -> &'a str {
        self.resolve(key, Language::from_code(code).unwrap_or(Language::En))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= 64
        && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'-')
}

// ── Translator ────────────────────────────────────────────────────────────────
/// Table plus active language, handed to every screen when drawing.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    lang:  Language,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable, lang: Language) -> Self {
        Self { table, lang }
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.table.resolve(key, self.lang)
    }

    /// Resolve `key`, then replace each `{name}` token with its argument.
    /// Single pass; tokens without an argument are left as they are.
    pub fn format(&self, key: &'a str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }

    pub fn language(&self) -> Language {
        self.lang
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out  = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> TranslationTable {
        TranslationTable::builtin().unwrap()
    }

    #[test]
    fn builtin_table_is_complete() {
        let t = table();
        assert!(!t.is_empty());
        assert_eq!(t.len(), phrases::PHRASES.len());
        for key in t.keys() {
            let phrase = t.get(key).unwrap();
            for lang in Language::ALL {
                assert!(phrase.get(lang).is_some(), "{key} lacks {lang}");
            }
        }
    }

    #[test]
    fn resolve_returns_stored_text_unchanged() {
        let t = table();
        for (key, phrase) in phrases::PHRASES {
            assert_eq!(t.resolve(key, Language::En), phrase.en);
            assert_eq!(t.resolve(key, Language::Hi), phrase.hi);
            assert_eq!(t.resolve(key, Language::Gu), phrase.gu);
        }
    }

    #[test]
    fn welcome_in_gujarati() {
        assert_eq!(table().resolve("welcome", Language::Gu), "ફાર્મ કનેક્ટમાં તમારું સ્વાગત છે");
    }

    #[rstest]
    #[case(Language::En, "Login")]
    #[case(Language::Hi, "लॉगिन")]
    #[case(Language::Gu, "લૉગિન")]
    fn login_label(#[case] lang: Language, #[case] expected: &str) {
        assert_eq!(table().resolve("login", lang), expected);
    }

    #[rstest]
    #[case("nonexistentKey123")]
    #[case("")]
    #[case("Welcome")]
    #[case("ફાર્મ")]
    fn unknown_key_comes_back_verbatim(#[case] key: &str) {
        let t = table();
        for lang in Language::ALL {
            assert_eq!(t.resolve(key, lang), key);
        }
    }

    #[test]
    fn present_keys_never_resolve_empty() {
        let t = table();
        for key in t.keys() {
            for lang in Language::ALL {
                assert!(!t.resolve(key, lang).is_empty());
            }
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let t = table();
        let first = t.resolve("findWork", Language::Hi);
        for _ in 0..10 {
            assert_eq!(t.resolve("findWork", Language::Hi), first);
        }
    }

    #[test]
    fn missing_variant_falls_back_to_english_not_key() {
        let t = TranslationTable::from_entries_unchecked([
            ("greeting", LocalizedString::new("Hello", "", "કેમ છો")),
        ]);
        assert_eq!(t.resolve("greeting", Language::Hi), "Hello");
        assert_eq!(t.resolve("greeting", Language::Gu), "કેમ છો");
    }

    #[test]
    fn missing_english_as_well_falls_back_to_key() {
        let t = TranslationTable::from_entries_unchecked([
            ("orphan", LocalizedString::new("", "", "")),
        ]);
        assert_eq!(t.resolve("orphan", Language::Gu), "orphan");
    }

    #[rstest]
    #[case("fr")]
    #[case("")]
    #[case("english")]
    fn unknown_language_code_resolves_as_english(#[case] code: &str) {
        assert_eq!(table().resolve_code("login", code), "Login");
    }

    #[test]
    fn language_code_is_case_insensitive() {
        assert_eq!(table().resolve_code("login", " HI "), "लॉगिन");
    }

    #[test]
    fn construction_rejects_empty_variant() {
        let err = TranslationTable::from_entries([
            ("yes", LocalizedString::new("Yes", "हाँ", "")),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::MissingVariant { key: "yes".into(), lang: Language::Gu });
    }

    #[test]
    fn construction_rejects_duplicates_and_bad_keys() {
        let p = LocalizedString::new("a", "b", "c");
        assert_eq!(
            TranslationTable::from_entries([("dup", p), ("dup", p)]).unwrap_err(),
            TableError::DuplicateKey("dup".into())
        );
        assert_eq!(
            TranslationTable::from_entries([("has space", p)]).unwrap_err(),
            TableError::InvalidKey("has space".into())
        );
    }

    #[test]
    fn switching_language_changes_the_rendered_string() {
        let t = table();
        let en = Translator::new(&t, Language::En);
        let gu = Translator::new(&t, Language::Gu);
        assert_ne!(en.t(keys::welcome), gu.t(keys::welcome));
        assert_eq!(gu.t(keys::welcome), t.resolve("welcome", Language::Gu));
    }

    #[test]
    fn format_replaces_known_tokens_once() {
        let t = table();
        let en = Translator::new(&t, Language::En);
        assert_eq!(en.format(keys::perDay, &[("amount", "450")]), "₹450/day");
        assert_eq!(interpolate("{a} {b} {a}", &[("a", "{b}")]), "{b} {b} {b}");
        assert_eq!(interpolate("left {open", &[]), "left {open");
        assert_eq!(interpolate("{missing}!", &[]), "{missing}!");
    }

    #[test]
    fn language_cycle_and_parse() {
        assert_eq!(Language::En.next().next().next(), Language::En);
        assert_eq!("gu".parse::<Language>(), Ok(Language::Gu));
        assert!("de".parse::<Language>().is_err());
    }
}
