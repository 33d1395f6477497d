//! Predicates: the lattice of node labels saying what a node denotes.
//!
//! Three families share one type: the completely underspecified
//! [`Pred::Unspecified`], real predicates written `_lemma_pos_sense_rel`
//! and grammar predicates written `name_rel`.

use crate::error::LabelError;
use crate::lattice::Subsumption;
use crate::normalize::{self, Advisory, Checked};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type name of the underspecified predicate in grammar files.
pub const PREDSORT: &str = "predsort";

const REL_SUFFIX: &str = "_rel";
const WILDCARD: &str = "?";

/// A node predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Pred {
    /// Any predicate at all. Subsumes every other value.
    #[default]
    Unspecified,
    Real(RealPred),
    Grammar(GPred),
}

impl Pred {
    /// Normalise an external predicate literal.
    ///
    /// Strips one layer of surrounding double quotes and any deprecated
    /// opening single quote, forces lower case and strips trailing `_rel`.
    /// Whitespace and stray double quotes are rejected.
    pub fn normalise_string(text: &str) -> Result<Checked<String>, LabelError> {
        if text.is_empty() {
            return Err(LabelError::EmptyPredicate);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(LabelError::PredicateWhitespace(text.to_string()));
        }

        let mut advisories = Vec::new();
        let mut rest = text;
        if rest.len() >= 2 && rest.starts_with('"') && rest.ends_with('"') {
            rest = &rest[1..rest.len() - 1];
        }
        if rest.starts_with('\'') {
            advisories.push(Advisory::DeprecatedSingleQuote {
                text: text.to_string(),
            });
            rest = rest.trim_start_matches('\'');
        }
        if rest.contains('"') {
            return Err(LabelError::PredicateQuote(text.to_string()));
        }

        let mut normalised = normalize::lowercase(rest, &mut advisories);
        // Repeated suffixes are all stripped so that normalising is idempotent
        while let Some(stripped) = normalised.strip_suffix(REL_SUFFIX) {
            let len = stripped.len();
            normalised.truncate(len);
        }
        if normalised.is_empty() {
            return Err(LabelError::EmptyPredicate);
        }

        Ok(Checked::new(normalised, advisories))
    }

    /// Parse a predicate literal, returning any advisories raised.
    pub fn from_str_checked(text: &str) -> Result<Checked<Pred>, LabelError> {
        let checked = Pred::normalise_string(text)?;
        let pred = Pred::from_normalised_string(&checked.value)?;
        Ok(Checked::new(pred, checked.advisories))
    }

    /// Dispatch an already normalised string on its leading underscore.
    /// [`PREDSORT`] reads back as [`Pred::Unspecified`].
    pub fn from_normalised_string(text: &str) -> Result<Pred, LabelError> {
        if text == PREDSORT {
            Ok(Pred::Unspecified)
        } else if text.starts_with('_') {
            RealPred::from_normalised_string(text).map(Pred::Real)
        } else {
            GPred::from_normalised_string(text).map(Pred::Grammar)
        }
    }

    pub fn as_real(&self) -> Option<&RealPred> {
        match self {
            Pred::Real(pred) => Some(pred),
            _ => None,
        }
    }

    pub fn as_grammar(&self) -> Option<&GPred> {
        match self {
            Pred::Grammar(pred) => Some(pred),
            _ => None,
        }
    }

    /// Family name used in diagnostics and CLI output.
    pub fn family(&self) -> &'static str {
        match self {
            Pred::Unspecified => "Pred",
            Pred::Real(_) => "RealPred",
            Pred::Grammar(_) => "GPred",
        }
    }

    /// True if any field holds a wildcard token. The top value counts.
    pub fn is_underspecified(&self) -> bool {
        match self {
            Pred::Unspecified => true,
            Pred::Real(pred) => pred.is_underspecified(),
            Pred::Grammar(pred) => pred.is_underspecified(),
        }
    }
}

impl From<RealPred> for Pred {
    fn from(pred: RealPred) -> Self {
        Pred::Real(pred)
    }
}

impl From<GPred> for Pred {
    fn from(pred: GPred) -> Self {
        Pred::Grammar(pred)
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pred::Unspecified => write!(f, "{}", PREDSORT),
            Pred::Real(pred) => write!(f, "{}", pred),
            Pred::Grammar(pred) => write!(f, "{}", pred),
        }
    }
}

impl FromStr for Pred {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pred::from_str_checked(s).map(Checked::into_value)
    }
}

impl Subsumption for Pred {
    fn top() -> Self {
        Pred::Unspecified
    }

    fn subsumes(&self, other: &Self) -> bool {
        match (self, other) {
            (Pred::Unspecified, _) => true,
            (Pred::Real(a), Pred::Real(b)) => a.subsumes(b),
            (Pred::Grammar(a), Pred::Grammar(b)) => a.subsumes(b),
            _ => false,
        }
    }
}

impl Serialize for Pred {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pred {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A predicate from the lexicon: lemma, part of speech and optional sense.
///
/// Any field may be `"?"`; the part of speech may also be `"u"` and the
/// sense `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RealPred {
    lemma: String,
    pos: String,
    sense: Option<String>,
}

impl RealPred {
    pub fn new(lemma: &str, pos: &str, sense: Option<&str>) -> Result<Self, LabelError> {
        if lemma.is_empty() {
            return Err(LabelError::EmptyField {
                family: "RealPred",
                field: "lemma",
            });
        }
        if pos.is_empty() {
            return Err(LabelError::EmptyField {
                family: "RealPred",
                field: "pos",
            });
        }
        let sense = sense.filter(|s| !s.is_empty());
        if [Some(lemma), Some(pos), sense]
            .into_iter()
            .flatten()
            .any(|field| field.chars().any(char::is_whitespace))
        {
            return Err(LabelError::FieldWhitespace { family: "RealPred" });
        }
        Ok(RealPred {
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            sense: sense.map(str::to_string),
        })
    }

    /// Build from a positional list of two or three fields.
    pub fn from_parts(parts: &[&str]) -> Result<Self, LabelError> {
        match parts {
            [lemma, pos] => RealPred::new(lemma, pos, None),
            [lemma, pos, sense] => RealPred::new(lemma, pos, Some(*sense)),
            _ => Err(LabelError::Arity {
                name: "RealPred",
                expected: "2 or 3".to_string(),
                given: parts.len(),
            }),
        }
    }

    pub fn from_str_checked(text: &str) -> Result<Checked<RealPred>, LabelError> {
        let checked = Pred::normalise_string(text)?;
        let pred = RealPred::from_normalised_string(&checked.value)?;
        Ok(Checked::new(pred, checked.advisories))
    }

    /// Parse `_lemma_pos[_sense]`. The split is taken from the right, so
    /// lemmas may contain underscores (`_nowhere_near_x_deg`).
    pub fn from_normalised_string(text: &str) -> Result<Self, LabelError> {
        let rest = text
            .strip_prefix('_')
            .ok_or_else(|| LabelError::MissingUnderscore(text.to_string()))?;
        let mut parts: Vec<&str> = rest.rsplitn(3, '_').collect();
        if parts.len() < 2 {
            return Err(LabelError::MissingPos(text.to_string()));
        }
        parts.reverse();
        RealPred::from_parts(&parts)
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn sense(&self) -> Option<&str> {
        self.sense.as_deref()
    }

    pub fn is_underspecified(&self) -> bool {
        self.lemma == WILDCARD
            || matches!(self.pos.as_str(), "?" | "u")
            || matches!(self.sense(), Some("?" | "unknown"))
    }

    /// `self ⊑ other` within the real-predicate family.
    pub fn subsumes(&self, other: &RealPred) -> bool {
        (self.lemma == WILDCARD || self.lemma == other.lemma)
            && (matches!(self.pos.as_str(), "?" | "u") || self.pos == other.pos)
            && (matches!(self.sense(), Some("?" | "unknown")) || self.sense == other.sense)
    }
}

impl fmt::Display for RealPred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sense {
            Some(sense) => write!(f, "_{}_{}_{}{}", self.lemma, self.pos, sense, REL_SUFFIX),
            None => write!(f, "_{}_{}{}", self.lemma, self.pos, REL_SUFFIX),
        }
    }
}

impl FromStr for RealPred {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RealPred::from_str_checked(s).map(Checked::into_value)
    }
}

/// A predicate introduced by the grammar rather than the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GPred {
    name: String,
}

impl GPred {
    pub fn new(name: &str) -> Result<Self, LabelError> {
        if name.is_empty() {
            return Err(LabelError::EmptyField {
                family: "GPred",
                field: "name",
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(LabelError::FieldWhitespace { family: "GPred" });
        }
        Ok(GPred {
            name: name.to_string(),
        })
    }

    /// Build from a positional list holding exactly the name.
    pub fn from_parts(parts: &[&str]) -> Result<Self, LabelError> {
        match parts {
            [name] => GPred::new(name),
            _ => Err(LabelError::Arity {
                name: "GPred",
                expected: "1".to_string(),
                given: parts.len(),
            }),
        }
    }

    pub fn from_str_checked(text: &str) -> Result<Checked<GPred>, LabelError> {
        let checked = Pred::normalise_string(text)?;
        let pred = GPred::from_normalised_string(&checked.value)?;
        Ok(Checked::new(pred, checked.advisories))
    }

    pub fn from_normalised_string(text: &str) -> Result<Self, LabelError> {
        if text.starts_with('_') {
            return Err(LabelError::UnexpectedUnderscore(text.to_string()));
        }
        GPred::new(text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_underspecified(&self) -> bool {
        self.name == WILDCARD
    }

    /// `self ⊑ other` within the grammar-predicate family.
    pub fn subsumes(&self, other: &GPred) -> bool {
        self.name == WILDCARD || self.name == other.name
    }
}

impl fmt::Display for GPred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, REL_SUFFIX)
    }
}

impl FromStr for GPred {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GPred::from_str_checked(s).map(Checked::into_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::normalize::AdvisoryKind;
    use std::collections::HashMap;

    fn real(lemma: &str, pos: &str, sense: Option<&str>) -> RealPred {
        RealPred::new(lemma, pos, sense).unwrap()
    }

    fn gpred(name: &str) -> GPred {
        GPred::new(name).unwrap()
    }

    // --- normalise_string ---

    #[test]
    fn test_normalise_plain() {
        let checked = Pred::normalise_string("_cat_n_1_rel").unwrap();
        assert_eq!(checked.value, "_cat_n_1");
        assert!(checked.is_clean());
    }

    #[test]
    fn test_normalise_strips_double_quotes() {
        let checked = Pred::normalise_string("\"_cat_n_1_rel\"").unwrap();
        assert_eq!(checked.value, "_cat_n_1");
        assert!(checked.is_clean());
    }

    #[test]
    fn test_normalise_single_quote_is_deprecated() {
        let checked = Pred::normalise_string("'_dog_n_1_rel").unwrap();
        assert_eq!(checked.value, "_dog_n_1");
        assert!(checked.has(AdvisoryKind::Deprecation));
        assert!(!checked.has(AdvisoryKind::Case));
    }

    #[test]
    fn test_normalise_forces_lowercase() {
        let checked = Pred::normalise_string("_Cat_N_1_REL").unwrap();
        assert_eq!(checked.value, "_cat_n_1");
        assert!(checked.has(AdvisoryKind::Case));
    }

    #[test]
    fn test_normalise_no_case_advisory_without_letters() {
        let checked = Pred::normalise_string("_?_?").unwrap();
        assert!(checked.is_clean());
    }

    #[test]
    fn test_normalise_rejects_spaces_and_quotes() {
        let err = Pred::normalise_string("_black cat_n_1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(matches!(err, LabelError::PredicateWhitespace(_)));

        let err = Pred::normalise_string("_cat\"_n").unwrap_err();
        assert!(matches!(err, LabelError::PredicateQuote(_)));

        let err = Pred::normalise_string("\"").unwrap_err();
        assert!(matches!(err, LabelError::PredicateQuote(_)));
    }

    #[test]
    fn test_normalise_rejects_empty() {
        assert_eq!(Pred::normalise_string(""), Err(LabelError::EmptyPredicate));
        assert_eq!(Pred::normalise_string("\"\""), Err(LabelError::EmptyPredicate));
        assert_eq!(Pred::normalise_string("_rel"), Err(LabelError::EmptyPredicate));
    }

    #[test]
    fn test_normalise_idempotent() {
        for text in [
            "_cat_n_1_rel",
            "\"udef_q_rel\"",
            "'_dog_n_1",
            "''pron",
            "PRON_REL",
            "x_rel_rel",
            "_nowhere_near_x_deg_rel",
        ] {
            let once = Pred::normalise_string(text).unwrap().value;
            let twice = Pred::normalise_string(&once).unwrap();
            assert_eq!(twice.value, once, "normalising {:?} twice", text);
            assert!(twice.is_clean());
        }
    }

    // --- from_str ---

    #[test]
    fn test_pred_from_str_dispatches_on_underscore() {
        let cat: Pred = "_cat_n_1_rel".parse().unwrap();
        let the: Pred = "the_q_rel".parse().unwrap();
        assert_eq!(cat, Pred::Real(real("cat", "n", Some("1"))));
        assert_eq!(the, Pred::Grammar(gpred("the_q")));

        // Same as parsing each family directly
        assert_eq!(cat.as_real(), Some(&"_cat_n_1_rel".parse::<RealPred>().unwrap()));
        assert_eq!(the.as_grammar(), Some(&"the_q_rel".parse::<GPred>().unwrap()));
    }

    #[test]
    fn test_realpred_from_str() {
        assert_eq!("_the_q_rel".parse::<RealPred>().unwrap(), real("the", "q", None));
        assert_eq!("_the_q".parse::<RealPred>().unwrap(), real("the", "q", None));
        assert_eq!("_cat_n_1_rel".parse::<RealPred>().unwrap(), real("cat", "n", Some("1")));
        assert_eq!("_cat_n_1".parse::<RealPred>().unwrap(), real("cat", "n", Some("1")));
    }

    #[test]
    fn test_realpred_lemma_with_underscores() {
        let expected = real("nowhere_near", "x", Some("deg"));
        assert_eq!("_nowhere_near_x_deg_rel".parse::<RealPred>().unwrap(), expected);
        assert_eq!("_nowhere_near_x_deg".parse::<RealPred>().unwrap(), expected);
    }

    #[test]
    fn test_realpred_from_str_errors() {
        let err = "_the_rel".parse::<RealPred>().unwrap_err();
        assert!(matches!(err, LabelError::MissingPos(_)));
        assert_eq!(err.kind(), ErrorKind::Value);

        assert!(matches!(
            "_the".parse::<RealPred>(),
            Err(LabelError::MissingPos(_))
        ));
        assert!(matches!(
            "udef_q_rel".parse::<RealPred>(),
            Err(LabelError::MissingUnderscore(_))
        ));
        assert!(matches!(
            "_the_".parse::<RealPred>(),
            Err(LabelError::EmptyField { field: "pos", .. })
        ));
    }

    #[test]
    fn test_gpred_from_str() {
        assert_eq!("pron_rel".parse::<GPred>().unwrap(), gpred("pron"));
        assert_eq!("pron".parse::<GPred>().unwrap(), gpred("pron"));
        assert_eq!("udef_q_rel".parse::<GPred>().unwrap(), gpred("udef_q"));
        assert_eq!("udef_q".parse::<GPred>().unwrap(), gpred("udef_q"));
        assert!(matches!(
            "_the_q_rel".parse::<GPred>(),
            Err(LabelError::UnexpectedUnderscore(_))
        ));
    }

    // --- construction ---

    #[test]
    fn test_realpred_new() {
        let the = real("the", "q", None);
        assert_eq!(the.lemma(), "the");
        assert_eq!(the.pos(), "q");
        assert_eq!(the.sense(), None);

        let cat = real("cat", "n", Some("1"));
        assert_eq!(cat.sense(), Some("1"));

        // Empty sense is no sense
        assert_eq!(real("cat", "n", Some("")), real("cat", "n", None));
    }

    #[test]
    fn test_realpred_new_rejects_bad_fields() {
        assert_eq!(
            RealPred::new("", "n", None),
            Err(LabelError::EmptyField {
                family: "RealPred",
                field: "lemma"
            })
        );
        assert!(matches!(
            RealPred::new("cat", "", None),
            Err(LabelError::EmptyField { field: "pos", .. })
        ));
        assert!(matches!(
            RealPred::new("cat", "n", Some("1 2")),
            Err(LabelError::FieldWhitespace { .. })
        ));
    }

    #[test]
    fn test_from_parts_arity() {
        assert_eq!(RealPred::from_parts(&["the", "q"]).unwrap(), real("the", "q", None));
        let err = RealPred::from_parts(&["cat"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = RealPred::from_parts(&["cat", "n", "1", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        assert_eq!(GPred::from_parts(&["pron"]).unwrap().name(), "pron");
        assert_eq!(GPred::from_parts(&[]).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(
            GPred::from_parts(&["udef", "q"]).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_gpred_new_rejects_empty() {
        assert!(matches!(
            GPred::new(""),
            Err(LabelError::EmptyField { family: "GPred", .. })
        ));
    }

    // --- equality and hashing ---

    #[test]
    fn test_equality_is_structural() {
        let cat1 = real("cat", "n", Some("1"));
        let cat2 = real("cat", "n", Some("1"));
        let catnone = real("cat", "n", None);
        let the = real("the", "q", None);
        assert_eq!(cat1, cat2);
        assert_ne!(cat1, catnone);
        assert_ne!(cat1, the);
        assert_ne!(the, catnone);
        assert_eq!(gpred("pron"), gpred("pron"));
        assert_ne!(gpred("pron"), gpred("udef_q"));
    }

    #[test]
    fn test_hashable() {
        let mut index = HashMap::new();
        index.insert(Pred::from(real("the", "q", None)), 1);
        index.insert(Pred::from(gpred("pron")), 2);
        assert_eq!(index[&Pred::from(real("the", "q", None))], 1);
        assert_eq!(index[&"pron_rel".parse::<Pred>().unwrap()], 2);
    }

    // --- rendering ---

    #[test]
    fn test_display() {
        assert_eq!("_the_q_rel".parse::<RealPred>().unwrap().to_string(), "_the_q_rel");
        assert_eq!("_cat_n_1_rel".parse::<Pred>().unwrap().to_string(), "_cat_n_1_rel");
        assert_eq!("pron".parse::<Pred>().unwrap().to_string(), "pron_rel");
        assert_eq!(Pred::Unspecified.to_string(), "predsort");
    }

    #[test]
    fn test_round_trip_normalised_form() {
        for (input, output) in [
            ("\"_Cat_N_1_rel\"", "_cat_n_1_rel"),
            ("'_dog_n", "_dog_n_rel"),
            ("UDEF_Q_REL", "udef_q_rel"),
            ("_nowhere_near_x_deg", "_nowhere_near_x_deg_rel"),
        ] {
            assert_eq!(input.parse::<Pred>().unwrap().to_string(), output);
        }
    }

    // --- subsumption ---

    #[test]
    fn test_realpred_subsumption() {
        let cat = real("cat", "n", Some("1"));
        assert!(real("?", "n", Some("1")).subsumes(&cat));
        assert!(real("cat", "?", Some("1")).subsumes(&cat));
        assert!(real("cat", "u", Some("1")).subsumes(&cat));
        assert!(real("cat", "n", Some("?")).subsumes(&cat));
        assert!(real("cat", "n", Some("unknown")).subsumes(&cat));
        assert!(!real("cat", "n", None).subsumes(&cat));
        assert!(!cat.subsumes(&real("?", "n", Some("1"))));
        assert!(!real("dog", "n", Some("1")).subsumes(&cat));
    }

    #[test]
    fn test_gpred_subsumption() {
        assert!(gpred("?").subsumes(&gpred("pron")));
        assert!(gpred("pron").subsumes(&gpred("pron")));
        assert!(!gpred("pron").subsumes(&gpred("?")));
    }

    #[test]
    fn test_strict_order() {
        let cat = Pred::from(real("cat", "n", Some("1")));
        let any_cat = Pred::from(real("cat", "n", Some("?")));
        assert!(any_cat.strictly_subsumes(&cat));
        assert!(cat.strictly_subsumed_by(&any_cat));
        assert!(!cat.strictly_subsumes(&cat));
        assert!(cat.subsumes(&cat));
    }

    #[test]
    fn test_top_is_one_directional() {
        let cat = Pred::from(real("cat", "n", Some("1")));
        let pron = Pred::from(gpred("pron"));
        // The top value is more general than everything...
        assert!(Pred::top().subsumes(&cat));
        assert!(cat.subsumed_by(&Pred::Unspecified));
        assert!(pron.strictly_subsumed_by(&Pred::Unspecified));
        // ...but nothing concrete is as general as the top value
        assert!(!cat.subsumes(&Pred::Unspecified));
        assert!(!Pred::Unspecified.subsumed_by(&pron));
        assert!(Pred::Unspecified.subsumes(&Pred::Unspecified));
    }

    #[test]
    fn test_families_are_isolated() {
        let real_q = Pred::from(real("?", "?", None));
        let grammar_q = Pred::from(gpred("?"));
        assert_ne!(real_q, grammar_q);
        assert!(!real_q.subsumes(&grammar_q));
        assert!(!grammar_q.subsumes(&real_q));
        assert!(!real_q.subsumed_by(&grammar_q));
    }

    #[test]
    fn test_is_underspecified() {
        assert!(Pred::Unspecified.is_underspecified());
        assert!(real("cat", "u", None).is_underspecified());
        assert!(real("cat", "n", Some("unknown")).is_underspecified());
        assert!(!real("cat", "n", Some("1")).is_underspecified());
        assert!(gpred("?").is_underspecified());
        assert!(!gpred("pron").is_underspecified());
    }

    // --- serde ---

    #[test]
    fn test_serde_as_string() {
        let preds = vec![
            Pred::from(real("cat", "n", Some("1"))),
            Pred::from(gpred("udef_q")),
            Pred::Unspecified,
        ];
        let json = serde_json::to_string(&preds).unwrap();
        assert_eq!(json, r#"["_cat_n_1_rel","udef_q_rel","predsort"]"#);
        let back: Vec<Pred> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preds);
        assert!(serde_json::from_str::<Pred>(r#""_the_rel""#).is_err());
    }

    #[test]
    fn test_unspecified_round_trips_through_from_str() {
        let text = Pred::Unspecified.to_string();
        assert_eq!(text.parse::<Pred>().unwrap(), Pred::Unspecified);
        assert_eq!("predsort_rel".parse::<Pred>().unwrap(), Pred::Unspecified);
        assert_eq!("'PREDSORT".parse::<Pred>().unwrap(), Pred::Unspecified);
        assert_eq!(Pred::from_normalised_string(PREDSORT).unwrap(), Pred::Unspecified);
        assert_eq!("predsorts".parse::<Pred>().unwrap().family(), "GPred");
    }
}
