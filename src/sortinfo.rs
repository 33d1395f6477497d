//! Sort information: the grammatical features of a node's variable.
//!
//! A [`Sortinfo`] is either completely underspecified, an event (`e`) or an
//! instance (`x`). Each concrete sort carries a fixed, ordered list of
//! features, every one of which may be unset (`None`) or hold a lower-case
//! token. `"?"` and `"u"` mark a feature as deliberately underspecified.

use crate::error::LabelError;
use crate::lattice::Subsumption;
use crate::normalize::{self, Advisory, Checked};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;

/// Key holding the discriminator in dictionaries and mapping iteration.
pub const CVARSORT: &str = "cvarsort";

/// Sentence force, tense, mood, perfect, progressive.
pub const EVENT_FEATURES: [&str; 5] = ["sf", "tense", "mood", "perf", "prog"];

/// Person, number, gender, individuated, pronoun type.
pub const INSTANCE_FEATURES: [&str; 5] = ["pers", "num", "gend", "ind", "pt"];

/// Older name of the instance `pt` feature, still found in some files.
const PRONTYPE: &str = "prontype";

fn is_specified(value: &str) -> bool {
    !matches!(value, "?" | "u")
}

/// The discriminator of a sortinfo value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cvarsort {
    #[default]
    Unspecified,
    Event,
    Instance,
}

impl Cvarsort {
    pub const fn as_char(self) -> char {
        match self {
            Cvarsort::Unspecified => 'i',
            Cvarsort::Event => 'e',
            Cvarsort::Instance => 'x',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Cvarsort::Unspecified => "i",
            Cvarsort::Event => "e",
            Cvarsort::Instance => "x",
        }
    }

    /// Ordered feature names carried by this sort.
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            Cvarsort::Unspecified => &[],
            Cvarsort::Event => &EVENT_FEATURES,
            Cvarsort::Instance => &INSTANCE_FEATURES,
        }
    }

    pub const fn type_name(self) -> &'static str {
        match self {
            Cvarsort::Unspecified => "Sortinfo",
            Cvarsort::Event => "EventSortinfo",
            Cvarsort::Instance => "InstanceSortinfo",
        }
    }

    /// Read a discriminator token. Anything other than `e` or `x`
    /// (`i`, `u`, `p`, ...) is underspecified.
    pub fn from_token(token: &str) -> Cvarsort {
        match token {
            "e" => Cvarsort::Event,
            "x" => Cvarsort::Instance,
            _ => Cvarsort::Unspecified,
        }
    }

    fn has_feature(self, feature: &str) -> bool {
        self.features().contains(&feature)
    }
}

impl fmt::Display for Cvarsort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A sortinfo dictionary after key normalisation and cvarsort inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalisedDict {
    /// Lower-case discriminator token as resolved, e.g. `"e"` or `"u"`.
    pub cvarsort: String,
    /// Lower-case feature names; values as given.
    pub features: BTreeMap<String, Option<String>>,
}

impl NormalisedDict {
    fn named(&self) -> Vec<(&str, Option<&str>)> {
        self.features
            .iter()
            .map(|(feature, value)| (feature.as_str(), value.as_deref()))
            .collect()
    }
}

/// Normalise a sortinfo dictionary: lower-case the keys and the
/// discriminator, and infer `e` or `x` from the feature names when the
/// discriminator is underspecified. Event evidence wins over instance
/// evidence.
pub fn normalise_dict<I, K, V>(entries: I) -> Result<Checked<NormalisedDict>, LabelError>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut advisories = Vec::new();
    let mut cvarsort = None;
    let mut features = BTreeMap::new();

    for (key, value) in entries {
        let key = normalize::lowercase(key.as_ref(), &mut advisories);
        if key == CVARSORT {
            cvarsort = value.map(|v| normalize::lowercase(v.as_ref(), &mut advisories));
        } else {
            features.insert(key, value.map(|v| v.as_ref().to_string()));
        }
    }

    let mut cvarsort = cvarsort.ok_or(LabelError::MissingCvarsort)?;
    if cvarsort != "e" && cvarsort != "x" && !features.is_empty() {
        let inferred = if features.keys().any(|k| Cvarsort::Event.has_feature(k)) {
            Some(Cvarsort::Event)
        } else if features.keys().any(|k| Cvarsort::Instance.has_feature(k)) {
            Some(Cvarsort::Instance)
        } else {
            None
        };
        if let Some(inferred) = inferred {
            tracing::debug!(from = %cvarsort, to = %inferred, "inferred cvarsort from feature names");
            cvarsort = inferred.as_str().to_string();
        }
    }

    Ok(Checked::new(NormalisedDict { cvarsort, features }, advisories))
}

/// Write positional and named values into a feature slice.
fn assign(
    name: &'static str,
    features: &'static [&'static str],
    values: &mut [Option<String>],
    positional: &[Option<&str>],
    named: &[(&str, Option<&str>)],
    advisories: &mut Vec<Advisory>,
) -> Result<(), LabelError> {
    if positional.len() > features.len() {
        return Err(LabelError::Arity {
            name,
            expected: features.len().to_string(),
            given: positional.len(),
        });
    }
    for (slot, value) in values.iter_mut().zip(positional) {
        *slot = value.map(|v| normalize::lowercase(v, advisories));
    }
    for (feature, value) in named {
        let feature = normalize::lowercase(feature, advisories);
        if feature == CVARSORT {
            return Err(LabelError::ReadOnlyCvarsort);
        }
        let Some(index) = features.iter().position(|f| *f == feature) else {
            return Err(LabelError::UnexpectedFeature { name, feature });
        };
        values[index] = value.map(|v| normalize::lowercase(v, advisories));
    }
    Ok(())
}

/// A concrete sort with a fixed feature list.
pub trait FeatureSet: Default + Sized {
    const CVARSORT: Cvarsort;

    fn values(&self) -> &[Option<String>];

    fn values_mut(&mut self) -> &mut [Option<String>];

    /// Build from values in feature order and/or by feature name.
    /// Unset features are `None`.
    fn new_checked(
        positional: &[Option<&str>],
        named: &[(&str, Option<&str>)],
    ) -> Result<Checked<Self>, LabelError> {
        let mut advisories = Vec::new();
        let mut sortinfo = Self::default();
        assign(
            Self::CVARSORT.type_name(),
            Self::CVARSORT.features(),
            sortinfo.values_mut(),
            positional,
            named,
            &mut advisories,
        )?;
        Ok(Checked::new(sortinfo, advisories))
    }

    fn new(positional: &[Option<&str>], named: &[(&str, Option<&str>)]) -> Result<Self, LabelError> {
        Self::new_checked(positional, named).map(Checked::into_value)
    }

    /// Build from a normalised dictionary whose cvarsort must match this
    /// sort exactly.
    fn from_normalised_dict(dict: &NormalisedDict) -> Result<Checked<Self>, LabelError> {
        if dict.cvarsort != Self::CVARSORT.as_str() {
            return Err(LabelError::CvarsortMismatch {
                name: Self::CVARSORT.type_name(),
                expected: Self::CVARSORT.as_char(),
                found: dict.cvarsort.clone(),
            });
        }
        Self::new_checked(&[], &dict.named())
    }

    fn from_dict_checked<I, K, V>(entries: I) -> Result<Checked<Self>, LabelError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let normalised = normalise_dict(entries)?;
        let mut checked = Self::from_normalised_dict(&normalised.value)?;
        let mut advisories = normalised.advisories;
        advisories.append(&mut checked.advisories);
        Ok(Checked::new(checked.value, advisories))
    }

    fn from_dict<I, K, V>(entries: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_dict_checked(entries).map(Checked::into_value)
    }
}

/// Event sort information.
#[derive(Debug, Clone, Default)]
pub struct EventSortinfo {
    values: [Option<String>; 5],
}

impl EventSortinfo {
    pub fn sf(&self) -> Option<&str> {
        self.values[0].as_deref()
    }

    pub fn tense(&self) -> Option<&str> {
        self.values[1].as_deref()
    }

    pub fn mood(&self) -> Option<&str> {
        self.values[2].as_deref()
    }

    pub fn perf(&self) -> Option<&str> {
        self.values[3].as_deref()
    }

    pub fn prog(&self) -> Option<&str> {
        self.values[4].as_deref()
    }
}

impl FeatureSet for EventSortinfo {
    const CVARSORT: Cvarsort = Cvarsort::Event;

    fn values(&self) -> &[Option<String>] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [Option<String>] {
        &mut self.values
    }
}

/// Instance sort information.
#[derive(Debug, Clone, Default)]
pub struct InstanceSortinfo {
    values: [Option<String>; 5],
}

impl InstanceSortinfo {
    pub fn pers(&self) -> Option<&str> {
        self.values[0].as_deref()
    }

    pub fn num(&self) -> Option<&str> {
        self.values[1].as_deref()
    }

    pub fn gend(&self) -> Option<&str> {
        self.values[2].as_deref()
    }

    pub fn ind(&self) -> Option<&str> {
        self.values[3].as_deref()
    }

    pub fn pt(&self) -> Option<&str> {
        self.values[4].as_deref()
    }
}

impl FeatureSet for InstanceSortinfo {
    const CVARSORT: Cvarsort = Cvarsort::Instance;

    fn values(&self) -> &[Option<String>] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [Option<String>] {
        &mut self.values
    }
}

/// Sort information for one node.
///
/// Equality compares the discriminator and the set of specified
/// `(feature, value)` pairs, so an unset feature equals one holding `"?"`.
#[derive(Debug, Clone, Default)]
pub enum Sortinfo {
    #[default]
    Unspecified,
    Event(EventSortinfo),
    Instance(InstanceSortinfo),
}

impl Sortinfo {
    /// Build a sortinfo of the given sort from positional and named values.
    pub fn build_checked(
        cvarsort: Cvarsort,
        positional: &[Option<&str>],
        named: &[(&str, Option<&str>)],
    ) -> Result<Checked<Sortinfo>, LabelError> {
        match cvarsort {
            Cvarsort::Event => {
                EventSortinfo::new_checked(positional, named).map(|c| c.map(Sortinfo::Event))
            }
            Cvarsort::Instance => {
                InstanceSortinfo::new_checked(positional, named).map(|c| c.map(Sortinfo::Instance))
            }
            Cvarsort::Unspecified => {
                let mut advisories = Vec::new();
                assign(
                    cvarsort.type_name(),
                    cvarsort.features(),
                    &mut [],
                    positional,
                    named,
                    &mut advisories,
                )?;
                Ok(Checked::new(Sortinfo::Unspecified, advisories))
            }
        }
    }

    pub fn build(
        cvarsort: Cvarsort,
        positional: &[Option<&str>],
        named: &[(&str, Option<&str>)],
    ) -> Result<Sortinfo, LabelError> {
        Sortinfo::build_checked(cvarsort, positional, named).map(Checked::into_value)
    }

    pub fn cvarsort(&self) -> Cvarsort {
        match self {
            Sortinfo::Unspecified => Cvarsort::Unspecified,
            Sortinfo::Event(_) => Cvarsort::Event,
            Sortinfo::Instance(_) => Cvarsort::Instance,
        }
    }

    /// Ordered feature names, not including `cvarsort`.
    pub fn features(&self) -> &'static [&'static str] {
        self.cvarsort().features()
    }

    pub fn as_event(&self) -> Option<&EventSortinfo> {
        match self {
            Sortinfo::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&InstanceSortinfo> {
        match self {
            Sortinfo::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    fn values(&self) -> &[Option<String>] {
        match self {
            Sortinfo::Unspecified => &[],
            Sortinfo::Event(event) => event.values(),
            Sortinfo::Instance(instance) => instance.values(),
        }
    }

    fn values_mut(&mut self) -> &mut [Option<String>] {
        match self {
            Sortinfo::Unspecified => &mut [],
            Sortinfo::Event(event) => event.values_mut(),
            Sortinfo::Instance(instance) => instance.values_mut(),
        }
    }

    fn index_of(&self, feature: &str) -> Result<usize, LabelError> {
        self.features()
            .iter()
            .position(|f| *f == feature)
            .ok_or_else(|| LabelError::NoSuchFeature {
                name: self.cvarsort().type_name(),
                feature: feature.to_string(),
            })
    }

    /// Value of a feature, or the discriminator for `"cvarsort"`.
    pub fn get(&self, feature: &str) -> Result<Option<&str>, LabelError> {
        let feature = feature.to_lowercase();
        if feature == CVARSORT {
            return Ok(Some(self.cvarsort().as_str()));
        }
        let index = self.index_of(&feature)?;
        Ok(self.values()[index].as_deref())
    }

    /// Set a feature, lower-casing the name and value.
    pub fn set_checked(
        &mut self,
        feature: &str,
        value: Option<&str>,
    ) -> Result<Checked<()>, LabelError> {
        let mut advisories = Vec::new();
        let feature = normalize::lowercase(feature, &mut advisories);
        if feature == CVARSORT {
            return Err(LabelError::ReadOnlyCvarsort);
        }
        let index = self.index_of(&feature)?;
        self.values_mut()[index] = value.map(|v| normalize::lowercase(v, &mut advisories));
        Ok(Checked::new((), advisories))
    }

    pub fn set(&mut self, feature: &str, value: Option<&str>) -> Result<(), LabelError> {
        self.set_checked(feature, value).map(Checked::into_value)
    }

    /// Unset a feature. The slot stays in the feature list.
    pub fn clear(&mut self, feature: &str) -> Result<(), LabelError> {
        self.set(feature, None)
    }

    /// Case-insensitive, like [`Sortinfo::get`].
    pub fn contains(&self, feature: &str) -> bool {
        let feature = feature.to_lowercase();
        feature == CVARSORT || self.features().contains(&feature.as_str())
    }

    /// `"cvarsort"` followed by the feature names in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + use<> {
        iter::once(CVARSORT).chain(self.features().iter().copied())
    }

    /// Number of keys, counting `cvarsort`.
    pub fn len(&self) -> usize {
        1 + self.features().len()
    }

    /// Always false: every sortinfo has a `cvarsort` key.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every key with its value, `cvarsort` first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        iter::once((CVARSORT, Some(self.cvarsort().as_str()))).chain(
            self.features()
                .iter()
                .copied()
                .zip(self.values().iter().map(Option::as_deref)),
        )
    }

    /// Features whose value is neither unset, `"?"` nor `"u"`.
    pub fn iter_specified(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.features()
            .iter()
            .copied()
            .zip(self.values())
            .filter_map(|(feature, value)| match value.as_deref() {
                Some(v) if is_specified(v) => Some((feature, v)),
                _ => None,
            })
    }

    fn specified_set(&self) -> BTreeSet<(&'static str, &str)> {
        self.iter_specified().collect()
    }

    /// Every key with its value, `cvarsort` included.
    pub fn as_dict(&self) -> BTreeMap<String, Option<String>> {
        self.iter()
            .map(|(feature, value)| (feature.to_string(), value.map(str::to_string)))
            .collect()
    }

    /// Build from a dictionary, inferring the sort when `cvarsort` is
    /// underspecified but the features give it away.
    pub fn from_dict_checked<I, K, V>(entries: I) -> Result<Checked<Sortinfo>, LabelError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let normalised = normalise_dict(entries)?;
        let mut checked = Sortinfo::from_normalised_dict(normalised.value)?;
        let mut advisories = normalised.advisories;
        advisories.append(&mut checked.advisories);
        Ok(Checked::new(checked.value, advisories))
    }

    pub fn from_dict<I, K, V>(entries: I) -> Result<Sortinfo, LabelError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Sortinfo::from_dict_checked(entries).map(Checked::into_value)
    }

    /// Dispatch a normalised dictionary to the sort named by its cvarsort.
    pub fn from_normalised_dict(mut dict: NormalisedDict) -> Result<Checked<Sortinfo>, LabelError> {
        match Cvarsort::from_token(&dict.cvarsort) {
            Cvarsort::Event => {
                EventSortinfo::from_normalised_dict(&dict).map(|c| c.map(Sortinfo::Event))
            }
            Cvarsort::Instance => {
                if let Some(value) = dict.features.remove(PRONTYPE) {
                    dict.features.insert("pt".to_string(), value);
                }
                InstanceSortinfo::from_normalised_dict(&dict).map(|c| c.map(Sortinfo::Instance))
            }
            Cvarsort::Unspecified => {
                if !dict.features.is_empty() {
                    let dropped: Vec<&str> = dict.features.keys().map(String::as_str).collect();
                    tracing::debug!(
                        cvarsort = %dict.cvarsort,
                        ?dropped,
                        "dropped features of underspecified sortinfo"
                    );
                }
                Ok(Checked::new(Sortinfo::Unspecified, Vec::new()))
            }
        }
    }

    /// Parse `c` or `c[feature=value, ...]`. Input is case-insensitive.
    pub fn from_str_checked(text: &str) -> Result<Checked<Sortinfo>, LabelError> {
        let malformed = |reason| LabelError::MalformedSortinfo {
            text: text.to_string(),
            reason,
        };

        let lowered = text.trim().to_lowercase();
        let mut chars = lowered.chars();
        let cvarsort = chars.next().ok_or_else(|| malformed("empty string"))?;
        let rest = chars.as_str();

        let mut entries = vec![(CVARSORT.to_string(), Some(cvarsort.to_string()))];
        if !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .ok_or_else(|| malformed("features must be given in square brackets"))?;
            if !inner.trim().is_empty() {
                for item in inner.split(',') {
                    let (feature, value) = item
                        .split_once('=')
                        .ok_or_else(|| malformed("features must be written feature=value"))?;
                    let (feature, value) = (feature.trim(), value.trim());
                    if feature.is_empty() || value.contains('=') {
                        return Err(malformed("features must be written feature=value"));
                    }
                    let value = (!value.is_empty()).then(|| value.to_string());
                    entries.push((feature.to_string(), value));
                }
            }
        }

        Sortinfo::from_dict_checked(entries)
    }
}

impl From<EventSortinfo> for Sortinfo {
    fn from(event: EventSortinfo) -> Self {
        Sortinfo::Event(event)
    }
}

impl From<InstanceSortinfo> for Sortinfo {
    fn from(instance: InstanceSortinfo) -> Self {
        Sortinfo::Instance(instance)
    }
}

impl fmt::Display for Sortinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specified: Vec<String> = self
            .iter_specified()
            .map(|(feature, value)| format!("{}={}", feature, value))
            .collect();
        if specified.is_empty() {
            write!(f, "{}", self.cvarsort())
        } else {
            write!(f, "{}[{}]", self.cvarsort(), specified.join(", "))
        }
    }
}

impl FromStr for Sortinfo {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sortinfo::from_str_checked(s).map(Checked::into_value)
    }
}

impl PartialEq for Sortinfo {
    fn eq(&self, other: &Self) -> bool {
        self.cvarsort() == other.cvarsort() && self.specified_set() == other.specified_set()
    }
}

impl Eq for Sortinfo {}

impl Hash for Sortinfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cvarsort().hash(state);
        self.specified_set().hash(state);
    }
}

impl Subsumption for Sortinfo {
    fn top() -> Self {
        Sortinfo::Unspecified
    }

    fn subsumes(&self, other: &Self) -> bool {
        (self.cvarsort() == Cvarsort::Unspecified || self.cvarsort() == other.cvarsort())
            && self
                .iter_specified()
                .all(|(feature, value)| other.get(feature).ok().flatten() == Some(value))
    }
}

impl Serialize for Sortinfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sortinfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dict = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Sortinfo::from_dict(dict).map_err(serde::de::Error::custom)
    }
}
