//! Subsumption ordering shared by predicates and sortinfo.

/// A subsumption order: `a.subsumes(&b)` reads `a ⊑ b`, meaning `a` is at
/// least as general as `b`.
///
/// # Laws
///
/// For all `a, b, c`:
///
/// * **Reflexivity**:  `a.subsumes(&a)`
/// * **Transitivity**: if `a.subsumes(&b)` and `b.subsumes(&c)` then `a.subsumes(&c)`
/// * **Top**:          `Self::top().subsumes(&a)`
///
/// Antisymmetry only holds for values without wildcard tokens: two
/// underspecified values may subsume each other without being equal (see
/// [`Relation::Compatible`]). This is why the order is not expressed
/// through [`PartialOrd`].
pub trait Subsumption: PartialEq + Sized {
    /// The completely underspecified value.
    fn top() -> Self;

    /// `self ⊑ other`.
    fn subsumes(&self, other: &Self) -> bool;

    /// `self ⊏ other`: subsumes and is not equal.
    fn strictly_subsumes(&self, other: &Self) -> bool {
        self.subsumes(other) && self != other
    }

    /// `self ⊒ other`. Always answered by `other`'s own `subsumes`.
    fn subsumed_by(&self, other: &Self) -> bool {
        other.subsumes(self)
    }

    /// `self ⊐ other`.
    fn strictly_subsumed_by(&self, other: &Self) -> bool {
        self.subsumed_by(other) && self != other
    }
}

/// How two values of the same lattice relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    /// The left value is strictly more general.
    Subsumes,
    /// The left value is strictly more specific.
    SubsumedBy,
    /// Each subsumes the other through wildcards, but they are not equal.
    Compatible,
    Incomparable,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Subsumes => "subsumes",
            Relation::SubsumedBy => "subsumed-by",
            Relation::Compatible => "compatible",
            Relation::Incomparable => "incomparable",
        }
    }
}

/// Classify the pair `(a, b)`.
pub fn relation<T: Subsumption>(a: &T, b: &T) -> Relation {
    if a == b {
        return Relation::Equal;
    }
    match (a.subsumes(b), b.subsumes(a)) {
        (true, true) => Relation::Compatible,
        (true, false) => Relation::Subsumes,
        (false, true) => Relation::SubsumedBy,
        (false, false) => Relation::Incomparable,
    }
}
