//! dmrs-labels - Predicate and sort-information lattices for semantic
//! dependency graph labels.
//!
//! Every node of a dependency graph carries a predicate ([`Pred`]) and the
//! sort information of its variable ([`Sortinfo`]). Both families may be
//! partially specified, and both are ordered by subsumption
//! ([`Subsumption`]): an underspecified value sits above all of its
//! specialisations.

pub mod error;
pub mod lattice;
pub mod normalize;
pub mod pred;
pub mod sortinfo;

pub use error::{ErrorKind, LabelError};
pub use lattice::{Relation, Subsumption, relation};
pub use normalize::{Advisory, AdvisoryKind, Checked};
pub use pred::{GPred, PREDSORT, Pred, RealPred};
pub use sortinfo::{
    CVARSORT, Cvarsort, EVENT_FEATURES, EventSortinfo, FeatureSet, INSTANCE_FEATURES,
    InstanceSortinfo, NormalisedDict, Sortinfo, normalise_dict,
};
