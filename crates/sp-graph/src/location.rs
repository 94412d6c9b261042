//! Locations, links, and clusters: the plain data the graph owns.

use sp_core::{Health, LocationId, Position};

// ── Location ──────────────────────────────────────────────────────────────────

/// A visitable point ("star") with its gameplay modifiers.
///
/// Identity, position, and cluster membership are fixed once the location
/// is inside a [`Graph`][crate::Graph]; the modifier fields are `pub` so a
/// presentation layer can edit them through
/// [`Graph::location_mut`][crate::Graph::location_mut].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id: LocationId,

    pub label: String,

    position: Position,

    /// Drawing radius (UI only).
    pub radius: f32,

    /// Super-node ("hypergiant"): recharges the traveler on first visit.
    pub supernode: bool,

    /// Base dwell time.  A visit session lasts twice this long.
    pub dwell_time: f64,

    /// Energy spent per unit of research time.
    pub research_cost: f64,

    /// Added to the remaining life on visit (negative = illness).
    pub life_delta: f64,

    /// Health label forced on the traveler by a visit.
    pub health_override: Option<Health>,

    /// Bonus fraction on the energy recovered per unit of resource eaten.
    pub energy_bonus: f64,

    /// "Shared" flag as claimed by input data.  Advisory only.
    #[cfg_attr(feature = "serde", serde(default))]
    declared_shared: Option<bool>,

    // ── Derived by Graph::recompute_shared_flags ──────────────────────────
    #[cfg_attr(feature = "serde", serde(skip))]
    clusters: Vec<String>,

    #[cfg_attr(feature = "serde", serde(skip))]
    shared: bool,
}

impl Location {
    pub fn new(id: LocationId, label: impl Into<String>) -> Self {
        Self {
            id,
            label:           label.into(),
            position:        Position::default(),
            radius:          0.5,
            supernode:       false,
            dwell_time:      1.0,
            research_cost:   0.0,
            life_delta:      0.0,
            health_override: None,
            energy_bonus:    0.0,
            declared_shared: None,
            clusters:        Vec::new(),
            shared:          false,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Mark as a super-node.
    pub fn supernode(mut self) -> Self {
        self.supernode = true;
        self
    }

    pub fn with_dwell_time(mut self, dwell_time: f64) -> Self {
        self.dwell_time = dwell_time;
        self
    }

    pub fn with_research_cost(mut self, research_cost: f64) -> Self {
        self.research_cost = research_cost;
        self
    }

    pub fn with_life_delta(mut self, life_delta: f64) -> Self {
        self.life_delta = life_delta;
        self
    }

    pub fn with_health_override(mut self, health: Health) -> Self {
        self.health_override = Some(health);
        self
    }

    pub fn with_energy_bonus(mut self, energy_bonus: f64) -> Self {
        self.energy_bonus = energy_bonus;
        self
    }

    /// Record the "shared" flag an input source claimed.  Never trusted;
    /// see [`Graph::recompute_shared_flags`][crate::Graph::recompute_shared_flags].
    pub fn declared_shared(mut self, shared: bool) -> Self {
        self.declared_shared = Some(shared);
        self
    }

    #[inline]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Cluster names this location belongs to, sorted.
    #[inline]
    pub fn clusters(&self) -> &[String] {
        &self.clusters
    }

    /// `true` when the location belongs to more than one cluster.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    #[inline]
    pub fn declared_shared_flag(&self) -> Option<bool> {
        self.declared_shared
    }

    pub(crate) fn set_membership(&mut self, clusters: Vec<String>) -> bool {
        let shared = clusters.len() > 1;
        let changed = shared != self.shared;
        self.clusters = clusters;
        self.shared = shared;
        changed
    }
}

// ── Link ──────────────────────────────────────────────────────────────────────

/// A directed, weighted, blockable link.  The graph keeps a mirror `to → from`
/// link for every link once `ensure_bidirectional` has run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub from:    LocationId,
    pub to:      LocationId,
    pub weight:  f64,
    pub blocked: bool,
}

impl Link {
    /// Fold another definition of the same directed link into this one:
    /// the smaller weight wins and blocking is sticky.
    pub(crate) fn merge(&mut self, weight: f64, blocked: bool) {
        self.weight = self.weight.min(weight);
        self.blocked |= blocked;
    }

    pub fn reversed(&self) -> Link {
        Link { from: self.to, to: self.from, ..*self }
    }
}

// ── Cluster ───────────────────────────────────────────────────────────────────

/// A named, ordered set of locations ("constellation").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    pub name: String,
    members:  Vec<LocationId>,
}

impl Cluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), members: Vec::new() }
    }

    /// Members in insertion order.
    #[inline]
    pub fn members(&self) -> &[LocationId] {
        &self.members
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        self.members.contains(&id)
    }

    pub(crate) fn insert(&mut self, id: LocationId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    pub(crate) fn remove(&mut self, id: LocationId) -> bool {
        let before = self.members.len();
        self.members.retain(|&m| m != id);
        self.members.len() != before
    }
}
