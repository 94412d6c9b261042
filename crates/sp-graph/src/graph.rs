//! The location graph.
//!
//! # Data layout
//!
//! Unlike a frozen CSR road network, this graph is edited at runtime (links
//! get blocked and unblocked between simulator steps), so adjacency is a
//! nested ordered map:
//!
//! ```text
//! adjacency[from][to] = Link { weight, blocked }
//! incoming[to]        = { from, … }
//! ```
//!
//! `BTreeMap` keeps every iteration in id order, which is what makes the
//! planners and the simulator replayable run to run.
//!
//! # Clusters
//!
//! Locations and clusters are two independent owned collections.  The
//! per-location membership list and "shared" flag are derived from the
//! clusters by [`Graph::recompute_shared_flags`] and nothing else; cluster
//! mutators call it for you.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps map positions to the nearest location for
//! cursor picking.  Positions never influence travel cost.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sp_core::{LocationId, Position};

use crate::{Cluster, GraphError, GraphResult, Link, Location};

/// Super-node count per cluster above which the data is probably wrong.
const MAX_SUPERNODES_PER_CLUSTER: usize = 2;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f32; 2],
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Locations, clusters, and weighted bidirectional links.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    locations: BTreeMap<LocationId, Location>,
    clusters:  BTreeMap<String, Cluster>,
    adjacency: BTreeMap<LocationId, BTreeMap<LocationId, Link>>,
    incoming:  BTreeMap<LocationId, BTreeSet<LocationId>>,
    spatial_idx: RTree<LocationEntry>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed links.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Locations ─────────────────────────────────────────────────────────

    /// Register a location.  Ids must be unique.
    pub fn add_location(&mut self, location: Location) -> GraphResult<()> {
        let id = location.id();
        if self.locations.contains_key(&id) {
            return Err(GraphError::DuplicateLocation(id));
        }
        let pos = location.position();
        self.spatial_idx.insert(LocationEntry { point: [pos.x, pos.y], id });
        self.locations.insert(id, location);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    #[inline]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Mutable access for modifier edits (dwell time, research cost, …).
    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(&id)
    }

    /// All locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values()
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.keys().copied()
    }

    // ── Clusters ──────────────────────────────────────────────────────────

    /// Add `id` to cluster `name`, creating the cluster if needed.
    ///
    /// Returns `false` if it was already a member.
    pub fn add_to_cluster(&mut self, name: &str, id: LocationId) -> GraphResult<bool> {
        if !self.contains(id) {
            return Err(GraphError::UnknownLocation(id));
        }
        let inserted = self
            .clusters
            .entry(name.to_owned())
            .or_insert_with(|| Cluster::new(name))
            .insert(id);
        if inserted {
            self.recompute_shared_flags();
        }
        Ok(inserted)
    }

    /// Remove `id` from cluster `name`.  Empty clusters are dropped.
    pub fn remove_from_cluster(&mut self, name: &str, id: LocationId) -> bool {
        let Some(cluster) = self.clusters.get_mut(name) else {
            return false;
        };
        let removed = cluster.remove(id);
        if cluster.members().is_empty() {
            self.clusters.remove(name);
        }
        if removed {
            self.recompute_shared_flags();
        }
        removed
    }

    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.get(name)
    }

    /// All clusters in name order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.clusters.values()
    }

    /// Rebuild every location's cluster list and "shared" flag from the
    /// clusters.
    ///
    /// Idempotent.  Returns how many locations changed their shared flag.
    /// A location whose input data declared a different flag is logged and
    /// otherwise ignored.
    pub fn recompute_shared_flags(&mut self) -> usize {
        let mut memberships: BTreeMap<LocationId, Vec<String>> = BTreeMap::new();
        for cluster in self.clusters.values() {
            for &id in cluster.members() {
                memberships.entry(id).or_default().push(cluster.name.clone());
            }
        }

        let mut changed = 0;
        for (id, location) in self.locations.iter_mut() {
            let mut names = memberships.remove(id).unwrap_or_default();
            names.sort();
            names.dedup();
            if location.set_membership(names) {
                changed += 1;
            }
            if let Some(declared) = location.declared_shared_flag() {
                if declared != location.is_shared() {
                    warn!(
                        "{id} declared shared={declared} but belongs to {} cluster(s); using derived value",
                        location.clusters().len()
                    );
                }
            }
        }
        changed
    }

    /// Locations belonging to more than one cluster.
    pub fn shared_locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values().filter(|l| l.is_shared())
    }

    /// Number of super-nodes in each cluster.
    pub fn supernode_counts(&self) -> BTreeMap<&str, usize> {
        self.clusters
            .values()
            .map(|c| {
                let n = c
                    .members()
                    .iter()
                    .filter(|id| self.location(**id).is_some_and(|l| l.supernode))
                    .count();
                (c.name.as_str(), n)
            })
            .collect()
    }

    /// Groups of locations that fall in the same integer map cell.
    pub fn overlapping_locations(&self) -> Vec<Vec<LocationId>> {
        let mut cells: BTreeMap<(i32, i32), Vec<LocationId>> = BTreeMap::new();
        for l in self.locations.values() {
            cells.entry(l.position().cell()).or_default().push(l.id());
        }
        cells.into_values().filter(|ids| ids.len() > 1).collect()
    }

    /// Log data-quality warnings (too many super-nodes in a cluster,
    /// locations drawn on top of each other).  Returns the warning count.
    pub fn audit(&self) -> usize {
        let mut warnings = 0;
        for (name, count) in self.supernode_counts() {
            if count > MAX_SUPERNODES_PER_CLUSTER {
                warn!("cluster {name:?} has {count} super-nodes (expected at most {MAX_SUPERNODES_PER_CLUSTER})");
                warnings += 1;
            }
        }
        for ids in self.overlapping_locations() {
            warn!("locations {ids:?} share the same map cell and may overlap on screen");
            warnings += 1;
        }
        warnings
    }

    // ── Links ─────────────────────────────────────────────────────────────

    /// Add the directed link `from → to`.
    ///
    /// A second definition of the same directed link keeps the smaller
    /// weight and stays blocked if either definition was blocked.
    pub fn add_link(
        &mut self,
        from:    LocationId,
        to:      LocationId,
        weight:  f64,
        blocked: bool,
    ) -> GraphResult<()> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(GraphError::UnknownLocation(id));
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        self.adjacency
            .entry(from)
            .or_default()
            .entry(to)
            .and_modify(|l| l.merge(weight, blocked))
            .or_insert(Link { from, to, weight, blocked });
        self.incoming.entry(to).or_default().insert(from);
        Ok(())
    }

    /// Make every link two-way.
    ///
    /// Missing mirrors are created from the forward link.  Existing pairs
    /// are reconciled with the same merge rule as [`add_link`](Self::add_link)
    /// so both directions end up with equal weight and blocked state.
    /// Idempotent; returns the number of directed links added or changed.
    pub fn ensure_bidirectional(&mut self) -> usize {
        let forward: Vec<Link> = self.adjacency.values().flat_map(|m| m.values().copied()).collect();
        let mut touched = 0;
        for link in forward {
            let mirror = self
                .adjacency
                .entry(link.to)
                .or_default()
                .entry(link.from)
                .or_insert_with(|| {
                    touched += 1;
                    link.reversed()
                });
            let before = *mirror;
            mirror.merge(link.weight, link.blocked);
            let merged = *mirror;
            if merged != before {
                touched += 1;
            }
            self.incoming.entry(link.from).or_default().insert(link.to);

            // Pull the forward side up to the merged state too.
            if let Some(fwd) = self.adjacency.get_mut(&link.from).and_then(|m| m.get_mut(&link.to)) {
                if fwd.weight != merged.weight || fwd.blocked != merged.blocked {
                    fwd.weight = merged.weight;
                    fwd.blocked = merged.blocked;
                    touched += 1;
                }
            }
        }
        touched
    }

    #[inline]
    pub fn link(&self, from: LocationId, to: LocationId) -> Option<&Link> {
        self.adjacency.get(&from).and_then(|m| m.get(&to))
    }

    /// Outgoing links of `id`, in destination-id order.  Blocked links are
    /// skipped unless `include_blocked` is set.
    pub fn neighbors(&self, id: LocationId, include_blocked: bool) -> impl Iterator<Item = &Link> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|m| m.values())
            .filter(move |l| include_blocked || !l.blocked)
    }

    /// Locations with a link into `id`.
    pub fn incoming(&self, id: LocationId) -> impl Iterator<Item = LocationId> + '_ {
        self.incoming.get(&id).into_iter().flatten().copied()
    }

    /// Flip (`explicit = None`) or set the blocked state of the link between
    /// `a` and `b`, in both directions at once.
    ///
    /// The new state is taken from `a → b` when it exists, otherwise from
    /// `b → a`, and written to both so the pair never ends up asymmetric.
    /// Returns `false`, touching nothing, when neither direction exists;
    /// otherwise returns whether any direction changed.
    pub fn toggle_block(&mut self, a: LocationId, b: LocationId, explicit: Option<bool>) -> bool {
        let current = match self.link(a, b).or_else(|| self.link(b, a)) {
            Some(l) => l.blocked,
            None => return false,
        };
        let target = explicit.unwrap_or(!current);

        let mut changed = false;
        for (from, to) in [(a, b), (b, a)] {
            if let Some(l) = self.adjacency.get_mut(&from).and_then(|m| m.get_mut(&to)) {
                if l.blocked != target {
                    l.blocked = target;
                    changed = true;
                }
            }
        }
        changed
    }

    /// `true` if the link exists and is blocked.
    pub fn is_blocked(&self, from: LocationId, to: LocationId) -> bool {
        self.link(from, to).is_some_and(|l| l.blocked)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Location nearest to `pos`.  `None` only for an empty graph.
    pub fn nearest_location(&self, pos: Position) -> Option<LocationId> {
        self.spatial_idx.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }

    /// Up to `k` nearest locations, closest first.
    pub fn k_nearest_locations(&self, pos: Position, k: usize) -> Vec<LocationId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}
