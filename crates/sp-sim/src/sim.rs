//! The `Simulator` state machine.
//!
//! # One step
//!
//! ```text
//! finished or dead?          → no-op
//! at last planned index?     → final visit, Finish (or Death)
//! next leg unreachable?      → Finished + BlockedRoute, position unchanged
//! otherwise:
//!   ① move     life −= d, energy −= d × movement_factor(health), settle health
//!   ② arrive   first time here → visit effects (eat / research / modifiers)
//!   ③ recharge super-node      → energy × (1 + fraction) ≤ 100, resource × multiplier
//!   ④ tick += 1
//!   ⑤ energy ≤ 0, life ≤ 0 or health dead → Death, else Visit { distance }
//! ```
//!
//! Every leg re-runs Dijkstra on the current graph, so a link blocked
//! between two calls is seen by the next one.  The planned starting
//! location is never visited unless it is the only planned stop.
//!
//! # Determinism
//!
//! Given the same graph, traveler, sequence, tuning, and the same external
//! link edits in the same order, the event log and visit records are
//! identical run to run.

use std::collections::HashSet;

use log::{debug, info, warn};

use sp_agent::{Traveler, supernode_energy, supernode_resource};
use sp_core::{Health, LocationId, Tuning};
use sp_graph::{Graph, distance_between};

use crate::{
    EventKind, NoopObserver, SimError, SimEvent, SimObserver, SimResult, SimulationState, VisitRecord,
};

/// Shortest visit session, whatever the location's dwell time.
const MIN_SESSION: f64 = 0.5;
/// Floor on the dwell time used to turn eating time into resource eaten.
const MIN_DWELL: f64 = 0.1;

/// Replays a planned sequence against a live copy of the traveler.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator {
    graph:    Graph,
    tuning:   Tuning,
    /// Initial traveler values; never mutated.
    initial:  Traveler,
    route:    Vec<LocationId>,
    index:    usize,
    visited:  HashSet<LocationId>,
    state:    SimulationState,
    log:      Vec<SimEvent>,
}

impl Simulator {
    pub(crate) fn new(graph: Graph, traveler: Traveler, route: Vec<LocationId>, tuning: Tuning) -> Self {
        let state = SimulationState {
            current:        route[0],
            energy_pct:     traveler.energy_pct,
            resource:       traveler.resource,
            life_remaining: traveler.life_remaining(),
            health:         traveler.health,
            tick:           0,
            finished:       false,
            dead:           false,
            visits:         Vec::new(),
        };
        info!(
            "simulating {} planned stops for {} from {}",
            route.len(),
            traveler.name,
            state.current
        );
        Self {
            graph,
            tuning,
            initial: traveler,
            route,
            index: 0,
            visited: HashSet::new(),
            state,
            log: Vec::new(),
        }
    }

    // ── Read-only surface ─────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The planned sequence, including any teleport insertions.
    #[inline]
    pub fn route(&self) -> &[LocationId] {
        &self.route
    }

    /// Index of the current location within [`route`](Self::route).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Every event so far, oldest first.
    #[inline]
    pub fn export_log(&self) -> &[SimEvent] {
        &self.log
    }

    /// The traveler as it stands now.
    ///
    /// Life consumed by travel shows up as added age; a net life bonus
    /// raises the life ceiling instead.
    pub fn traveler(&self) -> Traveler {
        let mut t = self.initial.clone();
        t.energy_pct = self.state.energy_pct;
        t.resource = self.state.resource;
        t.health = self.state.health;
        let consumed = self.initial.life_remaining() - self.state.life_remaining;
        if consumed >= 0.0 {
            t.age += consumed;
        } else {
            t.max_age -= consumed;
        }
        t
    }

    // ── Live graph edits ──────────────────────────────────────────────────

    /// Mutable graph access between steps (link blocking, modifier edits).
    #[inline]
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Shorthand for [`Graph::toggle_block`] on the owned graph.
    pub fn toggle_block(&mut self, a: LocationId, b: LocationId, explicit: Option<bool>) -> bool {
        self.graph.toggle_block(a, b, explicit)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Advance one leg.  See the module docs for the exact order.
    pub fn step(&mut self) -> &SimulationState {
        self.step_observed(&mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> &SimulationState {
        if self.state.is_terminal() {
            return &self.state;
        }

        if self.index + 1 >= self.route.len() {
            let here = self.route[self.index];
            if self.visited.insert(here) {
                self.visit(here, false, observer);
            }
            if self.settle_death() {
                self.emit(EventKind::Death, here, observer);
            } else {
                self.state.finished = true;
                self.emit(EventKind::Finish, here, observer);
            }
            self.finish(observer);
            return &self.state;
        }

        let from = self.route[self.index];
        let to = self.route[self.index + 1];
        let Some(distance) = distance_between(&self.graph, from, to, false).ok().flatten() else {
            warn!("leg {from} -> {to} is unreachable; stopping at {from}");
            self.state.finished = true;
            self.emit(EventKind::BlockedRoute { next: to }, from, observer);
            self.finish(observer);
            return &self.state;
        };

        self.consume_movement(distance);
        self.index += 1;
        self.state.current = to;
        if self.visited.insert(to) {
            self.visit(to, false, observer);
        }
        self.state.tick += 1;

        if self.settle_death() {
            self.emit(EventKind::Death, to, observer);
            self.finish(observer);
        } else {
            self.emit(EventKind::Visit { distance }, to, observer);
        }
        &self.state
    }

    /// Step until finished or dead.
    pub fn run_all(&mut self) -> &SimulationState {
        self.run_all_observed(&mut NoopObserver)
    }

    pub fn run_all_observed<O: SimObserver>(&mut self, observer: &mut O) -> &SimulationState {
        while !self.state.is_terminal() {
            self.step_observed(observer);
        }
        &self.state
    }

    /// Jump straight to `destination` and visit it.
    ///
    /// The destination is inserted as the next planned leg and reached at
    /// no movement cost: life and energy are not charged for travel and the
    /// tick does not advance.  Logged as a `Teleport` event.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownLocation`] if `destination` is not in the graph.
    /// A finished or dead run is returned unchanged.
    pub fn teleport_and_visit(&mut self, destination: LocationId) -> SimResult<&SimulationState> {
        self.teleport_observed(destination, &mut NoopObserver)
    }

    pub fn teleport_observed<O: SimObserver>(
        &mut self,
        destination: LocationId,
        observer:    &mut O,
    ) -> SimResult<&SimulationState> {
        if !self.graph.contains(destination) {
            return Err(SimError::UnknownLocation(destination));
        }
        if self.state.is_terminal() {
            return Ok(&self.state);
        }

        self.route.insert(self.index + 1, destination);
        self.index += 1;
        self.state.current = destination;
        if self.visited.insert(destination) {
            self.visit(destination, true, observer);
        }

        if self.settle_death() {
            self.emit(EventKind::Death, destination, observer);
            self.finish(observer);
        } else {
            self.emit(EventKind::Teleport, destination, observer);
        }
        Ok(&self.state)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn consume_movement(&mut self, distance: f64) {
        let s = &mut self.state;
        let before = s.energy_pct;
        s.life_remaining = (s.life_remaining - distance).max(0.0);
        s.energy_pct = (s.energy_pct - distance * self.tuning.movement_factor(s.health)).max(0.0);
        s.health = s.health.settle(before, s.energy_pct);
    }

    /// Apply first-visit effects at `id` and record them.
    fn visit<O: SimObserver>(&mut self, id: LocationId, teleported: bool, observer: &mut O) {
        let Some(loc) = self.graph.location(id) else { return };
        let t = &self.tuning;
        let s = &mut self.state;

        let energy_before = s.energy_pct;
        let resource_before = s.resource;
        let life_before = s.life_remaining;
        let health_before = s.health;

        // Session split: eat only when hungry, research the rest.
        let session = (loc.dwell_time * 2.0).max(MIN_SESSION);
        let eat_time = if s.energy_pct < t.eat_threshold_pct {
            session * t.max_eat_fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let research_time = (session - eat_time).max(0.0);

        let capacity = eat_time / loc.dwell_time.max(MIN_DWELL);
        let resource_eaten = s.resource.min(capacity).max(0.0);
        let energy_gained =
            resource_eaten * t.gain_per_unit(s.health) * (1.0 + loc.energy_bonus.max(0.0));
        let research_spent = loc.research_cost * research_time;

        s.resource = (s.resource - resource_eaten).max(0.0);
        s.energy_pct = (s.energy_pct - research_spent + energy_gained).clamp(0.0, 100.0);
        s.life_remaining = (s.life_remaining + loc.life_delta).max(0.0);
        s.health = s.health.settle(energy_before, s.energy_pct);
        if let Some(forced) = loc.health_override {
            if s.health.is_alive() {
                s.health = forced;
            }
        }

        if loc.supernode {
            let pre = s.energy_pct;
            s.energy_pct = supernode_energy(s.energy_pct, t);
            s.resource = supernode_resource(s.resource, t);
            s.health = s.health.settle(pre, s.energy_pct);
        }

        let record = VisitRecord {
            location: id,
            tick: s.tick,
            eat_time,
            research_time,
            resource_eaten,
            energy_gained,
            research_spent,
            life_delta: loc.life_delta,
            energy_before,
            resource_before,
            life_before,
            health_before,
            energy_after: s.energy_pct,
            resource_after: s.resource,
            life_after: s.life_remaining,
            health_after: s.health,
            supernode: loc.supernode,
            teleported,
        };
        debug!(
            "visit {id}: energy {energy_before:.1} -> {:.1}, resource {resource_before:.1} -> {:.1}, life {life_before:.1} -> {:.1}",
            record.energy_after, record.resource_after, record.life_after
        );
        observer.on_visit(&record);
        s.visits.push(record);
    }

    /// Mark the run dead if any budget is exhausted.  Returns `true` if so.
    fn settle_death(&mut self) -> bool {
        let s = &mut self.state;
        s.energy_pct = s.energy_pct.max(0.0);
        s.life_remaining = s.life_remaining.max(0.0);
        if s.energy_pct <= 0.0 || s.life_remaining <= 0.0 || !s.health.is_alive() {
            s.health = Health::Dead;
            s.dead = true;
            s.finished = true;
        }
        s.dead
    }

    fn emit<O: SimObserver>(&mut self, kind: EventKind, location: LocationId, observer: &mut O) {
        let event = SimEvent {
            tick: self.state.tick,
            kind,
            location,
            energy_pct: self.state.energy_pct,
            resource: self.state.resource,
            life_remaining: self.state.life_remaining,
            health: self.state.health,
            supernode: self.graph.location(location).is_some_and(|l| l.supernode),
        };
        debug!("tick {}: {kind} at {location}", event.tick);
        observer.on_event(&event);
        self.log.push(event);
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            "simulation {} at {} after {} ticks: energy {:.1}%, life {:.1}, {} visits",
            if self.state.dead { "died" } else { "finished" },
            self.state.current,
            self.state.tick,
            self.state.energy_pct,
            self.state.life_remaining,
            self.state.visits.len()
        );
        observer.on_finish(&self.state);
    }
}
