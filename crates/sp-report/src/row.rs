//! Flat row types written by log backends.
//!
//! Rows carry plain numbers and strings only, so a backend never needs the
//! graph or the simulator to serialise them.

use sp_sim::{SimEvent, VisitRecord};

/// One simulator event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub tick:           u64,
    pub event:          &'static str,
    pub location:       u32,
    pub label:          String,
    pub energy_pct:     f64,
    pub resource:       f64,
    pub life_remaining: f64,
    pub health:         &'static str,
    pub supernode:      bool,
    /// Leg length for `visit` events.
    pub distance:       Option<f64>,
}

impl EventRow {
    pub fn from_event(event: &SimEvent, label: &str) -> Self {
        Self {
            tick:           event.tick,
            event:          event.kind.as_str(),
            location:       event.location.get(),
            label:          label.to_owned(),
            energy_pct:     event.energy_pct,
            resource:       event.resource,
            life_remaining: event.life_remaining,
            health:         event.health.as_str(),
            supernode:      event.supernode,
            distance:       event.kind.distance(),
        }
    }
}

/// One first-time visit with its before/after quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRow {
    pub tick:            u64,
    pub location:        u32,
    pub label:           String,
    pub teleported:      bool,
    pub supernode:       bool,
    pub eat_time:        f64,
    pub research_time:   f64,
    pub resource_eaten:  f64,
    pub energy_gained:   f64,
    pub research_spent:  f64,
    pub life_delta:      f64,
    pub energy_before:   f64,
    pub energy_after:    f64,
    pub resource_before: f64,
    pub resource_after:  f64,
    pub life_before:     f64,
    pub life_after:      f64,
    pub health_before:   &'static str,
    pub health_after:    &'static str,
}

impl VisitRow {
    pub fn from_record(v: &VisitRecord, label: &str) -> Self {
        Self {
            tick:            v.tick,
            location:        v.location.get(),
            label:           label.to_owned(),
            teleported:      v.teleported,
            supernode:       v.supernode,
            eat_time:        v.eat_time,
            research_time:   v.research_time,
            resource_eaten:  v.resource_eaten,
            energy_gained:   v.energy_gained,
            research_spent:  v.research_spent,
            life_delta:      v.life_delta,
            energy_before:   v.energy_before,
            energy_after:    v.energy_after,
            resource_before: v.resource_before,
            resource_after:  v.resource_after,
            life_before:     v.life_before,
            life_after:      v.life_after,
            health_before:   v.health_before.as_str(),
            health_after:    v.health_after.as_str(),
        }
    }
}
