//! Two-cluster demo galaxy.
//!
//! Lyra (0–4) and Orion (4–9) share the Deneb Gate super-node.

use sp_core::{Health, LocationId, Position};
use sp_graph::{Graph, GraphResult, Location};

const LYRA: [(u32, &str, f32, f32); 5] = [
    (0, "Vega",          0.0,  0.0),
    (1, "Sheliak",       6.0,  4.0),
    (2, "Sulafat",       9.0, -3.0),
    (3, "Epsilon Lyrae", 15.0, 2.0),
    (4, "Deneb Gate",    24.0, 0.0),
];

const ORION: [(u32, &str, f32, f32); 6] = [
    (4, "Deneb Gate",    24.0,  0.0),
    (5, "Betelgeuse",    34.0,  5.0),
    (6, "Rigel",         36.0, -8.0),
    (7, "Bellatrix",     40.0,  9.0),
    (8, "Saiph",         44.0, -6.0),
    (9, "Alnitak",       46.0,  2.0),
];

// (from, to, weight); mirrored by ensure_bidirectional.
const LINKS: [(u32, u32, f64); 15] = [
    (0, 1, 8.0),
    (0, 2, 12.0),
    (1, 2, 5.0),
    (1, 3, 9.0),
    (2, 3, 6.0),
    (3, 4, 10.0),
    (2, 4, 14.0),
    (4, 5, 11.0),
    (4, 6, 15.0),
    (5, 6, 7.0),
    (5, 7, 6.0),
    (6, 8, 9.0),
    (7, 9, 8.0),
    (8, 9, 5.0),
    (6, 9, 12.0),
];

/// Build the galaxy.  Returns the graph and the starting location.
pub fn build_galaxy() -> GraphResult<(Graph, LocationId)> {
    let mut g = Graph::new();

    for &(id, label, x, y) in LYRA.iter().chain(ORION.iter().skip(1)) {
        let mut loc = Location::new(LocationId(id), label).with_position(Position::new(x, y));
        loc = match id {
            2 => loc.with_research_cost(2.0).with_dwell_time(1.5),
            3 => loc.with_dwell_time(0.5),
            4 => loc.supernode(),
            6 => loc.with_energy_bonus(0.5),
            7 => loc.with_life_delta(20.0),
            8 => loc.with_health_override(Health::Fair),
            _ => loc,
        };
        g.add_location(loc)?;
    }

    for &(from, to, weight) in &LINKS {
        g.add_link(LocationId(from), LocationId(to), weight, false)?;
    }
    g.ensure_bidirectional();

    for &(id, ..) in &LYRA {
        g.add_to_cluster("Lyra", LocationId(id))?;
    }
    for &(id, ..) in &ORION {
        g.add_to_cluster("Orion", LocationId(id))?;
    }

    Ok((g, LocationId(0)))
}
