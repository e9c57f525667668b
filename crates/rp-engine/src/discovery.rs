//! Marker scans and branch enumeration.

use rp_core::{BlockLocation, Face, NodeId, Vec3};
use rp_graph::PathGraph;
use rp_routing::{HandlerChain, RouteOutcome};
use rp_track::{RailJunction, RailState, ScanCache, TrackWorld};

use crate::PathFindOperation;

/// Result of scanning one discovery candidate.
#[derive(Debug)]
pub enum Scan {
    /// A node already exists at the location.
    Known,
    /// The block is not track.
    NotTrack,
    /// Handlers ran on the block's spawn state.
    Scanned(RouteOutcome),
}

/// Scan `location` once: drop it if a node exists there or it is not track,
/// otherwise dispatch the handlers on the rail's spawn state.
pub fn scan(
    location: &BlockLocation,
    track: &dyn TrackWorld,
    handlers: &HandlerChain,
    graph: &mut PathGraph,
    cache: &mut ScanCache,
) -> Scan {
    if graph.find_node(location).is_some() {
        return Scan::Known;
    }
    let Some(piece) = cache.rail_piece(track, location) else {
        return Scan::NotTrack;
    };
    let state = track.spawn_state(&piece);
    Scan::Scanned(handlers.route(&state, graph, cache, track))
}

/// The junction whose exit point lies nearest to `position`.  On a tie the
/// first junction in enumeration order wins.
pub fn best_junction(junctions: &[RailJunction], position: Vec3) -> Option<&RailJunction> {
    let mut best: Option<(&RailJunction, f64)> = None;
    for junction in junctions {
        let d = junction.position.distance_squared(position);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((junction, d));
        }
    }
    best.map(|(j, _)| j)
}

/// Build the edge-discovery operations for one node.
///
/// A switcher gets one operation per junction that can be taken.  Any other
/// node gets at most two: its rail is walked to both ends of the local path
/// and the junction nearest each end is explored.  A node whose block is no
/// longer track gets none.
pub fn branch_operations(
    node: NodeId,
    track: &dyn TrackWorld,
    graph: &PathGraph,
    cache: &mut ScanCache,
) -> Vec<PathFindOperation> {
    let Some(path_node) = graph.node(node) else {
        return Vec::new();
    };
    let location = path_node.location().clone();
    let Some(piece) = cache.rail_piece(track, &location) else {
        return Vec::new();
    };

    if path_node.contains_switcher() {
        return track
            .junctions(&piece)
            .iter()
            .filter_map(|junction| {
                let state = track.take_junction(&piece, junction)?;
                Some(PathFindOperation::new(track, node, location.clone(), state, junction))
            })
            .collect();
    }

    let mut forward = RailState::new(
        piece.clone(),
        track.spawn_location(&piece, Face::North),
        Face::North.direction(),
    );
    if !track.snap(&mut forward) {
        return Vec::new();
    }
    let junctions = track.junctions(&piece);
    if junctions.is_empty() {
        return Vec::new();
    }
    let mut backward = track.invert(&forward);
    track.move_to_path_end(&mut forward);
    track.move_to_path_end(&mut backward);

    [forward, backward]
        .into_iter()
        .filter_map(|state| {
            let junction = best_junction(&junctions, state.position)?;
            Some(PathFindOperation::new(track, node, location.clone(), state, junction))
        })
        .collect()
}
