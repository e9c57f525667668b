//! Synthetic block-grid track.
//!
//! # Geometry
//!
//! Every rail piece occupies one block and holds one or more *paths*, each
//! joining two faces of the block.  A straight rail has one path
//! (`West ↔ East`), a curve joins two perpendicular faces, and a fork is a
//! piece with several paths sharing a face.
//!
//! A walker enters a piece through a face, follows the first path that
//! contains that face, and leaves through the path's other face.  One
//! [`advance`](TrackWorld::advance) moves from wherever the state is to the
//! exit edge of its piece and then across into the neighbouring piece, so
//! after each step the state sits on the entry edge of a new block.
//! Distances are measured along the direction of travel; block centres one
//! block apart are one unit apart.
//!
//! Junctions are the faces a piece touches, named after the face
//! (`"north"`, `"east"`, …) and listed in [`Face::ALL`] order.

use std::thread;
use std::time::Duration;

use rustc_hash::{FxHashMap, FxHashSet};

use rp_core::{BlockLocation, Face, Vec3};

use crate::{Marker, RailJunction, RailPiece, RailState, TrackError, TrackResult, TrackWorld};

// ── GridPiece ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
struct GridPiece {
    paths: Vec<(Face, Face)>,
}

impl GridPiece {
    /// Distinct faces touched by any path, in canonical order.
    fn faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|f| self.paths.iter().any(|&(a, b)| a == *f || b == *f))
            .collect()
    }

    /// The face a walker entering through `entry` leaves by.
    fn exit_for(&self, entry: Face) -> Option<Face> {
        self.paths.iter().find_map(|&(a, b)| {
            if a == entry {
                Some(b)
            } else if b == entry {
                Some(a)
            } else {
                None
            }
        })
    }

    fn touches(&self, face: Face) -> bool {
        self.exit_for(face).is_some()
    }
}

// ── GridTrack ─────────────────────────────────────────────────────────────────

/// A [`TrackWorld`] over a sparse set of grid rail pieces.
///
/// Build with [`GridTrackBuilder`].  Markers can also be changed after
/// construction to model signs being placed or removed.
#[derive(Clone, Debug, Default)]
pub struct GridTrack {
    pieces:     FxHashMap<BlockLocation, GridPiece>,
    markers:    FxHashMap<BlockLocation, Vec<Marker>>,
    failures:   FxHashSet<BlockLocation>,
    step_delay: Option<Duration>,
}

impl GridTrack {
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Attach a marker to `block`.
    pub fn add_marker(&mut self, block: BlockLocation, marker: Marker) {
        self.markers.entry(block).or_default().push(marker);
    }

    /// Remove every marker at `block`.
    pub fn clear_markers(&mut self, block: &BlockLocation) {
        self.markers.remove(block);
    }

    /// Sleep for `delay` on every `advance` call.  Used to model a slow
    /// walker when exercising the scheduler's time budget.
    pub fn set_step_delay(&mut self, delay: Option<Duration>) {
        self.step_delay = delay;
    }

    /// Exit point of `block` towards `face`.
    fn edge(block: &BlockLocation, face: Face) -> Vec3 {
        block.center() + face.direction() * 0.5
    }
}

impl TrackWorld for GridTrack {
    fn rail_piece(&self, block: &BlockLocation) -> Option<RailPiece> {
        self.pieces
            .get(block)
            .filter(|p| !p.paths.is_empty())
            .map(|_| RailPiece::new(block.clone()))
    }

    fn junctions(&self, piece: &RailPiece) -> Vec<RailJunction> {
        let Some(grid) = self.pieces.get(&piece.block) else {
            return vec![];
        };
        grid.faces()
            .into_iter()
            .map(|face| RailJunction {
                name:     face.as_str().to_owned(),
                position: Self::edge(&piece.block, face),
            })
            .collect()
    }

    fn take_junction(&self, piece: &RailPiece, junction: &RailJunction) -> Option<RailState> {
        let face: Face = junction.name.parse().ok()?;
        let grid = self.pieces.get(&piece.block)?;
        if !grid.touches(face) {
            return None;
        }
        Some(RailState::new(
            piece.clone(),
            Self::edge(&piece.block, face),
            face.direction(),
        ))
    }

    fn spawn_state(&self, piece: &RailPiece) -> RailState {
        let face = self
            .pieces
            .get(&piece.block)
            .and_then(|g| g.faces().first().copied())
            .unwrap_or(Face::North);
        RailState::new(piece.clone(), piece.block.center(), face.direction())
    }

    fn spawn_location(&self, piece: &RailPiece, _face: Face) -> Vec3 {
        piece.block.center()
    }

    fn snap(&self, state: &mut RailState) -> bool {
        let Some(grid) = self.pieces.get(state.block()) else {
            return false;
        };
        let mut best: Option<(Face, f64)> = None;
        for face in grid.faces() {
            let d = state.direction.dot(face.direction());
            if best.is_none_or(|(_, best_d)| d > best_d) {
                best = Some((face, d));
            }
        }
        let Some((face, _)) = best else {
            return false;
        };
        state.direction = face.direction();
        state.position = state.block().center();
        true
    }

    fn move_to_path_end(&self, state: &mut RailState) {
        let face = state.motion_face();
        state.position = Self::edge(state.block(), face);
    }

    fn advance(&self, state: &mut RailState) -> TrackResult<Option<f64>> {
        if let Some(delay) = self.step_delay {
            thread::sleep(delay);
        }
        if self.failures.contains(state.block()) {
            return Err(TrackError::Step {
                location: state.block().clone(),
                reason:   "injected failure".into(),
            });
        }
        if !self.pieces.contains_key(state.block()) {
            return Err(TrackError::PieceVanished(state.block().clone()));
        }

        let exit = state.motion_face();
        let exit_point = Self::edge(state.block(), exit);
        let moved = state.position.distance(exit_point);

        let next_block = state.block().relative(exit);
        let entry = exit.opposite();
        let Some(next_exit) = self.pieces.get(&next_block).and_then(|g| g.exit_for(entry)) else {
            return Ok(None);
        };

        state.piece = RailPiece::new(next_block);
        state.position = exit_point;
        state.direction = next_exit.direction();
        Ok(Some(moved))
    }

    fn markers(&self, block: &BlockLocation) -> Vec<Marker> {
        self.markers.get(block).cloned().unwrap_or_default()
    }

    fn invert(&self, state: &RailState) -> RailState {
        let mut inverted = state.clone();
        let face = state.motion_face();
        match self.pieces.get(state.block()).and_then(|g| g.exit_for(face)) {
            Some(other) => inverted.direction = other.direction(),
            None => inverted.invert_motion(),
        }
        inverted
    }
}

// ── GridTrackBuilder ──────────────────────────────────────────────────────────

/// Construct a [`GridTrack`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rp_core::{BlockLocation, Face};
/// use rp_track::{GridTrackBuilder, Marker};
///
/// let origin = BlockLocation::new("w", 0, 0, 0);
/// let mut b = GridTrackBuilder::new();
/// b.line(origin.clone(), Face::East, 11);          // x = 0..=10
/// b.marker(origin.clone(), Marker::Switcher);
/// b.marker(BlockLocation::new("w", 10, 0, 0), Marker::Destination("Alpha".into()));
/// let track = b.build();
/// assert_eq!(track.piece_count(), 11);
/// ```
#[derive(Default)]
pub struct GridTrackBuilder {
    track: GridTrack,
}

impl GridTrackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path joining faces `a` and `b` to the piece at `block`.
    pub fn rail(&mut self, block: BlockLocation, a: Face, b: Face) -> &mut Self {
        self.track.pieces.entry(block).or_default().paths.push((a, b));
        self
    }

    /// Lay `length` straight rails starting at `start` and running towards
    /// `face`.
    pub fn line(&mut self, start: BlockLocation, face: Face, length: usize) -> &mut Self {
        let mut block = start;
        for _ in 0..length {
            let next = block.relative(face);
            self.rail(block, face.opposite(), face);
            block = next;
        }
        self
    }

    /// Attach a marker to `block`.
    pub fn marker(&mut self, block: BlockLocation, marker: Marker) -> &mut Self {
        self.track.add_marker(block, marker);
        self
    }

    /// Make every `advance` out of `block` fail with a [`TrackError`].
    pub fn fail_at(&mut self, block: BlockLocation) -> &mut Self {
        self.track.failures.insert(block);
        self
    }

    pub fn build(self) -> GridTrack {
        self.track
    }
}
