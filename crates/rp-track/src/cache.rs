//! `ScanCache` — per-burst memo of rail and marker lookups.
//!
//! Walks explore far more track than ever ends up in the graph, so any cache
//! keyed by block grows with everything the scheduler has touched.  The cache
//! is owned by the scheduler and explicitly reset after every processing
//! burst, which bounds it to one burst's worth of lookups.

use rustc_hash::FxHashMap;

use rp_core::BlockLocation;

use crate::{Marker, RailPiece, TrackWorld};

/// Memoized `rail_piece` and `markers` lookups.
#[derive(Default, Debug)]
pub struct ScanCache {
    pieces:  FxHashMap<BlockLocation, Option<RailPiece>>,
    markers: FxHashMap<BlockLocation, Vec<Marker>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached [`TrackWorld::rail_piece`].
    pub fn rail_piece<W: TrackWorld + ?Sized>(
        &mut self,
        world: &W,
        block: &BlockLocation,
    ) -> Option<RailPiece> {
        if let Some(cached) = self.pieces.get(block) {
            return cached.clone();
        }
        let piece = world.rail_piece(block);
        self.pieces.insert(block.clone(), piece.clone());
        piece
    }

    /// Cached [`TrackWorld::markers`].
    pub fn markers<W: TrackWorld + ?Sized>(
        &mut self,
        world: &W,
        block: &BlockLocation,
    ) -> Vec<Marker> {
        if let Some(cached) = self.markers.get(block) {
            return cached.clone();
        }
        let found = world.markers(block);
        self.markers.insert(block.clone(), found.clone());
        found
    }

    /// Total cached entries across both tables.
    pub fn len(&self) -> usize {
        self.pieces.len() + self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry and release the backing memory.
    pub fn reset(&mut self) {
        self.pieces = FxHashMap::default();
        self.markers = FxHashMap::default();
    }
}
