//! Unit tests for rp-track.
//!
//! All tests run against hand-built `GridTrack` layouts.

#[cfg(test)]
mod helpers {
    use rp_core::{BlockLocation, Face};

    use crate::{GridTrack, GridTrackBuilder};

    pub fn at(x: i32, z: i32) -> BlockLocation {
        BlockLocation::new("w", x, 0, z)
    }

    /// Straight east-west line x = 0..=10 at z = 0.
    pub fn straight() -> GridTrack {
        let mut b = GridTrackBuilder::new();
        b.line(at(0, 0), Face::East, 11);
        b.build()
    }

    /// A closed 4×4 loop of track:
    ///
    /// ```text
    ///   (0,0) ─ (1,0) ─ (2,0) ─ (3,0)
    ///     │                        │
    ///   (0,1)                    (3,1)
    ///     │                        │
    ///   (0,2)                    (3,2)
    ///     │                        │
    ///   (0,3) ─ (1,3) ─ (2,3) ─ (3,3)
    /// ```
    pub fn square_loop() -> GridTrack {
        let mut b = GridTrackBuilder::new();
        b.rail(at(0, 0), Face::South, Face::East);
        b.rail(at(1, 0), Face::West, Face::East);
        b.rail(at(2, 0), Face::West, Face::East);
        b.rail(at(3, 0), Face::West, Face::South);
        b.rail(at(3, 1), Face::North, Face::South);
        b.rail(at(3, 2), Face::North, Face::South);
        b.rail(at(3, 3), Face::North, Face::West);
        b.rail(at(2, 3), Face::East, Face::West);
        b.rail(at(1, 3), Face::East, Face::West);
        b.rail(at(0, 3), Face::East, Face::North);
        b.rail(at(0, 2), Face::South, Face::North);
        b.rail(at(0, 1), Face::South, Face::North);
        b.build()
    }
}

// ── Grid geometry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use rp_core::{Face, Vec3};

    use super::helpers::{at, straight};
    use crate::{GridTrackBuilder, Marker, TrackWorld};

    #[test]
    fn non_track_block_resolves_to_none() {
        let track = straight();
        assert!(track.rail_piece(&at(0, 1)).is_none());
        assert!(track.rail_piece(&at(11, 0)).is_none());
        assert!(track.rail_piece(&at(5, 0)).is_some());
    }

    #[test]
    fn junctions_in_face_order() {
        let mut b = GridTrackBuilder::new();
        b.rail(at(0, 0), Face::West, Face::East);
        b.rail(at(0, 0), Face::South, Face::East);
        let track = b.build();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let names: Vec<_> = track.junctions(&piece).into_iter().map(|j| j.name).collect();
        assert_eq!(names, ["east", "south", "west"]);
    }

    #[test]
    fn take_junction_starts_on_exit_edge() {
        let track = straight();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let east = track
            .junctions(&piece)
            .into_iter()
            .find(|j| j.name == "east")
            .unwrap();
        let state = track.take_junction(&piece, &east).unwrap();
        assert_eq!(state.position, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(state.motion_face(), Face::East);
    }

    #[test]
    fn take_unknown_junction_fails() {
        let track = straight();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let bogus = crate::RailJunction { name: "north".into(), position: Vec3::ZERO };
        assert!(track.take_junction(&piece, &bogus).is_none());
    }

    #[test]
    fn advance_enters_next_block_on_its_edge() {
        let track = straight();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        state.direction = Face::East.direction();

        // Centre → exit edge is half a block.
        let moved = track.advance(&mut state).unwrap().unwrap();
        assert!((moved - 0.5).abs() < 1e-12);
        assert_eq!(state.block(), &at(1, 0));

        // Entry edge → next entry edge is one block.
        let moved = track.advance(&mut state).unwrap().unwrap();
        assert!((moved - 1.0).abs() < 1e-12);
        assert_eq!(state.block(), &at(2, 0));
    }

    #[test]
    fn advance_stops_at_end_of_track() {
        let track = straight();
        let piece = track.rail_piece(&at(10, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        state.direction = Face::East.direction();
        assert!(track.advance(&mut state).unwrap().is_none());
    }

    #[test]
    fn curve_turns_direction() {
        let track = super::helpers::square_loop();
        let piece = track.rail_piece(&at(2, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        state.direction = Face::East.direction();
        track.advance(&mut state).unwrap();
        assert_eq!(state.block(), &at(3, 0));
        assert_eq!(state.motion_face(), Face::South);
    }

    #[test]
    fn snap_aligns_to_path() {
        let track = straight();
        let piece = track.rail_piece(&at(4, 0)).unwrap();
        let mut state = crate::RailState::new(piece, Vec3::new(4.2, 0.0, 0.1), Face::North.direction());
        assert!(track.snap(&mut state));
        // North is perpendicular to the rail; the tie resolves to the first face.
        assert_eq!(state.motion_face(), Face::East);
        assert_eq!(state.position, at(4, 0).center());
    }

    #[test]
    fn invert_follows_curve() {
        let track = super::helpers::square_loop();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        assert!(track.snap(&mut state));
        assert_eq!(state.motion_face(), Face::East);
        assert_eq!(track.invert(&state).motion_face(), Face::South);
    }

    #[test]
    fn markers_in_placement_order() {
        let mut b = GridTrackBuilder::new();
        b.line(at(0, 0), Face::East, 2);
        b.marker(at(0, 0), Marker::Switcher);
        b.marker(at(0, 0), Marker::Destination("Depot".into()));
        let track = b.build();
        assert_eq!(
            track.markers(&at(0, 0)),
            vec![Marker::Switcher, Marker::Destination("Depot".into())]
        );
        assert!(track.markers(&at(1, 0)).is_empty());
    }

    #[test]
    fn injected_failure_is_an_error() {
        let mut b = GridTrackBuilder::new();
        b.line(at(0, 0), Face::East, 3);
        b.fail_at(at(1, 0));
        let track = b.build();
        let piece = track.rail_piece(&at(1, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        assert!(track.advance(&mut state).is_err());
    }
}

// ── Markers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod marker {
    use rp_core::{Face, Vec3};

    use super::helpers::at;
    use crate::{Marker, RailPiece, RailState};

    #[test]
    fn directional_blocker() {
        let east = RailState::new(RailPiece::new(at(0, 0)), Vec3::ZERO, Face::East.direction());
        let west = RailState::new(RailPiece::new(at(0, 0)), Vec3::ZERO, Face::West.direction());
        let blocker = Marker::Blocker { facing: Some(Face::East) };
        assert!(blocker.blocks(&east));
        assert!(!blocker.blocks(&west));
        assert!(Marker::Blocker { facing: None }.blocks(&west));
        assert!(!Marker::Switcher.blocks(&east));
    }
}

// ── Walker ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walker {
    use rp_core::Face;

    use super::helpers::{at, square_loop, straight};
    use crate::{TrackWalkingPoint, TrackWorld};

    #[test]
    fn accumulates_distance_until_track_ends() {
        let track = straight();
        let piece = track.rail_piece(&at(0, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        state.direction = Face::East.direction();
        let mut walker = TrackWalkingPoint::new(state);

        let mut steps = 0;
        while walker.move_full(&track).unwrap() {
            steps += 1;
        }
        assert_eq!(steps, 10);
        // 0.5 from the centre of block 0, then one unit per block up to the
        // entry edge of block 10.
        assert!((walker.moved_total - 9.5).abs() < 1e-9);
        assert_eq!(walker.state.block(), &at(10, 0));
    }

    #[test]
    fn loop_filter_terminates_cyclic_walk() {
        let track = square_loop();
        let piece = track.rail_piece(&at(1, 0)).unwrap();
        let mut state = track.spawn_state(&piece);
        state.direction = Face::East.direction();
        let mut walker = TrackWalkingPoint::new(state);
        walker.set_loop_filter(true);

        let mut steps = 0;
        while walker.move_full(&track).unwrap() {
            steps += 1;
            assert!(steps < 100, "walker failed to detect the loop");
        }
        // Eleven other blocks on the loop, then the twelfth step re-enters
        // the starting block.
        assert_eq!(steps, 11);
        assert_eq!(walker.visited_count(), 12);
    }
}

// ── Scan cache ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use super::helpers::{at, straight};
    use crate::ScanCache;

    #[test]
    fn caches_and_resets() {
        let track = straight();
        let mut cache = ScanCache::new();
        assert!(cache.rail_piece(&track, &at(3, 0)).is_some());
        assert!(cache.rail_piece(&track, &at(3, 5)).is_none());
        assert!(cache.markers(&track, &at(3, 0)).is_empty());
        assert_eq!(cache.len(), 3);

        cache.reset();
        assert!(cache.is_empty());
    }
}
