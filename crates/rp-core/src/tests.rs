//! Unit tests for rp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{HandlerId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert!(NodeId(1) < NodeId(2));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(HandlerId(2).to_string(), "HandlerId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Face, Vec3};

    #[test]
    fn distance_along_axis() {
        let a = Vec3::new(0.5, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert!((a.distance(b) - 9.5).abs() < 1e-12);
        assert!((a.distance_squared(b) - 90.25).abs() < 1e-12);
    }

    #[test]
    fn faces_are_symmetric() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.direction() + face.opposite().direction(), Vec3::ZERO);
        }
    }

    #[test]
    fn dominant_face_prefers_first_on_tie() {
        // Equal east and south components: east comes first in Face::ALL.
        assert_eq!(Vec3::new(1.0, 0.0, 1.0).dominant_face(), Face::East);
        assert_eq!(Vec3::new(0.0, 0.0, -3.0).dominant_face(), Face::North);
        assert_eq!(Vec3::ZERO.dominant_face(), Face::North);
    }

    #[test]
    fn face_parse() {
        assert_eq!("West".parse::<Face>().unwrap(), Face::West);
        assert!("sideways".parse::<Face>().is_err());
    }
}

#[cfg(test)]
mod location {
    use crate::{BlockLocation, Face};

    #[test]
    fn relative_stays_in_world() {
        let loc = BlockLocation::new("overworld", 4, 64, -2);
        let north = loc.relative(Face::North);
        assert_eq!(north, BlockLocation::new("overworld", 4, 64, -3));
        assert_eq!(north.relative(Face::South), loc);
    }

    #[test]
    fn worlds_distinguish_locations() {
        let a = BlockLocation::new("a", 1, 2, 3);
        let b = BlockLocation::new("b", 1, 2, 3);
        assert_ne!(a, b);
        assert_eq!(a.coords(), b.coords());
    }

    #[test]
    fn display() {
        assert_eq!(BlockLocation::new("w", 1, -2, 3).to_string(), "w[1, -2, 3]");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::PathConfig;

    #[test]
    fn defaults() {
        let c = PathConfig::default();
        assert_eq!(c.step_count, 100);
        assert_eq!(c.budget(), Duration::from_millis(30));
        assert!(!c.reroute_on_startup);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_step_count_rejected() {
        let c = PathConfig { step_count: 0, ..PathConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_and_display() {
        let t = Tick(3);
        assert_eq!(t.next(), Tick(4));
        assert_eq!(Tick::ZERO.next().next(), Tick(2));
        assert_eq!(t.to_string(), "T3");
    }
}
