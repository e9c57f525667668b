/// What a rail position means for routing, as reported by
/// [`PathProvider::rail_info`](crate::PathProvider::rail_info).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathRailInfo {
    /// Nothing of interest; no routing decision is needed here.
    None,
    /// The position is a graph node.
    Node,
    /// Path finding must not pass this position.
    Blocked,
}
