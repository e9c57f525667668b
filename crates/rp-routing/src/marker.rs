//! The default, marker-driven routing handler.

use rp_track::Marker;

use crate::{PathRouteEvent, RoutingHandler};

/// Reads [`Marker`]s at the event's block, in placement order:
///
/// * a blocker that applies to the current direction of travel blocks the
///   event and ends processing,
/// * `Switcher` tags the node as a switcher,
/// * `Destination(name)` attaches `name`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerRoutingHandler;

impl RoutingHandler for MarkerRoutingHandler {
    fn process(&self, event: &mut PathRouteEvent<'_>) {
        for marker in event.markers() {
            match marker {
                Marker::Blocker { .. } => {
                    if marker.blocks(event.rail_state()) {
                        event.set_blocked();
                        return;
                    }
                }
                Marker::Switcher => {
                    event.add_switcher();
                }
                Marker::Destination(name) => {
                    event.add_name(&name);
                }
            }
        }
    }
}
