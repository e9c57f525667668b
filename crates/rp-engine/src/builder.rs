//! Fluent builder for constructing a [`PathProvider`].

use rp_core::{PathConfig, Tick};
use rp_graph::PathGraph;
use rp_routing::{HandlerChain, MarkerRoutingHandler, RoutingHandler};
use rp_track::{ScanCache, TrackWorld};

use crate::queues::{DiscoveryQueue, OperationQueue, RefreshSet};
use crate::{EngineError, EngineResult, PathProvider};

/// Fluent builder for [`PathProvider<W>`].
///
/// # Required inputs
///
/// - `W: TrackWorld` — the host's track geometry
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                                 |
/// |------------------------------|-----------------------------------------|
/// | `.config(c)`                 | `PathConfig::default()`                 |
/// | `.handler(h)`                | none beyond the default handler         |
/// | `.without_default_handler()` | `MarkerRoutingHandler` registered first |
///
/// # Example
///
/// ```rust
/// use rp_core::{BlockLocation, Face, PathConfig};
/// use rp_engine::{NoopObserver, ProviderBuilder};
/// use rp_track::{GridTrackBuilder, Marker};
///
/// let mut b = GridTrackBuilder::new();
/// b.line(BlockLocation::new("w", 0, 0, 0), Face::East, 11);
/// b.marker(BlockLocation::new("w", 0, 0, 0), Marker::Switcher);
/// b.marker(BlockLocation::new("w", 10, 0, 0), Marker::Destination("Alpha".into()));
///
/// let mut provider = ProviderBuilder::new(b.build())
///     .config(PathConfig::default())
///     .build()
///     .unwrap();
/// provider.discover_from_rail(BlockLocation::new("w", 0, 0, 0));
/// provider.stop(&mut NoopObserver);
/// assert_eq!(provider.graph().node_count(), 2);
/// ```
pub struct ProviderBuilder<W: TrackWorld> {
    track:           W,
    config:          PathConfig,
    handlers:        Vec<Box<dyn RoutingHandler>>,
    default_handler: bool,
}

impl<W: TrackWorld> ProviderBuilder<W> {
    pub fn new(track: W) -> Self {
        Self {
            track,
            config:          PathConfig::default(),
            handlers:        Vec::new(),
            default_handler: true,
        }
    }

    pub fn config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an extra routing handler, after the default one.
    pub fn handler(mut self, handler: impl RoutingHandler) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Do not register [`MarkerRoutingHandler`].
    pub fn without_default_handler(mut self) -> Self {
        self.default_handler = false;
        self
    }

    /// Validate the config and return a provider with an empty graph.
    pub fn build(self) -> EngineResult<PathProvider<W>> {
        self.config
            .validate()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        let mut chain = HandlerChain::new();
        if self.default_handler {
            chain.register(Box::new(MarkerRoutingHandler));
        }
        for handler in self.handlers {
            chain.register(handler);
        }

        Ok(PathProvider {
            config:     self.config,
            track:      self.track,
            graph:      PathGraph::new(),
            handlers:   chain,
            cache:      ScanCache::new(),
            discovery:  DiscoveryQueue::default(),
            refresh:    RefreshSet::default(),
            operations: OperationQueue::default(),
            changed:    false,
            tick:       Tick::ZERO,
        })
    }
}
