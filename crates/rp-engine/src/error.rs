use rp_graph::GraphError;
use rp_persist::PersistError;
use rp_routing::RoutingError;
use rp_track::TrackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("path provider configuration error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Persist(#[from] PersistError),

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("track error: {0}")]
    Track(#[from] TrackError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type EngineResult<T> = Result<T, EngineError>;
