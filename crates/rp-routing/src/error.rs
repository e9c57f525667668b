use thiserror::Error;

use rp_core::HandlerId;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("routing handler {0} is not registered")]
    UnknownHandler(HandlerId),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
