use metro_watch_transit::TransitError;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Transit(#[from] TransitError),

    #[error("Invalid routing configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
