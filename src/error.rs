use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("kube error: {0}")]
    Kube(#[from] kube::Error),
    #[error("{0} not found")]
    HostNotFound(String),
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}
