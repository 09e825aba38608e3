use thiserror::Error;

#[derive(Error, Debug)]
pub enum OscError {
    #[error("Invalid neutrino energy: {energy_mev} MeV (must be > 0)")]
    InvalidEnergy { energy_mev: f64 },

    #[error("Degenerate initial state: all flavor weights are zero")]
    DegenerateInitialState,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OscResult<T> = Result<T, OscError>;
