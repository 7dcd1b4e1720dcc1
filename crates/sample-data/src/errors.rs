use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
