use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractalError>;

#[derive(Error, Debug)]
pub enum FractalError {
    #[error("order must be a whole number, got {0:?}")]
    InvalidOrder(String),

    #[error("size must be a whole number of pixels, got {0:?}")]
    InvalidSize(String),

    #[error("order {order} is outside 0..={max}")]
    OrderOutOfRange { order: i64, max: u32 },

    #[error("size {size} is outside 1..={max}")]
    SizeOutOfRange { size: i64, max: u32 },

    #[error("nothing has been drawn yet")]
    NothingRendered,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FractalError {
    // Bad user input, as opposed to an environment failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FractalError::InvalidOrder(_)
                | FractalError::InvalidSize(_)
                | FractalError::OrderOutOfRange { .. }
                | FractalError::SizeOutOfRange { .. }
        )
    }
}
