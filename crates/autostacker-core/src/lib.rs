// Core modules
pub mod cfn;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod preprocess;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use interpolation::{interpolate, Expr, Interpolated, InterpolationOptions, Interpolator};
pub use preprocess::{preprocess_file, PreprocessOptions, Preprocessor};
