/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::NestingConfig;
#[doc(inline)]
pub use config::RotationPolicy;
#[doc(inline)]
pub use fpa::FPA;
