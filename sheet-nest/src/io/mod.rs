/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use import::import;

#[doc(inline)]
pub use import::import_part;

/// All logic for creating SVG from [`NestingResult`](crate::entities::NestingResult)s
#[cfg(feature = "svg")]
pub mod svg;
