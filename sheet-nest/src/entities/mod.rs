mod bin;
mod instance;
mod nesting_result;
mod part;
mod placed_rect;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use nesting_result::NestingResult;

#[doc(inline)]
pub use part::Part;

#[doc(inline)]
pub use placed_rect::PlacedRect;
