mod orientation;
mod rect;

#[doc(inline)]
pub use orientation::Orientation;

#[doc(inline)]
pub use rect::Rect;
