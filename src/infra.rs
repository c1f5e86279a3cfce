#![doc(hidden)]

pub mod export;
pub mod modeling;
pub mod testing;

#[cfg(feature = "proptest")]
pub mod proptest;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
