//! # Error Types
//!
//! All errors the theory engine can surface to a caller.
//!
//! There is exactly one error condition in the engine: a chord-quality key
//! that is not in the fixed quality table. Every other input is a closed
//! enumeration ([`PitchClass`](crate::PitchClass),
//! [`ChordQuality`](crate::ChordQuality), [`ScaleType`](crate::ScaleType)),
//! so no other validation can fail.
//!
//! ## Usage
//! ```rust
//! use fretwork::{chord_tones, PitchClass, TheoryError};
//!
//! match chord_tones(PitchClass::C, "blues") {
//!     Ok(tones) => println!("{:?}", tones),
//!     Err(TheoryError::UnknownQuality(key)) => {
//!         eprintln!("no such chord quality: {}", key);
//!     }
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// The requested chord quality is not in the quality table.
    ///
    /// Raised by [`ChordQuality::from_key`](crate::ChordQuality::from_key)
    /// and propagated by every string-keyed entry point. Never recovered
    /// silently and never defaulted to a guessed quality.
    ///
    /// # Example
    /// ```
    /// # use fretwork::TheoryError;
    /// let err = TheoryError::UnknownQuality("blues".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord quality: blues");
    /// ```
    #[error("Unknown chord quality: {0}")]
    UnknownQuality(String),
}
