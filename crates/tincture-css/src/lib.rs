//! Color values and value terms for the Tincture stylesheet model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Packed colors** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - sRGB channels plus alpha packed into one 32-bit key
//!   - Construction from RGB, RGBA, HSL and 3/6-digit hex notation
//!   - Serialization to `rgb()`/`rgba()` and `#rrggbb`
//!
//! - **Value terms** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - The `Term` base shared by every parsed value
//!   - The process-wide `inherit` keyword term
//!
//! # Not Implemented
//!
//! - `rgb()`/`hsl()` function parsing (callers extract the components)
//! - Named colors
//! - Color spaces other than sRGB

/// Packed sRGB colors per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Value terms per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod term;

pub use color::{AlphaFraction, PackedColor};
pub use term::{RuleValueType, Term, ValueTerm};
pub use tincture_common::HexColorError;
