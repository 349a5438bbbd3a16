//! The nine exercises, each a pure function over typed inputs.
//!
//! Argument kind checks for untyped input live in [`crate::core::dispatch`];
//! the functions here only enforce value ranges.

pub mod century;
pub mod colors;
pub mod fibonacci;
pub mod matrix;
pub mod number_system;
pub mod phone;
pub mod smiles;
pub mod sum;
pub mod tic_tac_toe;

pub use century::century_from_year;
pub use colors::{hex_to_rgb, parse_hex_color};
pub use fibonacci::fibonacci;
pub use matrix::transpose;
pub use number_system::{float_to_base, to_base};
pub use phone::is_phone_number;
pub use smiles::count_smiles;
pub use sum::sum;
pub use tic_tac_toe::{tic_tac_toe_result, Board};
