pub mod cursor;
pub use cursor::{read_u32_le, ByteCursor};
