pub use super::{FileOpen, Read, Write};
