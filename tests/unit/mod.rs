//! Unit tests mirroring the `src/` module layout

mod color;
