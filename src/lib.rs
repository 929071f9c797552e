//! BukuGo terminal front end: bootstrap, wiring and the interactive loop.

pub mod bootstrap;
