//! # Módulo de Captura
//! src/capture/mod.rs
//!
//! El log de captura donde el stub va anotando los headers de cada
//! request que recibe. Es el único recurso mutable compartido entre
//! las conexiones, por eso vive detrás de un mutex.

pub mod sink;

// Re-exportar para facilitar el uso
pub use sink::CaptureSink;
