//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el stub TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee el bloque de headers de cada request hasta la línea vacía
//! 4. Anota el bloque en el log de captura y contesta con el payload fijo

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Responder;
