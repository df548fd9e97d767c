//! # Sink de Captura Compartido
//! src/capture/sink.rs
//!
//! Un único archivo de salida compartido por todos los handlers de conexión.
//! Los writes se serializan con un mutex: cada bloque de headers queda
//! contiguo en el log, sin intercalarse con los de otras conexiones.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Sink de captura thread-safe
///
/// Clonar un `CaptureSink` es barato (clona el `Arc`); cada thread de
/// conexión recibe su propio clon y todos escriben al mismo archivo.
#[derive(Clone)]
pub struct CaptureSink {
    inner: Arc<Mutex<BufWriter<File>>>,
}

impl CaptureSink {
    /// Crea (o trunca) el archivo de salida para escritura
    ///
    /// Fallar aquí es fatal para el arranque del stub.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(BufWriter::new(file))),
        })
    }

    /// Agrega un bloque de headers completo al log y hace flush.
    ///
    /// El lock se mantiene durante todo el write + flush: los bloques de
    /// dos conexiones concurrentes nunca se parten entre sí, y el flush
    /// inmediato deja el bloque visible aunque el proceso muera después.
    pub fn append_block(&self, block: &[u8]) -> io::Result<()> {
        let mut out = self.inner.lock().unwrap();
        out.write_all(block)?;
        out.flush()
    }
}
