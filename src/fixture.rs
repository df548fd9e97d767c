//! # Carga de Fixtures de Respuesta
//! src/fixture.rs
//!
//! Lee el fixture de respuesta una sola vez al arrancar el proceso.
//! Los bytes se devuelven tal cual están en disco, sin normalizar fines
//! de línea ni nada: el stub responde con el contenido exacto del archivo.

use std::fs;
use std::io;
use std::path::Path;

/// Lee el contenido completo del fixture `name` dentro de `dir`.
///
/// # Errores
///
/// Retorna el error de IO con la ruta incluida en el mensaje, para que
/// el fallo fatal de arranque diga qué archivo faltó.
pub fn load(dir: &str, name: &str) -> io::Result<Vec<u8>> {
    let path = Path::new(dir).join(name);
    fs::read(&path).map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}
