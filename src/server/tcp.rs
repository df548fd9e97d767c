//! # Stub Responder TCP
//! src/server/tcp.rs
//!
//! Servidor TCP concurrente que hace de upstream falso en tests de
//! integración. Cada conexión corre en su propio thread: se leen los
//! headers de cada request, se anotan en el log de captura y se contesta
//! siempre con el mismo payload, hasta que el peer corta.

use crate::capture::CaptureSink;
use crate::config::Config;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Stub responder concurrente
pub struct Responder {
    payload: Arc<Vec<u8>>,
    sink: CaptureSink,
    listener: TcpListener,
}

impl Responder {
    /// Hace bind en la dirección configurada.
    ///
    /// Un fallo acá (puerto ocupado, sin permisos) es fatal para el caller.
    pub fn bind(config: &Config, payload: Vec<u8>, sink: CaptureSink) -> io::Result<Self> {
        let listener = TcpListener::bind(config.address())?;
        Ok(Self {
            payload: Arc::new(payload),
            sink,
            listener,
        })
    }

    /// Dirección real en la que quedó escuchando
    ///
    /// Útil en tests, que hacen bind con puerto 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept: corre para siempre, un thread por conexión.
    ///
    /// No hay shutdown ordenado: el proceso se mata desde afuera cuando
    /// termina la suite de tests. Un error inesperado dentro de un handler
    /// (cualquier cosa que no sea una desconexión del peer) termina el
    /// proceso entero con código 1: en un test run preferimos fallar
    /// ruidosamente a perder conexiones en silencio.
    pub fn run(self) -> io::Result<()> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let payload = Arc::clone(&self.payload);
                    let sink = self.sink.clone();

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!("[+] Nueva conexión desde: {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &payload, &sink) {
                            eprintln!("💥 Error inesperado atendiendo a {}: {}", peer_addr, e);
                            std::process::exit(1);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: lee bloques de headers y contesta con el
    /// payload, en loop, hasta que el peer cierra.
    ///
    /// Soporta varios requests secuenciales sobre la misma conexión. Una
    /// desconexión (EOF en lectura, broken pipe en escritura) termina el
    /// loop limpiamente; el socket se cierra en todos los caminos de salida
    /// al dropearse. Cualquier otro error se propaga al caller.
    ///
    /// No hay timeout de lectura ni límite de tamaño de headers: un peer
    /// colgado puede dejar este thread esperando indefinidamente. Se deja
    /// así a propósito porque esto es un fixture de tests.
    pub fn handle_connection(stream: TcpStream, payload: &[u8], sink: &CaptureSink) -> io::Result<()> {
        let mut writer = stream.try_clone()?;
        let mut reader = BufReader::new(stream);

        loop {
            let block = match read_header_block(&mut reader) {
                Ok(Some(block)) => block,
                Ok(None) => break,
                Err(e) if is_disconnect(&e) => break,
                Err(e) => return Err(e),
            };

            sink.append_block(&block)?;

            // Broken pipe al responder = el peer ya se fue; no es un error
            match writer.write_all(payload) {
                Ok(()) => {}
                Err(e) if is_disconnect(&e) => break,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

/// Lee líneas del socket hasta la línea vacía (`\r\n`) que cierra los headers.
///
/// Devuelve `Ok(Some(bloque))` con la línea vacía incluida. Si el peer
/// cierra antes de mandar la línea vacía, un bloque parcial no vacío se
/// devuelve igual (y el caller lo loguea igual); `Ok(None)` es EOF limpio
/// sin datos pendientes.
fn read_header_block<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut block = Vec::new();

    loop {
        let line_start = block.len();
        let n = reader.read_until(b'\n', &mut block)?;

        if n == 0 {
            // EOF del peer
            return Ok(if block.is_empty() { None } else { Some(block) });
        }

        if &block[line_start..] == b"\r\n" {
            return Ok(Some(block));
        }
    }
}

/// Clasifica los errores de IO que significan "el peer se desconectó"
fn is_disconnect(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::UnexpectedEof
    )
}
