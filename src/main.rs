//! # Stub Responder - Entry Point
//! src/main.rs
//!
//! Punto de entrada del stub. Carga la configuración, el fixture de
//! respuesta y el log de captura, y se queda aceptando conexiones hasta
//! que lo maten desde afuera (el final de la suite de tests).

use stub_responder::capture::CaptureSink;
use stub_responder::config::Config;
use stub_responder::fixture;
use stub_responder::server::Responder;

fn main() {
    println!("=================================");
    println!("  Stub Responder (fake upstream)");
    println!("=================================\n");

    // Crear configuración (CLI args o variables de entorno)
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Cargar el fixture de respuesta: fallar acá es fatal
    let payload = match fixture::load(&config.fixtures_dir, &config.response) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("💥 No se pudo leer el fixture de respuesta: {}", e);
            std::process::exit(1);
        }
    };

    // Abrir (truncando) el log de captura compartido
    let sink = match CaptureSink::create(&config.output) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("💥 No se pudo abrir el log de captura {}: {}", config.output, e);
            std::process::exit(1);
        }
    };

    println!("Logging to {}", config.output);

    let responder = match Responder::bind(&config, payload, sink) {
        Ok(responder) => responder,
        Err(e) => {
            eprintln!("💥 No se pudo escuchar en {}: {}", config.address(), e);
            std::process::exit(1);
        }
    };

    println!("[+] Stub escuchando en {}\n", config.address());

    // Acepta conexiones para siempre (esto bloquea el thread principal)
    if let Err(e) = responder.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
