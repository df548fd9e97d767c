//! # Stub Responder
//! src/lib.rs
//!
//! Fixture de tests de integración: un upstream falso que escucha en un
//! puerto TCP, captura el bloque de headers de cada request en un log
//! compartido y contesta siempre con el contenido exacto de un archivo
//! de respuesta cargado al arrancar.
//!
//! ## Arquitectura
//!
//! El stub está dividido en módulos especializados:
//! - `config`: configuración por CLI y variables de entorno
//! - `fixture`: carga del payload de respuesta desde disco
//! - `capture`: log de captura compartido (mutex) entre conexiones
//! - `server`: loop accept/log/respond, un thread por conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use stub_responder::capture::CaptureSink;
//! use stub_responder::config::Config;
//! use stub_responder::server::Responder;
//!
//! let config = Config::default();
//! let sink = CaptureSink::create(&config.output).expect("abrir log de captura");
//! let responder = Responder::bind(&config, b"HTTP/1.1 200 OK\r\n\r\nOK".to_vec(), sink)
//!     .expect("bind");
//! responder.run().expect("run");
//! ```

pub mod capture;
pub mod config;
pub mod fixture;
pub mod server;
