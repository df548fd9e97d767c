//! # Configuración del Stub Responder
//! src/config.rs
//!
//! Este módulo define la configuración del stub con soporte completo
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./stub_responder --port 9200 \
//!   --fixtures-dir ./responses \
//!   --response response.txt \
//!   --output /tmp/response.log
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! UPSTREAM_PORT=9200 UPSTREAM_OUT=/tmp/response.log ./stub_responder
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

/// Configuración del stub responder
#[derive(Debug, Clone, Parser)]
#[command(name = "stub_responder")]
#[command(about = "Upstream falso que captura los headers recibidos y contesta con un payload fijo")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el stub
    #[arg(short, long, default_value = "9200", env = "UPSTREAM_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "UPSTREAM_HOST")]
    pub host: String,

    /// Directorio con los fixtures de respuesta
    #[arg(long = "fixtures-dir", default_value = "./responses", env = "UPSTREAM_FIXTURES")]
    pub fixtures_dir: String,

    /// Nombre del fixture de respuesta a servir
    #[arg(long, default_value = "response.txt", env = "UPSTREAM_RESPONSE")]
    pub response: String,

    /// Ruta del archivo donde se capturan los headers recibidos
    #[arg(long, default_value = "/tmp/response.log", env = "UPSTREAM_OUT")]
    pub output: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use stub_responder::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:9200");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ruta completa del fixture de respuesta seleccionado
    pub fn response_path(&self) -> PathBuf {
        Path::new(&self.fixtures_dir).join(&self.response)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        // Validar nombre del fixture
        if self.response.is_empty() {
            return Err("Response filename must not be empty".to_string());
        }
        if self.response.contains("..") || self.response.contains('/') || self.response.contains('\\') {
            return Err("Response filename must not escape the fixtures dir".to_string());
        }

        // Validar ruta de salida
        if self.output.is_empty() {
            return Err("Output path must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║        Stub Responder Configuration          ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("📄 Fixture:");
        println!("   Fixtures dir: {}", self.fixtures_dir);
        println!("   Response:     {}", self.response);
        println!();
        println!("📝 Capture:");
        println!("   Output:       {}", self.output);
        println!();
        println!("════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto (los mismos valores que los defaults del CLI)
    fn default() -> Self {
        Self {
            port: 9200,
            host: "127.0.0.1".to_string(),
            fixtures_dir: "./responses".to_string(),
            response: "response.txt".to_string(),
            output: "/tmp/response.log".to_string(),
        }
    }
}
