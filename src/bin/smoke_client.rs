//! # Smoke-test Client
//! src/bin/smoke_client.rs
//!
//! Cliente HTTPS mínimo para verificar endpoints TLS de prueba: hace un
//! GET a la URL dada e imprime el body de la respuesta, sea cual sea el
//! status code. La verificación de hostname queda activada por defecto.
//!
//! ## Ejemplos de uso
//!
//! ```bash
//! ./smoke_client https://tlsv12-elb.example.com
//! ./smoke_client https://localhost:4433 --ca-cert /tmp/certs/jerry.pem
//! ```

use clap::Parser;
use std::fs;
use std::process;

/// Cliente smoke-test: un GET y el body por stdout
#[derive(Debug, Parser)]
#[command(name = "smoke_client")]
#[command(about = "Hace un GET (HTTPS u HTTP) e imprime el body de la respuesta")]
#[command(version = "0.1.0")]
struct Args {
    /// URL a consultar (ej: https://localhost:4433)
    url: String,

    /// Certificado raíz extra en formato PEM, para endpoints con CA propia
    #[arg(long = "ca-cert", env = "SMOKE_CA_CERT")]
    ca_cert: Option<String>,

    /// No verificar el certificado del servidor (solo para tests)
    #[arg(long)]
    insecure: bool,
}

/// Ejecuta el GET y devuelve el body como texto
fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut builder = reqwest::blocking::Client::builder();

    if let Some(path) = &args.ca_cert {
        let pem = fs::read(path)?;
        builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
    }

    if args.insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    let client = builder.build()?;
    let body = client.get(&args.url).send()?.text()?;

    Ok(body)
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(body) => println!("{}", body),
        Err(e) => {
            eprintln!("💥 Request falló: {}", e);
            process::exit(1);
        }
    }
}
