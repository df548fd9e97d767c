//! Tests de integración del stub responder
//! tests/responder_test.rs
//!
//! A diferencia de un test manual, acá levantamos el responder completo
//! en un puerto efímero dentro del propio proceso de test y hablamos con
//! él por sockets reales. No hace falta ningún servidor corriendo aparte.

use std::fs;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::path::PathBuf;
use std::thread;

use stub_responder::capture::CaptureSink;
use stub_responder::config::Config;
use stub_responder::server::Responder;

const PAYLOAD: &[u8] = b"HTTP/1.1 200 OK\r\n\r\nOK";

/// Helper: levanta un responder en un puerto efímero con su propio log
///
/// El thread del accept loop queda corriendo hasta el final del proceso
/// de test, igual que el stub real corre hasta que lo matan.
fn start_responder(tag: &str, payload: &[u8]) -> (SocketAddr, PathBuf) {
    let log_path = std::env::temp_dir().join(format!(
        "stub_responder_it_{}_{}.log",
        tag,
        std::process::id()
    ));

    let sink = CaptureSink::create(&log_path).expect("crear log de captura");

    let mut config = Config::default();
    config.port = 0;

    let responder = Responder::bind(&config, payload.to_vec(), sink).expect("bind");
    let addr = responder.local_addr().expect("local_addr");

    thread::spawn(move || {
        let _ = responder.run();
    });

    (addr, log_path)
}

/// Helper: manda `request`, cierra el lado de escritura y devuelve todo
/// lo que el stub contestó
fn send_and_collect(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.write_all(request).expect("write");
    stream.shutdown(Shutdown::Write).expect("shutdown");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("read");
    response
}

#[test]
fn test_single_request_round_trip() {
    // Escenario de referencia: un request, el payload exacto de vuelta y
    // las dos líneas mandadas más la línea vacía en el log.
    let (addr, log_path) = start_responder("single", PAYLOAD);

    let response = send_and_collect(addr, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");
    assert_eq!(response, PAYLOAD);

    let log = fs::read(&log_path).unwrap();
    assert_eq!(log, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");

    fs::remove_file(&log_path).ok();
}

#[test]
fn test_payload_bytes_verbatim() {
    // El stub responde el contenido del fixture byte a byte, sin tocarlo
    let payload = b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\n\r\n";
    let (addr, log_path) = start_responder("verbatim", payload);

    let response = send_and_collect(addr, b"GET /_cluster/health HTTP/1.1\r\n\r\n");
    assert_eq!(response, payload);

    fs::remove_file(&log_path).ok();
}

#[test]
fn test_n_requests_on_one_connection() {
    // N requests secuenciales → N payloads y N bloques, en orden de envío
    let (addr, log_path) = start_responder("sequential", PAYLOAD);

    let mut stream = TcpStream::connect(addr).unwrap();
    let mut expected_log = String::new();

    for i in 1..=4 {
        let request = format!("GET /req{} HTTP/1.1\r\nHost: upstream\r\n\r\n", i);
        stream.write_all(request.as_bytes()).unwrap();
        expected_log.push_str(&request);

        // Leer exactamente un payload antes de mandar el siguiente request
        let mut buf = vec![0u8; PAYLOAD.len()];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(buf, PAYLOAD, "respuesta {} incorrecta", i);
    }

    drop(stream);

    let log = fs::read_to_string(&log_path).unwrap();
    assert_eq!(log, expected_log);

    fs::remove_file(&log_path).ok();
}

#[test]
fn test_concurrent_connections_blocks_contiguous() {
    // Dos conexiones concurrentes: el log final contiene los dos bloques
    // completos y contiguos, en algún orden.
    let (addr, log_path) = start_responder("concurrent", PAYLOAD);

    let block_a = "GET /a HTTP/1.1\r\n\r\n";
    let block_b = "GET /b HTTP/1.1\r\n\r\n";

    let ta = thread::spawn(move || send_and_collect(addr, block_a.as_bytes()));
    let tb = thread::spawn(move || send_and_collect(addr, block_b.as_bytes()));

    assert_eq!(ta.join().unwrap(), PAYLOAD);
    assert_eq!(tb.join().unwrap(), PAYLOAD);

    let log = fs::read_to_string(&log_path).unwrap();
    let ab = format!("{}{}", block_a, block_b);
    let ba = format!("{}{}", block_b, block_a);
    assert!(
        log == ab || log == ba,
        "los bloques se intercalaron en el log: {:?}",
        log
    );

    fs::remove_file(&log_path).ok();
}

#[test]
fn test_abrupt_close_does_not_affect_other_connections() {
    // Una conexión que se corta de golpe no tira el stub ni molesta a las demás
    let (addr, log_path) = start_responder("abrupt", PAYLOAD);

    // Conexión A: manda un request y desaparece sin leer la respuesta
    {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"GET /abandonado HTTP/1.1\r\n\r\n").unwrap();
    }

    // Conexión B: tiene que seguir funcionando normalmente
    let response = send_and_collect(addr, b"GET /vivo HTTP/1.1\r\n\r\n");
    assert_eq!(response, PAYLOAD);

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("GET /vivo HTTP/1.1\r\n\r\n"));

    fs::remove_file(&log_path).ok();
}

#[test]
fn test_empty_payload_fixture() {
    // Un fixture vacío es válido: el stub loguea el bloque y no contesta nada
    let (addr, log_path) = start_responder("empty", b"");

    let response = send_and_collect(addr, b"GET / HTTP/1.1\r\n\r\n");
    assert!(response.is_empty());

    let log = fs::read(&log_path).unwrap();
    assert_eq!(log, b"GET / HTTP/1.1\r\n\r\n");

    fs::remove_file(&log_path).ok();
}
