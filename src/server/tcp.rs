//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread, de principio a fin, sin puntos de suspensión internos.
//!
//! El manejo de una conexión es una máquina de estados lineal:
//! leer → parsear request line → validar método → resolver path →
//! leer archivo → escribir response → cerrar. Todo error se convierte en
//! una response HTTP o en un cierre silencioso; nada cruza el límite del
//! handler hacia el accept loop.

use crate::config::Config;
use crate::http::{request, RequestLine, Response, StatusCode};
use crate::mime;
use crate::webroot;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Tamaño máximo de la única lectura por conexión
const BUFFER_SIZE: usize = 8192;

/// Servidor HTTP/1.1 concurrente de archivos estáticos
pub struct Server {
    config: Config,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    /// Hace bind del socket de escucha en la dirección configurada
    pub fn bind(&mut self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);

        self.listener = Some(listener);
        Ok(())
    }

    /// Dirección local real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Hace bind (si hace falta) y entra al accept loop
    ///
    /// Bloquea el thread llamador hasta que el proceso reciba una
    /// interrupción del operador; el sistema operativo libera el socket
    /// al terminar el proceso.
    pub fn run(&mut self) -> std::io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        self.serve()
    }

    /// Accept loop: un thread por conexión aceptada
    ///
    /// El loop en sí es secuencial; solo el manejo de conexiones es
    /// concurrente. Los handlers comparten únicamente el webroot
    /// canonicalizado, de solo lectura.
    pub fn serve(&self) -> std::io::Result<()> {
        let listener = match &self.listener {
            Some(listener) => listener,
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "server is not bound",
                ))
            }
        };

        // Se canonicaliza una sola vez; todo chequeo de contención se
        // hace contra esta forma absoluta
        let webroot = Arc::new(fs::canonicalize(&self.config.webroot)?);
        println!("[*] Sirviendo {} (un thread por conexión)\n", webroot.display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let webroot = Arc::clone(&webroot);
                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &peer, &webroot) {
                            eprintln!("   ❌ Error en conexión [{}]: {}", peer, e);
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

    /// Atiende exactamente una conexión: lee, responde, cierra
    ///
    /// Si el peer cierra sin enviar datos, se aborta en silencio sin
    /// intentar responder. El stream se cierra al salir del scope en todo
    /// camino de salida, éxito o error.
    fn handle_connection(
        mut stream: TcpStream,
        peer: &str,
        webroot: &Path,
    ) -> std::io::Result<()> {
        let mut buffer = [0u8; BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin enviar datos
            return Ok(());
        }

        let raw = &buffer[..bytes_read];
        println!("   ✅ [{}] {}", peer, request::first_line_lossy(raw));

        let response = Self::build_response(raw, webroot);
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let marker = if response.status().is_success() { "✅" } else { "❌" };
        println!("   {} [{}] {}", marker, peer, response.status().as_u16());

        Ok(())
    }

    /// Convierte los bytes crudos de un request en la response a enviar
    ///
    /// Taxonomía de errores: request line malformada → 400, método
    /// distinto de GET → 405, path fuera del webroot → 403, destino que no
    /// es archivo regular → 404, fallo de lectura tras la verificación de
    /// existencia → 500 (el detalle va solo a consola, nunca al cliente).
    fn build_response(raw: &[u8], webroot: &Path) -> Response {
        let request = match RequestLine::parse(raw) {
            Ok(request) => request,
            Err(_) => return Response::error(StatusCode::BadRequest, "400 Bad Request"),
        };

        if request.method() != "GET" {
            return Response::error(StatusCode::MethodNotAllowed, "405 Method Not Allowed");
        }

        let resolved = match webroot::resolve(webroot, request.target()) {
            Ok(path) => path,
            Err(_) => return Response::error(StatusCode::Forbidden, "403 Forbidden"),
        };

        if !resolved.is_file() {
            return Response::error(StatusCode::NotFound, "404 Not Found");
        }

        match fs::read(&resolved) {
            Ok(content) => Response::new(StatusCode::Ok)
                .with_content_type(&mime::content_type(&resolved))
                .with_body_bytes(content),
            Err(e) => {
                // Permiso denegado, o el archivo desapareció entre el
                // chequeo de existencia y la lectura
                eprintln!("   ❌ Error leyendo {}: {}", resolved.display(), e);
                Response::error(StatusCode::InternalServerError, "500 Internal Server Error")
            }
        }
    }
}
