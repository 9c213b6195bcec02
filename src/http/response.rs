//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! byte-exactas y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! Content-Length: 11\r\n
//! Connection: close\r\n
//! \r\n
//! hello world
//! ```
//!
//! Los headers se emiten siempre en ese orden fijo. `Content-Length` es
//! exactamente la longitud en bytes del body, y toda respuesta lleva
//! `Connection: close`: el servidor atiende una petición por conexión.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use file_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_content_type("text/plain; charset=utf-8")
//!     .with_body_bytes(b"hola".to_vec());
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;

/// Content type por defecto cuando no se especifica otro
const DEFAULT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Valor del header Content-Type
    content_type: String,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto la respuesta tiene body vacío y content type
    /// `text/html; charset=utf-8`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: Vec::new(),
        }
    }

    /// Reemplaza el content type de la respuesta
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para servir archivos binarios tal cual se leyeron del disco.
    /// `Content-Length` se deriva siempre de este buffer al serializar.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Crea una respuesta de error con una página HTML mínima
    ///
    /// Formato del body: `<h1>mensaje</h1>`
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::NotFound, "404 Not Found");
    /// assert_eq!(response.body(), b"<h1>404 Not Found</h1>");
    /// ```
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = format!("<h1>{}</h1>", message);
        Self::new(status).with_body_bytes(body.into_bytes())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.1:
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers en orden fijo: `Content-Type`, `Content-Length`,
    ///   `Connection: close`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario sin modificar
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.content_type,
            self.body.len()
        );

        let mut result = Vec::with_capacity(header.len() + self.body.len());
        result.extend_from_slice(header.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el content type de la respuesta
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
