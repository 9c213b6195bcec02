//! # Módulo HTTP
//!
//! Este módulo implementa la porción mínima de HTTP/1.1 que necesita el
//! servidor de archivos, sin librerías de alto nivel:
//!
//! - Parsing de la request line (solo la primera línea; headers y body
//!   se ignoran por completo)
//! - Construcción de responses byte-exactas
//! - Manejo de status codes
//!
//! ## Formato de Request aceptado
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! (headers y body ignorados)
//! ```
//!
//! ### Formato de Response
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
//! Cada conexión recibe exactamente una response y se cierra
//! (`Connection: close` en todos los casos, sin keep-alive).

pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::RequestLine;
pub use response::Response;
pub use status::StatusCode;
