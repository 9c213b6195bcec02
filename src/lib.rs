//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente de archivos estáticos implementado desde
//! cero sobre la librería estándar: un thread por conexión, una petición
//! por conexión, y un webroot que confina todo archivo servible.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: request line, construcción de responses y status codes
//! - `server`: servidor TCP, aceptación y manejo de conexiones
//! - `webroot`: resolución de paths dentro del webroot (anti path-traversal)
//! - `mime`: tabla de content types por extensión de archivo
//! - `config`: configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use file_server::server::Server;
//! use file_server::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod webroot;
pub mod mime;
