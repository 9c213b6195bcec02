//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Lee una request line por conexión
//! 4. Resuelve el archivo pedido dentro del webroot y responde
//!
//! Cada conexión aceptada se atiende en su propio thread; el accept loop
//! nunca se bloquea esperando a una conexión en curso.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
