//! # File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos estáticos.
//!
//! La configuración se lee una sola vez al arrancar, desde CLI o
//! variables de entorno (HOST, PORT, WEBROOT).

use file_server::config::Config;
use file_server::server::Server;

fn main() {
    println!("=================================");
    println!("  File Server HTTP/1.1");
    println!("=================================\n");

    // Crear configuración (CLI o desde env)
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    println!("⚙️  Configuración:");
    println!("   Host: {}", config.host);
    println!("   Puerto: {}", config.port);
    println!("   Webroot: {}", config.webroot.display());
    println!();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
