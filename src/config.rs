//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos estáticos
//! con soporte para argumentos CLI y variables de entorno.
//!
//! La configuración se lee una sola vez al arrancar el proceso y es
//! inmutable durante toda su vida.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./file_server --host 127.0.0.1 --port 8085 --webroot ./public
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HOST=0.0.0.0 PORT=8085 WEBROOT=./public ./file_server
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor HTTP/1.1 de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor HTTP/1.1 concurrente de archivos estáticos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha el servidor
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Puerto en el que escucha
    #[arg(short, long, default_value = "8085", env = "PORT")]
    pub port: u16,

    /// Directorio raíz que contiene los archivos servibles (webroot)
    #[arg(long, default_value = ".", env = "WEBROOT")]
    pub webroot: PathBuf,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI y entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8085");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna error si el webroot no existe o no es un directorio.
    pub fn validate(&self) -> Result<(), String> {
        if !self.webroot.is_dir() {
            return Err(format!(
                "Webroot is not a directory: {}",
                self.webroot.display()
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto: todas las interfaces, puerto 8085,
    /// webroot en el directorio de trabajo actual
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8085,
            webroot: PathBuf::from("."),
        }
    }
}
