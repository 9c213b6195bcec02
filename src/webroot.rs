//! # Resolución de Paths dentro del Webroot
//! src/webroot.rs
//!
//! Este módulo mapea el target de un request a un path absoluto del
//! filesystem confinado dentro del webroot, rechazando los intentos de
//! path traversal (`/../../etc/passwd` y equivalentes).
//!
//! La resolución es una operación pura de paths y metadata: nunca lee el
//! contenido de ningún archivo. Verificar que el path referencia un
//! archivo regular (y leerlo) es responsabilidad del connection handler.
//!
//! ## Contención
//!
//! Un path se acepta si y solo si su forma canónica, como string, tiene
//! por prefijo la forma canónica del webroot. Es una comparación de
//! strings plana, no un chequeo de frontera de path: un directorio hermano
//! cuyo nombre empieza con el nombre del webroot (ej: `web` vs
//! `web_backup`) pasaría el chequeo. Limitación conocida, mantenida por
//! fidelidad de comportamiento; ver DESIGN.md.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Error de resolución: el path escapa del webroot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// El path canónico no está contenido en el webroot
    OutsideRoot,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::OutsideRoot => write!(f, "Path escapes the webroot"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resuelve el target de un request contra el webroot
///
/// Precondición: `root` debe ser absoluto y ya canonicalizado (el servidor
/// lo canonicaliza una vez al arrancar).
///
/// Pasos:
/// 1. `/` se sustituye por `/index.html`
/// 2. Se quita un único `/` inicial antes de unir con el webroot
/// 3. El path unido se lleva a forma canónica absoluta: se usa
///    `fs::canonicalize` (sigue symlinks) y, si el destino no existe, una
///    normalización léxica que colapsa `.` y `..` — así un target
///    inexistente que escapa del webroot igual se rechaza como Forbidden,
///    y uno inexistente dentro del webroot cae en el chequeo de 404
/// 4. Se acepta si el string canónico tiene por prefijo el string del
///    webroot; en caso contrario falla cerrado
///
/// Nota: si el target es un path absoluto (ej: `//etc/passwd` tras quitar
/// un `/`), `Path::join` descarta el webroot y el chequeo de prefijo lo
/// rechaza.
pub fn resolve(root: &Path, target: &str) -> Result<PathBuf, ResolveError> {
    let target = if target == "/" { "/index.html" } else { target };
    let relative = target.strip_prefix('/').unwrap_or(target);

    let joined = root.join(relative);

    // canonicalize falla para destinos inexistentes; en ese caso se
    // normaliza léxicamente para poder aplicar igual el chequeo de prefijo
    let resolved = match fs::canonicalize(&joined) {
        Ok(path) => path,
        Err(_) => normalize_lexical(&joined),
    };

    if resolved
        .to_string_lossy()
        .starts_with(&*root.to_string_lossy())
    {
        Ok(resolved)
    } else {
        Err(ResolveError::OutsideRoot)
    }
}

/// Colapsa `.` y `..` de un path sin tocar el filesystem
///
/// `..` por encima de la raíz se descarta (igual que la normalización
/// léxica clásica: `/..` equivale a `/`).
fn normalize_lexical(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                result.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
        }
    }
    result
}
