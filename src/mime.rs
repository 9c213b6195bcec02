//! # Content Types por Extensión
//! src/mime.rs
//!
//! Tabla estática extensión → media type para derivar el `Content-Type`
//! de los archivos servidos. Extensiones desconocidas (o archivos sin
//! extensión) se sirven como `application/octet-stream`.
//!
//! A los tipos `text/*` se les agrega `; charset=utf-8`; el resto se
//! emite tal cual.

use std::path::Path;

/// Retorna el media type base según la extensión del archivo
///
/// La comparación es case-insensitive (`.HTML` y `.html` son iguales).
pub fn media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        // Texto
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "xml" => "application/xml",
        "json" => "application/json",

        // Imágenes
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",

        // Audio/Video
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        // Fuentes
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Archivos empaquetados y documentos
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        "tar" => "application/x-tar",
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",

        // Default
        _ => "application/octet-stream",
    }
}

/// Deriva el valor completo del header `Content-Type` para un archivo
///
/// A los tipos `text/*` se les agrega el charset.
///
/// # Ejemplo
/// ```
/// use std::path::Path;
/// use file_server::mime::content_type;
///
/// assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
/// assert_eq!(content_type(Path::new("logo.png")), "image/png");
/// ```
pub fn content_type(path: &Path) -> String {
    let media = media_type(path);
    if media.starts_with("text/") {
        format!("{}; charset=utf-8", media)
    } else {
        media.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_common_extensions() {
        assert_eq!(media_type(Path::new("index.html")), "text/html");
        assert_eq!(media_type(Path::new("style.css")), "text/css");
        assert_eq!(media_type(Path::new("app.js")), "text/javascript");
        assert_eq!(media_type(Path::new("data.json")), "application/json");
        assert_eq!(media_type(Path::new("image.png")), "image/png");
        assert_eq!(media_type(Path::new("doc.pdf")), "application/pdf");
    }

    #[test]
    fn test_media_type_case_insensitive() {
        assert_eq!(media_type(Path::new("INDEX.HTML")), "text/html");
        assert_eq!(media_type(Path::new("photo.JPG")), "image/jpeg");
    }

    #[test]
    fn test_media_type_unknown_is_octet_stream() {
        assert_eq!(media_type(Path::new("archivo.xyz")), "application/octet-stream");
        assert_eq!(media_type(Path::new("sin_extension")), "application/octet-stream");
    }

    #[test]
    fn test_content_type_appends_charset_for_text() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("notas.txt")), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_content_type_binary_without_charset() {
        assert_eq!(content_type(Path::new("logo.png")), "image/png");
        assert_eq!(content_type(Path::new("blob.bin")), "application/octet-stream");
    }
}
