//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Este módulo parsea únicamente la primera línea del request. El servidor
//! de archivos no necesita nada más: los headers y el body se descartan.
//!
//! ## Formato de la Request Line
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! ```
//!
//! La decodificación de bytes es tolerante: secuencias UTF-8 inválidas se
//! sustituyen en lugar de fallar el request. El método se guarda como
//! string tal cual llegó; la validación de métodos soportados ocurre en el
//! connection handler (responde 405, no un error de parseo).

/// La primera línea de un request HTTP: método y target
///
/// Invariante: solo se construye a partir de la primera línea del stream
/// de bytes; nunca se parsean headers ni body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Método HTTP tal como llegó (ej: "GET", "POST")
    method: String,

    /// Target de la petición (ej: "/index.html")
    target: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// La request line tiene menos de dos tokens separados por espacios
    InvalidRequestLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
        }
    }
}

impl std::error::Error for ParseError {}

impl RequestLine {
    /// Parsea la request line desde los bytes crudos de la primera lectura
    ///
    /// Toma solo la primera línea del buffer y la separa por espacios en
    /// blanco. Se exigen al menos dos tokens (método y target); cualquier
    /// token adicional, como la versión HTTP, se ignora.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use file_server::http::RequestLine;
    ///
    /// let raw = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = RequestLine::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.target(), "/index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Decodificación tolerante: bytes inválidos se sustituyen por
        // U+FFFD en vez de rechazar el request
        let text = String::from_utf8_lossy(buffer);

        let first_line = text.lines().next().unwrap_or("");

        let parts: Vec<&str> = first_line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ParseError::InvalidRequestLine);
        }

        Ok(RequestLine {
            method: parts[0].to_string(),
            target: parts[1].to_string(),
        })
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el target del request
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Extrae la primera línea del buffer para propósitos de logging
///
/// Usa la misma decodificación tolerante que el parser, de modo que la
/// bitácora muestre exactamente lo que se intentó parsear.
pub fn first_line_lossy(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer)
        .lines()
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.target(), "/");
    }

    #[test]
    fn test_parse_with_path() {
        let raw = b"GET /docs/manual.pdf HTTP/1.1\r\n\r\n";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.target(), "/docs/manual.pdf");
    }

    #[test]
    fn test_parse_ignores_headers_and_body() {
        let raw = b"GET /a HTTP/1.1\r\nHost: x\r\nUser-Agent: curl\r\n\r\nbody";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.target(), "/a");
    }

    #[test]
    fn test_parse_post_is_not_a_parse_error() {
        // El método no se valida aquí; el handler responde 405
        let raw = b"POST /upload HTTP/1.1\r\n\r\n";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.method(), "POST");
    }

    #[test]
    fn test_parse_two_tokens_without_version() {
        // Dos tokens alcanzan: la versión es opcional y se ignora
        let raw = b"GET /index.html\r\n";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.target(), "/index.html");
    }

    #[test]
    fn test_parse_single_token() {
        let raw = b"GET\r\n\r\n";
        let result = RequestLine::parse(raw);

        assert_eq!(result, Err(ParseError::InvalidRequestLine));
    }

    #[test]
    fn test_parse_blank_line() {
        let raw = b"\r\n\r\n";
        let result = RequestLine::parse(raw);

        assert_eq!(result, Err(ParseError::InvalidRequestLine));
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8() {
        // Bytes inválidos se sustituyen, el request no se rechaza
        let raw = b"GET /f\xFF\xFEoo HTTP/1.1\r\n\r\n";
        let request = RequestLine::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert!(request.target().starts_with("/f"));
    }

    #[test]
    fn test_first_line_lossy() {
        let raw = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
        assert_eq!(first_line_lossy(raw), "GET / HTTP/1.1");
        assert_eq!(first_line_lossy(b""), "");
    }
}
