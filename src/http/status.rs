//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado que emite el servidor de
//! archivos:
//!
//! - **2xx**: Éxito (200 OK)
//! - **4xx**: Error del cliente (400, 403, 404, 405)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que emite el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Archivo encontrado y servido
    Ok = 200,

    /// 400 Bad Request - Request line malformada (menos de dos tokens)
    BadRequest = 400,

    /// 403 Forbidden - El path resuelto escapa del webroot
    Forbidden = 403,

    /// 404 Not Found - El path no referencia un archivo regular
    NotFound = 404,

    /// 405 Method Not Allowed - Cualquier método distinto de GET
    MethodNotAllowed = 405,

    /// 500 Internal Server Error - Fallo de lectura tras la verificación
    /// de existencia (permiso, carrera con un borrado, etc.)
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Solo 200, 404 y 500 tienen frase propia; cualquier otro código
    /// responde "OK" en la status line. Es un comportamiento heredado del
    /// formato de salida existente y se mantiene por compatibilidad con
    /// los clientes que lo verifican byte a byte.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "OK");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            _ => "OK",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert!(StatusCode::Ok.is_success());
    /// assert!(!StatusCode::NotFound.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado tal como aparece en la status line
    ///
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::Forbidden.as_u16(), 403);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
        assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
        assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
        assert_eq!(
            StatusCode::InternalServerError.reason_phrase(),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_reason_phrase_defaults_to_ok() {
        // Los códigos sin frase propia responden "OK" en la status line
        assert_eq!(StatusCode::BadRequest.reason_phrase(), "OK");
        assert_eq!(StatusCode::Forbidden.reason_phrase(), "OK");
        assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "OK");
    }

    #[test]
    fn test_is_success() {
        assert!(StatusCode::Ok.is_success());
        assert!(!StatusCode::BadRequest.is_success());
        assert!(!StatusCode::InternalServerError.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
        assert_eq!(
            StatusCode::InternalServerError.to_string(),
            "500 Internal Server Error"
        );
        assert_eq!(StatusCode::MethodNotAllowed.to_string(), "405 OK");
    }
}
