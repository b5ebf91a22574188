//! User-facing messages in Spanish and English

use actix_web::{http::header, HttpRequest};

/// Language for response messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// Pick the language from the `Accept-Language` header.
    ///
    /// The highest-weighted of `es`/`en` wins; anything else is Spanish.
    pub fn from_request(req: &HttpRequest) -> Self {
        req.headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Parse a raw header value, e.g. `"en-US,en;q=0.9,es;q=0.8"`
    pub fn from_header(header_value: &str) -> Self {
        let mut preferred = Language::Spanish;
        let mut max_quality = 0.0_f32;

        for entry in header_value.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = if tag.starts_with("en") {
                Language::English
            } else if tag.starts_with("es") {
                Language::Spanish
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = language;
                max_quality = quality;
            }
        }

        preferred
    }
}

/// Every message the API can send back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    VerificationResent,
    MissingParameter,
    UserNotFound,
    CooldownActive { retry_after_secs: u64 },
    ResendRejected,
    InternalError,
    MethodNotAllowed,
    NotFound,
}

impl Message {
    pub fn text(self, lang: Language) -> String {
        match (self, lang) {
            (Message::VerificationResent, Language::Spanish) => {
                "Correo de verificación reenviado exitosamente.".to_string()
            }
            (Message::VerificationResent, Language::English) => {
                "Verification email resent successfully.".to_string()
            }
            (Message::MissingParameter, Language::Spanish) => "Falta algún parámetro".to_string(),
            (Message::MissingParameter, Language::English) => {
                "A required parameter is missing".to_string()
            }
            (Message::UserNotFound, Language::Spanish) => "Usuario no encontrado".to_string(),
            (Message::UserNotFound, Language::English) => "User not found".to_string(),
            (Message::CooldownActive { retry_after_secs }, Language::Spanish) => format!(
                "Debes esperar {} segundos antes de solicitar otro correo de verificación",
                retry_after_secs
            ),
            (Message::CooldownActive { retry_after_secs }, Language::English) => format!(
                "Please wait {} seconds before requesting another verification email",
                retry_after_secs
            ),
            (Message::ResendRejected, Language::Spanish) => {
                "No se pudo reenviar el correo de verificación".to_string()
            }
            (Message::ResendRejected, Language::English) => {
                "The verification email could not be resent".to_string()
            }
            (Message::InternalError, Language::Spanish) => "Error interno del servidor".to_string(),
            (Message::InternalError, Language::English) => "Internal server error".to_string(),
            (Message::MethodNotAllowed, Language::Spanish) => "Método no permitido".to_string(),
            (Message::MethodNotAllowed, Language::English) => "Method not allowed".to_string(),
            (Message::NotFound, Language::Spanish) => "Recurso no encontrado".to_string(),
            (Message::NotFound, Language::English) => "Resource not found".to_string(),
        }
    }
}
