//! Error types for the blog front-end.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Service error type.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The requested document does not exist in the content repository.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request is missing or carries invalid parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A fetch against the content repository failed (network, 4xx, 5xx).
    #[error("content repository error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Internal server error (rendering, unexpected payloads, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Página não encontrada",
                format!("O conteúdo solicitado não existe ou foi removido: {msg}"),
            ),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Requisição inválida",
                format!("A requisição não pôde ser atendida: {msg}"),
            ),
            Self::Fetch(err) => {
                tracing::error!(error = %err, "content repository fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Conteúdo indisponível",
                    "O repositório de conteúdo está temporariamente indisponível. Tente novamente em instantes.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno",
                    "Ocorreu um erro interno. Tente novamente em instantes.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Voltar para a home" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        let err = ServeError::NotFound("post 'abc'".to_string());
        assert_eq!(err.to_string(), "not found: post 'abc'");
    }

    #[test]
    fn error_display_bad_request() {
        let err = ServeError::BadRequest("missing preview token".to_string());
        assert_eq!(err.to_string(), "bad request: missing preview token");
    }

    #[test]
    fn error_display_internal() {
        let err = ServeError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_not_found() {
        let err = ServeError::NotFound("post 'xyz'".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_bad_request() {
        let err = ServeError::BadRequest("nope".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_into_response_internal() {
        let err = ServeError::Internal(anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
