//! Categoria / Scenario admin payloads and their validation.
//!
//! Unlike room creation (first violation wins), the admin gate reports
//! every field violation at once, joined into a single message.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::types::DbId;

/// Payload for creating or updating a Categoria.
///
/// `id` absent means insert; present means update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaInput {
    pub id: Option<DbId>,
    #[validate(length(
        min = 1,
        max = 254,
        message = "Lunghezza del nome della categoria non valida"
    ))]
    pub nome: String,
}

/// Reference to an existing Categoria by id.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriaRef {
    pub id: DbId,
}

/// Payload for creating or updating a Scenario.
///
/// A Scenario always belongs to exactly one Categoria.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub id: Option<DbId>,
    #[validate(length(
        min = 1,
        max = 254,
        message = "Lunghezza del nome dello scenario non valida"
    ))]
    pub nome: String,
    #[validate(length(
        min = 1,
        max = 254,
        message = "Lunghezza della descrizione dello scenario non valida"
    ))]
    pub descrizione: String,
    #[validate(length(
        min = 1,
        max = 254,
        message = "Lunghezza dell'url immagine non valida"
    ))]
    pub url_immagine: String,
    pub categoria: CategoriaRef,
}

/// Flatten validation errors into one comma-separated message.
///
/// Messages are sorted so the output is deterministic regardless of
/// field iteration order.
pub fn joined_messages(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string())
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(nome: &str, descrizione: &str, url: &str) -> ScenarioInput {
        ScenarioInput {
            id: None,
            nome: nome.to_string(),
            descrizione: descrizione.to_string(),
            url_immagine: url.to_string(),
            categoria: CategoriaRef { id: 1 },
        }
    }

    #[test]
    fn valid_categoria_passes() {
        let input = CategoriaInput {
            id: None,
            nome: "Aule universitarie".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_categoria_name_rejected() {
        let input = CategoriaInput {
            id: Some(3),
            nome: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            joined_messages(&errors),
            "Lunghezza del nome della categoria non valida"
        );
    }

    #[test]
    fn overlong_categoria_name_rejected() {
        let input = CategoriaInput {
            id: None,
            nome: "a".repeat(255),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn valid_scenario_passes() {
        let input = scenario("Aula magna", "Scenario di prova", "https://cdn.example/aula.png");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn scenario_violations_are_joined() {
        let input = scenario("", "", "https://cdn.example/aula.png");
        let errors = input.validate().unwrap_err();
        let message = joined_messages(&errors);

        assert!(message.contains("Lunghezza del nome dello scenario non valida"));
        assert!(message.contains("Lunghezza della descrizione dello scenario non valida"));
        assert!(message.contains(", "));
    }

    #[test]
    fn scenario_payload_deserializes_camel_case() {
        let input: ScenarioInput = serde_json::from_str(
            r#"{
                "nome": "Aula magna",
                "descrizione": "Scenario di prova",
                "urlImmagine": "https://cdn.example/aula.png",
                "categoria": { "id": 7 }
            }"#,
        )
        .unwrap();

        assert_eq!(input.categoria.id, 7);
        assert_eq!(input.url_immagine, "https://cdn.example/aula.png");
    }
}
