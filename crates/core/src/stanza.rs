//! Room field validation.
//!
//! Room creation arrives with every field as a string; each field is
//! checked in declaration order against its literal pattern and the
//! first violation wins. Messages are the user-facing wire contract
//! and stay in Italian.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum number of seats in a room.
pub const MIN_POSTI: i32 = 1;
/// Maximum number of seats in a room.
pub const MAX_POSTI: i32 = 999;
/// Maximum length of the room description.
pub const MAX_DESCRIZIONE_LEN: usize = 254;

/// Room names start with an uppercase letter, then alphanumerics.
static NOME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][a-zA-Z0-9]*$").expect("valid regex"));

/// Access codes are exactly six digits.
static CODICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{6}$").expect("valid regex"));

/// Descriptions start with an uppercase letter; punctuation and
/// whitespace allowed.
static DESCRIZIONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Z][a-zA-Z0-9.,!?()'"\-\s]*$"#).expect("valid regex"));

/// Seat counts are one to three digits on the wire.
static MAX_POSTI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{1,3}$").expect("valid regex"));

/// Validated room-creation fields, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuovaStanza {
    pub nome: String,
    pub codice_stanza: String,
    pub descrizione: String,
    pub tipo_accesso: bool,
    pub max_posti: i32,
}

/// Raw room-creation fields as they arrive on the wire.
#[derive(Debug, Clone, Copy)]
pub struct StanzaDraft<'a> {
    pub nome: &'a str,
    pub codice_stanza: &'a str,
    pub descrizione: &'a str,
    pub tipo_accesso: &'a str,
    pub max_posti: &'a str,
}

fn invalid(field: &'static str, message: &str) -> CoreError {
    CoreError::Validation {
        field,
        message: message.to_string(),
    }
}

/// Validate every room field, first violation first.
pub fn valida_stanza(draft: &StanzaDraft<'_>) -> Result<NuovaStanza, CoreError> {
    if draft.nome.len() <= 1 {
        return Err(invalid("nome", "Lunghezza nome errata"));
    }
    if !NOME_RE.is_match(draft.nome) {
        return Err(invalid("nome", "Formato nome errato"));
    }

    if draft.codice_stanza.len() != 6 {
        return Err(invalid("codiceStanza", "Lunghezza codice_stanza errata"));
    }
    if !CODICE_RE.is_match(draft.codice_stanza) {
        return Err(invalid("codiceStanza", "Formato codice_stanza errato"));
    }

    if draft.descrizione.is_empty() || draft.descrizione.len() > MAX_DESCRIZIONE_LEN {
        return Err(invalid("descrizione", "Lunghezza descrizione errata"));
    }
    if !DESCRIZIONE_RE.is_match(draft.descrizione) {
        return Err(invalid("descrizione", "Formato descrizione errata"));
    }

    let tipo_accesso = match draft.tipo_accesso {
        "true" => true,
        "false" => false,
        _ => return Err(invalid("tipoAccesso", "Formato tipo_accesso errato")),
    };

    if !MAX_POSTI_RE.is_match(draft.max_posti) {
        return Err(invalid("maxPosti", "Formato max_posti errato"));
    }
    let max_posti: i32 = draft
        .max_posti
        .parse()
        .map_err(|_| invalid("maxPosti", "Formato max_posti errato"))?;
    if !(MIN_POSTI..=MAX_POSTI).contains(&max_posti) {
        return Err(invalid("maxPosti", "Formato max_posti errato"));
    }

    Ok(NuovaStanza {
        nome: draft.nome.to_string(),
        codice_stanza: draft.codice_stanza.to_string(),
        descrizione: draft.descrizione.to_string(),
        tipo_accesso,
        max_posti,
    })
}
