//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-step state changes own
//! their transaction (`pool.begin()` .. `commit`) so every business
//! operation is atomic.

pub mod categoria_repo;
pub mod feedback_meeting_repo;
pub mod meeting_repo;
pub mod scenario_repo;
pub mod stanza_repo;
pub mod stato_partecipazione_repo;
pub mod utente_repo;

pub use categoria_repo::CategoriaRepo;
pub use feedback_meeting_repo::FeedbackMeetingRepo;
pub use meeting_repo::MeetingRepo;
pub use scenario_repo::ScenarioRepo;
pub use stanza_repo::StanzaRepo;
pub use stato_partecipazione_repo::StatoPartecipazioneRepo;
pub use utente_repo::UtenteRepo;
