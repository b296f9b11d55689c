//! Storage module for saving and resuming playback sessions
//!
//! Only the session state is persisted; the dialogue graph is rebuilt
//! from the script on load. JSON keeps save files inspectable.

use crate::types::SessionState;

/// Serialize a session to bytes
pub fn save(session: &SessionState) -> anyhow::Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(session)?;
    Ok(json.into_bytes())
}

/// Deserialize a session from bytes
pub fn load(bytes: &[u8]) -> anyhow::Result<SessionState> {
    let json = String::from_utf8(bytes.to_vec())?;
    let session = serde_json::from_str(&json)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Choice, Cursor};

    #[test]
    fn save_then_load_restores_session() {
        let mut session = SessionState::new();
        session.cursor = Cursor::At(3);
        session.current_uid = "m3".to_string();
        session.speech_timer = 0.25;
        session.begin_timer = 12.5;
        session.visible_options = vec![Choice::new("Yes", "m4")];

        let bytes = save(&session).unwrap();
        let restored = load(&bytes).unwrap();

        assert_eq!(session, restored);
    }

    #[test]
    fn fresh_session_round_trips() {
        let session = SessionState::new();
        let restored = load(&save(&session).unwrap()).unwrap();
        assert_eq!(session, restored);
        assert_eq!(restored.cursor, Cursor::NotStarted);
    }

    #[test]
    fn load_rejects_garbage() {
        assert!(load(b"not a session").is_err());
    }
}
