use crate::{
    libs::{error::DocumentError, messages::Message, session::Session},
    msg_success, msg_warning,
};
use anyhow::Result;

pub fn cmd(session: &Session) -> Result<()> {
    match session.document.project().validate() {
        Ok(()) => msg_success!(Message::DocumentConsistent),
        Err(DocumentError::Validation(details)) => msg_warning!(Message::DocumentInconsistent(details)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
