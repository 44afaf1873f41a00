use crate::errors::ClipboardError;

pub fn copy(password: &str) -> Result<(), ClipboardError> {
    let mut ctx = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;

    ctx.set_contents(password.to_owned())
        .map_err(|e| ClipboardError::Copy(e.to_string()))
}
