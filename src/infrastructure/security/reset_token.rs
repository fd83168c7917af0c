use crate::application::ports::security::ResetTokenSource;
use rand::RngCore;

const TOKEN_BYTES: usize = 20;

/// Hex-encoded random reset tokens, 20 bytes of entropy apiece.
#[derive(Default, Clone)]
pub struct HexResetTokenSource;

impl ResetTokenSource for HexResetTokenSource {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
