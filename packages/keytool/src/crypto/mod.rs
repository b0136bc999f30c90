//! ES256 cryptographic operations

pub mod es256_signing;
pub mod key_id;
pub mod keypair;

pub use es256_signing::{es256_sign, import_signing_key};
pub use key_id::{derive_key_id, key_id_from_der};
pub use keypair::generate_keypair;
