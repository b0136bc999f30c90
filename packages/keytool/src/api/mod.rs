//! Builder API
//!
//! Async entry points over the core operations, in the `on_result` style:
//!
//! ```no_run
//! # async fn demo() -> keytool::KeyToolResult<()> {
//! use keytool::KeyTool;
//!
//! let keypair = KeyTool::keypair().generate().await?;
//! let token = KeyTool::token()
//!     .with_keys(&keypair.public_key_pem, &keypair.private_key_pem)
//!     .for_device("wp-abcdefgh", "wd-ijklmnop")
//!     .with_scope("client:connect turn")
//!     .expires_in_hours(2)
//!     .issue()
//!     .await?;
//! println!("{token}");
//! # Ok(())
//! # }
//! ```

pub mod keypair_builder;
pub mod token_builder;

pub use keypair_builder::KeyPairBuilder;
pub use token_builder::{TokenBuilder, TokenReady, TokenWithKeys, TokenWithResource};
