//! Key pair generation and key id commands

use super::CommandContext;
use crate::error::{CliError, CliResult};
use crate::store::{Field, write_secret_file};
use keytool::{KeyKind, KeyTool, derive_key_id, validate_pem_key};
use serde_json::json;
use std::path::Path;

pub const PUBLIC_KEY_FILE: &str = "public_key.pem";
pub const PRIVATE_KEY_FILE: &str = "private_key.pem";

pub async fn handle_generate_keys(
    ctx: &mut CommandContext<'_>,
    out_dir: Option<&Path>,
) -> CliResult<()> {
    let keypair = KeyTool::keypair().generate().await?;
    let kid = derive_key_id(&keypair.public_key_pem)?;

    ctx.store.set_field(Field::PublicKey, &keypair.public_key_pem)?;
    ctx.store.set_field(Field::PrivateKey, &keypair.private_key_pem)?;

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)?;
        let public_path = dir.join(PUBLIC_KEY_FILE);
        let private_path = dir.join(PRIVATE_KEY_FILE);
        std::fs::write(&public_path, &keypair.public_key_pem)?;
        write_secret_file(&private_path, &keypair.private_key_pem)?;

        if ctx.use_json {
            return ctx.emit_json(json!({
                "success": true,
                "operation": "generate_keys",
                "kid": kid,
                "public_key_path": public_path.display().to_string(),
                "private_key_path": private_path.display().to_string(),
            }));
        }
        writeln!(ctx.out, "Wrote {}", public_path.display())?;
        writeln!(ctx.out, "Wrote {}", private_path.display())?;
        writeln!(ctx.out, "Key id: {kid}")?;
        return Ok(());
    }

    if ctx.use_json {
        return ctx.emit_json(json!({
            "success": true,
            "operation": "generate_keys",
            "kid": kid,
            "public_key": keypair.public_key_pem,
            "private_key": keypair.private_key_pem,
        }));
    }
    write!(ctx.out, "{}", keypair.public_key_pem)?;
    write!(ctx.out, "{}", keypair.private_key_pem)?;
    writeln!(ctx.out, "Key id: {kid}")?;
    Ok(())
}

pub fn handle_kid(ctx: &mut CommandContext<'_>, public_key: Option<&Path>) -> CliResult<()> {
    let pem = match public_key {
        Some(path) => std::fs::read_to_string(path)?,
        None => ctx.store.get_field(Field::PublicKey).unwrap_or_default(),
    };

    if let Some(reason) = validate_pem_key(KeyKind::Public, &pem).reason() {
        return Err(CliError::Validation(vec![format!(
            "{}: {reason}",
            Field::PublicKey.key()
        )]));
    }
    let kid = derive_key_id(&pem)?;

    if ctx.use_json {
        return ctx.emit_json(json!({
            "success": true,
            "operation": "kid",
            "kid": kid,
        }));
    }
    writeln!(ctx.out, "{kid}")?;
    Ok(())
}
