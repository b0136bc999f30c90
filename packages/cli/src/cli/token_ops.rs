//! Token issuance and field validation commands

use super::{CommandContext, TokenFields};
use crate::config::{KeyToolConfig, MAX_EXPIRATION_HOURS};
use crate::error::{CliError, CliResult};
use crate::store::{Field, FieldStore};
use keytool::{
    KeyKind, KeyTool, Validity, derive_key_id, resource_urn, validate_device_id, validate_pem_key,
    validate_product_id,
};
use keytool_common::LoggingTransformer;
use serde_json::json;
use std::path::Path;

/// Field values after falling back to the store and config
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    pub product_id: String,
    pub device_id: String,
    pub expiration_hours: String,
    pub public_key_pem: String,
    pub private_key_pem: String,
}

impl ResolvedFields {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::ProductId => &self.product_id,
            Field::DeviceId => &self.device_id,
            Field::ExpirationHours => &self.expiration_hours,
            Field::PublicKey => &self.public_key_pem,
            Field::PrivateKey => &self.private_key_pem,
        }
    }
}

/// Flag, then remembered field, then config default
pub fn resolve_fields(
    fields: &TokenFields,
    config: &KeyToolConfig,
    store: &dyn FieldStore,
) -> CliResult<ResolvedFields> {
    let text = |flag: &Option<String>, field: Field| {
        flag.clone()
            .or_else(|| store.get_field(field))
            .unwrap_or_default()
    };
    let pem = |path: &Option<std::path::PathBuf>, field: Field| -> CliResult<String> {
        match path {
            Some(path) => read_pem_file(path),
            None => Ok(store.get_field(field).unwrap_or_default()),
        }
    };

    Ok(ResolvedFields {
        product_id: text(&fields.product_id, Field::ProductId),
        device_id: text(&fields.device_id, Field::DeviceId),
        expiration_hours: fields
            .expiration_hours
            .clone()
            .or_else(|| store.get_field(Field::ExpirationHours))
            .unwrap_or_else(|| config.default_expiration_hours.to_string()),
        public_key_pem: pem(&fields.public_key, Field::PublicKey)?,
        private_key_pem: pem(&fields.private_key, Field::PrivateKey)?,
    })
}

fn read_pem_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot read {}: {e}", path.display()),
        ))
    })
}

/// Expiration in hours: a whole number from 1 to [`MAX_EXPIRATION_HOURS`]
pub fn validate_expiration_hours(value: &str) -> Validity {
    match value.trim().parse::<u32>() {
        Ok(hours) if (1..=MAX_EXPIRATION_HOURS).contains(&hours) => Validity::Valid,
        _ => Validity::Invalid(format!(
            "Expiration must be a whole number of hours between 1 and {MAX_EXPIRATION_HOURS}"
        )),
    }
}

/// Per-field validity, in form order
pub fn check_fields(resolved: &ResolvedFields) -> Vec<(Field, Validity)> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let value = resolved.value(field);
            let validity = match field {
                Field::ProductId => validate_product_id(value),
                Field::DeviceId => validate_device_id(value),
                Field::ExpirationHours => validate_expiration_hours(value),
                Field::PublicKey => validate_pem_key(KeyKind::Public, value),
                Field::PrivateKey => validate_pem_key(KeyKind::Private, value),
            };
            (field, validity)
        })
        .collect()
}

/// One message per invalid field
fn invalid_messages(checks: &[(Field, Validity)]) -> Vec<String> {
    checks
        .iter()
        .filter_map(|(field, validity)| {
            validity.reason().map(|reason| {
                LoggingTransformer::log_validation_failure(field.key(), reason);
                format!("{}: {reason}", field.key())
            })
        })
        .collect()
}

pub async fn handle_token(
    ctx: &mut CommandContext<'_>,
    fields: &TokenFields,
    scope: Option<&str>,
) -> CliResult<()> {
    let config = ctx.config;
    let resolved = resolve_fields(fields, config, &*ctx.store)?;

    let messages = invalid_messages(&check_fields(&resolved));
    if !messages.is_empty() {
        return Err(CliError::Validation(messages));
    }

    let product_id = resolved.product_id.trim();
    let device_id = resolved.device_id.trim();
    let hours: u32 = resolved
        .expiration_hours
        .trim()
        .parse()
        .map_err(|_| CliError::Validation(vec!["expirationHours: not a number".to_string()]))?;
    let scope = scope.unwrap_or(config.default_scope.as_str());

    let kid = derive_key_id(&resolved.public_key_pem)?;
    let token = KeyTool::token()
        .with_keys(&resolved.public_key_pem, &resolved.private_key_pem)
        .for_device(product_id, device_id)
        .with_scope(scope)
        .expires_in_hours(hours)
        .issue()
        .await?;

    remember(&mut *ctx.store, &resolved)?;

    if ctx.use_json {
        return ctx.emit_json(json!({
            "success": true,
            "operation": "token",
            "token": token.0,
            "kid": kid,
            "resource": resource_urn(product_id, device_id),
            "scope": scope,
            "expiration_hours": hours,
        }));
    }
    writeln!(ctx.out, "{token}")?;
    Ok(())
}

pub fn handle_validate(ctx: &mut CommandContext<'_>, fields: &TokenFields) -> CliResult<()> {
    let resolved = resolve_fields(fields, ctx.config, &*ctx.store)?;
    let checks = check_fields(&resolved);

    let messages = invalid_messages(&checks);
    let report: serde_json::Map<String, serde_json::Value> = checks
        .iter()
        .map(|(field, validity)| (field.key().to_string(), json!(validity)))
        .collect();

    if !messages.is_empty() {
        if !ctx.use_json {
            // invalid fields are reported on stderr by the runner
            for (field, _) in checks.iter().filter(|(_, validity)| validity.is_valid()) {
                writeln!(ctx.out, "{}: ok", field.key())?;
            }
        }
        return Err(CliError::FieldReport {
            messages,
            fields: report,
        });
    }

    if ctx.use_json {
        return ctx.emit_json(json!({
            "success": true,
            "operation": "validate",
            "fields": report,
        }));
    }
    for (field, _) in &checks {
        writeln!(ctx.out, "{}: ok", field.key())?;
    }
    Ok(())
}

fn remember(store: &mut dyn FieldStore, resolved: &ResolvedFields) -> CliResult<()> {
    for field in Field::ALL {
        store.set_field(field, resolved.value(field))?;
    }
    Ok(())
}
