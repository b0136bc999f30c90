//! Remembered field commands

use super::CommandContext;
use crate::error::CliResult;
use crate::store::Field;
use serde_json::json;

const REDACTED: &str = "<redacted>";

/// Value of a field as it may be displayed
fn display_value(field: Field, value: Option<String>) -> Option<String> {
    match value {
        Some(value) if field.is_secret() && !value.is_empty() => Some(REDACTED.to_string()),
        other => other,
    }
}

pub fn handle_show(ctx: &mut CommandContext<'_>) -> CliResult<()> {
    let fields: Vec<(Field, Option<String>)> = Field::ALL
        .into_iter()
        .map(|field| (field, display_value(field, ctx.store.get_field(field))))
        .collect();

    if ctx.use_json {
        let map: serde_json::Map<String, serde_json::Value> = fields
            .into_iter()
            .map(|(field, value)| (field.key().to_string(), json!(value)))
            .collect();
        return ctx.emit_json(json!({
            "success": true,
            "operation": "fields",
            "fields": map,
        }));
    }

    for (field, value) in fields {
        match value {
            Some(value) if value.contains('\n') => {
                writeln!(ctx.out, "{}:", field.key())?;
                write!(ctx.out, "{value}")?;
                if !value.ends_with('\n') {
                    writeln!(ctx.out)?;
                }
            }
            Some(value) => writeln!(ctx.out, "{}: {value}", field.key())?,
            None => writeln!(ctx.out, "{}: (not set)", field.key())?,
        }
    }
    Ok(())
}

pub fn handle_clear(ctx: &mut CommandContext<'_>) -> CliResult<()> {
    ctx.store.clear()?;

    if ctx.use_json {
        return ctx.emit_json(json!({
            "success": true,
            "operation": "fields",
            "cleared": true,
        }));
    }
    writeln!(ctx.out, "Remembered fields cleared")?;
    Ok(())
}
