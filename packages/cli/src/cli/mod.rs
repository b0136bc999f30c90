//! CLI module for command-line interface functionality

pub mod commands;
pub mod field_ops;
pub mod key_ops;
pub mod token_ops;

use crate::config::KeyToolConfig;
use crate::error::{CliError, CliResult};
use crate::help::CENTRALIZED_MODEL_HELP;
use crate::store::FieldStore;
pub use commands::{Cli, Commands, FieldsAction, TokenFields};
use serde_json::json;
use std::io::Write;

/// Everything a command handler needs
pub struct CommandContext<'a> {
    pub config: &'a KeyToolConfig,
    pub store: &'a mut dyn FieldStore,
    pub use_json: bool,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    pub(crate) fn emit_json(&mut self, value: serde_json::Value) -> CliResult<()> {
        writeln!(self.out, "{value}")?;
        Ok(())
    }
}

/// Run one command and report its failure, if any, on the right channel
///
/// With `--json` failures are written to the output as
/// `{"success":false,...}`; otherwise they go to stderr.
pub async fn run(ctx: &mut CommandContext<'_>, command: Commands) -> CliResult<()> {
    let operation = operation_name(&command);
    let result = process_command(ctx, command).await;

    if let Err(e) = &result {
        if ctx.use_json {
            let errors = match e {
                CliError::Validation(messages) | CliError::FieldReport { messages, .. } => {
                    messages.clone()
                }
                other => vec![other.to_string()],
            };
            let mut report = json!({
                "success": false,
                "operation": operation,
                "error_kind": e.kind(),
                "errors": errors,
            });
            if let (CliError::FieldReport { fields, .. }, Some(object)) =
                (e, report.as_object_mut())
            {
                object.insert("fields".to_string(), serde_json::Value::Object(fields.clone()));
            }
            ctx.emit_json(report)?;
        } else {
            match e {
                CliError::Validation(messages) | CliError::FieldReport { messages, .. } => {
                    for message in messages {
                        eprintln!("{message}");
                    }
                }
                other => eprintln!("Error: {other}"),
            }
        }
    }
    result
}

/// Process the CLI command
pub async fn process_command(ctx: &mut CommandContext<'_>, command: Commands) -> CliResult<()> {
    match command {
        Commands::GenerateKeys { out_dir } => {
            key_ops::handle_generate_keys(ctx, out_dir.as_deref()).await
        }
        Commands::Token { fields, scope } => {
            token_ops::handle_token(ctx, &fields, scope.as_deref()).await
        }
        Commands::Kid { public_key } => key_ops::handle_kid(ctx, public_key.as_deref()),
        Commands::Validate { fields } => token_ops::handle_validate(ctx, &fields),
        Commands::Fields { action } => match action {
            FieldsAction::Show => field_ops::handle_show(ctx),
            FieldsAction::Clear => field_ops::handle_clear(ctx),
        },
        Commands::About => {
            if ctx.use_json {
                ctx.emit_json(json!({
                    "success": true,
                    "operation": "about",
                    "text": CENTRALIZED_MODEL_HELP,
                }))
            } else {
                writeln!(ctx.out, "{CENTRALIZED_MODEL_HELP}")?;
                Ok(())
            }
        }
    }
}

fn operation_name(command: &Commands) -> &'static str {
    match command {
        Commands::GenerateKeys { .. } => "generate_keys",
        Commands::Token { .. } => "token",
        Commands::Kid { .. } => "kid",
        Commands::Validate { .. } => "validate",
        Commands::Fields { .. } => "fields",
        Commands::About => "about",
    }
}
