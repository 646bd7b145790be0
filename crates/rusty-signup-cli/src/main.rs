mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusty_signup::FieldName;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-signup")]
#[command(version, about = "rusty-signup CLI - fill in and submit the registration form", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./rusty-signup.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Endpoint to post the registration to (overrides config and environment)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Log submission details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form interactively, then submit it
    Register,

    /// Submit the form from command-line values
    Submit {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        senha: String,

        #[arg(long)]
        confirmacao_senha: String,

        #[arg(long)]
        codigo_acesso: String,
    },

    /// Run one field's rules against a value and print every message
    Check {
        /// Field key (nome, email, senha, confirmacao-senha, codigo-acesso)
        field: FieldName,

        /// Value to check
        value: String,

        /// Password the confirmation is compared against
        #[arg(long)]
        senha: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let gateway = commands::GatewayArgs {
        config: cli.config,
        endpoint: cli.endpoint,
    };

    // Execute command
    match cli.command {
        Commands::Register => {
            commands::register::execute(&gateway).await?;
        }
        Commands::Submit {
            nome,
            email,
            senha,
            confirmacao_senha,
            codigo_acesso,
        } => {
            let values = [
                (FieldName::Nome, nome),
                (FieldName::Email, email),
                (FieldName::Senha, senha),
                (FieldName::ConfirmacaoSenha, confirmacao_senha),
                (FieldName::CodigoAcesso, codigo_acesso),
            ];
            commands::submit::execute(&gateway, values).await?;
        }
        Commands::Check {
            field,
            value,
            senha,
        } => {
            commands::check::execute(field, &value, senha.as_deref())?;
        }
    }

    Ok(())
}
