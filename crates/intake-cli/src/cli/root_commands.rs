use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fill in the onboarding form, validate it and submit it.
    Submit(SubmitArgs),
    /// Validate a form without submitting it.
    Validate(ValidateArgs),
    /// Show the services a query string pre-selects.
    Prefill(PrefillArgs),
    /// Print the JSON Schema of the request or response.
    Schema(SchemaArgs),
    /// List the services a client can request.
    Services,
}

/// Form fields. Each flag overrides the same field loaded with `--from-file`.
#[derive(Clone, Debug, Default, Args)]
pub struct FormArgs {
    /// JSON document with the form fields (camelCase keys)
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Requested service (repeatable): "UI/UX", "Branding", "Web Dev", "Mobile App"
    #[arg(long)]
    pub service: Vec<String>,

    /// Budget in USD. Non-numeric text counts as no budget.
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Project start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Query string or URL whose `service` parameters pre-fill the services
    /// when none are given
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Clone, Debug, Args)]
pub struct PrefillArgs {
    /// Query string, `?`-prefixed query, or full URL
    pub query: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// The submission sent to the endpoint
    #[default]
    Request,
    /// The result reported back to the user
    Response,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "request")]
    pub kind: SchemaKind,
}
