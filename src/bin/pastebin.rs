use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pastebin_client::{DevKey, ExpireDate, PasteRequest, PastebinClient, Visibility};
use tracing_subscriber::EnvFilter;

/// Paste a file to pastebin.com.
///
/// Prints the response body from the service, which on success is the URL of the new
/// paste. The developer key comes from --dev-key or the PASTEBIN_API_KEY environment
/// variable.
#[derive(Parser, Debug)]
#[command(name = "pastebin", version)]
struct Args {
    /// File to paste
    file: PathBuf,

    /// Paste name (defaults to the file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Paste description
    #[arg(short, long)]
    description: Option<String>,

    /// Syntax format tag (defaults to one inferred from the file extension)
    #[arg(short, long)]
    format: Option<String>,

    /// Developer API key
    #[arg(short = 'k', long)]
    dev_key: Option<String>,

    /// Paste visibility: public, unlisted or private
    #[arg(short, long, default_value = "private")]
    visibility: Visibility,

    /// Paste lifetime: N, 10M, 1H, 1D, 1W, 2W, 1M, 6M or 1Y
    #[arg(short, long)]
    expire_date: Option<ExpireDate>,

    /// User session key, to paste as an account instead of anonymously
    #[arg(short, long, conflicts_with = "user_key_file")]
    user_key: Option<String>,

    /// Read the user session key from a file
    #[arg(short = 'U', long)]
    user_key_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let dev_key = DevKey::resolve(args.dev_key, std::env::var("PASTEBIN_API_KEY").ok())?;

    let user_key = match (args.user_key, args.user_key_file) {
        (Some(key), _) => Some(key),
        (None, Some(path)) => {
            let key = fs::read_to_string(&path)
                .with_context(|| format!("failed to read user key file {}", path.display()))?;
            Some(key.trim().to_string())
        }
        (None, None) => None,
    };

    let mut request = PasteRequest::from_file(dev_key, &args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?
        .with_visibility(args.visibility);
    if let Some(name) = args.name {
        request = request.with_name(name);
    }
    if let Some(description) = args.description {
        request = request.with_description(description);
    }
    if let Some(format) = args.format {
        request = request.with_format(format);
    }
    if let Some(user_key) = user_key {
        request = request.with_user_key(user_key);
    }
    if let Some(expire_date) = args.expire_date {
        request = request.with_expire_date(expire_date);
    }

    let client = PastebinClient::builder().build()?;
    let body = client.paste(&request).await?;
    println!("{body}");

    Ok(())
}
