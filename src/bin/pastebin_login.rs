use clap::Parser;
use dialoguer::Password;
use pastebin_client::{DevKey, LoginRequest, PastebinClient};
use tracing_subscriber::EnvFilter;

/// Log in to pastebin.com.
///
/// Prints the response body from the service, which on success is a user session key.
/// Treat the output as a secret. The developer key comes from --key or the
/// PASTEBIN_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(name = "pastebin-login", version)]
struct Args {
    /// The user to log in as
    user: String,

    /// The password to log in with (prompted interactively if omitted)
    #[arg(short, long)]
    password: Option<String>,

    /// Developer API key
    #[arg(short, long)]
    key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let dev_key = DevKey::resolve(args.key, std::env::var("PASTEBIN_API_KEY").ok())?;

    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let request = LoginRequest::new(dev_key, args.user, password);

    let client = PastebinClient::builder().build()?;
    let body = client.login(&request).await?;
    println!("{body}");

    Ok(())
}
