use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use learnhub_auth::{Role, SignedTokenCodec};
use learnhub_cli::{create_user, describe_token, issue_token};
use learnhub_config::JwtConfig;
use learnhub_db::{PgUserDirectory, init_db_pool};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "learnhub-cli")]
#[command(about = "LearnHub CLI - Administrative tools for LearnHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account (admin or student)
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Role: admin or student
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign a session token for an existing user id
    IssueToken {
        #[arg(short = 's', long)]
        subject: Uuid,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(short = 'r', long)]
        role: Role,

        /// Lifetime in seconds; defaults to SESSION_TTL_SECONDS
        #[arg(long)]
        ttl: Option<i64>,
    },
    /// Verify a session token and print why it was rejected, if it was
    VerifyToken {
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateUser {
            email,
            name,
            role,
            password,
        } => handle_create_user(email, name, role, password).await,
        Commands::IssueToken {
            subject,
            email,
            role,
            ttl,
        } => {
            let config = JwtConfig::from_env().context("invalid JWT configuration")?;
            let codec = SignedTokenCodec::new(&config);
            let ttl = ttl.unwrap_or_else(|| config.session_ttl());
            println!("{}", issue_token(&codec, subject, &email, role, ttl)?);
            Ok(())
        }
        Commands::VerifyToken { token } => {
            let config = JwtConfig::from_env().context("invalid JWT configuration")?;
            let codec = SignedTokenCodec::new(&config);
            println!("{}", describe_token(&codec, &token));
            Ok(())
        }
    }
}

async fn handle_create_user(
    email: Option<String>,
    name: Option<String>,
    role: Option<Role>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let role = match role {
        Some(role) => role,
        None => Input::<String>::new()
            .with_prompt("Role (admin/student)")
            .default("student".to_string())
            .interact_text()?
            .parse()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url).await?;
    let directory = PgUserDirectory::new(pool);

    let user = create_user(&directory, &email, &name, role, &password).await?;

    println!("\n✅ User created successfully!");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Role: {}", user.role);
    Ok(())
}
