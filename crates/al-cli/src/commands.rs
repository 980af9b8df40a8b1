use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Create an account and store its profile
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in, show the stored profile, then sign out
    Profile {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Run register, login, profile and logout in one process
    Demo {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}
